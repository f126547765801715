//! Cookie-consent preferences and the banner that edits them.
use crate::storage::{KeyValueStore, keys};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsentCategory {
    Necessary,
    Analytics,
    Marketing,
    Functional,
}

impl ConsentCategory {
    pub const ALL: [Self; 4] = [
        Self::Necessary,
        Self::Analytics,
        Self::Marketing,
        Self::Functional,
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Necessary => "necessary",
            Self::Analytics => "analytics",
            Self::Marketing => "marketing",
            Self::Functional => "functional",
        }
    }

    /// Strictly-necessary storage cannot be switched off.
    #[must_use]
    pub const fn is_locked(self) -> bool {
        matches!(self, Self::Necessary)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct ConsentPreferences {
    pub necessary: bool,
    #[serde(default)]
    pub analytics: bool,
    #[serde(default)]
    pub marketing: bool,
    #[serde(default)]
    pub functional: bool,
}

impl Default for ConsentPreferences {
    fn default() -> Self {
        Self {
            necessary: true,
            analytics: false,
            marketing: false,
            functional: false,
        }
    }
}

impl ConsentPreferences {
    #[must_use]
    pub const fn get(&self, category: ConsentCategory) -> bool {
        match category {
            ConsentCategory::Necessary => self.necessary,
            ConsentCategory::Analytics => self.analytics,
            ConsentCategory::Marketing => self.marketing,
            ConsentCategory::Functional => self.functional,
        }
    }

    /// Flip one optional category. Toggling `necessary` does nothing.
    pub fn toggle(&mut self, category: ConsentCategory) {
        match category {
            ConsentCategory::Necessary => {}
            ConsentCategory::Analytics => self.analytics = !self.analytics,
            ConsentCategory::Marketing => self.marketing = !self.marketing,
            ConsentCategory::Functional => self.functional = !self.functional,
        }
    }

    #[must_use]
    const fn normalized(mut self) -> Self {
        self.necessary = true;
        self
    }

    /// Preferences saved by an earlier visit, or the defaults.
    #[must_use]
    pub fn load<S: KeyValueStore>(store: &S) -> Self {
        match store.read::<Self>(keys::COOKIE_CONSENT) {
            Ok(saved) => saved.map(Self::normalized).unwrap_or_default(),
            Err(err) => {
                log::warn!("discarding stored consent preferences: {err}");
                Self::default()
            }
        }
    }
}

/// Observer notified whenever preferences are confirmed.
pub trait ConsentSink {
    fn preferences_updated(&self, preferences: &ConsentPreferences);
}

/// Sink for hosts where nothing listens for consent changes.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopConsentSink;

impl ConsentSink for NoopConsentSink {
    fn preferences_updated(&self, _preferences: &ConsentPreferences) {}
}

/// Floating preferences editor. Edits are staged until confirmed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConsentBanner {
    preferences: ConsentPreferences,
    open: bool,
}

impl ConsentBanner {
    #[must_use]
    pub fn load<S: KeyValueStore>(store: &S) -> Self {
        Self {
            preferences: ConsentPreferences::load(store),
            open: false,
        }
    }

    #[must_use]
    pub const fn preferences(&self) -> ConsentPreferences {
        self.preferences
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    pub fn toggle_category(&mut self, category: ConsentCategory) {
        self.preferences.toggle(category);
    }

    /// Persist the staged preferences, notify the sink and close the modal.
    pub fn confirm<S: KeyValueStore, C: ConsentSink>(
        &mut self,
        store: &S,
        sink: &C,
    ) -> ConsentPreferences {
        let preferences = self.preferences.normalized();
        if let Err(err) = store.write(keys::COOKIE_CONSENT, &preferences) {
            log::error!("could not save consent preferences: {err}");
        }
        sink.preferences_updated(&preferences);
        log::info!(
            "consent updated: analytics={} marketing={} functional={}",
            preferences.analytics,
            preferences.marketing,
            preferences.functional
        );
        self.open = false;
        preferences
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::cell::Cell;

    #[derive(Default)]
    struct CountingSink(Cell<u32>);

    impl ConsentSink for CountingSink {
        fn preferences_updated(&self, _preferences: &ConsentPreferences) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn necessary_cannot_be_disabled() {
        let mut prefs = ConsentPreferences::default();
        prefs.toggle(ConsentCategory::Necessary);
        assert!(prefs.necessary);
        prefs.toggle(ConsentCategory::Marketing);
        assert!(prefs.get(ConsentCategory::Marketing));
        assert!(ConsentCategory::Necessary.is_locked());
    }

    #[test]
    fn confirm_persists_and_broadcasts() {
        let store = MemoryStore::new();
        let sink = CountingSink::default();
        let mut banner = ConsentBanner::load(&store);
        banner.toggle_open();
        banner.toggle_category(ConsentCategory::Analytics);
        let saved = banner.confirm(&store, &sink);
        assert!(saved.analytics);
        assert!(!banner.is_open());
        assert_eq!(sink.0.get(), 1);
        assert_eq!(ConsentBanner::load(&store).preferences(), saved);
    }

    #[test]
    fn stored_necessary_false_is_normalized() {
        let store = MemoryStore::new();
        store
            .set_item(keys::COOKIE_CONSENT, r#"{"necessary":false,"marketing":true}"#)
            .unwrap();
        let prefs = ConsentPreferences::load(&store);
        assert!(prefs.necessary);
        assert!(prefs.marketing);
        assert!(!prefs.analytics);
    }

    #[test]
    fn unreadable_consent_falls_back_to_defaults() {
        let store = MemoryStore::new();
        store.set_item(keys::COOKIE_CONSENT, "yes please").unwrap();
        assert_eq!(ConsentPreferences::load(&store), ConsentPreferences::default());
        NoopConsentSink.preferences_updated(&ConsentPreferences::default());
    }
}
