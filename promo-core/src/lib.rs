//! Promotions Site Core
//!
//! Platform-agnostic logic for the brand promotions site: catalog filtering,
//! the age gate, entry and support forms, consent preferences and the payloads
//! sent to the two submission endpoints. Browser concerns stay behind the
//! [`KeyValueStore`] and [`SubmissionTransport`] seams.

pub mod age_gate;
pub mod brand;
pub mod consent;
pub mod constants;
pub mod entry;
pub mod faq;
pub mod filter;
pub mod payload;
pub mod promotion;
pub mod site;
pub mod states;
pub mod storage;
pub mod submit;
pub mod support;

// Re-export commonly used types
pub use age_gate::{AgeGate, AgeGateError, age_on, is_remembered};
pub use brand::{Brand, BrandTheme};
pub use consent::{
    ConsentBanner, ConsentCategory, ConsentPreferences, ConsentSink, NoopConsentSink,
};
pub use entry::{
    EntryForm, EntryFormData, EntryPhase, Field, FieldError, FileMeta, SubmitOutcome, ValidEntry,
    format_phone, phone_digits,
};
pub use faq::{FaqAccordion, FaqItem};
pub use filter::{
    BrandOption, CatalogView, FilterOption, FilterState, SortOption, StateOption, brand_options,
    filter_promotions, sort_promotions, state_options,
};
pub use payload::{ApiEndpoints, ApiReply, ClientContext, EntryPayload, LegalCopy, SupportPayload};
pub use promotion::{Catalog, CatalogError, Promotion};
pub use site::{LegalLinks, SiteConfig, SiteConfigError};
pub use states::{ALL_STATES, UsState};
pub use storage::{KeyValueStore, MemoryStore, StorageError, keys};
pub use submit::{SubmitError, post_entry, post_support};
pub use support::{SupportError, SupportForm, SupportStatus};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("response could not be read: {0}")]
    Decode(String),
}

/// Trait for abstracting the HTTP POST behind both forms
/// Platform-specific implementations should provide this
#[allow(async_fn_in_trait)]
pub trait SubmissionTransport {
    /// POST `body` as JSON and report whatever status came back.
    ///
    /// # Errors
    ///
    /// Returns an error only when no HTTP response was received.
    async fn post_json(
        &self,
        endpoint: &str,
        body: &serde_json::Value,
    ) -> Result<ApiReply, TransportError>;
}

/// Site facade tying the catalog and configuration to a store and a transport.
pub struct PromoSite<S, T>
where
    S: KeyValueStore,
    T: SubmissionTransport,
{
    catalog: Catalog,
    config: SiteConfig,
    storage: S,
    transport: T,
}

impl<S, T> PromoSite<S, T>
where
    S: KeyValueStore,
    T: SubmissionTransport,
{
    pub const fn new(catalog: Catalog, config: SiteConfig, storage: S, transport: T) -> Self {
        Self {
            catalog,
            config,
            storage,
            transport,
        }
    }

    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub const fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub const fn storage(&self) -> &S {
        &self.storage
    }

    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// A fresh, unfiltered view over the catalog.
    #[must_use]
    pub fn catalog_view(&self) -> CatalogView {
        CatalogView::new(self.catalog.clone())
    }

    /// Whether the visitor ticked "Remember me" on an earlier visit.
    pub fn is_age_verified(&self) -> bool {
        is_remembered(&self.storage)
    }

    /// Verify a birth date and remember the result if asked to.
    ///
    /// # Errors
    ///
    /// Returns the first failing age-gate check.
    pub fn verify_age(
        &self,
        gate: &mut AgeGate,
        today: chrono::NaiveDate,
    ) -> Result<chrono::NaiveDate, AgeGateError> {
        let birth = gate.submit(today)?;
        gate.remember_in(&self.storage);
        Ok(birth)
    }

    pub fn consent_banner(&self) -> ConsentBanner {
        ConsentBanner::load(&self.storage)
    }

    /// Submit an entry for the promotion with `promotion_id`, or the house campaign if `None`.
    pub async fn submit_entry(
        &self,
        form: &mut EntryForm,
        promotion_id: Option<u32>,
        ctx: &ClientContext,
    ) -> SubmitOutcome {
        let promotion = promotion_id.and_then(|id| self.catalog.find(id));
        form.submit(
            &self.transport,
            &self.storage,
            &self.config.endpoints.entry,
            promotion,
            &self.config.legal,
            ctx,
        )
        .await
    }

    /// # Errors
    ///
    /// Returns the validation failure when the support form is incomplete.
    pub async fn submit_support(
        &self,
        form: &mut SupportForm,
        page: &str,
    ) -> Result<SupportStatus, SupportError> {
        form.submit(&self.transport, &self.config.endpoints.support, page)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use futures::executor::block_on;
    use serde_json::{Value, json};
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingTransport {
        calls: RefCell<Vec<(String, Value)>>,
    }

    impl SubmissionTransport for RecordingTransport {
        async fn post_json(&self, endpoint: &str, body: &Value) -> Result<ApiReply, TransportError> {
            self.calls
                .borrow_mut()
                .push((endpoint.to_string(), body.clone()));
            Ok(ApiReply::new(200, "OK", Some(json!({"id": "E-77"}))))
        }
    }

    fn site() -> PromoSite<MemoryStore, RecordingTransport> {
        let catalog = Catalog::from_json(
            r#"[{"id": 3, "brand": "corona", "title": "Beach Days", "description": "",
                 "image": "", "brandLogo": "", "fromDate": "2026-01-01", "toDate": "2026-12-31",
                 "eligibleStates": ["texas"]}]"#,
        )
        .unwrap();
        let config = SiteConfig::from_json(
            r#"{"endpoints": {"entry": "https://api.test/entry", "support": "https://api.test/support"}}"#,
        )
        .unwrap();
        PromoSite::new(catalog, config, MemoryStore::new(), RecordingTransport::default())
    }

    #[test]
    fn site_posts_entry_with_promotion_campaign() {
        let site = site();
        let mut form = EntryForm::new();
        form.set_first_name("Ana");
        form.set_last_name("Lopez");
        form.set_year_born("1988");
        form.set_state("Texas");
        form.set_email("ana@example.com");
        form.set_phone("5551234567");
        form.set_accept_rules(true);
        form.set_accept_privacy(true);
        let ctx = ClientContext::new(
            "agent",
            "/sweepstakes/3",
            None,
            Utc.with_ymd_and_hms(2026, 5, 1, 0, 0, 0).unwrap(),
            2026,
        );
        let outcome = block_on(site.submit_entry(&mut form, Some(3), &ctx));
        assert_eq!(
            outcome,
            SubmitOutcome::Accepted {
                reference_id: "E-77".into()
            }
        );
        let calls = site.transport().calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "https://api.test/entry");
        assert_eq!(calls[0].1["promotion"]["campaign_id"], "PROMO_3");
        assert_eq!(calls[0].1["promotion"]["title"], "Beach Days");
    }

    #[test]
    fn remembered_verification_survives_reload() {
        let site = site();
        assert!(!site.is_age_verified());
        let mut gate = AgeGate::new();
        gate.set_month("4");
        gate.set_day("2");
        gate.set_year("1970");
        gate.set_remember(true);
        site.verify_age(&mut gate, NaiveDate::from_ymd_opt(2026, 10, 16).unwrap())
            .unwrap();
        assert!(site.is_age_verified());
        assert_eq!(site.catalog_view().visible().len(), 1);
    }
}
