use crate::i18n::locales::{is_supported, load_translations};
use serde_json::Value;
use std::cell::RefCell;

const LOCALE_KEY: &str = "promo.locale";
const DEFAULT_LANG: &str = "en";

pub struct I18nBundle {
    pub lang: String,
    pub translations: Value,
    pub fallback: Value,
}

fn build_bundle(lang: &str) -> Option<I18nBundle> {
    if !is_supported(lang) {
        return None;
    }
    let fallback = load_translations(DEFAULT_LANG)?;
    let translations = load_translations(lang)?;
    Some(I18nBundle {
        lang: lang.to_string(),
        translations,
        fallback,
    })
}

fn fallback_bundle() -> I18nBundle {
    let fallback =
        load_translations(DEFAULT_LANG).unwrap_or_else(|| Value::Object(serde_json::Map::new()));
    I18nBundle {
        lang: DEFAULT_LANG.to_string(),
        translations: fallback.clone(),
        fallback,
    }
}

fn saved_lang() -> String {
    #[cfg(all(not(test), target_arch = "wasm32"))]
    {
        web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(LOCALE_KEY).ok().flatten())
            .unwrap_or_else(|| DEFAULT_LANG.to_string())
    }

    #[cfg(any(test, not(target_arch = "wasm32")))]
    {
        DEFAULT_LANG.to_string()
    }
}

thread_local! {
    pub(super) static CURRENT: RefCell<I18nBundle> = RefCell::new(
        build_bundle(&saved_lang()).unwrap_or_else(fallback_bundle)
    );
}

pub(super) fn with_bundle<R>(f: impl FnOnce(&I18nBundle) -> R) -> R {
    CURRENT.with(|cell| f(&cell.borrow()))
}

/// Switch the active language, update `<html lang>` and remember the choice.
///
/// Unsupported codes are ignored.
pub fn set_lang(lang: &str) {
    let Some(bundle) = build_bundle(lang) else {
        log::warn!("ignoring unsupported locale `{lang}`");
        return;
    };
    CURRENT.with(|cell| cell.replace(bundle));
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("lang", lang);
        }
        if let Some(storage) = web_sys::window().and_then(|win| win.local_storage().ok().flatten())
        {
            let _ = storage.set_item(LOCALE_KEY, lang);
        }
    }
}

#[must_use]
pub fn current_lang() -> String {
    with_bundle(|bundle| bundle.lang.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_bundle_loads_requested_locale() {
        let bundle = build_bundle("es").expect("bundle should load");
        assert_eq!(bundle.lang, "es");
        assert!(bundle.translations.is_object());
        assert!(bundle.fallback.is_object());
        assert!(build_bundle("xx").is_none());
    }

    #[test]
    fn fallback_bundle_defaults_to_en() {
        let bundle = fallback_bundle();
        assert_eq!(bundle.lang, "en");
        assert!(bundle.translations.is_object());
    }

    #[test]
    fn unsupported_lang_keeps_current_bundle() {
        set_lang("en");
        set_lang("klingon");
        assert_eq!(current_lang(), "en");
    }
}
