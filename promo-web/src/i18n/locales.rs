use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocaleMeta {
    pub code: &'static str,
    pub name: &'static str,
}

const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        code: "en",
        name: "English",
    },
    LocaleMeta {
        code: "es",
        name: "Español",
    },
];

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("en", include_str!("../../i18n/en.json")),
    ("es", include_str!("../../i18n/es.json")),
];

/// Supported locales with their native names.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

#[must_use]
pub fn is_supported(lang: &str) -> bool {
    LOCALE_META.iter().any(|meta| meta.code == lang)
}

/// Parsed strings for `lang`, or `None` for an unsupported code.
pub fn load_translations(lang: &str) -> Option<Value> {
    let data = LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == lang).then_some(*data))?;
    match serde_json::from_str(data) {
        Ok(value) => Some(value),
        Err(err) => {
            log::error!("locale `{lang}` could not be parsed: {err}");
            None
        }
    }
}
