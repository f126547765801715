use crate::i18n::bundle::with_bundle;
use serde_json::Value;
use std::collections::BTreeMap;

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(obj, |current, part| current.get(part))
}

fn render_value(value: &Value, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = value.as_str()?.to_string();
    if let Some(args_map) = args {
        for (k, v) in args_map {
            text = text.replace(&format!("{{{k}}}"), v);
        }
    }
    Some(text)
}

fn resolve(key: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    with_bundle(|bundle| {
        get_nested_value(&bundle.translations, key)
            .and_then(|v| render_value(v, args))
            .or_else(|| get_nested_value(&bundle.fallback, key).and_then(|v| render_value(v, args)))
    })
}

/// Translate a key to the current language, falling back to English and then to the key itself.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key, replacing `{name}` placeholders from `args`.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    resolve(key, args).unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolation_replaces_placeholders() {
        let value = Value::String("Load more ({remaining})".into());
        let mut args = BTreeMap::new();
        args.insert("remaining", "4");
        assert_eq!(
            render_value(&value, Some(&args)).as_deref(),
            Some("Load more (4)")
        );
    }

    #[test]
    fn nested_keys_resolve_and_unknown_keys_echo() {
        assert_eq!(t("consent.necessary.title"), "Strictly Necessary Cookies");
        assert_eq!(t("missing.key"), "missing.key");
        assert!(render_value(&serde_json::json!({"a": 1}), None).is_none());
    }
}
