//! i18n coverage tests to ensure all required keys are present

use serde_json::Value;
use std::collections::BTreeSet;

fn locale_codes() -> Vec<String> {
    let mut locales = Vec::new();
    let entries = std::fs::read_dir("i18n").expect("i18n directory should exist");
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "json")
            && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
        {
            locales.push(stem.to_string());
        }
    }
    locales.sort();
    locales
}

fn load_locale(locale: &str) -> (String, Value) {
    let path = format!("i18n/{locale}.json");
    let content =
        std::fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read {path}"));
    let json: Value =
        serde_json::from_str(&content).unwrap_or_else(|_| panic!("Failed to parse JSON in {path}"));
    (content, json)
}

fn find_nested_key(json: &Value, key: &str) -> bool {
    let parts: Vec<&str> = key.split('.').collect();
    let mut current = json;

    for part in parts {
        match current.get(part) {
            Some(value) => current = value,
            None => return false,
        }
    }

    current.is_string() || current.is_object()
}

fn collect_keys(prefix: &str, value: &Value, out: &mut BTreeSet<String>) {
    if let Value::Object(map) = value {
        for (k, v) in map {
            let next_prefix = if prefix.is_empty() {
                k.clone()
            } else {
                format!("{prefix}.{k}")
            };
            if v.is_object() {
                collect_keys(&next_prefix, v, out);
            } else {
                out.insert(next_prefix);
            }
        }
    }
}

#[test]
fn locales_have_matching_keys() {
    let locales = locale_codes();
    let (_, base_json) = load_locale("en");
    let mut base_keys = BTreeSet::new();
    collect_keys("", &base_json, &mut base_keys);

    for locale in locales {
        let (_, json) = load_locale(&locale);
        let mut keys = BTreeSet::new();
        collect_keys("", &json, &mut keys);
        for key in &base_keys {
            assert!(
                keys.contains(key),
                "Missing key '{key}' in locale '{locale}'"
            );
        }
    }
}

#[test]
fn required_feature_keys_exist() {
    let locales = locale_codes();
    let required_keys = [
        "age_gate.title",
        "age_gate.remember",
        "age_gate.enter",
        "filter.brand",
        "filter.state",
        "filter.choose",
        "filter.reset",
        "filter.reset_filters",
        "filter.load_more",
        "sort.newest",
        "sort.oldest",
        "sort.title_asc",
        "sort.title_desc",
        "promo.not_found_title",
        "promo.back",
        "entry.heading",
        "entry.rules_link",
        "entry.submit",
        "entry.submitting",
        "confirm.title",
        "confirm.reference",
        "confirm.another",
        "rules.toggle",
        "rules.hide",
        "faq.title",
        "faq.send",
        "faq.thanks",
        "footer.drink",
        "footer.copyright",
        "footer.beer_line",
        "consent.button",
        "consent.confirm",
        "consent.always_active",
        "consent.necessary.title",
        "consent.analytics.title",
        "consent.marketing.title",
        "consent.functional.title",
    ];

    assert!(locales.contains(&"en".to_string()));
    assert!(locales.contains(&"es".to_string()));
    for locale in locales {
        let (_, json) = load_locale(&locale);
        for key in required_keys {
            assert!(
                find_nested_key(&json, key),
                "Missing key '{key}' in locale '{locale}'"
            );
        }
    }
}

fn placeholders(text: &str) -> BTreeSet<String> {
    text.split('{')
        .skip(1)
        .filter_map(|rest| rest.split_once('}').map(|(name, _)| name.to_string()))
        .collect()
}

fn leaf(json: &Value, key: &str) -> Option<String> {
    key.split('.')
        .try_fold(json, |current, part| current.get(part))
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[test]
fn translations_keep_placeholders_and_are_not_blank() {
    let (_, base_json) = load_locale("en");
    let mut base_keys = BTreeSet::new();
    collect_keys("", &base_json, &mut base_keys);

    for locale in locale_codes() {
        let (_, json) = load_locale(&locale);
        for key in &base_keys {
            let (Some(base), Some(text)) = (leaf(&base_json, key), leaf(&json, key)) else {
                continue;
            };
            assert!(!text.trim().is_empty(), "Blank '{key}' in locale '{locale}'");
            assert_eq!(
                placeholders(&base),
                placeholders(&text),
                "Placeholder mismatch for '{key}' in locale '{locale}'"
            );
        }
    }
}
