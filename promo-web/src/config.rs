//! Bundled site data, parsed once per page load.
use once_cell::sync::Lazy;
use promo_core::{ApiEndpoints, Catalog, LegalCopy, LegalLinks, Promotion, SiteConfig};

const SITE_DATA: &str = include_str!("../static/assets/data/site.json");

static CATALOG: Lazy<Catalog> = Lazy::new(Catalog::load_from_static);

static SITE: Lazy<SiteConfig> = Lazy::new(|| {
    load_site(SITE_DATA).with_endpoint_overrides(
        option_env!("PROMO_ENTRY_ENDPOINT"),
        option_env!("PROMO_SUPPORT_ENDPOINT"),
    )
});

fn load_site(json: &str) -> SiteConfig {
    SiteConfig::from_json(json).unwrap_or_else(|err| {
        log::error!("bundled site configuration rejected: {err}");
        SiteConfig {
            endpoints: ApiEndpoints {
                entry: String::new(),
                support: String::new(),
            },
            legal: LegalCopy::default(),
            links: LegalLinks::default(),
            faq: Vec::new(),
            official_rules: Vec::new(),
        }
    })
}

#[must_use]
pub fn catalog() -> Catalog {
    CATALOG.clone()
}

/// Promotion with `id` from the bundled catalog.
#[must_use]
pub fn promotion(id: u32) -> Option<&'static Promotion> {
    CATALOG.find(id)
}

#[must_use]
pub fn site() -> &'static SiteConfig {
    &SITE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_site_data_is_complete() {
        let site = site();
        assert!(site.endpoints.entry.starts_with("https://"));
        assert!(site.endpoints.support.starts_with("https://"));
        assert_eq!(site.faq.len(), 6);
        assert!(!site.official_rules.is_empty());
        assert_eq!(catalog().len(), 12);
        assert_eq!(promotion(1).map(|p| p.id), Some(1));
        assert!(promotion(999).is_none());
    }

    #[test]
    fn broken_site_data_falls_back_to_defaults() {
        let site = load_site("{");
        assert!(site.endpoints.entry.is_empty());
        assert_eq!(site.legal, LegalCopy::default());
        assert!(site.faq.is_empty());
    }
}
