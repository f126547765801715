//! Deployment prefix shared by asset links and the router.
//!
//! `PUBLIC_URL` is read once at compile time. Catalog entries carry
//! root-anchored image and logo paths, so those go through [`asset_path`] too.

/// Path prefix the site is served under, without a trailing slash.
/// Empty when the site lives at the host root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteBase(&'static str);

impl SiteBase {
    #[must_use]
    pub fn current() -> Self {
        Self::new(option_env!("PUBLIC_URL").unwrap_or(""))
    }

    #[must_use]
    pub fn new(raw: &'static str) -> Self {
        Self(raw.trim().trim_end_matches('/'))
    }

    #[must_use]
    pub const fn is_root(self) -> bool {
        self.0.is_empty()
    }

    /// `basename` for the browser router; `None` at the host root.
    #[must_use]
    pub const fn router_basename(self) -> Option<&'static str> {
        if self.is_root() { None } else { Some(self.0) }
    }

    /// Prefix a site-relative or root-anchored href. Off-site URLs pass through.
    #[must_use]
    pub fn resolve(self, href: &str) -> String {
        if is_off_site(href) {
            return href.to_string();
        }
        let rel = href.trim_start_matches('/');
        format!("{}/{rel}", self.0)
    }
}

fn is_off_site(href: &str) -> bool {
    href.starts_with("//") || href.contains("://") || href.starts_with("data:")
}

#[must_use]
pub fn asset_path(href: &str) -> String {
    SiteBase::current().resolve(href)
}

#[must_use]
pub fn router_base() -> Option<&'static str> {
    SiteBase::current().router_basename()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_deployments_anchor_at_slash() {
        let base = SiteBase::new("");
        assert!(base.is_root());
        assert_eq!(base.resolve("assets/data/site.json"), "/assets/data/site.json");
        assert_eq!(
            base.resolve("/assets/images/brands/corona.svg"),
            "/assets/images/brands/corona.svg"
        );
        assert_eq!(base.router_basename(), None);
    }

    #[test]
    fn catalog_images_follow_the_prefix() {
        let base = SiteBase::new(" /promotions/ ");
        assert_eq!(
            base.resolve("/assets/images/brands/pacifico.svg"),
            "/promotions/assets/images/brands/pacifico.svg"
        );
        assert_eq!(base.resolve("faq"), "/promotions/faq");
        assert_eq!(base.router_basename(), Some("/promotions"));
    }

    #[test]
    fn off_site_links_are_untouched() {
        let base = SiteBase::new("/promotions");
        for href in [
            "https://cdn.example.com/promo-01.webp",
            "//cdn.example.com/logo.svg",
            "data:image/png;base64,AAAA",
        ] {
            assert_eq!(base.resolve(href), href);
        }
    }

    #[test]
    fn build_without_public_url_serves_from_root() {
        assert_eq!(router_base(), None);
        assert_eq!(asset_path("assets/images/logo.webp"), "/assets/images/logo.webp");
    }
}
