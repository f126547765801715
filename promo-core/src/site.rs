//! Site-wide configuration: API endpoints, legal copy, FAQ content and official rules.
use crate::faq::FaqItem;
use crate::payload::{ApiEndpoints, LegalCopy};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum SiteConfigError {
    #[error("site configuration could not be parsed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("the {0} endpoint is empty")]
    EmptyEndpoint(&'static str),
}

/// Outbound links printed in every footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalLinks {
    pub terms: String,
    pub privacy: String,
}

impl Default for LegalLinks {
    fn default() -> Self {
        Self {
            terms: "https://www.cbrands.com/pages/terms".to_string(),
            privacy: "https://www.cbrands.com/pages/privacy-notice".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub endpoints: ApiEndpoints,
    #[serde(default)]
    pub legal: LegalCopy,
    #[serde(default)]
    pub links: LegalLinks,
    #[serde(default)]
    pub faq: Vec<FaqItem>,
    /// Paragraphs of the official rules panel.
    #[serde(default)]
    pub official_rules: Vec<String>,
}

impl SiteConfig {
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or an endpoint is blank.
    pub fn from_json(json: &str) -> Result<Self, SiteConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Replace endpoints with non-empty overrides.
    #[must_use]
    pub fn with_endpoint_overrides(mut self, entry: Option<&str>, support: Option<&str>) -> Self {
        if let Some(entry) = entry.filter(|e| !e.trim().is_empty()) {
            entry.clone_into(&mut self.endpoints.entry);
        }
        if let Some(support) = support.filter(|s| !s.trim().is_empty()) {
            support.clone_into(&mut self.endpoints.support);
        }
        self
    }

    fn validate(&self) -> Result<(), SiteConfigError> {
        if self.endpoints.entry.trim().is_empty() {
            return Err(SiteConfigError::EmptyEndpoint("entry"));
        }
        if self.endpoints.support.trim().is_empty() {
            return Err(SiteConfigError::EmptyEndpoint("support"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{"endpoints": {"entry": "https://api.test/entry", "support": "https://api.test/support"}}"#;

    #[test]
    fn minimal_config_fills_defaults() {
        let config = SiteConfig::from_json(MINIMAL).unwrap();
        assert_eq!(config.legal, LegalCopy::default());
        assert!(config.faq.is_empty());
        assert_eq!(config.links.terms, "https://www.cbrands.com/pages/terms");
    }

    #[test]
    fn blank_endpoint_is_rejected() {
        let json = MINIMAL.replace("https://api.test/support", " ");
        assert!(matches!(
            SiteConfig::from_json(&json),
            Err(SiteConfigError::EmptyEndpoint("support"))
        ));
    }

    #[test]
    fn overrides_ignore_blank_values() {
        let config = SiteConfig::from_json(MINIMAL)
            .unwrap()
            .with_endpoint_overrides(Some("http://localhost:9000/entry"), Some(""));
        assert_eq!(config.endpoints.entry, "http://localhost:9000/entry");
        assert_eq!(config.endpoints.support, "https://api.test/support");
    }
}
