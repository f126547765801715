//! Brands participating in the promotions catalog.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A beer brand that can sponsor a promotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Brand {
    Corona,
    Modelo,
    Pacifico,
}

/// Header palette used by the entry page for a brand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrandTheme {
    /// Navy header with a gold rule.
    Navy,
    /// Yellow header with a black rule.
    Sunshine,
}

impl Brand {
    /// Canonical brand order used for option lists.
    pub const ALL: [Self; 3] = [Self::Corona, Self::Modelo, Self::Pacifico];

    /// Value used in filters, URLs and catalog JSON.
    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::Corona => "corona",
            Self::Modelo => "modelo",
            Self::Pacifico => "pacifico",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Corona => "Corona",
            Self::Modelo => "Modelo",
            Self::Pacifico => "Pacifico",
        }
    }

    /// Parse a filter value; the empty string and unknown values yield `None`.
    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|brand| brand.value() == value)
    }

    #[must_use]
    pub const fn theme(self) -> BrandTheme {
        match self {
            Self::Pacifico => BrandTheme::Sunshine,
            Self::Corona | Self::Modelo => BrandTheme::Navy,
        }
    }

    /// Trademarked product name used when a promotion does not name one.
    #[must_use]
    pub const fn default_beer_name(self) -> &'static str {
        match self {
            Self::Corona => "Corona Premier®",
            Self::Modelo => "Modelo Especial®",
            Self::Pacifico => "Pacifico Clara®",
        }
    }

    /// Product name for the legal footer. An explicit `register` wins and
    /// always carries the registered mark.
    #[must_use]
    pub fn beer_name(self, register: Option<&str>) -> String {
        match register.map(str::trim).filter(|name| !name.is_empty()) {
            Some(name) if name.contains('®') => name.to_string(),
            Some(name) => format!("{name}®"),
            None => self.default_beer_name().to_string(),
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_round_trip_through_from_value() {
        for brand in Brand::ALL {
            assert_eq!(Brand::from_value(brand.value()), Some(brand));
        }
        assert_eq!(Brand::from_value(""), None);
        assert_eq!(Brand::from_value("Corona"), None);
    }

    #[test]
    fn beer_name_appends_mark_once() {
        assert_eq!(Brand::Corona.beer_name(Some("Corona Extra")), "Corona Extra®");
        assert_eq!(Brand::Corona.beer_name(Some("Corona Extra®")), "Corona Extra®");
        assert_eq!(Brand::Modelo.beer_name(None), "Modelo Especial®");
        assert_eq!(Brand::Pacifico.beer_name(Some("  ")), "Pacifico Clara®");
    }

    #[test]
    fn only_pacifico_uses_sunshine_theme() {
        assert_eq!(Brand::Pacifico.theme(), BrandTheme::Sunshine);
        assert_eq!(Brand::Corona.theme(), BrandTheme::Navy);
        assert_eq!(Brand::Modelo.theme(), BrandTheme::Navy);
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&Brand::Pacifico).unwrap();
        assert_eq!(json, "\"pacifico\"");
    }
}
