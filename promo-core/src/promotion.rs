//! Promotion records and the immutable catalog they live in.
use crate::brand::Brand;
use crate::states;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

const BUNDLED_CATALOG: &str = include_str!("../../promo-web/static/assets/data/promotions.json");

/// A single sweepstakes or promotion offered on the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    pub id: u32,
    pub brand: Brand,
    pub title: String,
    pub description: String,
    pub image: String,
    pub brand_logo: String,
    /// Product name printed in the legal footer, if it differs from the brand default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub register: Option<String>,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    /// States the promotion may be entered from. Empty means nowhere.
    #[serde(default)]
    pub eligible_states: BTreeSet<String>,
}

impl Promotion {
    #[must_use]
    pub fn is_eligible_in(&self, state: &str) -> bool {
        self.eligible_states.contains(state)
    }

    /// Campaign identifier sent with every entry for this promotion.
    #[must_use]
    pub fn campaign_id(&self) -> String {
        format!("PROMO_{}", self.id)
    }

    #[must_use]
    pub fn beer_name(&self) -> String {
        self.brand.beer_name(self.register.as_deref())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog JSON could not be parsed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("promotion {id} lists unknown state `{state}`")]
    UnknownState { id: u32, state: String },
    #[error("promotion id {0} appears more than once")]
    DuplicateId(u32),
    #[error("promotion {0} ends before it starts")]
    InvertedDates(u32),
}

/// The full, validated promotion list. Cloning is cheap.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    promotions: Arc<[Promotion]>,
}

impl Catalog {
    /// Build a catalog, rejecting promotions that break the catalog invariants.
    ///
    /// # Errors
    ///
    /// Returns an error for duplicate ids, inverted date ranges, or eligible
    /// states outside the canonical list.
    pub fn new(promotions: Vec<Promotion>) -> Result<Self, CatalogError> {
        validate(&promotions)?;
        Ok(Self {
            promotions: promotions.into(),
        })
    }

    /// Parse a JSON array of promotions.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the catalog is invalid.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let promotions: Vec<Promotion> = serde_json::from_str(json)?;
        Self::new(promotions)
    }

    /// The catalog shipped with the site, or an empty catalog if it fails to load.
    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(BUNDLED_CATALOG).unwrap_or_else(|err| {
            log::error!("bundled promotion catalog rejected: {err}");
            Self::default()
        })
    }

    #[must_use]
    pub fn promotions(&self) -> &[Promotion] {
        &self.promotions
    }

    #[must_use]
    pub fn find(&self, id: u32) -> Option<&Promotion> {
        self.promotions.iter().find(|promo| promo.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.promotions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.promotions.is_empty()
    }
}

fn validate(promotions: &[Promotion]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(promotions.len());
    for promo in promotions {
        if !seen.insert(promo.id) {
            return Err(CatalogError::DuplicateId(promo.id));
        }
        if promo.to_date < promo.from_date {
            return Err(CatalogError::InvertedDates(promo.id));
        }
        if let Some(state) = promo
            .eligible_states
            .iter()
            .find(|state| !states::is_canonical(state))
        {
            return Err(CatalogError::UnknownState {
                id: promo.id,
                state: state.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {
            "id": 7,
            "brand": "pacifico",
            "title": "Surf Trip",
            "description": "Win a board",
            "image": "/img/surf.webp",
            "brandLogo": "/img/pacifico.svg",
            "fromDate": "2025-06-01",
            "toDate": "2025-08-31",
            "eligibleStates": ["california", "oregon"]
        },
        {
            "id": 8,
            "brand": "modelo",
            "title": "Tailgate",
            "description": "Win a grill",
            "image": "/img/grill.webp",
            "brandLogo": "/img/modelo.svg",
            "register": "Modelo Negra",
            "fromDate": "2025-09-01",
            "toDate": "2025-12-01"
        }
    ]"#;

    #[test]
    fn bundled_catalog_loads() {
        let catalog = Catalog::load_from_static();
        assert_eq!(catalog.len(), 12);
        assert!(catalog.find(6).is_some_and(|promo| promo.eligible_states.is_empty()));
    }

    #[test]
    fn parses_camel_case_catalog() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        assert_eq!(catalog.len(), 2);
        let surf = catalog.find(7).unwrap();
        assert!(surf.is_eligible_in("oregon"));
        assert!(!surf.is_eligible_in("texas"));
        assert_eq!(surf.campaign_id(), "PROMO_7");
        assert_eq!(surf.beer_name(), "Pacifico Clara®");
    }

    #[test]
    fn missing_eligible_states_means_nowhere() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        let tailgate = catalog.find(8).unwrap();
        assert!(tailgate.eligible_states.is_empty());
        assert_eq!(tailgate.beer_name(), "Modelo Negra®");
    }

    #[test]
    fn rejects_unknown_states() {
        let json = SAMPLE.replace("oregon", "atlantis");
        let err = Catalog::from_json(&json).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownState { id: 7, .. }));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let json = SAMPLE.replace("\"id\": 8", "\"id\": 7");
        let err = Catalog::from_json(&json).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(7)));
    }

    #[test]
    fn rejects_unknown_brand() {
        let json = SAMPLE.replace("\"modelo\"", "\"victoria\"");
        assert!(matches!(
            Catalog::from_json(&json),
            Err(CatalogError::Json(_))
        ));
    }
}
