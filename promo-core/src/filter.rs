//! Catalog filtering, cross-conditioned option counts, sorting and paging.
//!
//! Option lists are pure functions of the promotion set and the opposing
//! filter. Brand counts depend on the selected state, state counts depend on
//! the selected brand, and neither is cached between changes.
use crate::brand::Brand;
use crate::constants::PAGE_SIZE;
use crate::promotion::{Catalog, Promotion};
use crate::states::{self, ALL_STATES};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Sort orders offered by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    Newest,
    Oldest,
    TitleAsc,
    TitleDesc,
}

impl SortOption {
    pub const ALL: [Self; 4] = [Self::Newest, Self::Oldest, Self::TitleAsc, Self::TitleDesc];

    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::TitleAsc => "title_asc",
            Self::TitleDesc => "title_desc",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest",
            Self::Oldest => "Oldest",
            Self::TitleAsc => "Sort A-Z",
            Self::TitleDesc => "Sort Z-A",
        }
    }

    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|sort| sort.value() == value)
    }
}

/// One entry of a filter dropdown together with how many promotions it would match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption<V> {
    pub value: V,
    pub label: String,
    pub count: usize,
}

impl<V> FilterOption<V> {
    /// Zero-count options are rendered disabled rather than omitted.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.count == 0
    }
}

pub type BrandOption = FilterOption<Brand>;
pub type StateOption = FilterOption<&'static str>;

fn option_label(name: &str, count: usize) -> String {
    format!("{name} ({count})")
}

/// Brand options counted over promotions available in `state` (all promotions when `None`).
#[must_use]
pub fn brand_options(promotions: &[Promotion], state: Option<&str>) -> Vec<BrandOption> {
    let mut counts: BTreeMap<Brand, usize> = BTreeMap::new();
    for promo in promotions
        .iter()
        .filter(|promo| state.is_none_or(|s| promo.is_eligible_in(s)))
    {
        *counts.entry(promo.brand).or_default() += 1;
    }

    Brand::ALL
        .into_iter()
        .map(|brand| {
            let count = counts.get(&brand).copied().unwrap_or(0);
            FilterOption {
                value: brand,
                label: option_label(brand.display_name(), count),
                count,
            }
        })
        .collect()
}

/// State options counted over promotions of `brand` (all promotions when `None`).
///
/// Every canonical state is present, in canonical order, even with a zero count.
#[must_use]
pub fn state_options(promotions: &[Promotion], brand: Option<Brand>) -> Vec<StateOption> {
    let matching: Vec<&Promotion> = promotions
        .iter()
        .filter(|promo| brand.is_none_or(|b| promo.brand == b))
        .collect();

    ALL_STATES
        .iter()
        .map(|state| {
            let count = matching
                .iter()
                .filter(|promo| promo.is_eligible_in(state.value))
                .count();
            FilterOption {
                value: state.value,
                label: option_label(state.name, count),
                count,
            }
        })
        .collect()
}

/// Apply the brand and state filters against the full promotion set.
#[must_use]
pub fn filter_promotions<'a>(
    promotions: &'a [Promotion],
    brand: Option<Brand>,
    state: Option<&str>,
) -> Vec<&'a Promotion> {
    promotions
        .iter()
        .filter(|promo| brand.is_none_or(|b| promo.brand == b))
        .filter(|promo| state.is_none_or(|s| promo.is_eligible_in(s)))
        .collect()
}

/// Compare titles the way a reader scanning an alphabetical list expects:
/// case-insensitive first, then lowercase ahead of uppercase.
#[must_use]
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| b.cmp(a))
}

/// Stable in-place sort. `None` keeps catalog order.
pub fn sort_promotions(list: &mut [&Promotion], sort: Option<SortOption>) {
    match sort {
        None => {}
        Some(SortOption::Newest) => list.sort_by(|a, b| b.from_date.cmp(&a.from_date)),
        Some(SortOption::Oldest) => list.sort_by(|a, b| a.from_date.cmp(&b.from_date)),
        Some(SortOption::TitleAsc) => list.sort_by(|a, b| compare_titles(&a.title, &b.title)),
        Some(SortOption::TitleDesc) => list.sort_by(|a, b| compare_titles(&b.title, &a.title)),
    }
}

/// Session-local filter selections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub brand: Option<Brand>,
    pub state: Option<&'static str>,
    pub sort: Option<SortOption>,
    pub visible_count: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            brand: None,
            state: None,
            sort: None,
            visible_count: PAGE_SIZE,
        }
    }
}

impl FilterState {
    #[must_use]
    pub const fn is_default(&self) -> bool {
        self.brand.is_none() && self.state.is_none() && self.sort.is_none()
    }
}

/// Drives a [`FilterState`] over a catalog and answers every question the grid asks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogView {
    catalog: Catalog,
    filters: FilterState,
}

impl CatalogView {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            filters: FilterState::default(),
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Select a brand. A selected state left with no promotions under the new
    /// brand is cleared.
    pub fn set_brand(&mut self, brand: Option<Brand>) {
        self.filters.brand = brand;
        if let Some(state) = self.filters.state {
            let still_available = state_options(self.catalog.promotions(), brand)
                .iter()
                .any(|opt| opt.value == state && opt.count > 0);
            if !still_available {
                log::debug!("clearing state filter `{state}`: no promotions for new brand");
                self.filters.state = None;
            }
        }
        self.filters.visible_count = PAGE_SIZE;
    }

    /// Select a state by filter value. Unknown values clear the state filter.
    /// A selected brand left with no promotions in the new state is cleared.
    pub fn set_state(&mut self, value: Option<&str>) {
        let state = value.and_then(|v| {
            let found = states::find(v).map(|s| s.value);
            if found.is_none() && !v.is_empty() {
                log::warn!("ignoring unknown state filter `{v}`");
            }
            found
        });
        self.filters.state = state;
        if let Some(brand) = self.filters.brand {
            let still_available = brand_options(self.catalog.promotions(), state)
                .iter()
                .any(|opt| opt.value == brand && opt.count > 0);
            if !still_available {
                log::debug!("clearing brand filter `{brand}`: no promotions in new state");
                self.filters.brand = None;
            }
        }
        self.filters.visible_count = PAGE_SIZE;
    }

    pub fn set_sort(&mut self, sort: Option<SortOption>) {
        self.filters.sort = sort;
        self.filters.visible_count = PAGE_SIZE;
    }

    /// Reveal the next page, never past the end of the filtered list.
    pub fn load_more(&mut self) {
        let total = self.filtered().len();
        self.filters.visible_count = (self.filters.visible_count + PAGE_SIZE).min(total);
    }

    pub fn reset(&mut self) {
        self.filters = FilterState::default();
    }

    #[must_use]
    pub fn brand_options(&self) -> Vec<BrandOption> {
        brand_options(self.catalog.promotions(), self.filters.state)
    }

    #[must_use]
    pub fn state_options(&self) -> Vec<StateOption> {
        state_options(self.catalog.promotions(), self.filters.brand)
    }

    /// Every promotion matching the filters, in display order.
    #[must_use]
    pub fn filtered(&self) -> Vec<&Promotion> {
        let mut list = filter_promotions(
            self.catalog.promotions(),
            self.filters.brand,
            self.filters.state,
        );
        sort_promotions(&mut list, self.filters.sort);
        list
    }

    /// The current page window of [`Self::filtered`].
    #[must_use]
    pub fn visible(&self) -> Vec<&Promotion> {
        let mut list = self.filtered();
        list.truncate(self.filters.visible_count);
        list
    }

    #[must_use]
    pub fn has_more(&self) -> bool {
        self.filters.visible_count < self.filtered().len()
    }

    /// Promotions not yet revealed, shown on the load-more button.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.filtered()
            .len()
            .saturating_sub(self.filters.visible_count)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filtered().is_empty()
    }

    #[must_use]
    pub const fn is_reset_disabled(&self) -> bool {
        self.filters.is_default()
    }
}
