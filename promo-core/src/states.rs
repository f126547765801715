//! Canonical list of the 50 states plus the District of Columbia.

/// A region a promotion can be made available in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UsState {
    /// Kebab-case value used by filters and catalog JSON, e.g. `new-york`.
    pub value: &'static str,
    /// Display name, e.g. `New York`.
    pub name: &'static str,
}

impl UsState {
    const fn new(value: &'static str, name: &'static str) -> Self {
        Self { value, name }
    }
}

pub const STATE_COUNT: usize = 51;

pub const ALL_STATES: [UsState; STATE_COUNT] = [
    UsState::new("alabama", "Alabama"),
    UsState::new("alaska", "Alaska"),
    UsState::new("arizona", "Arizona"),
    UsState::new("arkansas", "Arkansas"),
    UsState::new("california", "California"),
    UsState::new("colorado", "Colorado"),
    UsState::new("connecticut", "Connecticut"),
    UsState::new("delaware", "Delaware"),
    UsState::new("district-of-columbia", "District of Columbia"),
    UsState::new("florida", "Florida"),
    UsState::new("georgia", "Georgia"),
    UsState::new("hawaii", "Hawaii"),
    UsState::new("idaho", "Idaho"),
    UsState::new("illinois", "Illinois"),
    UsState::new("indiana", "Indiana"),
    UsState::new("iowa", "Iowa"),
    UsState::new("kansas", "Kansas"),
    UsState::new("kentucky", "Kentucky"),
    UsState::new("louisiana", "Louisiana"),
    UsState::new("maine", "Maine"),
    UsState::new("maryland", "Maryland"),
    UsState::new("massachusetts", "Massachusetts"),
    UsState::new("michigan", "Michigan"),
    UsState::new("minnesota", "Minnesota"),
    UsState::new("mississippi", "Mississippi"),
    UsState::new("missouri", "Missouri"),
    UsState::new("montana", "Montana"),
    UsState::new("nebraska", "Nebraska"),
    UsState::new("nevada", "Nevada"),
    UsState::new("new-hampshire", "New Hampshire"),
    UsState::new("new-jersey", "New Jersey"),
    UsState::new("new-mexico", "New Mexico"),
    UsState::new("new-york", "New York"),
    UsState::new("north-carolina", "North Carolina"),
    UsState::new("north-dakota", "North Dakota"),
    UsState::new("ohio", "Ohio"),
    UsState::new("oklahoma", "Oklahoma"),
    UsState::new("oregon", "Oregon"),
    UsState::new("pennsylvania", "Pennsylvania"),
    UsState::new("rhode-island", "Rhode Island"),
    UsState::new("south-carolina", "South Carolina"),
    UsState::new("south-dakota", "South Dakota"),
    UsState::new("tennessee", "Tennessee"),
    UsState::new("texas", "Texas"),
    UsState::new("utah", "Utah"),
    UsState::new("vermont", "Vermont"),
    UsState::new("virginia", "Virginia"),
    UsState::new("washington", "Washington"),
    UsState::new("west-virginia", "West Virginia"),
    UsState::new("wisconsin", "Wisconsin"),
    UsState::new("wyoming", "Wyoming"),
];

/// Look up a state by its filter value.
#[must_use]
pub fn find(value: &str) -> Option<&'static UsState> {
    ALL_STATES.iter().find(|state| state.value == value)
}

/// Look up a state by its display name, as submitted by the entry form.
#[must_use]
pub fn find_by_name(name: &str) -> Option<&'static UsState> {
    ALL_STATES.iter().find(|state| state.name == name)
}

#[must_use]
pub fn is_canonical(value: &str) -> bool {
    find(value).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn values_are_unique_and_kebab_case() {
        let values: BTreeSet<_> = ALL_STATES.iter().map(|s| s.value).collect();
        assert_eq!(values.len(), STATE_COUNT);
        for value in values {
            assert!(value.chars().all(|c| c.is_ascii_lowercase() || c == '-'), "{value}");
        }
    }

    #[test]
    fn lookups_cover_multi_word_names() {
        assert_eq!(find("new-york").map(|s| s.name), Some("New York"));
        assert_eq!(
            find_by_name("District of Columbia").map(|s| s.value),
            Some("district-of-columbia")
        );
        assert!(!is_canonical("puerto-rico"));
        assert!(!is_canonical(""));
    }
}
