//! Birth-date check shown before any promotion content.
use crate::constants::{LEGAL_AGE, MIN_BIRTH_YEAR};
use crate::storage::{KeyValueStore, keys};
use chrono::{Datelike, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AgeGateError {
    #[error("Please enter your complete birth date")]
    Incomplete,
    #[error("Please enter a valid month (1-12)")]
    Month,
    #[error("Please enter a valid day (1-31)")]
    Day,
    #[error("Please enter a valid year (1900-{current_year})")]
    Year { current_year: i32 },
    #[error("Please enter a valid date")]
    InvalidDate,
    #[error("You must be 21 years or older to enter")]
    Underage,
}

/// Whole years between `birth` and `today`, counting a birthday only once it has been reached.
#[must_use]
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

fn digits_capped(raw: &str, max: usize) -> String {
    raw.chars().filter(char::is_ascii_digit).take(max).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AgeGate {
    month: String,
    day: String,
    year: String,
    remember: bool,
    error: Option<AgeGateError>,
    verified: bool,
}

impl AgeGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn month(&self) -> &str {
        &self.month
    }

    #[must_use]
    pub fn day(&self) -> &str {
        &self.day
    }

    #[must_use]
    pub fn year(&self) -> &str {
        &self.year
    }

    #[must_use]
    pub const fn remember(&self) -> bool {
        self.remember
    }

    #[must_use]
    pub const fn error(&self) -> Option<AgeGateError> {
        self.error
    }

    #[must_use]
    pub const fn is_verified(&self) -> bool {
        self.verified
    }

    pub fn set_month(&mut self, raw: &str) {
        self.month = digits_capped(raw, 2);
        self.error = None;
    }

    pub fn set_day(&mut self, raw: &str) {
        self.day = digits_capped(raw, 2);
        self.error = None;
    }

    pub fn set_year(&mut self, raw: &str) {
        self.year = digits_capped(raw, 4);
        self.error = None;
    }

    pub fn set_remember(&mut self, remember: bool) {
        self.remember = remember;
    }

    /// Run the checks in order; the first failure wins.
    ///
    /// # Errors
    ///
    /// Returns the first failing [`AgeGateError`], which also becomes the displayed error.
    pub fn submit(&mut self, today: NaiveDate) -> Result<NaiveDate, AgeGateError> {
        let outcome = self.check(today);
        self.error = outcome.err();
        self.verified = outcome.is_ok();
        outcome
    }

    fn check(&self, today: NaiveDate) -> Result<NaiveDate, AgeGateError> {
        if self.month.is_empty() || self.day.is_empty() || self.year.is_empty() {
            return Err(AgeGateError::Incomplete);
        }
        let month: u32 = self.month.parse().map_err(|_| AgeGateError::Month)?;
        if !(1..=12).contains(&month) {
            return Err(AgeGateError::Month);
        }
        let day: u32 = self.day.parse().map_err(|_| AgeGateError::Day)?;
        if !(1..=31).contains(&day) {
            return Err(AgeGateError::Day);
        }
        let current_year = today.year();
        let year: i32 = self
            .year
            .parse()
            .map_err(|_| AgeGateError::Year { current_year })?;
        if !(MIN_BIRTH_YEAR..=current_year).contains(&year) {
            return Err(AgeGateError::Year { current_year });
        }
        let birth = NaiveDate::from_ymd_opt(year, month, day).ok_or(AgeGateError::InvalidDate)?;
        if birth > today {
            return Err(AgeGateError::InvalidDate);
        }
        if age_on(birth, today) < LEGAL_AGE {
            return Err(AgeGateError::Underage);
        }
        Ok(birth)
    }

    /// Persist the verified flag when "Remember me" was ticked.
    pub fn remember_in<S: KeyValueStore>(&self, store: &S) {
        if !(self.verified && self.remember) {
            return;
        }
        if let Err(err) = store.write(keys::AGE_VERIFIED, &true) {
            log::error!("could not remember age verification: {err}");
        }
    }
}

/// Whether an earlier visit asked to skip the gate.
#[must_use]
pub fn is_remembered<S: KeyValueStore>(store: &S) -> bool {
    match store.read::<bool>(keys::AGE_VERIFIED) {
        Ok(flag) => flag.unwrap_or(false),
        Err(err) => {
            log::warn!("ignoring stored age verification: {err}");
            false
        }
    }
}
