//! Field-level validation rules for the entry form.
use super::phone::phone_digits;
use crate::constants::{
    ACCEPTED_UPLOAD_TYPES, LEGAL_AGE, MAX_UPLOAD_BYTES, MIN_BIRTH_YEAR, MIN_NAME_CHARS,
    PHONE_DIGITS,
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_SHAPE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Loose `local@domain.tld` shape check shared by both forms.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_SHAPE
        .as_ref()
        .is_some_and(|re| re.is_match(value.trim()))
}

/// Inputs of the entry form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    YearBorn,
    State,
    Email,
    Phone,
    File,
    AcceptRules,
    AcceptPrivacy,
}

impl Field {
    pub const ALL: [Self; 9] = [
        Self::FirstName,
        Self::LastName,
        Self::YearBorn,
        Self::State,
        Self::Email,
        Self::Phone,
        Self::File,
        Self::AcceptRules,
        Self::AcceptPrivacy,
    ];

    /// DOM id of the matching input.
    #[must_use]
    pub const fn input_id(self) -> &'static str {
        match self {
            Self::FirstName => "first-name",
            Self::LastName => "last-name",
            Self::YearBorn => "year-born",
            Self::State => "state",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::File => "file-upload",
            Self::AcceptRules => "accept-rules",
            Self::AcceptPrivacy => "accept-privacy",
        }
    }
}

/// A single inline validation failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("First name is required")]
    FirstNameRequired,
    #[error("First name must be at least 2 characters")]
    FirstNameTooShort,
    #[error("Last name is required")]
    LastNameRequired,
    #[error("Last name must be at least 2 characters")]
    LastNameTooShort,
    #[error("Year born is required")]
    YearBornRequired,
    #[error("Year born must be a whole number")]
    YearBornNotNumber,
    #[error("Year must be after 1900")]
    YearBornTooEarly,
    #[error("You must be at least 21 years old")]
    TooYoung,
    #[error("State is required")]
    StateRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Phone number is required")]
    PhoneRequired,
    #[error("Please enter a valid 10-digit phone number")]
    PhoneInvalid,
    #[error("File size must be less than 5MB")]
    FileTooLarge,
    #[error("File must be PDF, JPG, or PNG")]
    FileWrongType,
    #[error("You must accept the official rules")]
    RulesNotAccepted,
    #[error("You must accept the privacy policy")]
    PrivacyNotAccepted,
}

/// Metadata of a file picked for upload. The bytes themselves never leave the browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMeta {
    pub name: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub mime: String,
}

impl FileMeta {
    #[must_use]
    pub fn new(name: impl Into<String>, size: u64, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime: mime.into(),
        }
    }

    /// Size is checked before type.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::FileTooLarge`] or [`FieldError::FileWrongType`].
    pub fn validate(&self) -> Result<(), FieldError> {
        if self.size > MAX_UPLOAD_BYTES {
            return Err(FieldError::FileTooLarge);
        }
        if !ACCEPTED_UPLOAD_TYPES.contains(&self.mime.as_str()) {
            return Err(FieldError::FileWrongType);
        }
        Ok(())
    }
}

fn validate_name(
    value: &str,
    required: FieldError,
    too_short: FieldError,
) -> Result<(), FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(required);
    }
    if trimmed.chars().count() < MIN_NAME_CHARS {
        return Err(too_short);
    }
    Ok(())
}

/// # Errors
///
/// Returns an error when the name is blank or shorter than two characters.
pub fn validate_first_name(value: &str) -> Result<(), FieldError> {
    validate_name(
        value,
        FieldError::FirstNameRequired,
        FieldError::FirstNameTooShort,
    )
}

/// # Errors
///
/// Returns an error when the name is blank or shorter than two characters.
pub fn validate_last_name(value: &str) -> Result<(), FieldError> {
    validate_name(
        value,
        FieldError::LastNameRequired,
        FieldError::LastNameTooShort,
    )
}

/// Parse and bound-check a birth year. The upper bound is
/// `current_year - 21`, a year-granular stand-in for the age gate's
/// full birth-date check.
///
/// # Errors
///
/// Returns an error for blank, non-numeric, or out-of-range years.
pub fn validate_year_born(value: &str, current_year: i32) -> Result<i32, FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError::YearBornRequired);
    }
    let year: i32 = trimmed
        .parse()
        .map_err(|_| FieldError::YearBornNotNumber)?;
    if year < MIN_BIRTH_YEAR {
        return Err(FieldError::YearBornTooEarly);
    }
    if year > current_year - LEGAL_AGE {
        return Err(FieldError::TooYoung);
    }
    Ok(year)
}

/// # Errors
///
/// Returns [`FieldError::StateRequired`] when no state is selected.
pub fn validate_state(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        Err(FieldError::StateRequired)
    } else {
        Ok(())
    }
}

/// # Errors
///
/// Returns an error for a blank or malformed address.
pub fn validate_email(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::EmailRequired);
    }
    if !is_valid_email(value) {
        return Err(FieldError::EmailInvalid);
    }
    Ok(())
}

/// # Errors
///
/// Returns an error unless the value holds exactly ten digits.
pub fn validate_phone(value: &str) -> Result<(), FieldError> {
    let digits = phone_digits(value);
    if digits.is_empty() {
        return Err(FieldError::PhoneRequired);
    }
    if digits.len() != PHONE_DIGITS {
        return Err(FieldError::PhoneInvalid);
    }
    Ok(())
}
