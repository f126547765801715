//! Fixed limits shared by the catalog, the entry form and the age gate.

/// Number of promotions revealed per page of the catalog grid.
pub const PAGE_SIZE: usize = 6;

/// Largest accepted proof-of-purchase upload, in bytes (5 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// MIME types accepted for the optional upload.
pub const ACCEPTED_UPLOAD_TYPES: [&str; 4] =
    ["application/pdf", "image/jpeg", "image/jpg", "image/png"];

/// Earliest birth year either form accepts.
pub const MIN_BIRTH_YEAR: i32 = 1900;

/// Legal drinking age enforced by the gate and the entry form.
pub const LEGAL_AGE: i32 = 21;

/// Digits in a normalized US phone number.
pub const PHONE_DIGITS: usize = 10;

/// Minimum number of characters for first and last names.
pub const MIN_NAME_CHARS: usize = 2;

pub const DEFAULT_CAMPAIGN_ID: &str = "PROMO_DEFAULT";
pub const DEFAULT_PROMOTION_TITLE: &str = "Premier Serve 2026 Sweepstakes";

pub const ORIGIN_SOURCE: &str = "website";
pub const ENTRY_MEDIUM: &str = "form_entry";
pub const SUPPORT_CAMPAIGN: &str = "faq_support_form";
pub const ENTRY_COUNTRY: &str = "US";
pub const PLACEHOLDER_IP: &str = "127.0.0.1";
pub const DIRECT_REFERRER: &str = "Direct visit";

pub const GENERIC_ENTRY_ERROR: &str =
    "There was an error submitting your entry. Please try again.";
pub const GENERIC_SUPPORT_ERROR: &str =
    "There was an error submitting your question. Please try again.";
