use crate::constants::PHONE_DIGITS;

/// Every ASCII digit in `raw`, in order.
#[must_use]
pub fn phone_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Progressive `(XXX) XXX-XXXX` formatting of whatever has been typed so far.
///
/// Non-digits are dropped and input past ten digits is ignored.
#[must_use]
pub fn format_phone(raw: &str) -> String {
    let digits: String = phone_digits(raw).chars().take(PHONE_DIGITS).collect();
    match digits.len() {
        0 => String::new(),
        1..=3 => format!("({digits}"),
        4..=6 => format!("({}) {}", &digits[..3], &digits[3..]),
        _ => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
    }
}

/// Whether `raw` carries exactly a full phone number's worth of digits.
#[must_use]
pub fn is_complete_phone(raw: &str) -> bool {
    phone_digits(raw).len() == PHONE_DIGITS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_progressively() {
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("5"), "(5");
        assert_eq!(format_phone("555"), "(555");
        assert_eq!(format_phone("5551"), "(555) 1");
        assert_eq!(format_phone("555123"), "(555) 123");
        assert_eq!(format_phone("5551234"), "(555) 123-4");
        assert_eq!(format_phone("5551234567"), "(555) 123-4567");
    }

    #[test]
    fn strips_punctuation_and_caps_length() {
        assert_eq!(format_phone("(555) 123-4567 ext 89"), "(555) 123-4567");
        assert_eq!(format_phone("abc"), "");
        assert_eq!(phone_digits("(555) 123-4567"), "5551234567");
    }

    #[test]
    fn formatting_is_idempotent() {
        let once = format_phone("555.123.4567");
        assert_eq!(format_phone(&once), once);
    }

    #[test]
    fn completeness_requires_exactly_ten_digits() {
        assert!(is_complete_phone("(555) 123-4567"));
        assert!(!is_complete_phone("555123456"));
        assert!(!is_complete_phone("55512345678"));
    }
}
