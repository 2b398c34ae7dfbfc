//! Phone number formatting and detection

use regex::Regex;
use std::sync::LazyLock;

static PHONE_IN_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4})").expect("phone pattern is valid"));

static DIALABLE_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+]?[1-9]\d{0,15}$").expect("digits pattern is valid"));

/// Minimum digit count for a dialable number
pub const MIN_PHONE_DIGITS: usize = 10;

/// Keep only ASCII digits
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Whether the digits of `raw` form a dialable number
pub fn is_valid_phone(raw: &str) -> bool {
    let digits = digits_only(raw);
    DIALABLE_DIGITS.is_match(&digits) && digits.len() >= MIN_PHONE_DIGITS
}

/// Format a ten-digit number as `(XXX) XXX-XXXX`.
///
/// Returns `None` for any other digit count.
pub fn format_phone(raw: &str) -> Option<String> {
    let digits = digits_only(raw);
    if digits.len() != 10 {
        return None;
    }
    Some(format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]))
}

/// Phone numbers appearing in free text, in order of appearance
pub fn find_phone_numbers(text: &str) -> Vec<&str> {
    PHONE_IN_TEXT.find_iter(text).map(|m| m.as_str()).collect()
}

/// Wrap every phone number in `text` with a `tel:` link
pub fn linkify_phone_numbers(text: &str) -> String {
    PHONE_IN_TEXT
        .replace_all(text, r#"<a href="tel:$1" class="auto-phone-link">$1</a>"#)
        .into_owned()
}
