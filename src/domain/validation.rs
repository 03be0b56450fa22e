//! Field validation rules shared by the domain entities.
//!
//! All functions here are pure and never touch storage.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use super::order::OrderStatus;
use super::product::Category;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9._%+\-]+@[a-z0-9.\-]+\.[a-z]{2,4}$").expect("Invalid email regex pattern")
});

/// Strips everything that is not an ASCII digit.
pub fn normalize_tax_id(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Validates a CPF (Brazilian tax id) checksum.
///
/// Punctuation is ignored, so `"111.444.777-35"` and `"11144477735"` are
/// equivalent.
pub fn validate_tax_id(raw: &str) -> bool {
    let digits: Vec<u32> = normalize_tax_id(raw)
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect();

    if digits.len() != 11 {
        return false;
    }

    if digits.iter().all(|d| *d == digits[0]) {
        return false;
    }

    check_digit(&digits[..9]) == digits[9] && check_digit(&digits[..10]) == digits[10]
}

/// Weighted mod-11 check digit. Weights run from `len + 1` down to 2.
fn check_digit(digits: &[u32]) -> u32 {
    let top = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .zip((2..=top).rev())
        .map(|(digit, weight)| digit * weight)
        .sum();

    match sum % 11 {
        remainder if remainder < 2 => 0,
        remainder => 11 - remainder,
    }
}

/// Case-sensitive `local@domain.tld` check. Uppercase addresses are rejected.
pub fn validate_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn is_valid_category(category: &str) -> bool {
    Category::from_str(category).is_ok()
}

pub fn is_valid_status(status: &str) -> bool {
    OrderStatus::from_str(status).is_ok()
}
