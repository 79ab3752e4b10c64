//! Client-side field checks for the payment form.

use std::sync::LazyLock;

use regex::Regex;

/// `local@domain.tld`: runs of anything but whitespace and `@`.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Returns true if `email` is shaped like `local@domain.tld`.
///
/// This is a shape check only, not RFC 5322 validation.
pub fn validate_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Returns true if `amount` parses as a finite number strictly above zero.
///
/// Surrounding whitespace is ignored. `inf` and `NaN` are rejected even
/// though `f64::from_str` accepts them.
pub fn validate_amount(amount: &str) -> bool {
    match amount.trim().parse::<f64>() {
        Ok(value) => value.is_finite() && value > 0.0,
        Err(_) => false,
    }
}
