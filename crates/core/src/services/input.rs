//! Coercion and validation of raw form input.
//!
//! The dashboard's forms hand over strings. The lenient helpers mirror how
//! the edit table has always behaved (garbage becomes zero); the strict
//! helpers report a [`CoreError::Validation`] instead.

use crate::errors::CoreError;
use crate::models::inventory::clamp_to_stock;

/// Parse the leading integer of `raw`, the way a browser `parseInt` does:
/// optional whitespace, optional sign, then digits. Trailing text is ignored.
#[must_use]
pub fn leading_integer(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    // Saturate instead of failing on absurdly long digit runs.
    let magnitude = digits[..end]
        .parse::<i64>()
        .unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Lenient stock value: leading integer, clamped to `0..=u32::MAX`,
/// anything unparseable becomes 0.
#[must_use]
pub fn coerce_quantity(raw: &str) -> u32 {
    leading_integer(raw).map(clamp_to_stock).unwrap_or(0)
}

/// Strict stock value: the whole string must be a non-negative integer.
pub fn parse_quantity(raw: &str) -> Result<u32, CoreError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<u32>()
        .map_err(|_| CoreError::Validation(format!("'{trimmed}' is not a valid quantity")))
}

/// Strict quantity for sales and restocks: must be at least 1.
pub fn parse_positive_quantity(raw: &str) -> Result<u32, CoreError> {
    match parse_quantity(raw)? {
        0 => Err(CoreError::Validation("Quantity must be at least 1".into())),
        n => Ok(n),
    }
}

/// Validate a unit price: finite and not negative.
pub fn validate_price(price: f64) -> Result<f64, CoreError> {
    if price.is_finite() && price >= 0.0 {
        Ok(price)
    } else {
        Err(CoreError::Validation(format!(
            "Unit price must be a non-negative number, got {price}"
        )))
    }
}
