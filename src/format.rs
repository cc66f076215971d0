//! Number to display text.
//!
//! Whole numbers print as plain integers, ordinary fractions keep ten
//! significant digits, and anything very large or very small falls back
//! to scientific notation. Non-finite values never reach the screen as
//! numbers; they come back as [`CalcError::NonFinite`].

use crate::engine::error::CalcError;

/// Magnitudes at or above this print in scientific notation.
const SCIENTIFIC_ABOVE: f64 = 1e10;

/// Non-zero magnitudes below this print in scientific notation.
const SCIENTIFIC_BELOW: f64 = 1e-8;

/// Mantissa fraction digits for forced scientific notation.
const MANTISSA_DIGITS: usize = 8;

/// Significant digits for everything else.
const SIGNIFICANT_DIGITS: i32 = 10;

/// Format a number for the display.
pub fn format_number(value: f64) -> Result<String, CalcError> {
    if !value.is_finite() {
        return Err(CalcError::NonFinite);
    }

    let magnitude = value.abs();
    if magnitude >= SCIENTIFIC_ABOVE || (value != 0.0 && magnitude < SCIENTIFIC_BELOW) {
        let digits = MANTISSA_DIGITS;
        let text = format!("{value:.digits$e}");
        let (mantissa, exponent) = split_exponent(&text)?;
        return Ok(exponent_form(mantissa, exponent));
    }

    if value.fract() == 0.0 {
        // |value| < 1e10 here, so the cast is exact (and folds -0 into 0)
        return Ok((value as i64).to_string());
    }

    general(value)
}

/// Like [`format_number`], but renders a failure as its error text.
pub fn display_number(value: f64) -> String {
    format_number(value).unwrap_or_else(|e| e.to_string())
}

/// `%g`-style rendering with [`SIGNIFICANT_DIGITS`] digits.
fn general(value: f64) -> Result<String, CalcError> {
    let precision = (SIGNIFICANT_DIGITS - 1) as usize;
    let rounded = format!("{value:.precision$e}");
    let (mantissa, exponent) = split_exponent(&rounded)?;

    if !(-4..SIGNIFICANT_DIGITS).contains(&exponent) {
        return Ok(exponent_form(trim_fraction(mantissa), exponent));
    }

    let decimals = (SIGNIFICANT_DIGITS - 1 - exponent) as usize;
    Ok(trim_fraction(&format!("{value:.decimals$}")).to_string())
}

/// Split Rust's `1.5e-9` form into mantissa and exponent.
fn split_exponent(text: &str) -> Result<(&str, i32), CalcError> {
    let (mantissa, exponent) = text.split_once('e').ok_or(CalcError::NonFinite)?;
    let exponent = exponent.parse().map_err(|_| CalcError::NonFinite)?;
    Ok((mantissa, exponent))
}

/// Signed, at-least-two-digit exponent: `1.5e-09`, `2e+10`.
fn exponent_form(mantissa: &str, exponent: i32) -> String {
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
