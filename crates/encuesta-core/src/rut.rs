//! Chilean RUT helpers.
//!
//! Pure string functions — no I/O. The backend stores the formatted form
//! ("12.345.678-5"); these normalize, format, and check the mod-11
//! verifier digit.

use crate::error::CoreError;

/// Strip everything but digits and the verifier letter, uppercased.
/// Truncates to the 9 characters a RUT can carry (8-digit body + verifier).
pub fn clean(raw: &str) -> String {
    let mut cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == 'k' || *c == 'K')
        .map(|c| c.to_ascii_uppercase())
        .collect();
    cleaned.truncate(9);
    cleaned
}

/// Format a cleaned RUT with thousands dots and the verifier dash,
/// e.g. "123456785" -> "12.345.678-5".
pub fn format_rut(raw: &str) -> String {
    let cleaned = clean(raw);
    if cleaned.len() < 2 {
        return cleaned;
    }

    let (body, verifier) = cleaned.split_at(cleaned.len() - 1);
    let mut formatted = String::new();
    for (i, c) in body.chars().enumerate() {
        let remaining = body.len() - i;
        if i > 0 && remaining % 3 == 0 {
            formatted.push('.');
        }
        formatted.push(c);
    }
    format!("{formatted}-{verifier}")
}

/// Compute the mod-11 verifier digit for a RUT body (digits only).
/// Returns '0'–'9' or 'K'; `None` if the body is empty or non-numeric.
pub fn verifier_digit(body: &str) -> Option<char> {
    if body.is_empty() {
        return None;
    }

    let mut sum: u32 = 0;
    let mut factor = 2;
    for c in body.chars().rev() {
        let digit = c.to_digit(10)?;
        sum += digit * factor;
        factor = if factor == 7 { 2 } else { factor + 1 };
    }

    Some(match 11 - (sum % 11) {
        11 => '0',
        10 => 'K',
        d => char::from_digit(d, 10)?,
    })
}

/// Validate a RUT in any formatting and return the canonical form the
/// backend stores ("12.345.678-5").
pub fn parse(raw: &str) -> Result<String, CoreError> {
    if validate(raw) {
        Ok(format_rut(raw))
    } else {
        Err(CoreError::InvalidRut(raw.to_string()))
    }
}

/// Whether a RUT (in any formatting) carries the correct verifier digit.
pub fn validate(raw: &str) -> bool {
    let cleaned = clean(raw);
    if cleaned.len() < 2 {
        return false;
    }
    let (body, verifier) = cleaned.split_at(cleaned.len() - 1);
    verifier_digit(body) == verifier.chars().next()
}
