//! Check digit calculators for the identifier families.
//!
//! All families use the same weighting: values on odd positions (1-based) are
//! summed as-is, values on even positions are doubled, and the check digit is
//! the distance of that sum to the next multiple of ten.
//!
//! MaLo payloads are ten decimal digits. NeLo, TR and SR payloads are a fixed
//! prefix letter followed by nine characters from `0-9A-Z`; letters enter the
//! sum with their ASCII code minus 48 (`A` = 17 ... `Z` = 42).

use crate::alphabet::Alphabet;
use crate::error::IdError;

/// Number of characters a payload must have before the check digit is appended.
pub const PAYLOAD_LENGTH: usize = 10;

/// Computes the check digit of a MaLo payload (ten decimal digits).
pub fn malo_checksum(payload: &str) -> Result<u8, IdError> {
    const FAMILY: &str = "MaLo";
    check_length(FAMILY, payload)?;
    if !Alphabet::DIGITS.contains_all(payload) {
        return Err(IdError::invalid_payload(
            FAMILY,
            format!("'{payload}' must contain only decimal digits"),
        ));
    }
    Ok(weighted_check_digit(payload.bytes().map(|b| u32::from(b - b'0'))))
}

/// Computes the check digit of a NeLo payload (`E` followed by nine characters).
pub fn nelo_checksum(payload: &str) -> Result<u8, IdError> {
    prefixed_checksum("NeLo", 'E', payload)
}

/// Computes the check digit of a technical resource payload (`D` followed by nine characters).
pub fn tr_checksum(payload: &str) -> Result<u8, IdError> {
    prefixed_checksum("TR", 'D', payload)
}

/// Computes the check digit of a controllable resource payload (`C` followed by nine characters).
pub fn sr_checksum(payload: &str) -> Result<u8, IdError> {
    prefixed_checksum("SR", 'C', payload)
}

fn prefixed_checksum(family: &'static str, prefix: char, payload: &str) -> Result<u8, IdError> {
    check_length(family, payload)?;
    if !payload.starts_with(prefix) {
        return Err(IdError::invalid_payload(
            family,
            format!("'{payload}' must start with '{prefix}'"),
        ));
    }
    if !Alphabet::ALPHANUMERIC.contains_all(payload) {
        return Err(IdError::invalid_payload(
            family,
            format!("'{payload}' must contain only digits and uppercase letters"),
        ));
    }
    Ok(weighted_check_digit(payload.bytes().map(character_value)))
}

fn check_length(family: &'static str, payload: &str) -> Result<(), IdError> {
    if payload.len() != PAYLOAD_LENGTH {
        return Err(IdError::invalid_payload(
            family,
            format!(
                "expected {PAYLOAD_LENGTH} characters, got {}",
                payload.chars().count()
            ),
        ));
    }
    Ok(())
}

/// Digits map to themselves, uppercase letters to their ASCII code minus 48.
fn character_value(b: u8) -> u32 {
    if b.is_ascii_digit() {
        u32::from(b - b'0')
    } else {
        u32::from(b) - 48
    }
}

fn weighted_check_digit(values: impl Iterator<Item = u32>) -> u8 {
    let sum: u32 = values
        .enumerate()
        .map(|(index, value)| if index % 2 == 0 { value } else { 2 * value })
        .sum();
    // sum % 10 < 10, so the result always fits a single digit
    ((10 - sum % 10) % 10) as u8
}
