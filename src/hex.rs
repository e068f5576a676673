//! Hexadecimal QC code decoding and encoding.
//!
//! A QC code is a 64-bit bitmask written in base 16: bit `n` set means
//! test number `n` recorded an outcome. Only the 32 registered positions
//! may be set.
//!
//! ## Bit Numbering
//! - Bit n = value 2ⁿ = test number n
//! - Bits 1-25 and 57-63 are valid; bit 0 and bits 26-56 never are

use crate::error::QcError;
use crate::registry::{NUM_TESTS, TEST_NUMBERS};
use tracing::debug;

/// Bitmask with every registered test position set.
pub const VALID_TEST_MASK: u64 = {
    let mut mask = 0u64;
    let mut i = 0;
    while i < NUM_TESTS {
        mask |= 1u64 << TEST_NUMBERS[i];
        i += 1;
    }
    mask
};

/// Parse a hex code into its numeric value.
///
/// Surrounding whitespace is ignored, an empty code means 0, and both a
/// leading `+` and the `0x`/`0X` prefix are optional.
///
/// # Errors
/// - [`QcError::InvalidHex`] if `code` is not a base-16 integer
/// - [`QcError::InvalidBitmask`] if it is, but sets bits above 63
pub fn parse_hex(code: &str) -> Result<u64, QcError> {
    let trimmed = code.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }

    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
        .unwrap_or(unsigned);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(QcError::InvalidHex(code.to_string()));
    }

    // more than 16 significant digits: bits past 63, none of them a test
    let significant = digits.trim_start_matches('0');
    if significant.len() > 16 {
        let (high, low) = significant.split_at(significant.len() - 16);
        let low =
            u64::from_str_radix(low, 16).map_err(|_| QcError::InvalidHex(code.to_string()))?;
        return Err(QcError::InvalidBitmask {
            code: code.to_string(),
            remainder: format!(
                "0x{}{:016x}",
                high.to_ascii_lowercase(),
                low & !VALID_TEST_MASK
            ),
        });
    }

    u64::from_str_radix(digits, 16).map_err(|_| QcError::InvalidHex(code.to_string()))
}

/// Decode a hex code into the ascending list of test numbers it flags.
///
/// # Errors
/// - [`QcError::InvalidHex`] if `code` is not a base-16 integer
/// - [`QcError::InvalidBitmask`] if any bit outside the registry is set,
///   including bits past 63
pub fn decode_hex(code: &str) -> Result<Vec<u8>, QcError> {
    let value = parse_hex(code)?;

    let remainder = value & !VALID_TEST_MASK;
    if remainder != 0 {
        return Err(QcError::InvalidBitmask {
            code: code.to_string(),
            remainder: format!("{remainder:#x}"),
        });
    }

    let tests: Vec<u8> = TEST_NUMBERS
        .iter()
        .copied()
        .filter(|&n| (value >> n) & 1 == 1)
        .collect();

    debug!(code, ?tests, "decoded QC code");
    Ok(tests)
}

/// Encode one QC array row back into a hex code.
///
/// Column `i` of `row` maps to `TEST_NUMBERS[i]`; only cells equal to 1
/// contribute. Output uses the lowercase `0x` form accepted by
/// [`decode_hex`].
pub fn encode_hex(row: &[u8; NUM_TESTS]) -> String {
    let value = row
        .iter()
        .zip(TEST_NUMBERS)
        .filter(|&(&cell, _)| cell == 1)
        .fold(0u64, |acc, (_, test)| acc | (1u64 << test));

    format!("{value:#x}")
}

/// Encode a set of test numbers directly into a hex code.
///
/// # Errors
/// [`QcError::UnknownTest`] if any entry is not a registered test.
pub fn encode_tests(tests: &[u8]) -> Result<String, QcError> {
    let mut row = [0u8; NUM_TESTS];
    for &test in tests {
        row[crate::registry::test_index(test)?] = 1;
    }
    Ok(encode_hex(&row))
}
