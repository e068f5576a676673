//! Registry of the 32 Argo real-time QC tests.
//!
//! Test numbers 1-25 are the core RTQC tests, 57-63 the BGC parameter
//! specific ones. The registry order (ascending) fixes each test's column
//! in a [`QcArray`](crate::QcArray).

use crate::error::QcError;

/// Number of registered QC tests (columns of a QC array).
pub const NUM_TESTS: usize = 32;

/// Registered test numbers in canonical ascending order.
pub const TEST_NUMBERS: [u8; NUM_TESTS] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 57,
    58, 59, 60, 61, 62, 63,
];

/// Human-readable test descriptions, aligned with [`TEST_NUMBERS`].
pub const TEST_DESCRIPTIONS: [&str; NUM_TESTS] = [
    "1. Platform Identification test",
    "2. Impossible Date test",
    "3. Impossible Location test",
    "4. Position on Land test",
    "5. Impossible Speed test",
    "6. Global Range test",
    "7. Regional Global Parameter test",
    "8. Pressure Increasing test",
    "9. Spike test",
    "10. Top and Bottom Spike test (obsolete)",
    "11. Gradient test",
    "12. Digit Rollover test",
    "13. Stuck Value test",
    "14. Density Inversion test",
    "15. Grey List test",
    "16. Gross Salinity or Temperature Sensor Drift test",
    "17. Visual QC test",
    "18. Frozen profile test",
    "19. Deepest pressure test",
    "20. Questionable Argos position test",
    "21. Near-surface unpumped CTD salinity test",
    "22. Near-surface mixed air/water test",
    "23. RTQC flag scheme for Deep SBE CTD data > 2000 dbar",
    "24. RTQC flag scheme for RBRargo3|2K CTD data (< 2000 dbar)",
    "25. MEDD test",
    "57. DOXY specific test",
    "58. CDOM specific test",
    "59. NITRATE specific test",
    "60. PAR specific test",
    "61. IRRADIANCE specific test",
    "62. BBP specific tests",
    "63. CHLA specific tests",
];

/// Column of `test` in the canonical ordering.
///
/// # Errors
/// [`QcError::UnknownTest`] if `test` is not one of 1-25 or 57-63.
pub fn test_index(test: u8) -> Result<usize, QcError> {
    TEST_NUMBERS
        .iter()
        .position(|&t| t == test)
        .ok_or(QcError::UnknownTest(test))
}

/// Test number stored at column `index`.
///
/// # Errors
/// [`QcError::UnknownTest`] if `index` is 32 or more.
pub fn test_number(index: usize) -> Result<u8, QcError> {
    TEST_NUMBERS
        .get(index)
        .copied()
        .ok_or(QcError::UnknownTest(u8::try_from(index).unwrap_or(u8::MAX)))
}

/// Description of `test`, e.g. `"9. Spike test"`.
pub fn test_description(test: u8) -> Result<&'static str, QcError> {
    test_index(test).map(|ix| TEST_DESCRIPTIONS[ix])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_block_boundaries() {
        assert_eq!(test_index(1), Ok(0));
        assert_eq!(test_index(25), Ok(24));
        assert_eq!(test_index(57), Ok(25));
        assert_eq!(test_index(63), Ok(31));
    }

    #[test]
    fn test_index_rejects_gap_and_out_of_range() {
        assert_eq!(test_index(0), Err(QcError::UnknownTest(0)));
        assert_eq!(test_index(26), Err(QcError::UnknownTest(26)));
        assert_eq!(test_index(56), Err(QcError::UnknownTest(56)));
        assert_eq!(test_index(64), Err(QcError::UnknownTest(64)));
    }

    #[test]
    fn test_number_inverts_index() {
        for (ix, &t) in TEST_NUMBERS.iter().enumerate() {
            assert_eq!(test_index(t), Ok(ix));
            assert_eq!(test_number(ix), Ok(t));
        }
        assert!(test_number(NUM_TESTS).is_err());
    }

    #[test]
    fn test_descriptions_are_aligned() {
        for &t in &TEST_NUMBERS {
            let desc = test_description(t).unwrap();
            assert!(desc.starts_with(&format!("{t}. ")), "{desc}");
        }
        assert!(test_description(30).is_err());
    }

    #[test]
    fn test_registry_is_strictly_ascending() {
        assert!(TEST_NUMBERS.windows(2).all(|w| w[0] < w[1]));
    }
}
