//! Two-row pass/fail QC array.
//!
//! Row 0 flags passed tests, row 1 failed tests; column `i` belongs to
//! `TEST_NUMBERS[i]`. The array is built from a pair of hex codes
//! (pressure QC code, final QC code) and turned back into codes with
//! [`QcArray::to_hex_pair`].

use crate::error::QcError;
use crate::hex::{decode_hex, encode_hex};
use crate::registry::{test_index, NUM_TESTS, TEST_NUMBERS};
use crate::update::TestState;
use std::ops::{Index, IndexMut};
use tracing::warn;

/// Row index of passed tests.
pub const PASS_ROW: usize = 0;
/// Row index of failed tests.
pub const FAIL_ROW: usize = 1;

/// 2x32 grid of 0/1 cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct QcArray {
    rows: [[u8; NUM_TESTS]; 2],
}

impl QcArray {
    /// All-zero array: no test recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap existing rows.
    pub fn from_rows(pass: [u8; NUM_TESTS], fail: [u8; NUM_TESTS]) -> Self {
        Self { rows: [pass, fail] }
    }

    pub fn pass_row(&self) -> &[u8; NUM_TESTS] {
        &self.rows[PASS_ROW]
    }

    pub fn fail_row(&self) -> &[u8; NUM_TESTS] {
        &self.rows[FAIL_ROW]
    }

    pub fn rows(&self) -> &[[u8; NUM_TESTS]; 2] {
        &self.rows
    }

    /// Current state of `test`.
    ///
    /// A column with both cells set (only possible from raw decoded input)
    /// reports [`TestState::Fail`], matching how updates treat it.
    pub fn state(&self, test: u8) -> Result<TestState, QcError> {
        let ix = test_index(test)?;
        Ok(TestState::from_cells(
            self.rows[PASS_ROW][ix],
            self.rows[FAIL_ROW][ix],
        ))
    }

    /// Encode both rows as `(pressure_code, final_code)`.
    pub fn to_hex_pair(&self) -> (String, String) {
        (
            encode_hex(&self.rows[PASS_ROW]),
            encode_hex(&self.rows[FAIL_ROW]),
        )
    }

    /// Test numbers whose pass and fail cells are both set.
    pub fn conflicts(&self) -> Vec<u8> {
        TEST_NUMBERS
            .iter()
            .enumerate()
            .filter(|&(ix, _)| self.rows[PASS_ROW][ix] == 1 && self.rows[FAIL_ROW][ix] == 1)
            .map(|(_, &t)| t)
            .collect()
    }
}

impl Index<usize> for QcArray {
    type Output = [u8; NUM_TESTS];

    fn index(&self, row: usize) -> &Self::Output {
        &self.rows[row]
    }
}

impl IndexMut<usize> for QcArray {
    fn index_mut(&mut self, row: usize) -> &mut Self::Output {
        &mut self.rows[row]
    }
}

/// Decode one hex code into a single 32-column row.
pub fn qc_row(code: &str) -> Result<[u8; NUM_TESTS], QcError> {
    let mut row = [0u8; NUM_TESTS];
    for test in decode_hex(code)? {
        row[test_index(test)?] = 1;
    }
    Ok(row)
}

/// Build a QC array from a pressure QC code (row 0) and a final QC code
/// (row 1).
///
/// The two codes are decoded independently. A test present in both is
/// kept as-is; the conflict is logged, not rejected.
///
/// # Errors
/// Propagates [`QcError::InvalidHex`] and [`QcError::InvalidBitmask`]
/// from either code.
pub fn build_qc_array(pressure_code: &str, final_code: &str) -> Result<QcArray, QcError> {
    let qc = QcArray::from_rows(qc_row(pressure_code)?, qc_row(final_code)?);

    let conflicts = qc.conflicts();
    if !conflicts.is_empty() {
        warn!(
            pressure_code,
            final_code,
            ?conflicts,
            "QC codes mark the same tests as both passed and failed"
        );
    }

    Ok(qc)
}
