//! Guarded pass/fail updates of a QC array.
//!
//! Each test column moves through three states:
//!
//! | from \ request | pass  | fail  |
//! |----------------|-------|-------|
//! | unset          | pass  | fail  |
//! | pass           | pass  | fail  |
//! | fail           | fail  | fail  |
//!
//! Pass to fail is the only transition that clears a set cell. Nothing
//! ever moves a test back out of `fail`.

use crate::array::{QcArray, FAIL_ROW, PASS_ROW};
use crate::error::QcError;
use crate::outcome::{IntoOutcome, Outcome};
use crate::registry::test_index;
use tracing::{debug, trace};

/// State of one test column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TestState {
    Unset,
    Pass,
    Fail,
}

impl TestState {
    /// State encoded by a `(pass, fail)` cell pair.
    pub(crate) fn from_cells(pass: u8, fail: u8) -> Self {
        match (pass, fail) {
            (0, 0) => Self::Unset,
            (_, 0) => Self::Pass,
            _ => Self::Fail,
        }
    }

    /// State after applying `outcome`.
    pub fn next(self, outcome: Outcome) -> Self {
        match (self, outcome) {
            (Self::Unset | Self::Pass, Outcome::Pass) => Self::Pass,
            _ => Self::Fail,
        }
    }
}

impl From<Outcome> for TestState {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Pass => Self::Pass,
            Outcome::Fail => Self::Fail,
        }
    }
}

impl QcArray {
    /// Apply `outcome` to `test` following the transition table above.
    ///
    /// A request is written only when the column lands in the requested
    /// state; the requested row is set and the other row cleared.
    /// Returns true if the array changed.
    pub fn apply(&mut self, test: u8, outcome: Outcome) -> Result<bool, QcError> {
        let ix = test_index(test)?;
        let current = [self[PASS_ROW][ix], self[FAIL_ROW][ix]];
        let from = TestState::from_cells(current[PASS_ROW], current[FAIL_ROW]);

        let mut target = [0u8; 2];
        target[outcome.row()] = 1;

        if from.next(outcome) != TestState::from(outcome) || current == target {
            trace!(test, %outcome, ?from, "QC update ignored");
            return Ok(false);
        }

        self[PASS_ROW][ix] = target[PASS_ROW];
        self[FAIL_ROW][ix] = target[FAIL_ROW];

        debug!(test, %outcome, ?from, "QC test updated");
        Ok(true)
    }
}

/// Record `outcome` for `test` in `qc` without overwriting prior results.
///
/// `outcome` may be an [`Outcome`], a `bool`, `1`/`0`, or one of the
/// accepted letter/word tokens (`"p"`, `"pass"`, `"F"`, ...).
///
/// # Errors
/// - [`QcError::InvalidOutcomeToken`] if `outcome` is not recognized
/// - [`QcError::UnknownTest`] if `test` is not registered
pub fn update_safely<O: IntoOutcome>(
    qc: &mut QcArray,
    test: u8,
    outcome: O,
) -> Result<(), QcError> {
    let outcome = outcome.into_outcome()?;
    qc.apply(test, outcome).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(qc: &QcArray, test: u8) -> (u8, u8) {
        let ix = test_index(test).unwrap();
        (qc[PASS_ROW][ix], qc[FAIL_ROW][ix])
    }

    #[test]
    fn test_unset_to_pass() {
        let mut qc = QcArray::new();
        update_safely(&mut qc, 5, "pass").unwrap();
        assert_eq!(cells(&qc, 5), (1, 0));
    }

    #[test]
    fn test_unset_to_fail() {
        let mut qc = QcArray::new();
        update_safely(&mut qc, 5, "F").unwrap();
        assert_eq!(cells(&qc, 5), (0, 1));
    }

    #[test]
    fn test_pass_is_idempotent() {
        let mut qc = QcArray::new();
        update_safely(&mut qc, 5, "pass").unwrap();
        let snapshot = qc;
        assert_eq!(qc.apply(5, Outcome::Pass), Ok(false));
        assert_eq!(qc, snapshot);
    }

    #[test]
    fn test_pass_overridden_by_fail() {
        let mut qc = QcArray::new();
        update_safely(&mut qc, 5, true).unwrap();
        update_safely(&mut qc, 5, 0i64).unwrap();
        assert_eq!(cells(&qc, 5), (0, 1));
    }

    #[test]
    fn test_fail_is_terminal() {
        let mut qc = QcArray::new();
        update_safely(&mut qc, 5, "fail").unwrap();
        let snapshot = qc;
        assert_eq!(qc.apply(5, Outcome::Pass), Ok(false));
        assert_eq!(qc.apply(5, Outcome::Fail), Ok(false));
        assert_eq!(qc, snapshot);
    }

    #[test]
    fn test_other_columns_untouched() {
        let mut qc = QcArray::new();
        update_safely(&mut qc, 63, "p").unwrap();
        assert_eq!(qc.pass_row().iter().filter(|&&c| c == 1).count(), 1);
        assert_eq!(qc.fail_row(), QcArray::new().fail_row());
    }

    #[test]
    fn test_invalid_token_leaves_array() {
        let mut qc = QcArray::new();
        assert_eq!(
            update_safely(&mut qc, 5, "maybe"),
            Err(QcError::InvalidOutcomeToken("maybe".to_string()))
        );
        assert_eq!(qc, QcArray::new());
    }

    #[test]
    fn test_unknown_test() {
        let mut qc = QcArray::new();
        assert_eq!(
            update_safely(&mut qc, 26, Outcome::Pass),
            Err(QcError::UnknownTest(26))
        );
    }

    #[test]
    fn test_conflicting_column_resolves_to_fail() {
        let mut qc = QcArray::new();
        qc[PASS_ROW][0] = 1;
        qc[FAIL_ROW][0] = 1;
        assert_eq!(qc.apply(1, Outcome::Fail), Ok(true));
        assert_eq!(cells(&qc, 1), (0, 1));
    }

    #[test]
    fn test_conflicting_column_ignores_pass() {
        let mut qc = QcArray::new();
        qc[PASS_ROW][0] = 1;
        qc[FAIL_ROW][0] = 1;
        assert_eq!(qc.apply(1, Outcome::Pass), Ok(false));
        assert_eq!(cells(&qc, 1), (1, 1));
    }

    #[test]
    fn test_next_follows_table() {
        assert_eq!(TestState::Unset.next(Outcome::Pass), TestState::Pass);
        assert_eq!(TestState::Unset.next(Outcome::Fail), TestState::Fail);
        assert_eq!(TestState::Pass.next(Outcome::Pass), TestState::Pass);
        assert_eq!(TestState::Pass.next(Outcome::Fail), TestState::Fail);
        assert_eq!(TestState::Fail.next(Outcome::Pass), TestState::Fail);
        assert_eq!(TestState::Fail.next(Outcome::Fail), TestState::Fail);
    }

    #[test]
    fn test_state_machine_matches_array() {
        let states = [TestState::Unset, TestState::Pass, TestState::Fail];
        for start in states {
            for outcome in [Outcome::Pass, Outcome::Fail] {
                let mut qc = QcArray::new();
                match start {
                    TestState::Unset => {}
                    TestState::Pass => qc[PASS_ROW][4] = 1,
                    TestState::Fail => qc[FAIL_ROW][4] = 1,
                }
                qc.apply(5, outcome).unwrap();
                assert_eq!(qc.state(5), Ok(start.next(outcome)), "{start:?} + {outcome}");
            }
        }
    }
}
