//! Pass/fail outcome of a single QC test.
//!
//! Callers hand outcomes over in several literal forms (letters, words,
//! `1`/`0`, booleans). They are normalized once here; everything past this
//! module only sees [`Outcome`].

use crate::error::QcError;
use std::fmt;
use std::str::FromStr;

/// Result of one QC test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Pass,
    Fail,
}

impl Outcome {
    /// Row of a [`QcArray`](crate::QcArray) this outcome is recorded in.
    pub const fn row(self) -> usize {
        match self {
            Self::Pass => 0,
            Self::Fail => 1,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass => write!(f, "pass"),
            Self::Fail => write!(f, "fail"),
        }
    }
}

impl FromStr for Outcome {
    type Err = QcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "p" | "P" | "pass" | "PASS" | "1" | "true" | "True" => Ok(Self::Pass),
            "f" | "F" | "fail" | "FAIL" | "0" | "false" | "False" => Ok(Self::Fail),
            _ => Err(QcError::InvalidOutcomeToken(s.to_string())),
        }
    }
}

impl From<bool> for Outcome {
    fn from(passed: bool) -> Self {
        if passed {
            Self::Pass
        } else {
            Self::Fail
        }
    }
}

impl TryFrom<i64> for Outcome {
    type Error = QcError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Pass),
            0 => Ok(Self::Fail),
            _ => Err(QcError::InvalidOutcomeToken(value.to_string())),
        }
    }
}

/// Anything that can be normalized into an [`Outcome`].
pub trait IntoOutcome {
    fn into_outcome(self) -> Result<Outcome, QcError>;
}

impl IntoOutcome for Outcome {
    fn into_outcome(self) -> Result<Outcome, QcError> {
        Ok(self)
    }
}

impl IntoOutcome for bool {
    fn into_outcome(self) -> Result<Outcome, QcError> {
        Ok(Outcome::from(self))
    }
}

impl IntoOutcome for i64 {
    fn into_outcome(self) -> Result<Outcome, QcError> {
        Outcome::try_from(self)
    }
}

impl IntoOutcome for i32 {
    fn into_outcome(self) -> Result<Outcome, QcError> {
        Outcome::try_from(i64::from(self))
    }
}

impl IntoOutcome for &str {
    fn into_outcome(self) -> Result<Outcome, QcError> {
        self.parse()
    }
}

impl IntoOutcome for &String {
    fn into_outcome(self) -> Result<Outcome, QcError> {
        self.parse()
    }
}

impl IntoOutcome for String {
    fn into_outcome(self) -> Result<Outcome, QcError> {
        self.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_forms() {
        for token in ["p", "P", "pass", "PASS", "1", "true", "True"] {
            assert_eq!(token.parse::<Outcome>(), Ok(Outcome::Pass), "{token}");
        }
        assert_eq!(true.into_outcome(), Ok(Outcome::Pass));
        assert_eq!(1i64.into_outcome(), Ok(Outcome::Pass));
        assert_eq!(1i32.into_outcome(), Ok(Outcome::Pass));
    }

    #[test]
    fn test_fail_forms() {
        for token in ["f", "F", "fail", "FAIL", "0", "false", "False"] {
            assert_eq!(token.parse::<Outcome>(), Ok(Outcome::Fail), "{token}");
        }
        assert_eq!(false.into_outcome(), Ok(Outcome::Fail));
        assert_eq!(0i64.into_outcome(), Ok(Outcome::Fail));
        assert_eq!(String::from("fail").into_outcome(), Ok(Outcome::Fail));
    }

    #[test]
    fn test_unrecognized_tokens() {
        for token in ["maybe", "", "Pass", " p", "yes"] {
            assert_eq!(
                token.parse::<Outcome>(),
                Err(QcError::InvalidOutcomeToken(token.to_string()))
            );
        }
        assert_eq!(
            2i64.into_outcome(),
            Err(QcError::InvalidOutcomeToken("2".to_string()))
        );
        assert!((-1i32).into_outcome().is_err());
    }

    #[test]
    fn test_row_and_display() {
        assert_eq!(Outcome::Pass.row(), 0);
        assert_eq!(Outcome::Fail.row(), 1);
        assert_eq!(Outcome::Fail.to_string(), "fail");
    }
}
