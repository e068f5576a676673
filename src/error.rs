//! Error types for QC bitmask decoding and updates.

use thiserror::Error;

/// Errors that can occur while decoding, encoding or updating QC tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QcError {
    /// Decoding left bits set that belong to no registered test
    #[error("invalid QC bitmask {code:?}: decoding left a non-zero remainder {remainder}")]
    InvalidBitmask { code: String, remainder: String },

    /// Test number (or test index) outside the registry
    #[error("unknown QC test: {0} (valid tests are 1-25 and 57-63)")]
    UnknownTest(u8),

    /// Pass/fail indicator not among the recognized forms
    #[error(
        "outcome {0:?} not recognized, must be one of [p, P, pass, PASS, 1, true] to pass \
         or [f, F, fail, FAIL, 0, false] to fail"
    )]
    InvalidOutcomeToken(String),

    /// String is not a base-16 unsigned integer
    #[error("invalid hex code: {0:?}")]
    InvalidHex(String),
}
