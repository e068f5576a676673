//! # Argo QC test bitmasks
//!
//! Encoding and decoding of Argo real-time quality-control test outcomes
//! between the compact hexadecimal bitmask used in profile history
//! records and an explicit two-row pass/fail array.
//!
//! ## Design
//!
//! - **Pure transformations** - No I/O, no shared state
//! - **Safe Rust** - `#![forbid(unsafe_code)]`
//! - **Strong types at the edge** - pass/fail tokens are normalized to
//!   [`Outcome`] once, the update state machine never sees raw literals
//!
//! ## API Overview
//!
//! ### Test Registry
//!
//! - [`test_index`] / [`test_number`] - Test number ↔ array column
//! - [`test_description`] - Human-readable test name
//!
//! ### Hex Codec
//!
//! - [`decode_hex`] - Hex code → ascending test numbers
//! - [`encode_hex`] - Array row → hex code
//!
//! ### QC Array
//!
//! - [`build_qc_array`] - Pressure and final QC codes → [`QcArray`]
//! - [`update_safely`] - Record one outcome without overwriting results
//!
//! ### History
//!
//! - [`blank_record`] - Empty [`HistoryRecord`] for a profile
//!
//! ## Usage
//!
//! ```rust
//! use argoqc::{build_qc_array, test_index, update_safely};
//!
//! // test 1 passed, nothing failed yet
//! let mut qc = build_qc_array("0x2", "0x0").unwrap();
//!
//! update_safely(&mut qc, 5, "pass").unwrap();
//! update_safely(&mut qc, 5, "fail").unwrap();
//!
//! let ix = test_index(5).unwrap();
//! assert_eq!((qc[0][ix], qc[1][ix]), (0, 1));
//! assert_eq!(qc.to_hex_pair(), ("0x2".to_string(), "0x20".to_string()));
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

mod array;
mod error;
mod hex;
mod history;
mod outcome;
mod registry;
mod update;

pub use array::{build_qc_array, qc_row, QcArray, FAIL_ROW, PASS_ROW};
pub use error::QcError;
pub use hex::{decode_hex, encode_hex, encode_tests, parse_hex, VALID_TEST_MASK};
pub use history::{blank_record, HistoryRecord};
pub use outcome::{IntoOutcome, Outcome};
pub use registry::{
    test_description, test_index, test_number, NUM_TESTS, TEST_DESCRIPTIONS, TEST_NUMBERS,
};
pub use update::{update_safely, TestState};
