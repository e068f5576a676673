//! Per-profile QC history record template.

use serde::{Deserialize, Serialize};

/// One QC history entry.
///
/// Serializes as an ordered object `{"PCODE", "CPARM", "Q_PARM"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Free-form identifier, e.g. a profile or cycle code.
    #[serde(rename = "PCODE")]
    pub pcode: String,
    /// QC code (hex) of the tests performed.
    #[serde(rename = "CPARM")]
    pub cparm: String,
    #[serde(rename = "Q_PARM")]
    pub q_parm: String,
}

/// Fresh record for `identifier` with no tests recorded.
pub fn blank_record(identifier: impl Into<String>) -> HistoryRecord {
    HistoryRecord {
        pcode: identifier.into(),
        cparm: "0x0".to_string(),
        q_parm: "0".to_string(),
    }
}
