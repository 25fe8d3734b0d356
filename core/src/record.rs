//! Row and record types — the input and output of normalization.

use crate::types::{Rating, Seconds};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One raw spreadsheet row: column label → raw cell value.
/// Cells arrive as strings, numbers, or empty/null; labels are matched
/// case-insensitively against the alias table in [`crate::config`].
pub type RowRecord = HashMap<String, serde_json::Value>;

/// One answered call, fully normalized.
///
/// Invariant: a `CallRecord` only exists for a row whose outcome matched
/// the answered vocabulary. Downstream engines never re-check outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallRecord {
    pub date:              NaiveDate,
    /// Operator display name. Empty string means the row carried no
    /// operator — the record still counts for volume but is excluded
    /// from per-operator grouping.
    pub operator_name:     String,
    /// Zero means "no talk-time signal": counted for volume, excluded
    /// from the talk-time mean.
    pub talk_time_seconds: Seconds,
    /// First survey question (attendance quality). 0 = absent, else (0, 5].
    pub rating_attendance: Rating,
    /// Second survey question (resolution quality). 0 = absent, else (0, 5].
    pub rating_resolution: Rating,
    /// The raw outcome label as it appeared in the sheet. Informational;
    /// inclusion was already decided during normalization.
    pub outcome:           String,
}

impl CallRecord {
    pub fn has_operator(&self) -> bool {
        !self.operator_name.is_empty()
    }
}
