//! Calculation engine contract and the shared result type.
//!
//! RULE: every indicator is computed by a type implementing
//! [`CalculationEngine`]. Engines are stateless, total functions: they
//! never panic and never error — absence of data comes back as a
//! well-formed result with `is_valid == false`.

use crate::{
    error::MetricsError,
    record::CallRecord,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The output of one engine run. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub value:     f64,
    pub formatted: String,
    pub precision: u32,
    pub is_valid:  bool,
    pub error:     Option<String>,
}

impl CalculationResult {
    pub fn valid(value: f64, formatted: String, precision: u32) -> Self {
        Self {
            value,
            formatted,
            precision,
            is_valid: true,
            error: None,
        }
    }

    /// The flagged-absent outcome: value 0, a human-readable default
    /// display, and a descriptive reason. Callers render this as an
    /// explicit "no data" state, never as a crash.
    pub fn absent(default_display: &str, precision: u32, reason: &str) -> Self {
        Self {
            value:     0.0,
            formatted: default_display.to_string(),
            precision,
            is_valid:  false,
            error:     Some(reason.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineKind {
    Volume,
    MeanTalkTime,
    MeanAttendanceRating,
    MeanResolutionRating,
}

impl EngineKind {
    pub const ALL: [EngineKind; 4] = [
        EngineKind::Volume,
        EngineKind::MeanTalkTime,
        EngineKind::MeanAttendanceRating,
        EngineKind::MeanResolutionRating,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EngineKind::Volume => "volume",
            EngineKind::MeanTalkTime => "mean_talk_time",
            EngineKind::MeanAttendanceRating => "mean_attendance_rating",
            EngineKind::MeanResolutionRating => "mean_resolution_rating",
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EngineKind {
    type Err = MetricsError;

    /// Unknown names are a caller bug, surfaced fast.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EngineKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| MetricsError::UnknownEngine {
                name: s.to_string(),
            })
    }
}

/// The contract every indicator engine fulfills.
pub trait CalculationEngine: Send + Sync {
    fn kind(&self) -> EngineKind;

    /// Compute the indicator over a set of answered calls. Total: never
    /// panics, never errors; an empty or signal-less set yields a
    /// `is_valid == false` result.
    fn calculate(&self, records: &[CallRecord]) -> CalculationResult;

    /// Re-check a previously computed value without recomputation.
    fn validate(&self, value: f64) -> bool;

    /// Re-format a previously computed value without recomputation.
    fn format(&self, value: f64) -> String;
}
