//! Mean talk-time engine — average conversation length, in minutes.
//!
//! Calls with no talk-time signal (0 seconds) are excluded from the mean
//! but were already counted by the volume engine; when every call lacks
//! the signal, the result is flagged absent rather than reported as a
//! zero-minute average.

use crate::{
    engine::{CalculationEngine, CalculationResult, EngineKind},
    record::CallRecord,
};

const DEFAULT_DISPLAY: &str = "0:00";
const PRECISION: u32 = 2;

#[derive(Debug, Default)]
pub struct MeanTalkTimeEngine;

impl CalculationEngine for MeanTalkTimeEngine {
    fn kind(&self) -> EngineKind {
        EngineKind::MeanTalkTime
    }

    fn calculate(&self, records: &[CallRecord]) -> CalculationResult {
        let seconds: Vec<f64> = records
            .iter()
            .filter(|r| r.talk_time_seconds > 0)
            .map(|r| f64::from(r.talk_time_seconds))
            .collect();

        if seconds.is_empty() {
            return CalculationResult::absent(DEFAULT_DISPLAY, PRECISION, "no valid time found");
        }

        let mean_seconds = seconds.iter().sum::<f64>() / seconds.len() as f64;
        let value = mean_seconds / 60.0;
        CalculationResult {
            value,
            formatted: self.format(value),
            precision: PRECISION,
            is_valid:  self.validate(value),
            error:     None,
        }
    }

    fn validate(&self, value: f64) -> bool {
        value.is_finite() && value > 0.0
    }

    /// Render a minute value as `H:MM:SS` (≥ 60 minutes) or `M:SS`.
    ///
    /// Minutes and seconds are derived from the minute value itself —
    /// whole part for minutes, fractional part for seconds — matching
    /// how the dashboard has always displayed this figure.
    fn format(&self, value: f64) -> String {
        if !value.is_finite() || value < 0.0 {
            return DEFAULT_DISPLAY.to_string();
        }

        let hours = (value / 60.0).floor() as u64;
        let mins = (value % 60.0).floor() as u64;
        let secs = ((value % 1.0) * 60.0).floor() as u64;

        if value >= 60.0 {
            format!("{hours}:{mins:02}:{secs:02}")
        } else {
            format!("{mins}:{secs:02}")
        }
    }
}
