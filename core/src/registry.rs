//! Engine Registry — one immutable instance of each calculation engine.
//!
//! Built once at startup and shared by reference; the engines hold no
//! mutable state, so a single registry is safe across concurrent callers
//! without locking.

use crate::{
    engine::{CalculationEngine, CalculationResult, EngineKind},
    error::MetricsResult,
    rating_engine::MeanRatingEngine,
    record::CallRecord,
    talk_time_engine::MeanTalkTimeEngine,
    volume_engine::VolumeEngine,
};
use serde::{Deserialize, Serialize};

/// The four indicators over one record set, keyed by field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineOutputs {
    pub volume:                 CalculationResult,
    pub mean_talk_time:         CalculationResult,
    pub mean_attendance_rating: CalculationResult,
    pub mean_resolution_rating: CalculationResult,
}

pub struct EngineRegistry {
    volume:     VolumeEngine,
    talk_time:  MeanTalkTimeEngine,
    attendance: MeanRatingEngine,
    resolution: MeanRatingEngine,
}

impl EngineRegistry {
    pub fn new() -> Self {
        Self {
            volume:     VolumeEngine,
            talk_time:  MeanTalkTimeEngine,
            attendance: MeanRatingEngine::attendance(),
            resolution: MeanRatingEngine::resolution(),
        }
    }

    pub fn get(&self, kind: EngineKind) -> &dyn CalculationEngine {
        match kind {
            EngineKind::Volume => &self.volume,
            EngineKind::MeanTalkTime => &self.talk_time,
            EngineKind::MeanAttendanceRating => &self.attendance,
            EngineKind::MeanResolutionRating => &self.resolution,
        }
    }

    /// String-keyed lookup for callers wired by name (config, CLI).
    /// An unknown name is a caller bug and fails fast.
    pub fn get_by_name(&self, name: &str) -> MetricsResult<&dyn CalculationEngine> {
        let kind: EngineKind = name.parse()?;
        Ok(self.get(kind))
    }

    /// Run all four engines over the same record set.
    pub fn calculate_all(&self, records: &[CallRecord]) -> EngineOutputs {
        EngineOutputs {
            volume:                 self.volume.calculate(records),
            mean_talk_time:         self.talk_time.calculate(records),
            mean_attendance_rating: self.attendance.calculate(records),
            mean_resolution_rating: self.resolution.calculate(records),
        }
    }
}

impl Default for EngineRegistry {
    fn default() -> Self {
        Self::new()
    }
}
