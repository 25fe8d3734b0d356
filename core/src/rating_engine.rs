//! Mean survey-rating engines — one algorithm, two fields.
//!
//! The post-call survey asks two questions (attendance quality,
//! resolution quality), each rated 1–5. Absent answers were normalized
//! to 0 and are excluded from the mean; a set with no answers at all is
//! flagged absent.

use crate::{
    engine::{CalculationEngine, CalculationResult, EngineKind},
    record::CallRecord,
    types::Rating,
};

const DEFAULT_DISPLAY: &str = "0.0";
const PRECISION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingField {
    Attendance,
    Resolution,
}

#[derive(Debug)]
pub struct MeanRatingEngine {
    field: RatingField,
}

impl MeanRatingEngine {
    pub fn attendance() -> Self {
        Self {
            field: RatingField::Attendance,
        }
    }

    pub fn resolution() -> Self {
        Self {
            field: RatingField::Resolution,
        }
    }

    fn rating_of(&self, record: &CallRecord) -> Rating {
        match self.field {
            RatingField::Attendance => record.rating_attendance,
            RatingField::Resolution => record.rating_resolution,
        }
    }

    fn question(&self) -> &'static str {
        match self.field {
            RatingField::Attendance => "attendance",
            RatingField::Resolution => "resolution",
        }
    }
}

impl CalculationEngine for MeanRatingEngine {
    fn kind(&self) -> EngineKind {
        match self.field {
            RatingField::Attendance => EngineKind::MeanAttendanceRating,
            RatingField::Resolution => EngineKind::MeanResolutionRating,
        }
    }

    fn calculate(&self, records: &[CallRecord]) -> CalculationResult {
        let ratings: Vec<Rating> = records
            .iter()
            .map(|r| self.rating_of(r))
            .filter(|&r| r > 0.0)
            .collect();

        if ratings.is_empty() {
            return CalculationResult::absent(
                DEFAULT_DISPLAY,
                PRECISION,
                &format!("no valid {} rating found", self.question()),
            );
        }

        let value = ratings.iter().sum::<f64>() / ratings.len() as f64;
        CalculationResult {
            value,
            formatted: self.format(value),
            precision: PRECISION,
            is_valid:  self.validate(value),
            error:     None,
        }
    }

    fn validate(&self, value: f64) -> bool {
        value.is_finite() && (0.0..=5.0).contains(&value)
    }

    fn format(&self, value: f64) -> String {
        if !self.validate(value) {
            return DEFAULT_DISPLAY.to_string();
        }
        format!("{value:.1}")
    }
}
