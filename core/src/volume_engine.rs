//! Volume engine — how many answered calls landed in the set.
//!
//! Every `CallRecord` is an answered call by construction, so there is
//! nothing to filter here: the indicator is the plain count.

use crate::{
    engine::{CalculationEngine, CalculationResult, EngineKind},
    record::CallRecord,
};

#[derive(Debug, Default)]
pub struct VolumeEngine;

impl CalculationEngine for VolumeEngine {
    fn kind(&self) -> EngineKind {
        EngineKind::Volume
    }

    fn calculate(&self, records: &[CallRecord]) -> CalculationResult {
        if records.is_empty() {
            return CalculationResult::absent("0", 0, "no calls found");
        }

        let value = records.len() as f64;
        CalculationResult {
            value,
            formatted: self.format(value),
            precision: 0,
            is_valid:  self.validate(value),
            error:     None,
        }
    }

    fn validate(&self, value: f64) -> bool {
        value.is_finite() && value >= 0.0 && value.fract() == 0.0
    }

    fn format(&self, value: f64) -> String {
        if !self.validate(value) {
            return "0".to_string();
        }
        group_thousands(value as u64)
    }
}

/// pt-BR integer display: '.' between thousands groups.
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}
