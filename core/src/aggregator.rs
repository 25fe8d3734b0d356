//! Aggregator — period-scoped overall and per-operator indicators.
//!
//! This component:
//!   1. Filters records to a period at day granularity
//!   2. Runs all four engines over the filtered set (overall)
//!   3. Groups by operator and runs the same engines per group
//!   4. Sorts operator results by descending call volume
//!
//! "No data" is never an error here: an empty period still produces a
//! well-formed result whose nested `CalculationResult`s carry
//! `is_valid == false`, so callers render a uniform empty state.

use crate::{
    period::PeriodRange,
    record::CallRecord,
    registry::{EngineOutputs, EngineRegistry},
};
use serde::{Deserialize, Serialize};
use std::collections::{hash_map::Entry, HashMap};

/// Aggregate indicators for one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralIndicators {
    pub total_calls:             u64,
    pub mean_talk_time_minutes:  f64,
    pub mean_attendance_rating:  f64,
    pub mean_resolution_rating:  f64,
    /// The four full engine results, for display strings and validity
    /// flags. The raw fields above are these results' values.
    pub results:                 EngineOutputs,
}

/// The same indicators scoped to one operator's calls within the period.
/// Built fresh on every aggregation call; never cached by the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatorIndicators {
    pub operator_name:           String,
    pub total_calls:             u64,
    pub mean_talk_time_minutes:  f64,
    pub mean_attendance_rating:  f64,
    pub mean_resolution_rating:  f64,
    pub results:                 EngineOutputs,
}

pub struct Aggregator {
    registry: EngineRegistry,
}

impl Aggregator {
    pub fn new() -> Self {
        Self {
            registry: EngineRegistry::new(),
        }
    }

    /// Inject a registry built elsewhere (shared across aggregators).
    pub fn with_registry(registry: EngineRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &EngineRegistry {
        &self.registry
    }

    /// Overall indicators for the period. An empty filtered set still
    /// runs every engine — each reports its own flagged absence.
    pub fn compute_general(&self, records: &[CallRecord], period: &PeriodRange) -> GeneralIndicators {
        let in_period = filter_by_period(records, period);
        log::debug!(
            "aggregate: {} of {} records in period {}",
            in_period.len(),
            records.len(),
            period.label
        );

        let results = self.registry.calculate_all(&in_period);
        GeneralIndicators {
            total_calls:            results.volume.value as u64,
            mean_talk_time_minutes: results.mean_talk_time.value,
            mean_attendance_rating: results.mean_attendance_rating.value,
            mean_resolution_rating: results.mean_resolution_rating.value,
            results,
        }
    }

    /// Per-operator indicators for the period, sorted by descending call
    /// volume. Records with a blank operator name count for the overall
    /// figures but are excluded from grouping. Groups keep first-seen
    /// order, so equal volumes tie-break by insertion.
    pub fn compute_by_operator(
        &self,
        records: &[CallRecord],
        period: &PeriodRange,
    ) -> Vec<OperatorIndicators> {
        let in_period = filter_by_period(records, period);

        let mut order: Vec<String> = Vec::new();
        let mut groups: HashMap<String, Vec<CallRecord>> = HashMap::new();
        for record in in_period {
            if !record.has_operator() {
                continue;
            }
            match groups.entry(record.operator_name.clone()) {
                Entry::Vacant(slot) => {
                    order.push(record.operator_name.clone());
                    slot.insert(vec![record]);
                }
                Entry::Occupied(mut slot) => slot.get_mut().push(record),
            }
        }

        let mut indicators: Vec<OperatorIndicators> = order
            .into_iter()
            .map(|name| {
                let results = self.registry.calculate_all(&groups[&name]);
                OperatorIndicators {
                    operator_name:          name,
                    total_calls:            results.volume.value as u64,
                    mean_talk_time_minutes: results.mean_talk_time.value,
                    mean_attendance_rating: results.mean_attendance_rating.value,
                    mean_resolution_rating: results.mean_resolution_rating.value,
                    results,
                }
            })
            .collect();

        // Stable sort: equal volumes keep first-seen order.
        indicators.sort_by(|a, b| {
            b.results
                .volume
                .value
                .partial_cmp(&a.results.volume.value)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        indicators
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new()
    }
}

/// Keep the records whose date falls inside the period's inclusive
/// day-granularity bounds. Idempotent: filtering an already-filtered set
/// to the same period returns the same set.
pub fn filter_by_period(records: &[CallRecord], period: &PeriodRange) -> Vec<CallRecord> {
    records
        .iter()
        .filter(|r| period.contains(r.date))
        .cloned()
        .collect()
}
