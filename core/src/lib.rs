//! callmetrics-core — the metrics calculation and aggregation engine for
//! call-center reporting.
//!
//! PIPELINE (fixed, documented, never reordered):
//!   1. Row Normalizer      — raw spreadsheet rows → CallRecord
//!   2. Period Resolver     — "now" → yesterday / week / month / year
//!   3. Calculation Engines — CallRecord[] → one indicator each
//!   4. Engine Registry     — engine lookup + run-all-four
//!   5. Aggregator          — period filter, overall + per-operator runs
//!
//! RULES:
//!   - The core performs no I/O and never reads the wall clock; callers
//!     inject rows and "now".
//!   - Bad business data is never an error: malformed rows are dropped,
//!     absent measurements come back as `is_valid == false` results.
//!   - Errors are reserved for caller bugs (unknown engine name) and
//!     config loading.

pub mod aggregator;
pub mod config;
pub mod engine;
pub mod error;
pub mod normalizer;
pub mod period;
pub mod rating_engine;
pub mod record;
pub mod registry;
pub mod talk_time_engine;
pub mod types;
pub mod volume_engine;

pub use aggregator::{Aggregator, GeneralIndicators, OperatorIndicators};
pub use config::NormalizerConfig;
pub use engine::{CalculationEngine, CalculationResult, EngineKind};
pub use error::{MetricsError, MetricsResult};
pub use normalizer::RowNormalizer;
pub use period::{resolve_periods, PeriodKind, PeriodRange};
pub use record::{CallRecord, RowRecord};
pub use registry::{EngineOutputs, EngineRegistry};
