//! Row Normalizer — raw spreadsheet rows → [`CallRecord`].
//!
//! This component:
//!   1. Resolves the header alias table once, at construction
//!   2. Keeps only rows whose outcome matches the answered vocabulary
//!   3. Parses dates (DD/MM/YYYY, ISO fallback), talk times and ratings
//!   4. Absorbs every malformed field at row scope — one bad row never
//!      aborts the batch
//!
//! Pure over its input: no I/O, no clock reads.

use crate::{
    config::{CanonicalField, NormalizerConfig},
    record::{CallRecord, RowRecord},
    types::{Rating, Seconds},
};
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};

pub struct RowNormalizer {
    header_lookup: HashMap<String, CanonicalField>,
    answered:      HashSet<String>,
}

impl RowNormalizer {
    pub fn new(config: &NormalizerConfig) -> Self {
        let mut header_lookup = HashMap::new();
        for alias in &config.aliases {
            for header in &alias.headers {
                header_lookup.insert(match_key(header), alias.field);
            }
        }

        let answered = config
            .answered_outcomes
            .iter()
            .map(|label| match_key(label))
            .collect();

        Self {
            header_lookup,
            answered,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(&NormalizerConfig::default())
    }

    /// Normalize a batch of raw rows. Rows that are not answered calls,
    /// or whose date cannot be parsed, are dropped; everything else is
    /// field-by-field salvaged (absent talk time and ratings become 0).
    pub fn normalize(&self, rows: &[RowRecord]) -> Vec<CallRecord> {
        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            if let Some(record) = self.normalize_row(row) {
                records.push(record);
            }
        }
        log::debug!("normalize: kept {} of {} rows", records.len(), rows.len());
        records
    }

    fn normalize_row(&self, row: &RowRecord) -> Option<CallRecord> {
        let mut cells: HashMap<CanonicalField, String> = HashMap::new();
        for (label, value) in row {
            if let Some(field) = self.header_lookup.get(&match_key(label)) {
                let text = cell_text(value);
                if !text.is_empty() {
                    cells.insert(*field, text);
                }
            }
        }

        // Not an answered call (or no outcome column at all): silent drop.
        let outcome = cells.get(&CanonicalField::Outcome)?;
        if !self.answered.contains(&match_key(outcome)) {
            return None;
        }

        let raw_date = cells
            .get(&CanonicalField::Date)
            .map(String::as_str)
            .unwrap_or("");
        let date = match parse_date(raw_date) {
            Some(d) => d,
            None => {
                // An answered call without a usable date can never match a
                // period, so the record would be invisible to every
                // aggregation anyway.
                log::warn!("normalize: answered row dropped, unusable date {raw_date:?}");
                return None;
            }
        };

        Some(CallRecord {
            date,
            operator_name:     cell(&cells, CanonicalField::Operator).to_string(),
            talk_time_seconds: parse_talk_time(cell(&cells, CanonicalField::TalkTime)),
            rating_attendance: parse_rating(cell(&cells, CanonicalField::RatingAttendance)),
            rating_resolution: parse_rating(cell(&cells, CanonicalField::RatingResolution)),
            outcome:           outcome.clone(),
        })
    }
}

fn cell(cells: &HashMap<CanonicalField, String>, field: CanonicalField) -> &str {
    cells.get(&field).map(String::as_str).unwrap_or("")
}

/// Trimmed, lowercased key used for header and outcome matching.
fn match_key(label: &str) -> String {
    label.trim().to_lowercase()
}

/// Raw cell → text. Numbers are rendered as-is; null, booleans and
/// nested values count as empty cells.
fn cell_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.trim().to_string(),
        serde_json::Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

/// Parse `DD/MM/YYYY` (the PBX export format: day 1–31, month 1–12,
/// year ≥ 2000, calendar-checked), falling back to ISO `YYYY-MM-DD`.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if raw.contains('/') {
        let mut parts = raw.splitn(3, '/');
        let day: u32 = parts.next()?.trim().parse().ok()?;
        let month: u32 = parts.next()?.trim().parse().ok()?;
        let year: i32 = parts.next()?.trim().parse().ok()?;
        if !(1..=31).contains(&day) || !(1..=12).contains(&month) || year < 2000 {
            return None;
        }
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    // ISO fallback; tolerate a trailing time component.
    let date_part = raw.split('T').next().unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Parse `MM:SS` or `HH:MM:SS` into whole seconds. A non-numeric
/// component or a minute/second ≥ 60 yields 0 ("no talk-time signal").
pub fn parse_talk_time(raw: &str) -> Seconds {
    let parts: Vec<&str> = raw.trim().split(':').collect();
    let nums: Option<Vec<Seconds>> = parts
        .iter()
        .map(|p| p.trim().parse::<Seconds>().ok())
        .collect();

    match nums.as_deref() {
        Some([m, s]) if *m < 60 && *s < 60 => m * 60 + s,
        Some([h, m, s]) if *m < 60 && *s < 60 => h * 3600 + m * 60 + s,
        _ => 0,
    }
}

/// Parse a survey rating. Decimal comma is accepted ("4,5"); anything
/// outside [0, 5] is treated as absent, not clamped.
pub fn parse_rating(raw: &str) -> Rating {
    let cleaned = raw.trim().replace(',', ".");
    match cleaned.parse::<f64>() {
        Ok(v) if (0.0..=5.0).contains(&v) => v,
        _ => 0.0,
    }
}
