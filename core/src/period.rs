//! Period Resolver — turns an injected "today" into the four standard
//! reporting ranges: yesterday, current week, current month, current year.
//!
//! The week runs Monday through Saturday. The desk does not operate on
//! Sundays, so the business window is six days; preserve this even though
//! it looks like an off-by-one.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodKind {
    Yesterday,
    Week,
    Month,
    Year,
}

/// An inclusive day-granularity date range. `start <= end` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodRange {
    pub kind:  PeriodKind,
    pub label: String,
    pub start: NaiveDate,
    pub end:   NaiveDate,
}

impl PeriodRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Resolve the four standard ranges, in fixed order: yesterday, week,
/// month, year. `today` is injected by the caller — the core never reads
/// the wall clock.
pub fn resolve_periods(today: NaiveDate) -> [PeriodRange; 4] {
    let yesterday = today - Days::new(1);

    // Monday of the current week; Sunday counts as six days past Monday.
    let monday = today - Days::new(u64::from(today.weekday().num_days_from_monday()));
    let saturday = monday + Days::new(5);

    let month_start = today.with_day(1).unwrap_or(today);
    let month_end = last_day_of_month(today);

    let year_start = NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today);
    let year_end = NaiveDate::from_ymd_opt(today.year(), 12, 31).unwrap_or(today);

    [
        PeriodRange {
            kind:  PeriodKind::Yesterday,
            label: "Ontem".to_string(),
            start: yesterday,
            end:   yesterday,
        },
        PeriodRange {
            kind:  PeriodKind::Week,
            label: "Semana atual".to_string(),
            start: monday,
            end:   saturday,
        },
        PeriodRange {
            kind:  PeriodKind::Month,
            label: "Mês atual".to_string(),
            start: month_start,
            end:   month_end,
        },
        PeriodRange {
            kind:  PeriodKind::Year,
            label: "Ano atual".to_string(),
            start: year_start,
            end:   year_end,
        },
    ]
}

fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let (next_year, next_month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .map(|first| first - Days::new(1))
        .unwrap_or(date)
}
