use callmetrics_core::aggregator::filter_by_period;
use callmetrics_core::{
    resolve_periods, Aggregator, CallRecord, PeriodKind, PeriodRange, RowNormalizer, RowRecord,
};
use chrono::NaiveDate;
use serde_json::json;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn call(operator: &str, day: NaiveDate, talk_seconds: u32, r1: f64, r2: f64) -> CallRecord {
    CallRecord {
        date:              day,
        operator_name:     operator.to_string(),
        talk_time_seconds: talk_seconds,
        rating_attendance: r1,
        rating_resolution: r2,
        outcome:           "Atendida".to_string(),
    }
}

fn january_2024() -> PeriodRange {
    PeriodRange {
        kind:  PeriodKind::Month,
        label: "Janeiro".to_string(),
        start: date(2024, 1, 1),
        end:   date(2024, 1, 31),
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

/// An empty period still yields a well-formed result: every nested
/// engine result reports value 0 and `is_valid == false`.
#[test]
fn empty_period_yields_all_invalid_results() {
    init_logs();
    let aggregator = Aggregator::new();
    let general = aggregator.compute_general(&[], &january_2024());

    let results = [
        &general.results.volume,
        &general.results.mean_talk_time,
        &general.results.mean_attendance_rating,
        &general.results.mean_resolution_rating,
    ];
    for result in results {
        assert!(!result.is_valid);
        assert_eq!(result.value, 0.0);
        assert!(result.error.is_some(), "absence carries a reason");
    }
    assert_eq!(general.total_calls, 0);
}

/// The end-to-end worked example: one answered row and one missed row,
/// aggregated over a period covering their date.
#[test]
fn general_indicators_from_raw_rows() {
    init_logs();
    let rows: Vec<RowRecord> = vec![
        [
            ("Status".to_string(), json!("Atendida")),
            ("Operador".to_string(), json!("Ana")),
            ("Data".to_string(), json!("15/01/2024")),
            ("Tempo Falado".to_string(), json!("05:30")),
            ("Pergunta 1".to_string(), json!("4")),
            ("Pergunta 2".to_string(), json!("5")),
        ]
        .into_iter()
        .collect(),
        [
            ("Status".to_string(), json!("Perdida")),
            ("Operador".to_string(), json!("Bea")),
            ("Data".to_string(), json!("15/01/2024")),
        ]
        .into_iter()
        .collect(),
    ];

    let records = RowNormalizer::with_defaults().normalize(&rows);
    let general = Aggregator::new().compute_general(&records, &january_2024());

    assert_eq!(general.total_calls, 1, "only the answered row counts");
    assert_eq!(general.results.volume.formatted, "1");
    assert_eq!(general.results.mean_talk_time.formatted, "5:30");
    assert_eq!(general.results.mean_attendance_rating.formatted, "4.0");
    assert_eq!(general.results.mean_resolution_rating.formatted, "5.0");
    assert!(general.results.mean_talk_time.is_valid);
}

/// Records outside the period are invisible to both entry points.
#[test]
fn period_filter_scopes_the_computation() {
    let records = vec![
        call("Ana", date(2024, 1, 10), 60, 4.0, 4.0),
        call("Ana", date(2024, 2, 10), 600, 1.0, 1.0),
    ];
    let general = Aggregator::new().compute_general(&records, &january_2024());

    assert_eq!(general.total_calls, 1);
    assert_eq!(general.results.mean_talk_time.formatted, "1:00");
}

#[test]
fn period_filtering_is_idempotent() {
    let records = vec![
        call("Ana", date(2024, 1, 10), 60, 4.0, 4.0),
        call("Bea", date(2024, 2, 10), 90, 3.0, 3.0),
        call("Carla", date(2024, 1, 31), 0, 0.0, 0.0),
    ];
    let period = january_2024();

    let once = filter_by_period(&records, &period);
    let twice = filter_by_period(&once, &period);
    assert_eq!(once, twice);
}

/// Groups are disjoint by operator and, together, cover exactly the
/// period-filtered records that carry an operator name.
#[test]
fn operator_groups_partition_the_filtered_records() {
    let records = vec![
        call("Ana", date(2024, 1, 10), 60, 4.0, 4.0),
        call("Bea", date(2024, 1, 11), 90, 3.0, 3.0),
        call("Ana", date(2024, 1, 12), 120, 5.0, 5.0),
        call("", date(2024, 1, 13), 30, 2.0, 2.0),
        call("Bea", date(2024, 2, 1), 90, 3.0, 3.0),
    ];
    let by_operator = Aggregator::new().compute_by_operator(&records, &january_2024());

    let mut names: Vec<&str> = by_operator.iter().map(|o| o.operator_name.as_str()).collect();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), by_operator.len(), "one entry per operator");

    let grouped_total: u64 = by_operator.iter().map(|o| o.total_calls).sum();
    // 4 in-period records, one with a blank operator.
    assert_eq!(grouped_total, 3);
}

/// Descending by call volume: the 5-call operator sorts before the
/// 3-call one, and every adjacent pair is non-increasing.
#[test]
fn operators_sort_by_descending_volume() {
    let mut records = Vec::new();
    for day in 10..13 {
        records.push(call("Ana", date(2024, 1, day), 60, 4.0, 4.0));
    }
    for day in 10..15 {
        records.push(call("Bea", date(2024, 1, day), 90, 3.0, 3.0));
    }

    let by_operator = Aggregator::new().compute_by_operator(&records, &january_2024());
    assert_eq!(by_operator[0].operator_name, "Bea");
    assert_eq!(by_operator[0].total_calls, 5);
    assert_eq!(by_operator[1].operator_name, "Ana");
    assert_eq!(by_operator[1].total_calls, 3);

    for pair in by_operator.windows(2) {
        assert!(pair[0].total_calls >= pair[1].total_calls);
    }
}

/// Equal volumes keep first-seen order (stable sort over insertion order).
#[test]
fn equal_volumes_tie_break_by_first_appearance() {
    let records = vec![
        call("Zoe", date(2024, 1, 10), 60, 4.0, 4.0),
        call("Ana", date(2024, 1, 10), 60, 4.0, 4.0),
        call("Zoe", date(2024, 1, 11), 60, 4.0, 4.0),
        call("Ana", date(2024, 1, 11), 60, 4.0, 4.0),
    ];
    let by_operator = Aggregator::new().compute_by_operator(&records, &january_2024());

    assert_eq!(by_operator[0].operator_name, "Zoe");
    assert_eq!(by_operator[1].operator_name, "Ana");
}

/// Each operator's indicators come from that operator's records only.
#[test]
fn per_operator_means_are_scoped_to_the_group() {
    let records = vec![
        call("Ana", date(2024, 1, 10), 120, 5.0, 5.0),
        call("Bea", date(2024, 1, 10), 600, 1.0, 2.0),
    ];
    let by_operator = Aggregator::new().compute_by_operator(&records, &january_2024());

    let ana = by_operator.iter().find(|o| o.operator_name == "Ana").unwrap();
    let bea = by_operator.iter().find(|o| o.operator_name == "Bea").unwrap();
    assert_eq!(ana.results.mean_talk_time.formatted, "2:00");
    assert_eq!(bea.results.mean_talk_time.formatted, "10:00");
    assert_eq!(ana.results.mean_attendance_rating.formatted, "5.0");
    assert_eq!(bea.results.mean_resolution_rating.formatted, "2.0");
}

/// An operator whose calls all lack a talk-time signal still appears,
/// with the talk-time result flagged absent.
#[test]
fn missing_signals_flag_absence_per_group() {
    let records = vec![call("Ana", date(2024, 1, 10), 0, 0.0, 0.0)];
    let by_operator = Aggregator::new().compute_by_operator(&records, &january_2024());

    assert_eq!(by_operator.len(), 1);
    let ana = &by_operator[0];
    assert_eq!(ana.total_calls, 1);
    assert!(ana.results.volume.is_valid);
    assert!(!ana.results.mean_talk_time.is_valid);
    assert_eq!(
        ana.results.mean_talk_time.error.as_deref(),
        Some("no valid time found")
    );
    assert!(!ana.results.mean_attendance_rating.is_valid);
}

/// The resolver's ranges and the aggregator agree on day granularity:
/// a record dated yesterday lands in the yesterday figures.
#[test]
fn resolved_periods_drive_aggregation() {
    let today = date(2024, 1, 16);
    let records = vec![
        call("Ana", date(2024, 1, 15), 330, 4.0, 5.0),
        call("Ana", date(2023, 12, 20), 60, 3.0, 3.0),
    ];
    let aggregator = Aggregator::new();

    let periods = resolve_periods(today);
    let yesterday = aggregator.compute_general(&records, &periods[0]);
    let year = aggregator.compute_general(&records, &periods[3]);

    assert_eq!(yesterday.total_calls, 1);
    assert_eq!(yesterday.results.mean_talk_time.formatted, "5:30");
    assert_eq!(year.total_calls, 1, "last year's call is out of range");
}
