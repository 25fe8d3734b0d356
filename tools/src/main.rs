//! metrics-runner: headless indicator runner for the call-center core.
//!
//! Usage:
//!   metrics-runner --rows calls.json
//!   metrics-runner --rows calls.json --date 2024-01-16 --json
//!   metrics-runner --rows calls.json --config aliases.json

use anyhow::{Context, Result};
use callmetrics_core::{
    resolve_periods, Aggregator, CalculationResult, GeneralIndicators, NormalizerConfig,
    OperatorIndicators, PeriodRange, RowNormalizer, RowRecord,
};
use chrono::NaiveDate;
use std::env;

#[derive(serde::Serialize)]
struct PeriodReport {
    period:    PeriodRange,
    general:   GeneralIndicators,
    operators: Vec<OperatorIndicators>,
}

#[derive(serde::Serialize)]
struct Report {
    date:          NaiveDate,
    rows_total:    usize,
    rows_answered: usize,
    periods:       Vec<PeriodReport>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let rows_path = match find_arg(&args, "--rows") {
        Some(p) => p.to_string(),
        None => {
            eprintln!(
                "Usage: metrics-runner --rows calls.json [--date YYYY-MM-DD] [--config aliases.json] [--json]"
            );
            std::process::exit(2);
        }
    };
    let json_mode = args.iter().any(|a| a == "--json");
    let date = match find_arg(&args, "--date") {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .with_context(|| format!("--date must be YYYY-MM-DD, got {raw:?}"))?,
        None => chrono::Local::now().date_naive(),
    };
    let config = match find_arg(&args, "--config") {
        Some(path) => {
            NormalizerConfig::load(path).with_context(|| format!("loading config {path}"))?
        }
        None => NormalizerConfig::default(),
    };

    let content =
        std::fs::read_to_string(&rows_path).with_context(|| format!("Cannot read {rows_path}"))?;
    let rows: Vec<RowRecord> = serde_json::from_str(&content)
        .with_context(|| format!("{rows_path} is not a JSON array of row objects"))?;

    let normalizer = RowNormalizer::new(&config);
    let records = normalizer.normalize(&rows);
    log::info!("loaded {} rows, {} answered calls", rows.len(), records.len());

    let aggregator = Aggregator::new();
    let report = Report {
        date,
        rows_total: rows.len(),
        rows_answered: records.len(),
        periods: resolve_periods(date)
            .into_iter()
            .map(|period| PeriodReport {
                general:   aggregator.compute_general(&records, &period),
                operators: aggregator.compute_by_operator(&records, &period),
                period,
            })
            .collect(),
    };

    if json_mode {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&report);
    Ok(())
}

fn print_report(report: &Report) {
    println!("callmetrics — metrics-runner");
    println!("  date:     {}", report.date);
    println!("  rows:     {}", report.rows_total);
    println!("  answered: {}", report.rows_answered);

    for entry in &report.periods {
        println!();
        println!(
            "=== {} ({} .. {}) ===",
            entry.period.label, entry.period.start, entry.period.end
        );
        println!("  calls:           {}", entry.general.results.volume.formatted);
        println!(
            "  mean talk time:  {}",
            display(&entry.general.results.mean_talk_time)
        );
        println!(
            "  attendance:      {}",
            display(&entry.general.results.mean_attendance_rating)
        );
        println!(
            "  resolution:      {}",
            display(&entry.general.results.mean_resolution_rating)
        );

        if entry.operators.is_empty() {
            println!("  operators:       (none)");
            continue;
        }
        println!("  operators:");
        for op in &entry.operators {
            println!(
                "    {:<20} {:>6}  {:>8}  {:>4}  {:>4}",
                op.operator_name,
                op.results.volume.formatted,
                op.results.mean_talk_time.formatted,
                op.results.mean_attendance_rating.formatted,
                op.results.mean_resolution_rating.formatted,
            );
        }
    }
}

fn display(result: &CalculationResult) -> String {
    if result.is_valid {
        result.formatted.clone()
    } else {
        format!("{} (no data)", result.formatted)
    }
}

fn find_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2).find(|w| w[0] == flag).map(|w| w[1].as_str())
}
