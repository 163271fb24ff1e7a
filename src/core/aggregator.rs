//! Per-measure averages across periods
//!
//! The first transposed row is labelled with [`AVG_LABEL`]; every other row
//! gets the mean of its value cells appended.

use clap::ValueEnum;
use serde::Deserialize;

use crate::consts::AVG_LABEL;
use crate::core::types::TransposedTable;

/// How non-numeric cells affect a row's average
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum AvgPolicy {
    /// Any non-numeric cell turns the whole average into 0.0 (default)
    #[default]
    Strict,
    /// Ignore non-numeric cells and average the rest
    SkipInvalid,
}

/// Outcome of averaging one row
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum RowAverage {
    Mean(f64),
    /// No value cells to average
    NoValues,
    /// A cell failed to parse under [`AvgPolicy::Strict`]
    DegradedToZero { cell: String },
}

impl RowAverage {
    pub(crate) fn value(&self) -> f64 {
        match self {
            RowAverage::Mean(v) => *v,
            RowAverage::NoValues | RowAverage::DegradedToZero { .. } => 0.0,
        }
    }
}

fn parse_cell(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok()
}

/// Average cells `1..`; cell 0 is the row's measure name.
pub(crate) fn row_average(row: &[String], policy: AvgPolicy) -> RowAverage {
    let mut sum = 0.0;
    let mut count = 0usize;

    for cell in row.iter().skip(1) {
        match parse_cell(cell) {
            Some(v) => {
                sum += v;
                count += 1;
            }
            None => match policy {
                AvgPolicy::Strict => {
                    return RowAverage::DegradedToZero { cell: cell.clone() };
                }
                AvgPolicy::SkipInvalid => {}
            },
        }
    }

    if count == 0 {
        RowAverage::NoValues
    } else {
        RowAverage::Mean(sum / count as f64)
    }
}

/// Render an average the way the report has always shown floats: shortest
/// round-trip digits, integral values keep ".0", exponents carry a sign and at
/// least two digits (`1e-05`, `1e+16`).
pub(crate) fn format_average(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let shortest = format!("{value:?}");
    match shortest.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => shortest,
    }
}

/// Label the first row and append an average to every other row.
///
/// Returns the table together with the measure names whose average fell back
/// to 0.0, so the caller can report them.
pub(crate) fn append_averages(
    mut table: TransposedTable,
    policy: AvgPolicy,
) -> (TransposedTable, Vec<(String, RowAverage)>) {
    let mut degraded = Vec::new();

    let mut rows = table.rows.iter_mut();
    if let Some(first) = rows.next() {
        first.push(AVG_LABEL.to_string());
    }
    for row in rows {
        let avg = row_average(row, policy);
        let cell = format_average(avg.value());
        if !matches!(avg, RowAverage::Mean(_)) {
            let name = row.first().cloned().unwrap_or_default();
            degraded.push((name, avg));
        }
        row.push(cell);
    }

    (table, degraded)
}
