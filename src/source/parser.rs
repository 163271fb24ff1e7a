//! trec_eval report parser
//!
//! Each report line is `measure \t query-id \t value`. The header pass keeps
//! the measure names, the value passes keep the values.

use crate::core::MeasurementRow;

const FIELD_SEPARATOR: char = '\t';
const NAME_FIELD: usize = 0;
const VALUE_FIELD: usize = 2;

/// Field 0 of every line, right-trimmed.
///
/// Every line counts, including the empty one after a final newline, so the
/// header can be one cell longer than the value rows.
pub(crate) fn parse_measure_names(output: &str) -> MeasurementRow {
    output
        .split('\n')
        .map(|line| {
            line.split(FIELD_SEPARATOR)
                .nth(NAME_FIELD)
                .unwrap_or_default()
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Field 2 of every line, right-trimmed. Lines with fewer fields are skipped.
pub(crate) fn parse_measure_values(output: &str) -> MeasurementRow {
    output
        .split('\n')
        .filter_map(|line| line.split(FIELD_SEPARATOR).nth(VALUE_FIELD))
        .map(|value| value.trim_end().to_string())
        .collect()
}
