use crate::consts::PLACEHOLDER;
use crate::core::types::{ResultTable, TransposedTable};

/// Turn rows into columns, padding short rows with [`PLACEHOLDER`].
///
/// The output has `max(row length)` rows, each as long as the input has rows.
/// Ragged input is expected and never dropped.
pub(crate) fn transpose(table: ResultTable) -> TransposedTable {
    let rows = table.rows();
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);

    let columns = (0..width)
        .map(|i| {
            rows.iter()
                .map(|row| row.get(i).map_or(PLACEHOLDER, String::as_str).to_string())
                .collect()
        })
        .collect();

    TransposedTable { rows: columns }
}
