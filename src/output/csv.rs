use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::consts::{CSV_DELIMITER, CSV_QUOTE};
use crate::core::TransposedTable;
use crate::error::AppError;

/// Write `table` as `;`-separated, `\r\n`-terminated rows, quoting with `|`
/// only where needed.
///
/// Rows are written as they are; a row may be longer than its neighbours.
pub(crate) fn write_table<W: Write>(table: &TransposedTable, sink: W) -> csv::Result<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(CSV_DELIMITER)
        .quote(CSV_QUOTE)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::CRLF)
        .flexible(true)
        .from_writer(sink);

    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Create (or overwrite) `path` and write `table` into it
pub(crate) fn write_csv_file(table: &TransposedTable, path: &Path) -> Result<(), AppError> {
    let file = File::create(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_table(table, file).map_err(|source| AppError::Csv {
        path: path.to_path_buf(),
        source,
    })
}
