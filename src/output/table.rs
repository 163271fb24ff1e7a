use comfy_table::{
    Cell, CellAlignment, ContentArrangement, Table, modifiers::UTF8_SOLID_INNER_BORDERS,
    presets::UTF8_FULL,
};

use crate::consts::PLACEHOLDER;
use crate::core::TransposedTable;

/// Build the terminal preview: first row as header, measure names left,
/// values right-aligned
pub(crate) fn preview_table(table: &TransposedTable) -> Table {
    let mut out = Table::new();
    out.load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Disabled);

    let mut rows = table.rows.iter();
    if let Some(header) = rows.next() {
        out.set_header(header.iter().map(Cell::new));
    }

    let width = table.rows.iter().map(Vec::len).max().unwrap_or(0);
    for row in rows {
        let mut cells: Vec<Cell> = Vec::with_capacity(width);
        for (i, value) in row.iter().enumerate() {
            let cell = Cell::new(value);
            cells.push(if i == 0 {
                cell
            } else {
                cell.set_alignment(CellAlignment::Right)
            });
        }
        while cells.len() < width {
            cells.push(Cell::new(PLACEHOLDER).set_alignment(CellAlignment::Right));
        }
        out.add_row(cells);
    }

    out
}

pub(crate) fn print_preview(table: &TransposedTable) {
    if table.is_empty() {
        return;
    }
    println!("{}", preview_table(table));
}
