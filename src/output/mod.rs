mod csv;
mod table;

pub(crate) use self::csv::write_csv_file;
pub(crate) use table::print_preview;
