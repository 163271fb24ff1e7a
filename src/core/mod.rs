//! Core module - table model and the pure pipeline stages

mod aggregator;
mod period;
mod transpose;
mod types;

pub(crate) use aggregator::{AvgPolicy, RowAverage, append_averages};
pub(crate) use period::Period;
pub(crate) use transpose::transpose;
pub(crate) use types::{MeasurementRow, ResultTable, TransposedTable};
