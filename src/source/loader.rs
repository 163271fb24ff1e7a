//! Result table assembly: one header pass, then one pass per period

use rayon::prelude::*;
use std::time::Instant;
use tracing::{debug, info};

use crate::core::{MeasurementRow, Period, ResultTable};
use crate::error::EvalError;
use crate::source::Evaluator;
use crate::source::parser::{parse_measure_names, parse_measure_values};

fn measure_names(evaluator: &dyn Evaluator) -> Result<MeasurementRow, EvalError> {
    info!("Reading measurements from {}", Period::HEADER.name());
    let output = evaluator.evaluate(&Period::HEADER.qrels_path(), &Period::HEADER.run_path())?;
    Ok(parse_measure_names(&output))
}

fn measure_period(evaluator: &dyn Evaluator, period: Period) -> Result<MeasurementRow, EvalError> {
    info!("Calling {} for {}", evaluator.name(), period.name());
    let start = Instant::now();
    let output = evaluator.evaluate(&period.qrels_path(), &period.run_path())?;
    let row = parse_measure_values(&output);
    debug!(
        "{}: {} values ({:.2}ms)",
        period.name(),
        row.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );
    Ok(row)
}

/// Fill `table` with the header row (if it has none yet) and one row per
/// period in calendar order.
///
/// With `parallel` the twelve period passes run concurrently; rows are still
/// appended in calendar order. The first failing pass aborts the load.
pub(crate) fn load_result_table(
    mut table: ResultTable,
    evaluator: &dyn Evaluator,
    parallel: bool,
) -> Result<ResultTable, EvalError> {
    if table.is_empty() {
        table.push(measure_names(evaluator)?);
    }

    let start = Instant::now();
    let rows: Vec<MeasurementRow> = if parallel {
        Period::ALL
            .par_iter()
            .map(|&period| measure_period(evaluator, period))
            .collect::<Result<Vec<_>, _>>()?
    } else {
        Period::ALL
            .iter()
            .map(|&period| measure_period(evaluator, period))
            .collect::<Result<Vec<_>, _>>()?
    };
    debug!(
        "Evaluated {} periods ({:.2}ms)",
        rows.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    for row in rows {
        table.push(row);
    }
    Ok(table)
}
