use std::path::PathBuf;

use tracing::{info, warn};

use crate::cli::Cli;
use crate::core::{ResultTable, RowAverage, append_averages, transpose};
use crate::error::AppError;
use crate::output::{print_preview, write_csv_file};
use crate::source::{Evaluator, TrecEval, load_result_table};

/// Run the whole report with the process-backed evaluator
pub(crate) fn run(cli: &Cli) -> Result<PathBuf, AppError> {
    let evaluator = TrecEval::new(cli.eval_bin(), cli.timeout());
    run_with(cli, &evaluator)
}

/// Evaluate, transpose, average and write; returns the written path
pub(crate) fn run_with(cli: &Cli, evaluator: &dyn Evaluator) -> Result<PathBuf, AppError> {
    let table = load_result_table(ResultTable::new(), evaluator, !cli.sequential)?;

    info!("Transposing {} rows...", table.len());
    let transposed = transpose(table);

    info!("Adding AVG ({:?} policy)...", cli.avg_policy());
    let (final_table, degraded) = append_averages(transposed, cli.avg_policy());
    for (measure, avg) in &degraded {
        match avg {
            RowAverage::DegradedToZero { cell } => {
                warn!("AVG for {measure:?} set to 0.0: {cell:?} is not a number");
            }
            RowAverage::NoValues => warn!("AVG for {measure:?} set to 0.0: no values"),
            RowAverage::Mean(_) => {}
        }
    }

    let path = cli.output_path();
    info!("Writing CSV to {}...", path.display());
    write_csv_file(&final_table, &path)?;

    if cli.preview {
        print_preview(&final_table);
    }

    info!("All done! {} rows written", final_table.rows.len());
    Ok(path)
}
