//! Evaluation source layer
//!
//! Runs the external evaluation tool for each period's file pair and turns
//! its tab-separated report into measurement rows.

pub(crate) mod loader;
pub(crate) mod parser;
pub(crate) mod trec_eval;

use std::path::Path;

use crate::error::EvalError;

/// Evaluation tool seam - the process-backed `TrecEval` in production,
/// canned output in tests
pub(crate) trait Evaluator: Send + Sync {
    /// Name used in log lines
    fn name(&self) -> &str;

    /// Evaluate `run` against `qrels` and return the raw report text
    fn evaluate(&self, qrels: &Path, run: &Path) -> Result<String, EvalError>;
}

pub(crate) use loader::load_result_table;
pub(crate) use trec_eval::TrecEval;
