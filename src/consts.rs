/// Evaluation binary, resolved relative to the working directory
pub(crate) const EVAL_BINARY: &str = "./trec_eval";

/// Measure selection passed to trec_eval: `-m all_trec`
pub(crate) const MEASURE_FLAG: &str = "-m";
pub(crate) const MEASURE_SET: &str = "all_trec";

pub(crate) const QRELS_DIR: &str = "qrels";
pub(crate) const RUNS_DIR: &str = "runs";

/// Output file written into the working directory
pub(crate) const OUTPUT_FILE: &str = "result.csv";

/// Filler for cells a shorter row does not have
pub(crate) const PLACEHOLDER: &str = "-";

/// Label appended to the first row, naming the average column
pub(crate) const AVG_LABEL: &str = "AVG";

pub(crate) const CSV_DELIMITER: u8 = b';';
pub(crate) const CSV_QUOTE: u8 = b'|';
