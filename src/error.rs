use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("{0}")]
    Eval(#[from] EvalError),

    #[error("Failed to write CSV to {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to create {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub(crate) enum EvalError {
    #[error("{binary} not found. Place trec_eval in the working directory or pass --eval-bin.")]
    NotFound { binary: String },

    #[error("Failed to run {binary}: {source}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to wait for {binary}: {source}")]
    Wait {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid UTF-8 from {binary}: {source}")]
    Utf8 {
        binary: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("{binary} exited with {status}: {stderr}")]
    Failed {
        binary: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("{binary} did not finish within {}s", .timeout.as_secs())]
    Timeout { binary: String, timeout: Duration },
}
