//! CLI argument definitions
//!
//! Every option is optional: a bare `treccsv` runs the full report with the
//! fixed `qrels/` and `runs/` layout. Config-file values fill in whatever the
//! command line leaves unset.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::Config;
use crate::consts::{EVAL_BINARY, OUTPUT_FILE};
use crate::core::AvgPolicy;

#[derive(Parser)]
#[command(name = "treccsv")]
#[command(
    about = "Run trec_eval for every month and merge the measures into one CSV",
    version
)]
pub(crate) struct Cli {
    /// Evaluation binary [default: ./trec_eval]
    #[arg(long, value_name = "PATH")]
    pub(crate) eval_bin: Option<String>,

    /// Output CSV file [default: result.csv]
    #[arg(short, long, value_name = "PATH")]
    pub(crate) output: Option<PathBuf>,

    /// How non-numeric cells affect the AVG column [default: strict]
    #[arg(long, value_enum)]
    pub(crate) avg_policy: Option<AvgPolicy>,

    /// Evaluate the months one after another instead of concurrently
    #[arg(long)]
    pub(crate) sequential: bool,

    /// Abort if a single trec_eval call takes longer than this many seconds
    #[arg(long, value_name = "SECS")]
    pub(crate) timeout: Option<u64>,

    /// Also print the merged table to stdout
    #[arg(short, long)]
    pub(crate) preview: bool,

    /// Enable debug output (command lines, timings)
    #[arg(long)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // Boolean flags: config only applies if CLI left them off
        if !self.sequential && config.sequential {
            self.sequential = true;
        }
        if !self.preview && config.preview {
            self.preview = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }

        if self.eval_bin.is_none() {
            self.eval_bin = config.eval_bin.clone();
        }
        if self.output.is_none() {
            self.output = config.output.clone();
        }
        if self.avg_policy.is_none() {
            self.avg_policy = config.avg_policy;
        }
        if self.timeout.is_none() {
            self.timeout = config.timeout_secs;
        }

        self
    }

    pub(crate) fn eval_bin(&self) -> &str {
        self.eval_bin.as_deref().unwrap_or(EVAL_BINARY)
    }

    pub(crate) fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(OUTPUT_FILE))
    }

    pub(crate) fn avg_policy(&self) -> AvgPolicy {
        self.avg_policy.unwrap_or_default()
    }

    /// Zero means no timeout
    pub(crate) fn timeout(&self) -> Option<Duration> {
        self.timeout
            .filter(|&secs| secs > 0)
            .map(Duration::from_secs)
    }
}
