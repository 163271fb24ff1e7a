use chrono::Month;
use std::path::PathBuf;

use crate::consts::{QRELS_DIR, RUNS_DIR};

/// One calendar month selecting a qrels/run file pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Period(Month);

impl Period {
    /// Iteration order of the period rows: January through December
    pub(crate) const ALL: [Period; 12] = [
        Period(Month::January),
        Period(Month::February),
        Period(Month::March),
        Period(Month::April),
        Period(Month::May),
        Period(Month::June),
        Period(Month::July),
        Period(Month::August),
        Period(Month::September),
        Period(Month::October),
        Period(Month::November),
        Period(Month::December),
    ];

    /// The header pass always reads the April pair
    pub(crate) const HEADER: Period = Period(Month::April);

    /// Upper-case month name as used in the file names, e.g. "JANUARY"
    pub(crate) fn name(self) -> String {
        self.0.name().to_uppercase()
    }

    pub(crate) fn qrels_path(self) -> PathBuf {
        PathBuf::from(QRELS_DIR).join(format!("qrels{}.test", self.name()))
    }

    pub(crate) fn run_path(self) -> PathBuf {
        PathBuf::from(RUNS_DIR).join(format!("trecResults{}.test", self.name()))
    }
}
