//! Table types passed between the pipeline stages
//!
//! Every stage takes ownership of the table it works on and hands the result
//! to the next one; nothing is shared across stages.

/// One row of cells: measure names, or one period's values in header order
pub(crate) type MeasurementRow = Vec<String>;

/// Rows collected from trec_eval: header first, then one row per period.
///
/// Rows may differ in length when trec_eval reports a different number of
/// measures for some pair; that is resolved by [`super::transpose`].
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct ResultTable {
    rows: Vec<MeasurementRow>,
}

impl ResultTable {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }

    pub(crate) fn push(&mut self, row: MeasurementRow) {
        self.rows.push(row);
    }

    pub(crate) fn rows(&self) -> &[MeasurementRow] {
        &self.rows
    }
}

impl From<Vec<MeasurementRow>> for ResultTable {
    fn from(rows: Vec<MeasurementRow>) -> Self {
        Self { rows }
    }
}

/// Column-major view of a [`ResultTable`]: one row per measure.
///
/// All rows have the same length after transposition; the aggregator then
/// appends exactly one trailing cell to each.
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct TransposedTable {
    pub(crate) rows: Vec<Vec<String>>,
}

impl TransposedTable {
    pub(crate) fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_table_keeps_insertion_order() {
        let mut table = ResultTable::new();
        assert!(table.is_empty());
        table.push(vec!["map".to_string()]);
        table.push(vec!["0.5".to_string()]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0], vec!["map"]);
        assert_eq!(table.rows()[1], vec!["0.5"]);
    }
}
