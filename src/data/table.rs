//! In-memory CSV table: header row plus string data rows.

/// Header plus data rows, every row as wide as the header.
///
/// Data row `r` is line `r + 1` of the source file; the header is kept apart so
/// table coordinates and grid coordinates are the same.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CsvTable {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Build a table. Callers guarantee every row has `header.len()` cells.
    pub(crate) fn from_parts(header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == header.len()));
        Self { header, rows }
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Number of data rows (header excluded).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    pub fn column_name(&self, column: usize) -> Option<&str> {
        self.header.get(column).map(String::as_str)
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }

    fn cell_mut(&mut self, row: usize, column: usize) -> Option<&mut String> {
        self.rows.get_mut(row)?.get_mut(column)
    }

    /// Overwrite a cell. Returns `false` when the position is out of bounds.
    pub fn set_cell(&mut self, row: usize, column: usize, value: impl Into<String>) -> bool {
        match self.cell_mut(row, column) {
            Some(cell) => {
                *cell = value.into();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CsvTable {
        CsvTable::from_parts(
            vec!["A".into(), "B".into()],
            vec![vec!["1".into(), "2".into()], vec!["3".into(), "4".into()]],
        )
    }

    #[test]
    fn accessors_use_data_row_coordinates() {
        let table = sample();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.column_name(1), Some("B"));
        assert_eq!(table.cell(0, 0), Some("1"));
        assert_eq!(table.cell(1, 1), Some("4"));
        assert_eq!(table.cell(2, 0), None);
        assert_eq!(table.cell(0, 2), None);
    }

    #[test]
    fn set_cell_rejects_out_of_bounds() {
        let mut table = sample();
        assert!(table.set_cell(1, 0, "30"));
        assert_eq!(table.cell(1, 0), Some("30"));
        assert!(!table.set_cell(5, 0, "x"));
        assert_eq!(table, {
            let mut expected = sample();
            expected.set_cell(1, 0, "30");
            expected
        });
    }
}
