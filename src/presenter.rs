//! Table Presenter model: the loaded table, the cell selection and edit mode.
//!
//! Toolkit independent; `gui::table_view` draws it.

use crate::data::{CellIndex, CsvTable, Selection};

pub struct TablePresenter {
    table: CsvTable,
    selection: Selection,
    editable: bool,
}

impl TablePresenter {
    pub fn new(table: CsvTable) -> Self {
        Self {
            table,
            selection: Selection::new(),
            editable: false,
        }
    }

    /// Grid rows: data rows only, the header becomes column titles.
    pub fn row_count(&self) -> usize {
        self.table.row_count()
    }

    pub fn column_count(&self) -> usize {
        self.table.column_count()
    }

    pub fn headers(&self) -> &[String] {
        self.table.header()
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.table.cell(row, column)
    }

    /// Backing table, including any edits made in the grid.
    pub fn table(&self) -> &CsvTable {
        &self.table
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }

    pub fn is_editable(&self) -> bool {
        self.editable
    }

    pub fn set_editable(&mut self, editable: bool) {
        self.editable = editable;
    }

    /// Write an edit from the grid. Returns `false` when out of bounds.
    pub fn set_cell(&mut self, row: usize, column: usize, value: impl Into<String>) -> bool {
        self.table.set_cell(row, column, value)
    }

    /// Select every cell of `column`, replacing the selection unless `add`.
    pub fn select_column(&mut self, column: usize, add: bool) {
        if column >= self.column_count() {
            return;
        }
        if !add {
            self.selection.clear();
        }
        self.selection.add_column(column, self.row_count());
    }

    pub fn select_all(&mut self) {
        let (rows, columns) = (self.row_count(), self.column_count());
        self.selection.clear();
        if rows > 0 && columns > 0 {
            self.selection
                .add_rect(CellIndex::new(0, 0), CellIndex::new(rows - 1, columns - 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::CsvLoader;

    fn presenter() -> TablePresenter {
        TablePresenter::new(CsvLoader::from_reader("A,B,C\n1,2,3\n4,5,6\n".as_bytes()).unwrap())
    }

    #[test]
    fn grid_shape_follows_the_csv() {
        let presenter = presenter();
        assert_eq!(presenter.row_count(), 2);
        assert_eq!(presenter.column_count(), 3);
        assert_eq!(presenter.headers(), ["A", "B", "C"]);
        assert_eq!(presenter.cell(0, 0), Some("1"));
        assert_eq!(presenter.cell(1, 2), Some("6"));
        assert!(!presenter.is_editable());
    }

    #[test]
    fn column_selection_replaces_or_adds() {
        let mut presenter = presenter();
        presenter.select_column(0, false);
        presenter.select_column(2, true);
        assert_eq!(presenter.selection().len(), 4);
        presenter.select_column(1, false);
        assert!(presenter.selection().iter().all(|c| c.column == 1));
        presenter.select_column(7, true);
        assert_eq!(presenter.selection().len(), 2);
    }

    #[test]
    fn select_all_covers_the_grid() {
        let mut presenter = presenter();
        presenter.select_all();
        assert_eq!(presenter.selection().len(), 6);
    }

    #[test]
    fn edits_reach_the_backing_table() {
        let mut presenter = presenter();
        assert!(presenter.set_cell(0, 1, "9"));
        assert_eq!(presenter.table().cell(0, 1), Some("9"));
    }
}
