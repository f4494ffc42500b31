//! Cell selection in table (data-row) coordinates.

use std::collections::BTreeSet;

/// A single table cell. Rows are data rows; the header is not addressable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellIndex {
    pub row: usize,
    pub column: usize,
}

impl CellIndex {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// Set of selected cells plus the anchor used for shift-range extension.
///
/// Iteration is ordered by row, then column, so grouping is deterministic
/// regardless of the order cells were clicked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    cells: BTreeSet<CellIndex>,
    anchor: Option<CellIndex>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn contains(&self, cell: CellIndex) -> bool {
        self.cells.contains(&cell)
    }

    pub fn iter(&self) -> impl Iterator<Item = CellIndex> + '_ {
        self.cells.iter().copied()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
        self.anchor = None;
    }

    /// Replace the selection with one cell.
    pub fn select_only(&mut self, cell: CellIndex) {
        self.cells.clear();
        self.cells.insert(cell);
        self.anchor = Some(cell);
    }

    /// Add or remove one cell.
    pub fn toggle(&mut self, cell: CellIndex) {
        if !self.cells.remove(&cell) {
            self.cells.insert(cell);
        }
        self.anchor = Some(cell);
    }

    /// Replace the selection with the rectangle spanned by the anchor and
    /// `cell`. Without an anchor this behaves like [`Selection::select_only`].
    pub fn extend_to(&mut self, cell: CellIndex) {
        let Some(anchor) = self.anchor else {
            self.select_only(cell);
            return;
        };
        self.cells.clear();
        self.add_rect(anchor, cell);
        self.anchor = Some(anchor);
    }

    /// Add every cell of the rectangle with corners `a` and `b`.
    pub fn add_rect(&mut self, a: CellIndex, b: CellIndex) {
        let (r0, r1) = (a.row.min(b.row), a.row.max(b.row));
        let (c0, c1) = (a.column.min(b.column), a.column.max(b.column));
        for row in r0..=r1 {
            for column in c0..=c1 {
                self.cells.insert(CellIndex { row, column });
            }
        }
    }

    /// Add all `row_count` cells of a column.
    pub fn add_column(&mut self, column: usize, row_count: usize) {
        self.cells
            .extend((0..row_count).map(|row| CellIndex { row, column }));
        if row_count > 0 {
            self.anchor = Some(CellIndex { row: 0, column });
        }
    }
}

impl FromIterator<CellIndex> for Selection {
    fn from_iter<I: IntoIterator<Item = CellIndex>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
            anchor: None,
        }
    }
}
