/// Chart grid layout: a fixed two-column grid, filled row by row.

/// Number of chart columns per row.
pub const GRID_COLUMNS: usize = 2;

/// Placement of `count` charts in a `rows x GRID_COLUMNS` grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    count: usize,
}

impl GridLayout {
    /// Layout for `count` charts.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    /// Grid rows: `ceil(count / GRID_COLUMNS)`.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.count.div_ceil(GRID_COLUMNS)
    }

    /// Grid columns (always [`GRID_COLUMNS`]).
    #[must_use]
    pub fn cols(&self) -> usize {
        GRID_COLUMNS
    }

    /// `(row, col)` of chart `i`.
    #[must_use]
    pub fn position(&self, i: usize) -> (usize, usize) {
        (i / GRID_COLUMNS, i % GRID_COLUMNS)
    }

    /// Flat cell index of chart `i` in row-major order.
    #[must_use]
    pub fn cell(&self, i: usize) -> usize {
        let (row, col) = self.position(i);
        row * GRID_COLUMNS + col
    }

    /// The trailing cell left empty when the count is odd.
    #[must_use]
    pub fn hidden_cell(&self) -> Option<(usize, usize)> {
        (self.count % GRID_COLUMNS != 0).then(|| (self.rows() - 1, GRID_COLUMNS - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_round_up() {
        assert_eq!(GridLayout::new(1).rows(), 1);
        assert_eq!(GridLayout::new(2).rows(), 1);
        assert_eq!(GridLayout::new(3).rows(), 2);
        assert_eq!(GridLayout::new(8).rows(), 4);
        assert_eq!(GridLayout::new(7).cols(), 2);
    }

    #[test]
    fn test_positions_fill_row_major() {
        let grid = GridLayout::new(5);
        assert_eq!(grid.position(0), (0, 0));
        assert_eq!(grid.position(1), (0, 1));
        assert_eq!(grid.position(4), (2, 0));
        assert_eq!(grid.cell(4), 4);
    }

    #[test]
    fn test_hidden_cell_only_when_odd() {
        assert_eq!(GridLayout::new(7).hidden_cell(), Some((3, 1)));
        assert_eq!(GridLayout::new(1).hidden_cell(), Some((0, 1)));
        assert_eq!(GridLayout::new(4).hidden_cell(), None);
    }
}
