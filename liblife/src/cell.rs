#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    pub alive: bool,
}

impl Cell {
    pub fn new(row: usize, col: usize, alive: bool) -> Self {
        Self { row, col, alive }
    }

    /// Moore neighborhood: the 8 surrounding positions, never the cell itself.
    pub fn is_next_to(&self, other: &Cell) -> bool {
        let d_row = self.row.abs_diff(other.row);
        let d_col = self.col.abs_diff(other.col);

        d_row <= 1 && d_col <= 1 && (d_row, d_col) != (0, 0)
    }
}
