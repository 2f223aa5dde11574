use super::cell::Cell;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
}

impl Grid {
    pub fn with_cells(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// One cell per matrix position, row-major. The renderer groups output by
    /// row, so this order is preserved across generation steps.
    pub fn from_rows(rows: &[Vec<bool>]) -> Self {
        let cells = rows
            .iter()
            .enumerate()
            .flat_map(|(row, cols)| {
                cols.iter()
                    .enumerate()
                    .map(move |(col, &alive)| Cell::new(row, col, alive))
            })
            .collect();

        Self { cells }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Adjacent cells that are currently alive. The count of this set is the
    /// sole input to the transition rule; dead neighbors never appear.
    pub fn live_neighbors(&self, cell: &Cell) -> Vec<&Cell> {
        self.cells
            .iter()
            .filter(|other| cell.is_next_to(other) && other.alive)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_is_row_major_with_one_cell_per_position() {
        let grid = Grid::from_rows(&[vec![true, false], vec![false, true]]);

        assert_eq!(
            grid.cells(),
            &[
                Cell::new(0, 0, true),
                Cell::new(0, 1, false),
                Cell::new(1, 0, false),
                Cell::new(1, 1, true),
            ]
        );
    }

    #[test]
    fn from_rows_counts_every_position() {
        let grid = Grid::from_rows(&[vec![false; 4], vec![false; 4], vec![false; 4]]);
        assert_eq!(grid.len(), 12);
    }

    #[test]
    fn live_neighbors_of_isolated_cell_is_empty() {
        let grid = Grid::from_rows(&vec![vec![false; 4]; 4]);
        let neighbors = grid.live_neighbors(&Cell::new(2, 2, false));

        assert!(neighbors.is_empty());
    }

    #[test]
    fn live_neighbors_counts_only_live_adjacent_cells() {
        let mut rows = vec![vec![false; 4]; 4];
        rows[1][1] = true;
        rows[1][2] = true;
        rows[2][1] = true;
        let grid = Grid::from_rows(&rows);

        let neighbors = grid.live_neighbors(&Cell::new(2, 2, false));
        assert_eq!(neighbors.len(), 3);
    }

    #[test]
    fn live_neighbors_never_includes_the_cell_itself() {
        let grid = Grid::from_rows(&vec![vec![true; 3]; 3]);
        let center = Cell::new(1, 1, true);

        let neighbors = grid.live_neighbors(&center);
        assert_eq!(neighbors.len(), 8);
        assert!(neighbors
            .iter()
            .all(|other| (other.row, other.col) != (center.row, center.col)));
    }

    #[test]
    fn live_neighbors_excludes_dead_cells() {
        let mut rows = vec![vec![true; 3]; 3];
        rows[0][0] = false;
        rows[2][2] = false;
        let grid = Grid::from_rows(&rows);

        assert_eq!(grid.live_neighbors(&Cell::new(1, 1, true)).len(), 6);
    }
}
