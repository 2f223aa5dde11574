use std::ops::RangeInclusive;

use liblife::Grid;

/// Random start grid: a bounded matrix with a random number of live-cell
/// placements at uniformly random positions. Placements may collide, so the
/// realized live count can fall below the drawn one.
pub fn random_start_grid(rows: usize, cols: usize, alive: RangeInclusive<usize>) -> Grid {
    let mut matrix = vec![vec![false; cols]; rows];

    let placements = rand::random_range(alive);
    for _ in 0..placements {
        let row = rand::random_range(0..rows);
        let col = rand::random_range(0..cols);
        matrix[row][col] = true;
    }

    Grid::from_rows(&matrix)
}
