use itertools::Itertools;

use super::grid::Grid;

/// One text line per distinct row, ascending; columns ascending within a row.
/// `'x'` marks a live cell, `'.'` a dead one.
pub fn print_grid<W>(mut write_line: W, grid: &Grid)
where
    W: FnMut(&str),
{
    let rows = grid.cells().iter().map(|cell| cell.row).unique().sorted();

    for row in rows {
        let line: String = grid
            .cells()
            .iter()
            .filter(|cell| cell.row == row)
            .sorted_by_key(|cell| cell.col)
            .map(|cell| if cell.alive { 'x' } else { '.' })
            .collect();

        write_line(&line);
    }
}

/// Full frame: optional screen-clear effect, then an `Iteration N` header,
/// then the grid. Generation 0 renders the initial state.
pub fn print<W, C>(mut write_line: W, grid: &Grid, generation: usize, clear: Option<C>)
where
    W: FnMut(&str),
    C: FnOnce(),
{
    if let Some(clear) = clear {
        clear();
    }

    write_line(&format!("Iteration {generation}"));
    print_grid(write_line, grid);
}
