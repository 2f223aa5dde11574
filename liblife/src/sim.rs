use super::cell::Cell;
use super::grid::Grid;

/// One synchronous generation: every cell is evaluated against the frozen
/// pre-step grid, so no transition observes another cell's updated state.
pub fn step<R>(grid: &Grid, rule: R) -> Grid
where
    R: Fn(bool, usize) -> bool,
{
    let cells = grid
        .cells()
        .iter()
        .map(|cell| {
            let live_neighbors = grid.live_neighbors(cell).len();
            Cell::new(cell.row, cell.col, rule(cell.alive, live_neighbors))
        })
        .collect();

    Grid::with_cells(cells)
}

/// Drives `iterations` generations, handing each freshly computed grid to
/// `on_generation` with its 1-based generation number. `post_generation` is a
/// pacing hook invoked after `on_generation` returns, before the next step.
pub fn run<R, G, P>(
    grid: &Grid,
    iterations: usize,
    rule: R,
    mut on_generation: G,
    mut post_generation: Option<P>,
) where
    R: Fn(bool, usize) -> bool,
    G: FnMut(&Grid, usize),
    P: FnMut(),
{
    let mut current = grid.clone();

    for generation in 1..=iterations {
        current = step(&current, &rule);
        on_generation(&current, generation);

        if let Some(post) = post_generation.as_mut() {
            post();
        }
    }
}
