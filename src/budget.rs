use crate::algorithms::bfs::BreadthFirst;
use crate::algorithms::common::SearchStrategy;
use crate::grid::Grid;

/// Round a seconds value to the two-decimal precision used for all reported
/// times.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Derive the level's target duration from one baseline breadth-first run
/// between the grid's current start and goal. Called once per level, before
/// any obstacles are painted, and held fixed afterwards.
pub fn compute(grid: &Grid) -> f64 {
    let mut bfs = BreadthFirst::new();
    let result = bfs.search(grid, grid.start, grid.goal);
    target_from_elapsed(result.elapsed.as_secs_f64())
}

/// Fixed scaling from a baseline search duration to the target time.
fn target_from_elapsed(elapsed_seconds: f64) -> f64 {
    round2(elapsed_seconds * 1e4 * 2.0 + 3.0)
}
