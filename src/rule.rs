use crate::grid::{Grid, ALIVE_THRESHOLD};
use rayon::iter::IntoParallelIterator;
use rayon::iter::ParallelIterator;

/// A per-cell transition rule.
///
/// This enforces a rule in that all new cells are only produced from old grid
/// state. A rule sees the full prior snapshot and never partially-updated
/// values, which keeps the update order from breaking the simulation and
/// makes the per-cell work embarrassingly parallel.
pub trait Rule: Sync {
    /// Next value of the cell at (x, y), computed from the prior snapshot.
    fn next(&self, grid: &Grid, x: usize, y: usize) -> f64;
}

/// Advance the grid one generation under `rule`.
///
/// The new state is computed into a fresh buffer in parallel; the old grid is
/// never written during the step, so readers of the old snapshot always see a
/// complete state.
pub fn step<R: Rule>(grid: &Grid, rule: &R) -> Grid {
    let size = grid.size();
    Grid::new_iter(
        size,
        (0..size * size)
            .into_par_iter()
            .map(|ix| rule.next(grid, ix % size, ix / size))
            .collect::<Vec<_>>(),
    )
}

/// Conway's birth/death rule over boolean cells.
///
/// A live cell survives with 2 or 3 live Moore neighbors; a dead cell is born
/// with exactly 3. Output values are exactly 0.0 or 1.0.
#[derive(Copy, Clone, Debug, Default)]
pub struct ConwayRule;

impl Rule for ConwayRule {
    #[inline]
    fn next(&self, grid: &Grid, x: usize, y: usize) -> f64 {
        let n = grid.neighbor_count(x, y);
        let alive = if grid.is_alive(x as isize, y as isize) {
            n == 2 || n == 3
        } else {
            n == 3
        };
        if alive {
            1.0
        } else {
            0.0
        }
    }
}

/// Smoothed life over real-valued cells.
///
/// The outer-annulus density selects a binary target through birth and death
/// bands, and the cell relaxes halfway toward it each step. The inner-disc
/// average is computed alongside the annulus but does not enter the
/// transition; the original rule this reproduces never blended it in, and
/// that behavior is kept as observed.
#[derive(Copy, Clone, Debug, Default)]
pub struct SmoothRule;

impl SmoothRule {
    pub const INNER_RADIUS: usize = 3;
    pub const OUTER_RADIUS: usize = 5;
    pub const BIRTH_LOW: f64 = 0.278;
    pub const BIRTH_HIGH: f64 = 0.365;
    pub const DEATH_LOW: f64 = 0.267;
    pub const DEATH_HIGH: f64 = 0.445;
    pub const RELAXATION: f64 = 0.5;
}

impl Rule for SmoothRule {
    #[inline]
    fn next(&self, grid: &Grid, x: usize, y: usize) -> f64 {
        let (_inner, s) =
            grid.annulus_average(x, y, Self::INNER_RADIUS, Self::OUTER_RADIUS);
        let old = grid.get(x as isize, y as isize);
        let band = if old > ALIVE_THRESHOLD {
            Self::DEATH_LOW..=Self::DEATH_HIGH
        } else {
            Self::BIRTH_LOW..=Self::BIRTH_HIGH
        };
        let target = if band.contains(&s) { 1.0 } else { 0.0 };
        // With relaxation 1/2 and a binary target this stays in [0, 1]
        // without clamping.
        old + Self::RELAXATION * (target - old)
    }
}
