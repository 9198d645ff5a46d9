use crate::grid::Grid;
use rayon::iter::IntoParallelIterator;
use rayon::iter::ParallelIterator;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Side length of the square window used for spatial pattern statistics.
pub const WINDOW_SIZE: usize = 3;

/// Number of distinct boolean windows: 2^(3*3).
const WINDOW_SPACE: usize = 1 << (WINDOW_SIZE * WINDOW_SIZE);

/// Statistical descriptors of one grid snapshot.
///
/// Produced once per step and never mutated; a new step makes the previous
/// snapshot stale.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StatsSnapshot {
    /// Binary entropy of the mean cell value, in [0, 1].
    pub global_entropy: f64,
    /// Mean cell value: alive ratio for discrete grids, mean density for
    /// continuous ones.
    pub alive_ratio: f64,
    /// Distinct 3x3 windows observed, as a fraction of all 512 possible.
    pub pattern_complexity: f64,
    /// Shannon entropy of the 3x3 window distribution, non-negative and at
    /// most log2 of the number of distinct windows observed.
    pub spatial_entropy: f64,
}

/// Per-cell local entropy, one value per cell in row-major order.
pub type LocalEntropyField = Vec<f64>;

/// Binary entropy of a probability, defined as 0 at p = 0 and p = 1.
///
/// The guard is what keeps a fully dead or fully saturated grid from pushing
/// a NaN through log2 into a snapshot.
#[inline]
pub fn binary_entropy(p: f64) -> f64 {
    if p <= 0.0 || p >= 1.0 {
        0.0
    } else {
        -p * p.log2() - (1.0 - p) * (1.0 - p).log2()
    }
}

/// Binary entropy of the grid's mean cell value.
pub fn global_entropy(grid: &Grid) -> f64 {
    binary_entropy(grid.mean())
}

/// Local entropy of every cell's 3x3 toroidal neighborhood, self included.
///
/// Each cell gets the binary entropy of the alive ratio over its 9 samples,
/// so values range over [0, 1] with the extremes guarded to 0.
pub fn local_entropy_field(grid: &Grid) -> LocalEntropyField {
    let size = grid.size();
    (0..size * size)
        .into_par_iter()
        .map(|ix| {
            let (x, y) = ((ix % size) as isize, (ix / size) as isize);
            let mut alive = 0u32;
            for dy in -1..=1 {
                for dx in -1..=1 {
                    if grid.is_alive(x + dx, y + dy) {
                        alive += 1;
                    }
                }
            }
            binary_entropy(alive as f64 / 9.0)
        })
        .collect()
}

/// 9-bit key of the 3x3 boolean window with top-left at (x, y), wrapped.
#[inline]
fn window_key(grid: &Grid, x: usize, y: usize) -> usize {
    let mut key = 0;
    for dy in 0..WINDOW_SIZE {
        for dx in 0..WINDOW_SIZE {
            key <<= 1;
            if grid.is_alive(x as isize + dx as isize, y as isize + dy as isize) {
                key |= 1;
            }
        }
    }
    key
}

/// Tally of every 3x3 window key across all N^2 anchor positions.
fn window_counts(grid: &Grid) -> [u32; WINDOW_SPACE] {
    let size = grid.size();
    let mut counts = [0u32; WINDOW_SPACE];
    for y in 0..size {
        for x in 0..size {
            counts[window_key(grid, x, y)] += 1;
        }
    }
    counts
}

/// Shannon entropy of the 3x3 window distribution over all anchor positions.
///
/// Every observed key has count >= 1, so no zero guard is needed on the
/// per-key probabilities.
pub fn spatial_entropy(grid: &Grid) -> f64 {
    let total = grid.len() as f64;
    window_counts(grid)
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Fraction of the 512 possible 3x3 windows that actually occur in the grid.
///
/// At least one window always occurs, so the score lies in (0, 1].
pub fn pattern_complexity(grid: &Grid) -> f64 {
    let distinct = window_counts(grid).iter().filter(|&&count| count > 0).count();
    distinct as f64 / WINDOW_SPACE as f64
}

/// Compute the full statistics snapshot for a grid.
pub fn analyze(grid: &Grid) -> StatsSnapshot {
    let alive_ratio = grid.mean();
    let counts = window_counts(grid);
    let total = grid.len() as f64;
    let mut spatial = 0.0;
    let mut distinct = 0usize;
    for &count in counts.iter() {
        if count > 0 {
            distinct += 1;
            let p = count as f64 / total;
            spatial -= p * p.log2();
        }
    }
    StatsSnapshot {
        global_entropy: binary_entropy(alive_ratio),
        alive_ratio,
        pattern_complexity: distinct as f64 / WINDOW_SPACE as f64,
        spatial_entropy: spatial,
    }
}
