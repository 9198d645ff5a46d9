use crate::config::{CellMode, ConfigKind};
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Cell values above this threshold count as alive.
///
/// Discrete grids only ever hold 0.0 or 1.0, so the threshold is exact for
/// them; continuous grids use it to binarize densities wherever a boolean
/// view of the grid is needed.
pub const ALIVE_THRESHOLD: f64 = 0.5;

/// A square toroidal grid of cell values.
///
/// Cells are stored row-major in a dense buffer of exactly `size * size`
/// values. Both axes wrap, so any `isize` coordinate addresses a valid cell
/// after normalization.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Grid {
    cells: Vec<f64>,
    size: usize,
}

impl Grid {
    /// Make a new grid with the given initial configuration.
    ///
    /// `Random` draws every cell from `rng`: alive with p = 0.5 in discrete
    /// mode, uniform in [0, 1] in continuous mode. `Glider` and `Empty` are
    /// deterministic and leave `rng` untouched.
    pub fn new(size: usize, kind: ConfigKind, mode: CellMode, rng: &mut impl Rng) -> Self {
        match kind {
            ConfigKind::Empty => Self::empty(size),
            ConfigKind::Random => Self::new_iter(
                size,
                (0..size * size).map(|_| match mode {
                    CellMode::Discrete => {
                        if rng.gen_bool(0.5) {
                            1.0
                        } else {
                            0.0
                        }
                    }
                    CellMode::Continuous => rng.gen::<f64>(),
                }),
            ),
            ConfigKind::Glider => Self::glider(size),
        }
    }

    /// Make an all-dead grid.
    pub fn empty(size: usize) -> Self {
        Self {
            cells: vec![0.0; size * size],
            size,
        }
    }

    /// Make a new grid directly from an initial iter.
    pub fn new_iter<I>(size: usize, iter: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let cells: Vec<_> = iter.into_iter().take(size * size).collect();
        // Assert that they provided enough cells. If they didn't the simulation would panic.
        assert_eq!(
            cells.len(),
            size * size,
            "entromata::Grid::new_iter: not enough cells provided in iter"
        );
        Self { cells, size }
    }

    /// Make an empty grid with a single glider at the center.
    ///
    /// The five live cells sit at offsets (0,0), (1,1), (1,2), (0,2) and
    /// (-1,2) from the center `size / 2`, wrapped toroidally, so the motif
    /// lands somewhere valid even on grids smaller than the motif.
    pub fn glider(size: usize) -> Self {
        let mut grid = Self::empty(size);
        let c = (size / 2) as isize;
        for &(dx, dy) in &[(0, 0), (1, 1), (1, 2), (0, 2), (-1, 2)] {
            grid.set(c + dx, c + dy, 1.0);
        }
        grid
    }

    /// Get the grid's side length.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Normalize a coordinate onto the torus.
    #[inline]
    pub fn wrap(&self, coord: isize) -> usize {
        coord.rem_euclid(self.size as isize) as usize
    }

    /// Buffer index of a (possibly out-of-range) coordinate pair.
    #[inline]
    pub fn index(&self, x: isize, y: isize) -> usize {
        self.wrap(y) * self.size + self.wrap(x)
    }

    /// Get a cell value, wrapping coordinates toroidally.
    #[inline]
    pub fn get(&self, x: isize, y: isize) -> f64 {
        self.cells[self.index(x, y)]
    }

    /// Set a cell value, wrapping coordinates toroidally.
    #[inline]
    pub fn set(&mut self, x: isize, y: isize, value: f64) {
        let ix = self.index(x, y);
        self.cells[ix] = value;
    }

    /// Whether the cell at the wrapped coordinates is alive.
    #[inline]
    pub fn is_alive(&self, x: isize, y: isize) -> bool {
        self.get(x, y) > ALIVE_THRESHOLD
    }

    /// Get the grid's cell slice.
    #[inline]
    pub fn cells(&self) -> &[f64] {
        &self.cells[..]
    }

    /// Get the grid's cell slice mutably.
    #[inline]
    pub fn cells_mut(&mut self) -> &mut [f64] {
        &mut self.cells[..]
    }

    /// Count the live cells among the 8 Moore neighbors, self excluded.
    pub fn neighbor_count(&self, x: usize, y: usize) -> usize {
        let mut count = 0;
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                if self.is_alive(x as isize + dx, y as isize + dy) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Mean cell value over the inner disc and the outer annulus around a cell.
    ///
    /// Offsets within max-norm `outer` of the cell are partitioned by their
    /// Euclidean length: the inner disc holds everything within `inner`
    /// (including the cell itself), the annulus everything past `inner` up to
    /// `outer`. Offsets in the square's corners beyond `outer` belong to
    /// neither region. Returns `(inner_mean, outer_mean)`.
    pub fn annulus_average(&self, x: usize, y: usize, inner: usize, outer: usize) -> (f64, f64) {
        let r = outer as isize;
        let mut inner_sum = 0.0;
        let mut inner_count = 0u32;
        let mut outer_sum = 0.0;
        let mut outer_count = 0u32;
        for dy in -r..=r {
            for dx in -r..=r {
                let distance = ((dx * dx + dy * dy) as f64).sqrt();
                if distance <= inner as f64 {
                    inner_sum += self.get(x as isize + dx, y as isize + dy);
                    inner_count += 1;
                } else if distance <= outer as f64 {
                    outer_sum += self.get(x as isize + dx, y as isize + dy);
                    outer_count += 1;
                }
            }
        }
        let mean = |sum: f64, count: u32| if count == 0 { 0.0 } else { sum / count as f64 };
        (mean(inner_sum, inner_count), mean(outer_sum, outer_count))
    }

    /// Mean cell value over the whole grid.
    ///
    /// For discrete grids this is exactly the alive ratio; for continuous
    /// grids it is the mean density.
    pub fn mean(&self) -> f64 {
        self.cells.iter().sum::<f64>() / self.len() as f64
    }

    /// Whether every cell is exactly zero.
    pub fn is_extinct(&self) -> bool {
        self.cells.iter().all(|&v| v == 0.0)
    }
}
