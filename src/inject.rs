use crate::grid::Grid;
use rand::Rng;

/// One inversion is drawn per this many cells.
const CELLS_PER_DRAW: usize = 10;

/// Invert a random tenth of the grid's cells in place.
///
/// Draws `N^2 / 10` cell indices uniformly **with replacement** and inverts
/// each drawn cell's value (`v -> 1 - v`), so a boolean cell toggles and a
/// density reflects around 1/2. A cell drawn twice inverts twice and ends up
/// unchanged, which means at most `N^2 / 10` distinct cells differ afterward.
pub fn inject(grid: &mut Grid, rng: &mut impl Rng) {
    let len = grid.len();
    let draws = len / CELLS_PER_DRAW;
    let cells = grid.cells_mut();
    for _ in 0..draws {
        let ix = rng.gen_range(0..len);
        cells[ix] = 1.0 - cells[ix];
    }
    log::debug!("injected entropy: {} draws over {} cells", draws, len);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn flips_at_most_a_tenth_of_the_cells() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::empty(20);
        let before = grid.clone();
        inject(&mut grid, &mut rng);
        let flipped = grid
            .cells()
            .iter()
            .zip(before.cells())
            .filter(|(a, b)| a != b)
            .count();
        assert!(flipped >= 1);
        assert!(flipped <= 40);
        // Every touched cell is a clean inversion of a dead cell.
        assert!(grid.cells().iter().all(|&v| v == 0.0 || v == 1.0));
    }

    #[test]
    fn inverts_continuous_values_around_half() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::new_iter(10, (0..100).map(|_| 0.2));
        inject(&mut grid, &mut rng);
        assert!(grid
            .cells()
            .iter()
            .all(|&v| (v - 0.2).abs() < 1e-12 || (v - 0.8).abs() < 1e-12));
    }

    #[test]
    fn tiny_grids_draw_nothing() {
        let mut rng = StdRng::seed_from_u64(7);
        // 3x3 = 9 cells: floor(9 / 10) = 0 draws.
        let mut grid = Grid::empty(3);
        inject(&mut grid, &mut rng);
        assert!(grid.is_extinct());
    }
}
