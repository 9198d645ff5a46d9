use crate::grid::Grid;
use enum_iterator::IntoEnumIterator;
use std::collections::BTreeMap;

/// The canonical automaton motifs the matcher scans for.
///
/// Templates are fixed 3x3 boolean matrices matched exactly, with no rotation
/// or reflection invariance.
#[derive(Copy, Clone, Debug, PartialEq, Eq, IntoEnumIterator)]
pub enum Template {
    Glider,
    Blinker,
}

const GLIDER: [[bool; 3]; 3] = [
    [false, true, false],
    [false, false, true],
    [true, true, true],
];

const BLINKER: [[bool; 3]; 3] = [
    [false, true, false],
    [false, true, false],
    [false, true, false],
];

impl Template {
    /// The template's name as reported in match counts.
    pub fn name(self) -> &'static str {
        match self {
            Template::Glider => "glider",
            Template::Blinker => "blinker",
        }
    }

    /// The template's cells, indexed `[row][column]`.
    pub fn cells(self) -> &'static [[bool; 3]; 3] {
        match self {
            Template::Glider => &GLIDER,
            Template::Blinker => &BLINKER,
        }
    }
}

/// Match counts per template name, recomputed from every new grid snapshot.
pub type PatternReport = BTreeMap<&'static str, usize>;

/// Whether the grid matches the template exactly with top-left at (x, y).
///
/// The caller guarantees the window lies fully inside the grid; the scan is
/// non-wrapping, so the wraparound in `Grid::is_alive` never engages here.
fn matches_at(grid: &Grid, x: usize, y: usize, template: Template) -> bool {
    let cells = template.cells();
    for (dy, row) in cells.iter().enumerate() {
        for (dx, &expected) in row.iter().enumerate() {
            if grid.is_alive((x + dx) as isize, (y + dy) as isize) != expected {
                return false;
            }
        }
    }
    true
}

/// Count non-wrapping exact matches of one template.
///
/// Window positions that would read outside the grid are excluded from the
/// scan range, so grids smaller than the template yield 0.
pub fn count_matches(grid: &Grid, template: Template) -> usize {
    let size = grid.size();
    if size < 3 {
        return 0;
    }
    let mut count = 0;
    for y in 0..=size - 3 {
        for x in 0..=size - 3 {
            if matches_at(grid, x, y, template) {
                count += 1;
            }
        }
    }
    count
}

/// Scan the grid for every template in the library.
pub fn recognize(grid: &Grid) -> PatternReport {
    Template::into_enum_iter()
        .map(|template| (template.name(), count_matches(grid, template)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stamp(grid: &mut Grid, x: isize, y: isize, template: Template) {
        for (dy, row) in template.cells().iter().enumerate() {
            for (dx, &alive) in row.iter().enumerate() {
                if alive {
                    grid.set(x + dx as isize, y + dy as isize, 1.0);
                }
            }
        }
    }

    #[test]
    fn empty_grid_matches_nothing() {
        let grid = Grid::empty(10);
        let report = recognize(&grid);
        assert_eq!(report["glider"], 0);
        assert_eq!(report["blinker"], 0);
    }

    #[test]
    fn finds_a_stamped_glider() {
        let mut grid = Grid::empty(10);
        stamp(&mut grid, 2, 3, Template::Glider);
        assert_eq!(count_matches(&grid, Template::Glider), 1);
        assert_eq!(count_matches(&grid, Template::Blinker), 0);
    }

    #[test]
    fn counts_multiple_blinkers() {
        let mut grid = Grid::empty(12);
        stamp(&mut grid, 1, 1, Template::Blinker);
        stamp(&mut grid, 7, 6, Template::Blinker);
        assert_eq!(count_matches(&grid, Template::Blinker), 2);
    }

    #[test]
    fn match_requires_exact_surround() {
        let mut grid = Grid::empty(10);
        stamp(&mut grid, 2, 3, Template::Glider);
        // An extra live cell inside the window breaks the exact match.
        grid.set(2, 3, 1.0);
        assert_eq!(count_matches(&grid, Template::Glider), 0);
    }

    #[test]
    fn scan_does_not_wrap() {
        // A blinker split across the seam is visible toroidally but must not
        // be counted by the non-wrapping scan.
        let mut grid = Grid::empty(8);
        stamp(&mut grid, 6, 3, Template::Blinker);
        // Window anchored at x = 6 would need cells at x = 8: out of range.
        assert_eq!(count_matches(&grid, Template::Blinker), 0);
    }

    #[test]
    fn grids_smaller_than_template_count_zero() {
        let grid = Grid::glider(2);
        assert_eq!(count_matches(&grid, Template::Glider), 0);
        assert_eq!(count_matches(&grid, Template::Blinker), 0);
    }

    #[test]
    fn continuous_values_binarize_at_threshold() {
        let mut grid = Grid::empty(10);
        for (dy, row) in Template::Blinker.cells().iter().enumerate() {
            for (dx, &alive) in row.iter().enumerate() {
                grid.set(1 + dx as isize, 1 + dy as isize, if alive { 0.9 } else { 0.2 });
            }
        }
        assert_eq!(count_matches(&grid, Template::Blinker), 1);
    }
}
