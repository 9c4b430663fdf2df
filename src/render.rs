//! Presentation helpers: overlaying a path on a display copy of a grid and serialising paths
//! in the `[(row,col),...]` form used to compare results.
use core::fmt;
use itertools::Itertools;

use crate::{Coordinate, OccupancyGrid};

/// A cell of a display copy of an [OccupancyGrid].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayCell {
    Blocked,
    Open,
    /// Marker for cells on the path.
    Path,
}

impl fmt::Display for DisplayCell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DisplayCell::Blocked => write!(f, "0"),
            DisplayCell::Open | DisplayCell::Path => write!(f, "1"),
        }
    }
}

/// Copies `grid` row by row, replacing every cell on `path` with [DisplayCell::Path].
/// Coordinates outside the grid are ignored.
pub fn overlay_path(grid: &OccupancyGrid, path: &[Coordinate]) -> Vec<Vec<DisplayCell>> {
    let mut cells: Vec<Vec<DisplayCell>> = (0..grid.rows() as i32)
        .map(|r| {
            (0..grid.cols() as i32)
                .map(|c| {
                    if grid.is_passable(&Coordinate::new(r, c)) {
                        DisplayCell::Open
                    } else {
                        DisplayCell::Blocked
                    }
                })
                .collect()
        })
        .collect();
    for p in path.iter().filter(|p| grid.in_bounds(p)) {
        cells[p.x as usize][p.y as usize] = DisplayCell::Path;
    }
    cells
}

/// Renders a path as `[(r,c),(r,c),...]`.
pub fn format_path(path: &[Coordinate]) -> String {
    format!(
        "[{}]",
        path.iter().map(|p| format!("({},{})", p.x, p.y)).join(",")
    )
}

/// Compares two serialised results, ignoring all whitespace.
pub fn same_ignoring_whitespace(a: &str, b: &str) -> bool {
    a.chars()
        .filter(|c| !c.is_whitespace())
        .eq(b.chars().filter(|c| !c.is_whitespace()))
}
