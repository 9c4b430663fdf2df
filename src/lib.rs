//! # matrix_pathfinding
//!
//! Shortest paths between two cells of a binary occupancy grid (`1` is passable, `0` is
//! blocked). Paths are found with [A*](https://en.wikipedia.org/wiki/A*_search_algorithm)
//! using 8-directional movement at a uniform step cost and the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) as heuristic.
//! [Connected components](https://en.wikipedia.org/wiki/Component_(graph_theory)) are
//! pre-computed to avoid flood-filling behaviour if no path exists.
//!
//! Every path a [PathFinder] returns is appended to its [PathCache], which later queries
//! consult before searching again.
//!
//! ```
//! use matrix_pathfinding::{coord, OccupancyGrid, PathFinder};
//!
//! let grid = OccupancyGrid::from_rows(&[vec![1, 0], vec![0, 1]]);
//! let mut finder = PathFinder::new(grid);
//! let path = finder.find_path(coord(0, 0), coord(1, 1)).unwrap();
//! assert_eq!(path, vec![coord(0, 0), coord(1, 1)]);
//! ```
pub mod astar;
pub mod cache;
pub mod error;
pub mod grid;
pub mod pathfinder;
pub mod render;

use grid_util::point::Point;

pub use cache::{CacheMode, PathCache};
pub use error::PathError;
pub use grid::OccupancyGrid;
pub use pathfinder::{PathFinder, PathFinderConfig};

/// A cell position. `x` holds the row and `y` the column.
pub type Coordinate = Point;

/// Coordinates from start to end, both inclusive.
pub type Path = Vec<Coordinate>;

/// Cost of a single step, diagonal or straight.
pub const STEP_COST: i32 = 1;

/// Row and column deltas of the 8 neighbours, in the order in which they are expanded. The
/// order decides which of several equally short paths is returned.
pub const NEIGHBOUR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, 0),
];

pub(crate) const N_SMALLVEC_SIZE: usize = 8;

/// Builds a [Coordinate] from a row and a column.
pub fn coord(row: i32, col: i32) -> Coordinate {
    Point::new(row, col)
}

/// Checks whether two coordinates are one of the [NEIGHBOUR_OFFSETS] apart.
pub fn is_unit_step(from: &Coordinate, to: &Coordinate) -> bool {
    let delta = (to.x - from.x, to.y - from.y);
    NEIGHBOUR_OFFSETS.contains(&delta)
}
