use core::fmt;
use grid_util::grid::{BoolGrid, Grid};
use itertools::Itertools;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::{is_unit_step, Coordinate, NEIGHBOUR_OFFSETS, N_SMALLVEC_SIZE};

/// [OccupancyGrid] stores which cells are blocked in a [BoolGrid] (`true` is blocked) and the
/// 8-connected components of the passable cells in a [UnionFind] structure. The grid is
/// immutable after construction, so the components never go stale.
///
/// Rows map onto the `x` axis of the underlying grid and columns onto `y`.
#[derive(Clone, Debug)]
pub struct OccupancyGrid {
    grid: BoolGrid,
    components: UnionFind<usize>,
}

impl OccupancyGrid {
    /// Builds a grid from rows of cell values. A cell is passable iff its value is `1`.
    ///
    /// The column count is taken from the first row. Shorter rows read as blocked past their
    /// end and extra values in longer rows are ignored.
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> OccupancyGrid {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |row| row.as_ref().len());
        let mut grid = BoolGrid::new(n_rows, n_cols, true);
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.as_ref().iter().take(n_cols).enumerate() {
                grid.set(r, c, *value != 1);
            }
        }
        let mut occupancy_grid = OccupancyGrid {
            grid,
            components: UnionFind::new(n_rows * n_cols),
        };
        occupancy_grid.generate_components();
        occupancy_grid
    }

    /// Row count and column count.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.grid.width(), self.grid.height())
    }

    pub fn rows(&self) -> usize {
        self.grid.width()
    }

    pub fn cols(&self) -> usize {
        self.grid.height()
    }

    pub fn in_bounds(&self, pos: &Coordinate) -> bool {
        let (rows, cols) = self.dimensions();
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < rows && (pos.y as usize) < cols
    }

    /// Whether the cell holds a `1`. Coordinates outside the grid are never passable.
    pub fn is_passable(&self, pos: &Coordinate) -> bool {
        self.in_bounds(pos) && !self.grid.get(pos.x as usize, pos.y as usize)
    }

    /// The passable neighbours of `pos`, in [NEIGHBOUR_OFFSETS] order.
    pub fn neighbours(&self, pos: &Coordinate) -> SmallVec<[Coordinate; N_SMALLVEC_SIZE]> {
        NEIGHBOUR_OFFSETS
            .iter()
            .map(|(dr, dc)| Coordinate::new(pos.x + dr, pos.y + dc))
            .filter(|p| self.is_passable(p))
            .collect()
    }

    fn cell_index(&self, pos: &Coordinate) -> usize {
        pos.x as usize * self.cols() + pos.y as usize
    }

    /// Retrieves the component id a given passable [Coordinate] belongs to.
    pub fn get_component(&self, pos: &Coordinate) -> usize {
        self.components.find(self.cell_index(pos))
    }

    /// Checks if start and goal are passable and on the same component.
    pub fn reachable(&self, start: &Coordinate, goal: &Coordinate) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Coordinate, goal: &Coordinate) -> bool {
        if self.is_passable(start) && self.is_passable(goal) {
            !self
                .components
                .equiv(self.cell_index(start), self.cell_index(goal))
        } else {
            true
        }
    }

    /// Checks that `path` is non-empty, stays on passable cells and only takes unit steps.
    pub fn is_valid_path(&self, path: &[Coordinate]) -> bool {
        !path.is_empty()
            && path.iter().all(|p| self.is_passable(p))
            && path.iter().tuple_windows().all(|(a, b)| is_unit_step(a, b))
    }

    /// Links up passable neighbours into the same components. Only the forward half of the
    /// neighbourhood is visited since unions are symmetric.
    fn generate_components(&mut self) {
        let (rows, cols) = self.dimensions();
        for r in 0..rows as i32 {
            for c in 0..cols as i32 {
                let point = Coordinate::new(r, c);
                if !self.is_passable(&point) {
                    continue;
                }
                let parent_ix = self.cell_index(&point);
                [
                    Coordinate::new(r, c + 1),
                    Coordinate::new(r + 1, c - 1),
                    Coordinate::new(r + 1, c),
                    Coordinate::new(r + 1, c + 1),
                ]
                .iter()
                .filter(|p| self.is_passable(p))
                .map(|p| self.cell_index(p))
                .collect::<SmallVec<[usize; 4]>>()
                .into_iter()
                .for_each(|ix| {
                    self.components.union(parent_ix, ix);
                });
            }
        }
    }
}

impl fmt::Display for OccupancyGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for r in 0..self.rows() as i32 {
            let values = (0..self.cols() as i32)
                .map(|c| !self.grid.get(r as usize, c as usize) as i32)
                .collect::<Vec<i32>>();
            writeln!(f, "{:?}", values)?;
        }
        Ok(())
    }
}
