use log::{debug, info};

use crate::astar::astar_linear;
use crate::cache::{CacheMode, PathCache};
use crate::error::PathError;
use crate::grid::OccupancyGrid;
use crate::{Coordinate, Path, N_SMALLVEC_SIZE, STEP_COST};
use smallvec::SmallVec;

/// Settings of a [PathFinder].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PathFinderConfig {
    /// Log the partial path of every node the search expands, at `debug` level.
    pub trace_search: bool,
    pub cache_mode: CacheMode,
}

/// Answers shortest path queries on an [OccupancyGrid] it owns, remembering every path it
/// finds in a [PathCache].
#[derive(Clone, Debug)]
pub struct PathFinder {
    grid: OccupancyGrid,
    cache: PathCache,
    pub config: PathFinderConfig,
}

impl PathFinder {
    pub fn new(grid: OccupancyGrid) -> PathFinder {
        PathFinder::with_config(grid, PathFinderConfig::default())
    }

    pub fn with_config(grid: OccupancyGrid, config: PathFinderConfig) -> PathFinder {
        PathFinder {
            grid,
            cache: PathCache::new(),
            config,
        }
    }

    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    pub fn cache(&self) -> &PathCache {
        &self.cache
    }

    /// Returns a path from `start` to `end`, reusing a cached path when the configured
    /// [CacheMode] finds one and searching otherwise. Paths found by searching are appended to
    /// the cache; cache hits are not.
    pub fn find_path(&mut self, start: Coordinate, end: Coordinate) -> Result<Path, PathError> {
        if !self.cache.is_empty() {
            if let Some(path) = self.cache.lookup(self.config.cache_mode, &start, &end) {
                return Ok(path);
            }
        }
        let path = self.search(start, end)?;
        self.cache.push(path.clone());
        Ok(path)
    }

    /// Computes a path from `start` to `end` with A*, ignoring and leaving alone the cache.
    ///
    /// Endpoints are validated first: out of bounds before blocked, start before end. The
    /// heuristic is the [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry),
    /// which overestimates when diagonal steps are available, so the result is short but not
    /// guaranteed to be the shortest.
    pub fn search(&self, start: Coordinate, end: Coordinate) -> Result<Path, PathError> {
        self.check_endpoints(&start, &end)?;
        if self.grid.unreachable(&start, &end) {
            info!("{} is not reachable from {}", end, start);
            return Err(PathError::NotFound { start, end });
        }
        debug!("{} is reachable from {}, computing path", end, start);
        astar_linear(
            &start,
            |node| {
                self.grid
                    .neighbours(node)
                    .into_iter()
                    .map(|p| (p, STEP_COST))
                    .collect::<SmallVec<[_; N_SMALLVEC_SIZE]>>()
            },
            |node| node.manhattan_distance(&end),
            |node| *node == end,
            self.config.trace_search,
        )
        .map(|(path, _cost)| path)
        .ok_or(PathError::NotFound { start, end })
    }

    fn check_endpoints(&self, start: &Coordinate, end: &Coordinate) -> Result<(), PathError> {
        if !self.grid.in_bounds(start) {
            info!("Start {:?} is not valid", start);
            return Err(PathError::InvalidStart(*start));
        }
        if !self.grid.in_bounds(end) {
            info!("End {:?} is not valid", end);
            return Err(PathError::InvalidEnd(*end));
        }
        if !self.grid.is_passable(start) {
            info!("Start {:?} is not traversable", start);
            return Err(PathError::UnreachableStart(*start));
        }
        if !self.grid.is_passable(end) {
            info!("End {:?} is not traversable", end);
            return Err(PathError::UnreachableEnd(*end));
        }
        Ok(())
    }
}
