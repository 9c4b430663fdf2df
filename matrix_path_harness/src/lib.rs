//! Loads path-query fixtures from JSON files and runs them against a
//! [PathFinder](matrix_pathfinding::PathFinder).
//!
//! A fixture holds one grid and the queries to run on it:
//!
//! ```json
//! {
//!   "dimensions": { "rows": 2, "cols": 2 },
//!   "data": [[1, 0], [0, 1]],
//!   "paths": [{ "start": [0, 0], "end": [1, 1], "expected": "[(0,0),(1,1)]" }]
//! }
//! ```
pub mod error;
pub mod report;

use log::{debug, info};
use matrix_pathfinding::{coord, Coordinate, OccupancyGrid};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub use error::{HarnessError, Result};

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
}

/// One query of a fixture. `expected` is compared with the serialised result ignoring
/// whitespace.
#[derive(Clone, Debug, Deserialize)]
pub struct PathQuery {
    pub start: [i32; 2],
    pub end: [i32; 2],
    pub expected: String,
}

impl PathQuery {
    pub fn start(&self) -> Coordinate {
        coord(self.start[0], self.start[1])
    }

    pub fn end(&self) -> Coordinate {
        coord(self.end[0], self.end[1])
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Fixture {
    pub dimensions: Dimensions,
    pub data: Vec<Vec<i32>>,
    pub paths: Vec<PathQuery>,
}

impl Fixture {
    /// Size of `data`, taking the column count from the first row.
    pub fn data_dimensions(&self) -> Dimensions {
        Dimensions {
            rows: self.data.len(),
            cols: self.data.first().map_or(0, Vec::len),
        }
    }

    /// Checks that the data matches the stored dimensions.
    pub fn validate(&self) -> Result<()> {
        let actual = self.data_dimensions();
        if actual != self.dimensions {
            return Err(HarnessError::DimensionMismatch {
                rows: self.dimensions.rows,
                cols: self.dimensions.cols,
                actual_rows: actual.rows,
                actual_cols: actual.cols,
            });
        }
        Ok(())
    }

    pub fn grid(&self) -> OccupancyGrid {
        OccupancyGrid::from_rows(&self.data)
    }
}

/// Reads and validates a fixture file.
pub fn load_fixture(path: &Path) -> Result<Fixture> {
    let text = fs::read_to_string(path).map_err(|source| HarnessError::Io {
        path: path.to_owned(),
        source,
    })?;
    let fixture: Fixture = serde_json::from_str(&text).map_err(|source| HarnessError::Json {
        path: path.to_owned(),
        source,
    })?;
    fixture.validate()?;
    debug!(
        "Loaded {} with {} queries",
        path.display(),
        fixture.paths.len()
    );
    Ok(fixture)
}

/// Lists the `.json` files directly inside `folder`, sorted by name.
pub fn find_fixtures(folder: &Path) -> Result<Vec<PathBuf>> {
    let mut names = Vec::new();
    for entry in WalkDir::new(folder).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| HarnessError::Walk(folder.to_owned(), e))?;
        let path = entry.path();
        if entry.file_type().is_file() && path.extension().is_some_and(|ext| ext == "json") {
            names.push(path.to_owned());
        }
    }
    if names.is_empty() {
        return Err(HarnessError::NoFixtures(folder.to_owned()));
    }
    info!("Found {} fixtures in {}", names.len(), folder.display());
    Ok(names)
}
