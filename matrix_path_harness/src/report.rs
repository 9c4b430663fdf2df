//! Running fixtures and printing their results.
use console::Style;
use log::warn;
use matrix_pathfinding::render::{
    format_path, overlay_path, same_ignoring_whitespace, DisplayCell,
};
use matrix_pathfinding::{
    Coordinate, OccupancyGrid, Path, PathError, PathFinder, PathFinderConfig,
};
use std::time::{Duration, Instant};

use crate::{Fixture, PathQuery};

/// Serialises the outcome of a query the way fixtures spell their expectations: a path as
/// `[(r,c),...]`, a missing path as `None` and a rejected endpoint as `[]`.
pub fn result_string(result: &Result<Path, PathError>) -> String {
    match result {
        Ok(path) => format_path(path),
        Err(PathError::NotFound { .. }) => "None".to_owned(),
        Err(_) => "[]".to_owned(),
    }
}

/// Outcome of one query of a fixture.
#[derive(Clone, Debug)]
pub struct QueryReport {
    pub query: PathQuery,
    pub result: Result<Path, PathError>,
    pub elapsed: Duration,
}

impl QueryReport {
    pub fn found(&self) -> String {
        result_string(&self.result)
    }

    pub fn matches(&self) -> bool {
        same_ignoring_whitespace(&self.found(), &self.query.expected)
    }
}

/// Runs every query of `fixture` in order against a single [PathFinder], so later queries can
/// be answered from paths cached by earlier ones.
pub fn run_fixture(fixture: &Fixture, config: PathFinderConfig) -> Vec<QueryReport> {
    let mut finder = PathFinder::with_config(fixture.grid(), config);
    fixture
        .paths
        .iter()
        .map(|query| {
            let begin = Instant::now();
            let result = finder.find_path(query.start(), query.end());
            let elapsed = begin.elapsed();
            let report = QueryReport {
                query: query.clone(),
                result,
                elapsed,
            };
            if !report.matches() {
                warn!(
                    "{:?} -> {:?}: found {}, expected {}",
                    query.start,
                    query.end,
                    report.found(),
                    report.query.expected
                );
            }
            report
        })
        .collect()
}

/// Renders the grid with the path cells drawn as a blue `1`.
pub fn render_grid(grid: &OccupancyGrid, path: &[Coordinate]) -> String {
    let marker = Style::new().blue();
    overlay_path(grid, path)
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| match cell {
                    DisplayCell::Path => marker.apply_to(cell).to_string(),
                    _ => cell.to_string(),
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
