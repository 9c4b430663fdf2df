//! Failures of a single path query.

use thiserror::Error;

use crate::Coordinate;

/// Terminal outcome of a [find_path](crate::PathFinder::find_path) call that did not produce a
/// path. None of these are retried.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    #[error("start {0:?} is outside the grid")]
    InvalidStart(Coordinate),

    #[error("end {0:?} is outside the grid")]
    InvalidEnd(Coordinate),

    #[error("start {0:?} is not traversable")]
    UnreachableStart(Coordinate),

    #[error("end {0:?} is not traversable")]
    UnreachableEnd(Coordinate),

    #[error("no path from {start:?} to {end:?}")]
    NotFound { start: Coordinate, end: Coordinate },
}

impl PathError {
    /// True for the four endpoint checks that run before any search.
    pub fn is_endpoint_error(&self) -> bool {
        !matches!(self, PathError::NotFound { .. })
    }
}
