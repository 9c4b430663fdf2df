//! Error types for the fixture harness

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not parse {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("could not walk {0}: {1}")]
    Walk(PathBuf, walkdir::Error),

    #[error("size of data is {actual_rows}x{actual_cols}, not the stored {rows}x{cols}")]
    DimensionMismatch {
        rows: usize,
        cols: usize,
        actual_rows: usize,
        actual_cols: usize,
    },

    #[error("no fixtures found in folder {0}")]
    NoFixtures(PathBuf),
}

pub type Result<T> = std::result::Result<T, HarnessError>;
