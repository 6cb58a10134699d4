use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Cannot read launch data at {path}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Launch data is missing required column(s): {}", missing.join(", "))]
    Schema { missing: Vec<String> },
    #[error("Malformed launch record on line {line}: {reason}")]
    Record { line: u64, reason: String },
    #[error("Launch data contains no records")]
    Empty,
}

pub type LoadResult<T> = Result<T, LoadError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("Server error: {0}")]
    Server(String),
}

pub type AppResult<T> = Result<T, AppError>;
