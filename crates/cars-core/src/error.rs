// crates/cars-core/src/error.rs

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransformError {
    #[error("File I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid input directory pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Failed to list input directory: {0}")]
    Glob(#[from] glob::GlobError),

    #[error(transparent)]
    Parse(#[from] cars_parser::ParseError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration in {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

impl TransformError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TransformError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, TransformError>;
