use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{source_name} CSV error: {source}")]
    Csv {
        source_name: String,
        #[source]
        source: csv::Error,
    },

    #[error("{source_name} line {line}: expected {expected} fields, found {found}")]
    RowShape {
        source_name: String,
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("{source_name} line {line}: column '{field}' is not an integer: '{value}'")]
    InvalidInteger {
        source_name: String,
        line: u64,
        field: String,
        value: String,
    },

    #[error("{} has no usable file name", .path.display())]
    InvalidFileName { path: PathBuf },
}

impl ParseError {
    pub(crate) fn csv(source_name: &str, source: csv::Error) -> Self {
        if let csv::ErrorKind::UnequalLengths {
            pos,
            expected_len,
            len,
        } = source.kind()
        {
            return ParseError::RowShape {
                source_name: source_name.to_string(),
                line: pos.as_ref().map(|pos| pos.line()).unwrap_or_default(),
                expected: *expected_len as usize,
                found: *len as usize,
            };
        }
        ParseError::Csv {
            source_name: source_name.to_string(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;
