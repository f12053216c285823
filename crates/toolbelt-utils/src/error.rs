//! Error types for toolbelt-utils

use std::path::PathBuf;

/// Result type for toolbelt-utils operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the helpers when given arguments they cannot handle
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{value} is out of range ({min} to {max})")]
    OutOfRange { value: i64, min: i64, max: i64 },

    #[error("{value} cannot be written out in words")]
    NotRepresentable { value: f64 },

    #[error("Invalid roman numeral '{input}': unexpected '{symbol}'")]
    InvalidRoman { input: String, symbol: char },

    #[error("Step value cannot be 0")]
    ZeroStep,

    #[error("Delimiter cannot be empty")]
    EmptyDelimiter,

    #[error("{arg} value cannot have more than {max} decimal places")]
    TooManyDecimals { arg: &'static str, max: usize },

    #[error("Unmatched tags:\n{}", .problems.join("\n"))]
    UnmatchedTags { problems: Vec<String> },

    #[error("Menu requires at least one option")]
    EmptyMenu,

    #[error("Invalid table shape: {message}")]
    TableShape { message: String },

    #[error("Row index {index} out of range (table has {rows} rows)")]
    RowOutOfRange { index: usize, rows: usize },

    #[error("Invalid countdown: {message}")]
    InvalidCountdown { message: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn table_shape(message: impl Into<String>) -> Self {
        Self::TableShape {
            message: message.into(),
        }
    }

    pub(crate) fn countdown(message: impl Into<String>) -> Self {
        Self::InvalidCountdown {
            message: message.into(),
        }
    }
}
