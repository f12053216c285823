//! Error types for toolbelt-help

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No such utility: '{name}'")]
    NotFound { name: String },

    #[error("Utility '{name}' is already registered")]
    DuplicateName { name: String },

    #[error("Invalid descriptor '{name}': {message}")]
    InvalidDescriptor { name: String, message: String },

    #[error("Unknown utility kind: {kind}")]
    UnknownKind { kind: String },

    #[error("Configuration not found at {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration at {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    pub(crate) fn invalid_descriptor(name: &str, message: impl Into<String>) -> Self {
        Self::InvalidDescriptor {
            name: name.to_string(),
            message: message.into(),
        }
    }
}
