//! Binary error type.

use std::path::PathBuf;

use tabview::TableError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FleetError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Table(#[from] TableError),

    #[error("{0}")]
    Argument(String),

    #[error("could not determine the home directory")]
    NoHomeDir,

    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

impl FleetError {
    pub fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }

    pub fn json(path: impl Into<PathBuf>) -> impl FnOnce(serde_json::Error) -> Self {
        let path = path.into();
        move |source| Self::Json { path, source }
    }
}
