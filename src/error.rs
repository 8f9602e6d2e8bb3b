// src/error.rs
use std::{io, path::PathBuf};

use thiserror::Error;

/// Run-level failures. Anything here aborts the run before the dataset is
/// written; per-record problems are reported through the op summaries instead.
#[derive(Debug, Error)]
pub enum MaintError {
    #[error("{action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed dataset {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("audio directory not found: {} (create it and add CC_VVV.mp3 files)", .0.display())]
    MissingAudioDir(PathBuf),

    #[error("path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("could not build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("{0}")]
    Usage(String),
}

impl MaintError {
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        MaintError::Io { action, path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, MaintError>;
