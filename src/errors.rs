// src/errors.rs

//! Crate-wide error type and helpers.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::ErrorKind;

#[derive(Error, Debug)]
pub enum DirwatchError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to list directory {path:?}: {source}")]
    ListDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to scan {path:?}: {source}")]
    Scan {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("watch cycle panicked: {0}")]
    CyclePanicked(String),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DirwatchError {
    /// Transient filesystem trouble vs. anything else.
    ///
    /// The watch loop backs off the same way for both; the kind only decides
    /// how the failure is reported.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DirwatchError::Io(_) | DirwatchError::ListDir { .. } | DirwatchError::Scan { .. } => {
                ErrorKind::Io
            }
            DirwatchError::Config(_)
            | DirwatchError::CyclePanicked(_)
            | DirwatchError::Toml(_)
            | DirwatchError::Other(_) => ErrorKind::Unexpected,
        }
    }
}

pub type Result<T> = std::result::Result<T, DirwatchError>;
