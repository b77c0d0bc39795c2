// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a run. The table/date core never produces these;
/// only I/O, selectors, profiles and the export layer do.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV write failed: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("invalid site profile: {0}")]
    Profile(#[from] toml::de::Error),

    #[error("invalid CSS selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    #[error("unknown site '{0}' (see --list-sites)")]
    UnknownSite(String),

    #[error("{0}")]
    Usage(String),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
