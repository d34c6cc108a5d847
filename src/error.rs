//! Error types for loading and querying the fingerprint database.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading definitions or querying the database.
///
/// Every load-time variant aborts the whole load; no partial database is
/// ever returned.
#[derive(Error, Debug)]
pub enum Error {
    /// The definitions directory is a symbolic link.
    #[error("Location for YAML-files can not be a symlink: {}", path.display())]
    DirectoryIsSymlink { path: PathBuf },

    /// The definitions directory is missing or is not a directory.
    #[error("Location for YAML-files is not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    /// Reading a directory entry or a definitions file failed.
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is empty or its top level is not a mapping.
    #[error("No data found inside: {}", path.display())]
    NoData { path: PathBuf },

    /// The file is not valid YAML.
    #[error("Error while loading YAML-file {}: {message}", path.display())]
    Syntax { path: PathBuf, message: String },

    /// The YAML is well-formed but an application or issue has the wrong shape.
    #[error("Invalid definition in {}: {message}", path.display())]
    InvalidDefinition { path: PathBuf, message: String },

    /// `locations` was asked for an application that was never loaded.
    #[error("Unknown application: {0}")]
    UnknownApplication(String),

    /// A configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}
