//! Error types for the sorter
//!
//! Each failure class has its own enum so callers can tell a fatal startup
//! problem from a per-image or per-move one.

use std::path::PathBuf;
use thiserror::Error;

/// Problems with `configuration.json`. Always fatal at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not access configuration file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed configuration file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Key '{0}' is not a single character.")]
    InvalidKey(String),

    #[error("Key {0} is not a valid key. Only alphanumeric keys are supported.")]
    UnsupportedKey(#[from] UnsupportedKeyError),

    #[error("Key '{0}' is bound to more than one destination.")]
    DuplicateKey(char),
}

/// A character that has no entry in the key table.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("'{0}'")]
pub struct UnsupportedKeyError(pub char);

/// The current image could not be decoded for display or histogram.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Image(#[from] image::ImageError),
}

/// A move of the current image into a destination folder failed.
#[derive(Error, Debug)]
pub enum MoveError {
    #[error("No image is waiting to be sorted")]
    NoCurrentImage,

    #[error("No destination is bound to key '{0}'")]
    UnknownDestination(char),

    #[error("{0} already exists")]
    Collision(PathBuf),

    #[error("Could not move {} to {}: {source}", from.display(), to.display())]
    Io {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures while starting a sort session.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Could not prepare {}: {source}", path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
