//! Error types for the walk engine.

use thiserror::Error;

/// Walk engine error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Metapath too short to define a step pattern.
    #[error("invalid metapath {metapath:?}: at least two node types are required")]
    InvalidMetapath { metapath: String },

    /// Input record with an empty node label.
    #[error("malformed record {record:?}: empty node label")]
    MalformedRecord { record: String },

    /// Underlying I/O error.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, Error>;
