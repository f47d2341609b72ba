//! Error types.
//!
//! Classification has no error type at all - it always produces a code.
//! Only loading boundary data and deriving identifiers can fail.

use std::path::PathBuf;

use thiserror::Error;

/// Failure reading or parsing boundary GeoJSON.
#[derive(Debug, Error)]
pub enum BoundaryError {
    #[error("failed to read boundary file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid boundary GeoJSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("feature {id}: position has {len} value(s), need at least [lng, lat]")]
    InvalidPosition { id: String, len: usize },
}

/// Rejected input to node identifier derivation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("key material is empty; a digest of nothing is not an identity")]
    EmptyKey,
}
