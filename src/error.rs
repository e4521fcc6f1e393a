//! Error types for truckload

use crate::types::PackStage;
use thiserror::Error;

/// Errors surfaced by the packing engine and its collaborators
#[derive(Debug, Error)]
pub enum Error {
    /// A capacity token was not `<height>x<width>` with integer dimensions
    #[error("invalid truck spec: {0}")]
    InvalidFleet(String),

    /// An empty form string would yield a zero-height parcel
    #[error("empty parcel form")]
    EmptyParcel,

    /// Unrecognized packing mode
    #[error("unknown mode '{0}' (expected 'simple' or 'complex')")]
    UnknownMode(String),

    /// Unrecognized output format
    #[error("unknown format '{0}' (expected 'text' or 'json')")]
    UnknownFormat(String),

    /// Parcels left over after a pass ran out of trucks
    #[error("insufficient truck capacity in {stage}: {} parcel(s) unplaced", unplaced.len())]
    CapacityExceeded {
        /// Pass that exhausted the fleet
        stage: PackStage,
        /// Form strings of the parcels that were not placed
        unplaced: Vec<String>,
    },

    /// Shape catalog could not be read or parsed
    #[error("catalog error: {0}")]
    Catalog(String),

    /// Config file could not be read or parsed
    #[error("config error: {0}")]
    Config(String),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;
