//! Error types for coordinate transformation.

use thiserror::Error;

/// Errors that can occur while binding or applying a transform.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    /// The reference-system identifier is not of the form
    /// `AUTHORITY:CODE` (e.g. `EPSG:4326`).
    #[error("Malformed reference system identifier: {0:?}")]
    InvalidAuthority(String),

    /// The identifier parses but names a system this engine has no
    /// projection for.
    #[error("Unsupported reference system: {0}")]
    UnsupportedReferenceSystem(String),

    /// The point lies outside the mathematical domain of the bound
    /// projection (non-finite coordinates included).
    #[error("Point ({x}, {y}) is outside the projection domain")]
    OutOfDomain { x: f64, y: f64 },
}
