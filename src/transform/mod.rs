//! Coordinate transformation onto the fixed WGS84 target.
//!
//! The tool converts every pointer position from the host project's
//! current reference system to geographic lat/lon for display. This
//! module provides:
//!
//! - [`ReferenceSystem`] - Parsed `AUTHORITY:CODE` identifier
//! - [`TransformBinding`] - The current source→WGS84 transform,
//!   rebound whenever the project's reference system changes
//! - [`TransformError`] - Bind-time and per-point failures
//!
//! A rebind resolves the new projection before committing anything, so
//! a failed rebind leaves the previous valid binding in place and the
//! committed source and projection can never disagree.

mod error;
mod projection;
mod srs;

pub use error::TransformError;
pub use srs::ReferenceSystem;

use tracing::debug;

use crate::coord::{GeoPoint, MapPoint};

use projection::Projection;

/// The currently bound source→WGS84 transform.
///
/// Owns the transform context exclusively: the target is fixed for the
/// binding's lifetime, and the source is replaced wholesale (never
/// mutated) by [`rebind`](Self::rebind).
#[derive(Debug, Clone)]
pub struct TransformBinding {
    source: ReferenceSystem,
    target: ReferenceSystem,
    projection: Projection,
}

impl TransformBinding {
    /// Bind a source reference system against the fixed WGS84 target.
    ///
    /// # Errors
    ///
    /// Fails when the source system cannot be resolved to a supported
    /// projection.
    pub fn new(source: ReferenceSystem) -> Result<Self, TransformError> {
        let projection = Projection::resolve(&source)?;
        Ok(Self {
            source,
            target: ReferenceSystem::wgs84(),
            projection,
        })
    }

    /// Replace the source system and rebuild the transform.
    ///
    /// Idempotent. The projection is resolved before any state is
    /// touched; on failure the previous binding stays in effect, so
    /// the tool keeps working with a stale-but-valid mapping.
    ///
    /// # Errors
    ///
    /// Fails when the new source cannot be resolved; the binding is
    /// unchanged in that case.
    pub fn rebind(&mut self, source: ReferenceSystem) -> Result<(), TransformError> {
        let projection = Projection::resolve(&source)?;
        debug!(from = %self.source, to = %source, "rebinding coordinate transform");
        self.source = source;
        self.projection = projection;
        Ok(())
    }

    /// The currently bound source system.
    #[inline]
    pub fn source(&self) -> &ReferenceSystem {
        &self.source
    }

    /// The fixed target system (always WGS84).
    #[inline]
    pub fn target(&self) -> &ReferenceSystem {
        &self.target
    }

    /// Transform a map point into the target system.
    ///
    /// The identity when source and target are the same system.
    ///
    /// # Errors
    ///
    /// [`TransformError::OutOfDomain`] when the point cannot be
    /// projected; the caller is expected to skip that event rather
    /// than propagate a garbage value.
    pub fn transform(&self, point: MapPoint) -> Result<GeoPoint, TransformError> {
        self.projection.to_wgs84(point)
    }
}
