//! Projection math for the supported source systems.
//!
//! This is deliberately not a geodesy library: the engine resolves a
//! small, fixed set of source systems to their inverse projections
//! onto WGS84. Anything else fails at bind time.

use crate::coord::{GeoPoint, MapPoint};

use super::error::TransformError;
use super::srs::{ReferenceSystem, WGS84_CODE};

/// WGS84 semi-major axis in meters, the sphere radius used by the
/// spherical Web Mercator projection.
const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Inverse projection from a source system onto WGS84.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Projection {
    /// Source coordinates are already geographic degrees (x=lon, y=lat).
    Geographic,
    /// Spherical Web Mercator meters (`EPSG:3857` and its legacy alias).
    WebMercator,
}

impl Projection {
    /// Resolve a reference system to its inverse projection.
    ///
    /// # Errors
    ///
    /// [`TransformError::UnsupportedReferenceSystem`] when the system is
    /// well-formed but not one this engine can project.
    pub(crate) fn resolve(srs: &ReferenceSystem) -> Result<Self, TransformError> {
        match (srs.authority(), srs.code()) {
            ("EPSG", WGS84_CODE) => Ok(Self::Geographic),
            // 900913 is the pre-standardization "Google Mercator" alias
            ("EPSG", 3857) | ("EPSG", 900913) => Ok(Self::WebMercator),
            _ => Err(TransformError::UnsupportedReferenceSystem(srs.authid())),
        }
    }

    /// Project a source point onto WGS84.
    ///
    /// # Errors
    ///
    /// [`TransformError::OutOfDomain`] when either coordinate is
    /// non-finite.
    pub(crate) fn to_wgs84(&self, point: MapPoint) -> Result<GeoPoint, TransformError> {
        if !point.x.is_finite() || !point.y.is_finite() {
            return Err(TransformError::OutOfDomain {
                x: point.x,
                y: point.y,
            });
        }

        match self {
            Self::Geographic => Ok(GeoPoint::new(point.y, point.x)),
            Self::WebMercator => {
                let lon = (point.x / EARTH_RADIUS_M).to_degrees();
                let lat = (point.y / EARTH_RADIUS_M).sinh().atan().to_degrees();
                Ok(GeoPoint::new(lat, lon))
            }
        }
    }
}
