//! Coordinate value types and pixel/map conversion.
//!
//! Provides the shared geometry vocabulary used by the transform and
//! reticle modules:
//!
//! - [`PixelPoint`] - Canvas pixel position (Y grows downward)
//! - [`MapPoint`] - Position in map units of some reference system
//! - [`GeoPoint`] - Position in the fixed WGS84 target system
//! - [`Extent`] - Visible map bounds in map units
//! - [`pixel_to_map`] - Pixel-space to map-space conversion

mod types;

pub use types::{Extent, GeoPoint, MapPoint, PixelPoint};

/// Converts a canvas pixel position to a map position.
///
/// The visible extent anchors the conversion: pixel X grows eastward
/// from `x_min`, while pixel Y grows *downward* from `y_max` (map Y
/// grows upward, so the Y axis is inverted).
///
/// # Arguments
///
/// * `pixel` - Pointer position in canvas pixels
/// * `extent` - Currently visible map bounds
/// * `map_units_per_pixel` - Canvas scale factor
#[inline]
pub fn pixel_to_map(pixel: PixelPoint, extent: &Extent, map_units_per_pixel: f64) -> MapPoint {
    MapPoint::new(
        pixel.x * map_units_per_pixel + extent.x_min,
        extent.y_max - pixel.y * map_units_per_pixel,
    )
}
