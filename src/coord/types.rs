//! Coordinate value types shared across the crate.

use std::fmt;

/// A pointer position in canvas pixel space.
///
/// Pixel Y grows downward from the top of the canvas, matching the
/// convention of the host's event source.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelPoint {
    /// X coordinate in pixels, 0 at the left edge.
    pub x: f64,
    /// Y coordinate in pixels, 0 at the top edge.
    pub y: f64,
}

impl PixelPoint {
    /// Create a pixel position.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Return this position shifted by a pixel delta.
    #[inline]
    pub fn offset_by(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// A point in map units of some reference system.
///
/// Map Y grows upward (north), the opposite of pixel Y. Points are
/// never mutated; transforms always produce a new point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    /// X coordinate (east-west) in map units.
    pub x: f64,
    /// Y coordinate (north-south) in map units.
    pub y: f64,
}

impl MapPoint {
    /// Create a map point.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A point known to be in the fixed geographic target system (WGS84).
///
/// Only produced by a successful transform; latitude and longitude are
/// decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
}

impl GeoPoint {
    /// Create a geographic point from decimal degrees.
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// The rectangular map-coordinate bounds currently visible on screen.
///
/// Supplied fresh by the canvas on every pointer event; never cached
/// across events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    /// West edge in map units.
    pub x_min: f64,
    /// East edge in map units.
    pub x_max: f64,
    /// South edge in map units.
    pub y_min: f64,
    /// North edge in map units.
    pub y_max: f64,
}

impl Extent {
    /// Create an extent from its edges.
    #[inline]
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Width of the extent in map units.
    #[inline]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Height of the extent in map units.
    #[inline]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Whether a map point lies within the extent (edges inclusive).
    #[inline]
    pub fn contains(&self, point: MapPoint) -> bool {
        point.x >= self.x_min
            && point.x <= self.x_max
            && point.y >= self.y_min
            && point.y <= self.y_max
    }
}
