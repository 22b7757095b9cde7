//! Pointer event snapshot.

use crate::coord::{MapPoint, PixelPoint};

/// One pointer event as delivered by the host canvas.
///
/// Carries the same position in both spaces; the host owns the
/// pixel↔map relationship. Transient: each event supersedes the
/// previous one, and only display strings derived from the most recent
/// event are retained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Pointer position in canvas pixels.
    pub pixel: PixelPoint,
    /// Pointer position in map units of the project's current system.
    pub map: MapPoint,
}

impl PointerEvent {
    /// Create an event snapshot.
    #[inline]
    pub fn new(pixel: PixelPoint, map: MapPoint) -> Self {
        Self { pixel, map }
    }
}
