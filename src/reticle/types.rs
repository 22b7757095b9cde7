//! Reticle shape types.

use crate::coord::MapPoint;

/// One straight line segment in map units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Segment start point.
    pub start: MapPoint,
    /// Segment end point.
    pub end: MapPoint,
}

impl Segment {
    /// Create a segment between two map points.
    #[inline]
    pub fn new(start: MapPoint, end: MapPoint) -> Self {
        Self { start, end }
    }

    /// Euclidean length of the segment in map units.
    #[inline]
    pub fn length(&self) -> f64 {
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        dx.hypot(dy)
    }
}

/// The crosshair overlay: a fixed-size center box plus four directional
/// arms, always exactly 8 segments.
///
/// Box edges are four independent segments (not a closed polygon) and
/// are never clipped. Arms start at a box edge midpoint and extend
/// outward; each is independently shortened where it would cross the
/// visible extent. An arm whose computed length is negative (the box
/// itself already past the boundary) is emitted with a reversed span
/// rather than clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReticleShape {
    /// West box edge.
    pub box_left: Segment,
    /// East box edge.
    pub box_right: Segment,
    /// North box edge.
    pub box_top: Segment,
    /// South box edge.
    pub box_bottom: Segment,
    /// Arm extending west from the box.
    pub arm_left: Segment,
    /// Arm extending east from the box.
    pub arm_right: Segment,
    /// Arm extending north from the box.
    pub arm_up: Segment,
    /// Arm extending south from the box.
    pub arm_down: Segment,
}

impl ReticleShape {
    /// All 8 segments in draw order: box edges first, then arms.
    pub fn segments(&self) -> [Segment; 8] {
        [
            self.box_left,
            self.box_right,
            self.box_top,
            self.box_bottom,
            self.arm_left,
            self.arm_right,
            self.arm_up,
            self.arm_down,
        ]
    }
}
