//! Configuration for the cursor overlay.
//!
//! Groups the tunable constants of the tool into small config structs
//! with sensible defaults:
//!
//! - [`ReticleConfig`] - Crosshair box and arm sizing (in pixels)
//! - [`OverlayLayout`] - Screen offsets of the four text regions

use crate::coord::PixelPoint;
use crate::cursor::DisplayRegion;

/// Sizing of the crosshair reticle, expressed in pixels.
///
/// Both values are multiplied by the canvas's map-units-per-pixel at
/// compute time, so the reticle keeps a constant on-screen size across
/// zoom levels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReticleConfig {
    /// Half-width of the fixed center box, in pixels.
    pub box_half_size_px: f64,
    /// Nominal length of each directional arm, in pixels.
    pub arm_length_px: f64,
}

impl ReticleConfig {
    /// Override the box half-size.
    pub fn with_box_half_size_px(mut self, pixels: f64) -> Self {
        self.box_half_size_px = pixels;
        self
    }

    /// Override the nominal arm length.
    pub fn with_arm_length_px(mut self, pixels: f64) -> Self {
        self.arm_length_px = pixels;
        self
    }
}

impl Default for ReticleConfig {
    fn default() -> Self {
        Self {
            box_half_size_px: 2.0,
            arm_length_px: 100.0,
        }
    }
}

/// Pixel offsets of the four coordinate text regions relative to the
/// pointer, arranged as a 2×2 grid: decimal strings on the first row,
/// DMS strings on the second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayLayout {
    /// X offset of the left column (latitude regions).
    pub left_column_dx: f64,
    /// X offset of the right column (longitude regions).
    pub right_column_dx: f64,
    /// Y offset of the top row (decimal regions).
    pub top_row_dy: f64,
    /// Y offset of the bottom row (DMS regions).
    pub bottom_row_dy: f64,
    /// Where to place the regions on activation when the canvas has no
    /// last-known pointer position.
    pub fallback_position: PixelPoint,
}

impl OverlayLayout {
    /// Override the X offsets of the two text columns.
    pub fn with_column_offsets(mut self, left_dx: f64, right_dx: f64) -> Self {
        self.left_column_dx = left_dx;
        self.right_column_dx = right_dx;
        self
    }

    /// Override the Y offsets of the two text rows.
    pub fn with_row_offsets(mut self, top_dy: f64, bottom_dy: f64) -> Self {
        self.top_row_dy = top_dy;
        self.bottom_row_dy = bottom_dy;
        self
    }

    /// Override the activation position used when the canvas has no
    /// last-known pointer position.
    pub fn with_fallback_position(mut self, position: PixelPoint) -> Self {
        self.fallback_position = position;
        self
    }

    /// Pixel offset of one text region relative to the pointer.
    pub fn offset(&self, region: DisplayRegion) -> (f64, f64) {
        match region {
            DisplayRegion::DecimalLat => (self.left_column_dx, self.top_row_dy),
            DisplayRegion::DecimalLon => (self.right_column_dx, self.top_row_dy),
            DisplayRegion::DmsLat => (self.left_column_dx, self.bottom_row_dy),
            DisplayRegion::DmsLon => (self.right_column_dx, self.bottom_row_dy),
        }
    }

    /// Screen position of one region for a given pointer position.
    pub fn place(&self, region: DisplayRegion, pointer: PixelPoint) -> PixelPoint {
        let (dx, dy) = self.offset(region);
        pointer.offset_by(dx, dy)
    }
}

impl Default for OverlayLayout {
    fn default() -> Self {
        Self {
            left_column_dx: 10.0,
            right_column_dx: 190.0,
            top_row_dy: 10.0,
            bottom_row_dy: 30.0,
            fallback_position: PixelPoint::new(0.0, 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_reticle_sizing() {
        let config = ReticleConfig::default();
        assert_eq!(config.box_half_size_px, 2.0);
        assert_eq!(config.arm_length_px, 100.0);
    }

    #[test]
    fn test_builder_overrides() {
        let config = ReticleConfig::default()
            .with_box_half_size_px(3.0)
            .with_arm_length_px(50.0);
        assert_eq!(config.box_half_size_px, 3.0);
        assert_eq!(config.arm_length_px, 50.0);
    }

    #[test]
    fn test_layout_builder_overrides() {
        let layout = OverlayLayout::default()
            .with_column_offsets(5.0, 95.0)
            .with_row_offsets(-10.0, 15.0)
            .with_fallback_position(PixelPoint::new(50.0, 50.0));
        assert_eq!(layout.offset(DisplayRegion::DecimalLon), (95.0, -10.0));
        assert_eq!(layout.offset(DisplayRegion::DmsLat), (5.0, 15.0));
        assert_eq!(layout.fallback_position, PixelPoint::new(50.0, 50.0));
    }

    #[test]
    fn test_layout_grid_placement() {
        let layout = OverlayLayout::default();
        let pointer = PixelPoint::new(100.0, 200.0);
        assert_eq!(
            layout.place(DisplayRegion::DecimalLat, pointer),
            PixelPoint::new(110.0, 210.0)
        );
        assert_eq!(
            layout.place(DisplayRegion::DmsLon, pointer),
            PixelPoint::new(290.0, 230.0)
        );
    }
}
