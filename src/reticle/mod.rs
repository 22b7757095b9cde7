//! Crosshair reticle geometry.
//!
//! Computes the overlay shape drawn at the pointer: a fixed-size box
//! centered on the pointer's map position plus four arms reaching
//! toward the edges of the visible extent.
//!
//! - [`Segment`] / [`ReticleShape`] - Output geometry
//! - [`compute_reticle`] - The geometry algorithm

mod types;


pub use types::{ReticleShape, Segment};

use crate::config::ReticleConfig;
use crate::coord::{pixel_to_map, Extent, MapPoint, PixelPoint};

/// Compute the reticle shape for a pointer position.
///
/// Sizing comes from [`ReticleConfig`] scaled by `map_units_per_pixel`,
/// so the reticle has a constant on-screen size regardless of zoom.
/// The shape is recomputed from scratch on every call; nothing is
/// cached between pointer events.
///
/// Each arm nominally extends `arm_length_px` pixels beyond the box.
/// An arm that would cross the extent boundary on its axis is shortened
/// to end exactly on the boundary; the four arms clip independently.
/// If the extent is smaller than the box itself the arithmetic yields a
/// negative arm length and the segment comes out reversed — that span
/// is emitted as-is.
pub fn compute_reticle(
    pixel: PixelPoint,
    extent: &Extent,
    map_units_per_pixel: f64,
    config: &ReticleConfig,
) -> ReticleShape {
    let pos = pixel_to_map(pixel, extent, map_units_per_pixel);
    let box_half = map_units_per_pixel * config.box_half_size_px;
    let arm_nominal = map_units_per_pixel * config.arm_length_px;

    let box_left = Segment::new(
        MapPoint::new(pos.x - box_half, pos.y - box_half),
        MapPoint::new(pos.x - box_half, pos.y + box_half),
    );
    let box_right = Segment::new(
        MapPoint::new(pos.x + box_half, pos.y - box_half),
        MapPoint::new(pos.x + box_half, pos.y + box_half),
    );
    let box_top = Segment::new(
        MapPoint::new(pos.x - box_half, pos.y + box_half),
        MapPoint::new(pos.x + box_half, pos.y + box_half),
    );
    let box_bottom = Segment::new(
        MapPoint::new(pos.x - box_half, pos.y - box_half),
        MapPoint::new(pos.x + box_half, pos.y - box_half),
    );

    let left_len = if pos.x - box_half - arm_nominal > extent.x_min {
        arm_nominal
    } else {
        pos.x - box_half - extent.x_min
    };
    let right_len = if pos.x + box_half + arm_nominal < extent.x_max {
        arm_nominal
    } else {
        extent.x_max - box_half - pos.x
    };
    let down_len = if pos.y - box_half - arm_nominal > extent.y_min {
        arm_nominal
    } else {
        pos.y - box_half - extent.y_min
    };
    let up_len = if pos.y + box_half + arm_nominal < extent.y_max {
        arm_nominal
    } else {
        extent.y_max - box_half - pos.y
    };

    let arm_left = Segment::new(
        MapPoint::new(pos.x - box_half, pos.y),
        MapPoint::new(pos.x - box_half - left_len, pos.y),
    );
    let arm_right = Segment::new(
        MapPoint::new(pos.x + box_half, pos.y),
        MapPoint::new(pos.x + box_half + right_len, pos.y),
    );
    let arm_up = Segment::new(
        MapPoint::new(pos.x, pos.y + box_half),
        MapPoint::new(pos.x, pos.y + box_half + up_len),
    );
    let arm_down = Segment::new(
        MapPoint::new(pos.x, pos.y - box_half),
        MapPoint::new(pos.x, pos.y - box_half - down_len),
    );

    ReticleShape {
        box_left,
        box_right,
        box_top,
        box_bottom,
        arm_left,
        arm_right,
        arm_up,
        arm_down,
    }
}
