//! Host-side collaborator traits.
//!
//! The controller talks to its host exclusively through these traits;
//! the host framework, widgets, clipboard and project registry all
//! stay behind them. Every trait is object-safe so the host can hand
//! the controller boxed implementations.

use crate::coord::{Extent, PixelPoint};
use crate::reticle::ReticleShape;
use crate::transform::ReferenceSystem;

/// The map canvas: event source, extent owner and cursor host.
pub trait MapCanvas {
    /// Currently visible map bounds.
    fn extent(&self) -> Extent;

    /// Current canvas scale factor.
    fn map_units_per_pixel(&self) -> f64;

    /// Last known pointer position, if the pointer has been over the
    /// canvas at all.
    fn last_pointer_position(&self) -> Option<PixelPoint>;

    /// Blank the native pointer cursor so the reticle is the only
    /// visual indicator.
    fn hide_cursor(&mut self);

    /// Restore the native pointer cursor.
    fn restore_cursor(&mut self);

    /// Switch the canvas to its neutral pan tool.
    fn set_pan_mode(&mut self);
}

/// One of the four coordinate text regions near the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayRegion {
    /// Decimal latitude, top-left of the grid.
    DecimalLat,
    /// Decimal longitude, top-right.
    DecimalLon,
    /// DMS latitude, bottom-left.
    DmsLat,
    /// DMS longitude, bottom-right.
    DmsLon,
}

impl DisplayRegion {
    /// All regions in layout order.
    pub const ALL: [Self; 4] = [
        Self::DecimalLat,
        Self::DecimalLon,
        Self::DmsLat,
        Self::DmsLon,
    ];
}

/// The four positioned text regions. Pure display, no logic.
pub trait CoordinateDisplay {
    /// Make all regions visible.
    fn show(&mut self);

    /// Hide all regions.
    fn hide(&mut self);

    /// Move one region to a screen position.
    fn place(&mut self, region: DisplayRegion, position: PixelPoint);

    /// Replace one region's text.
    fn set_text(&mut self, region: DisplayRegion, text: &str);
}

/// The host's persistent status display.
pub trait StatusBar {
    /// Remove any previously pushed messages.
    fn clear(&mut self);

    /// Show a non-expiring message.
    fn push_persistent(&mut self, message: &str);
}

/// The system clipboard.
pub trait Clipboard {
    /// Replace the clipboard contents.
    fn set_text(&mut self, text: &str);
}

/// Renderer for the reticle overlay.
pub trait OverlayRenderer {
    /// Replace the rendered shape wholesale; no partial updates.
    fn replace(&mut self, shape: &ReticleShape);

    /// Remove the overlay from the canvas.
    fn clear(&mut self);
}

/// The project's reference-system registry.
///
/// Queried at notification time, never trusted from event payloads:
/// both "project loaded" and "reference system changed" re-resolve the
/// current system through this trait.
pub trait ReferenceSystemProvider {
    /// The project's current reference system.
    fn current_reference_system(&self) -> ReferenceSystem;
}
