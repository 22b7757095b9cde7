//! GeoCursor - Coordinate-inspection cursor for map-viewing hosts
//!
//! This library implements the engine behind an interactive coordinate
//! readout tool: as the pointer moves over a map canvas it converts the
//! pointer's map-projected position to geographic WGS84 lat/lon, formats
//! both decimal-degree and degrees/minutes/seconds strings, computes a
//! crosshair reticle clipped to the visible extent, and on click hands
//! the assembled coordinate string to the host's clipboard and status
//! display.
//!
//! The host framework (canvas, widgets, clipboard, project registry)
//! stays behind the traits in [`cursor`]; everything here is pure,
//! synchronous, single-threaded computation.
//!
//! # High-Level API
//!
//! ```ignore
//! use geocursor::cursor::{CoordinateCursorController, HostBindings, PointerTool};
//!
//! let mut tool = CoordinateCursorController::new(HostBindings {
//!     canvas, display, status, clipboard, overlay, provider,
//! })?;
//!
//! tool.activate();
//! tool.on_move(&event);   // updates text regions and the reticle
//! tool.on_click(&event);  // copies the coordinate string
//! ```

pub mod config;
pub mod coord;
pub mod cursor;
pub mod degrees;
pub mod logging;
pub mod reticle;
pub mod transform;

/// Version of the geocursor library.
///
/// Defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
