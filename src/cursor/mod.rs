//! The coordinate cursor tool and its host boundary.
//!
//! Everything the tool needs from its host lives behind the traits in
//! this module:
//!
//! - [`PointerTool`] - The tool interface the host drives
//! - [`CoordinateCursorController`] - The tool implementation
//! - [`HostBindings`] - The collaborator set supplied at construction
//! - [`PointerEvent`] - One pointer event snapshot
//!
//! All collaborator calls happen synchronously on the host's event
//! thread; the controller holds no queue and no lock.

mod collaborators;
mod controller;
mod event;

pub use collaborators::{
    Clipboard, CoordinateDisplay, DisplayRegion, MapCanvas, OverlayRenderer,
    ReferenceSystemProvider, StatusBar,
};
pub use controller::{CoordinateCursorController, HostBindings, PointerTool};
pub use event::PointerEvent;
