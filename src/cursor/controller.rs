//! The coordinate cursor tool.

use tracing::{debug, info, trace, warn};

use crate::config::{OverlayLayout, ReticleConfig};
use crate::coord::PixelPoint;
use crate::degrees::{format_degrees, Axis};
use crate::reticle::compute_reticle;
use crate::transform::{ReferenceSystem, TransformBinding, TransformError};

use super::collaborators::{
    Clipboard, CoordinateDisplay, DisplayRegion, MapCanvas, OverlayRenderer,
    ReferenceSystemProvider, StatusBar,
};
use super::event::PointerEvent;

/// A pointer-driven canvas tool, as seen by the host framework.
///
/// The host holds the tool behind this trait and forwards its
/// lifecycle and pointer events; it never needs the concrete type.
pub trait PointerTool {
    /// Engage the tool.
    fn activate(&mut self);

    /// Disengage the tool and release its overlay resources.
    fn deactivate(&mut self);

    /// Pointer moved over the canvas.
    fn on_move(&mut self, event: &PointerEvent);

    /// Pointer clicked on the canvas.
    fn on_click(&mut self, event: &PointerEvent);
}

/// Everything the host must supply for the tool to run.
pub struct HostBindings {
    /// The map canvas.
    pub canvas: Box<dyn MapCanvas>,
    /// The four coordinate text regions.
    pub display: Box<dyn CoordinateDisplay>,
    /// The persistent status display.
    pub status: Box<dyn StatusBar>,
    /// The system clipboard.
    pub clipboard: Box<dyn Clipboard>,
    /// The reticle overlay renderer.
    pub overlay: Box<dyn OverlayRenderer>,
    /// The project's reference-system registry.
    pub provider: Box<dyn ReferenceSystemProvider>,
}

/// Tool engagement state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ToolState {
    Inactive,
    Active,
}

/// Display strings derived from the most recent pointer move, reused
/// by the click handler. Reset on every activation.
#[derive(Debug, Clone, PartialEq)]
struct FormattedCoordinate {
    decimal_lat: String,
    decimal_lon: String,
    dms_lat: String,
    dms_lon: String,
}

impl FormattedCoordinate {
    /// The click output: DMS strings first, then the decimal strings.
    fn assemble(&self) -> String {
        format!(
            "{} {} {} {}",
            self.dms_lat, self.dms_lon, self.decimal_lat, self.decimal_lon
        )
    }
}

/// The coordinate-inspection cursor controller.
///
/// Orchestrates the transform, degree formatting and reticle geometry
/// on every pointer move, and assembles the clipboard/status string on
/// click. All operations run synchronously on the host's event thread;
/// the controller owns no queue and holds no lock.
///
/// State machine: Inactive → Active → Inactive. Overlay resources are
/// shown on activation and hidden on deactivation; [`deactivate`]
/// (PointerTool::deactivate) is idempotent so abnormal shutdown paths
/// can call it unconditionally.
pub struct CoordinateCursorController {
    canvas: Box<dyn MapCanvas>,
    display: Box<dyn CoordinateDisplay>,
    status: Box<dyn StatusBar>,
    clipboard: Box<dyn Clipboard>,
    overlay: Box<dyn OverlayRenderer>,
    provider: Box<dyn ReferenceSystemProvider>,
    binding: TransformBinding,
    config: ReticleConfig,
    layout: OverlayLayout,
    state: ToolState,
    retained: Option<FormattedCoordinate>,
}

impl CoordinateCursorController {
    /// Create a controller with default reticle sizing and layout.
    ///
    /// The initial transform is bound against the project's current
    /// reference system, queried through the provider.
    ///
    /// # Errors
    ///
    /// Fails when the project's current reference system cannot be
    /// bound.
    pub fn new(host: HostBindings) -> Result<Self, TransformError> {
        Self::with_config(host, ReticleConfig::default(), OverlayLayout::default())
    }

    /// Create a controller with explicit reticle sizing and layout.
    ///
    /// # Errors
    ///
    /// Fails when the project's current reference system cannot be
    /// bound.
    pub fn with_config(
        host: HostBindings,
        config: ReticleConfig,
        layout: OverlayLayout,
    ) -> Result<Self, TransformError> {
        let source = host.provider.current_reference_system();
        let binding = TransformBinding::new(source)?;
        Ok(Self {
            canvas: host.canvas,
            display: host.display,
            status: host.status,
            clipboard: host.clipboard,
            overlay: host.overlay,
            provider: host.provider,
            binding,
            config,
            layout,
            state: ToolState::Inactive,
            retained: None,
        })
    }

    /// Whether the tool is currently engaged.
    pub fn is_active(&self) -> bool {
        self.state == ToolState::Active
    }

    /// The currently bound source reference system.
    pub fn source_reference_system(&self) -> &ReferenceSystem {
        self.binding.source()
    }

    /// Engage the tool if inactive, otherwise disengage it and hand
    /// the canvas back to its neutral pan tool.
    ///
    /// Disengaging also clears the status display, so a coordinate
    /// message pushed by a click does not outlive the tool.
    pub fn toggle(&mut self) {
        match self.state {
            ToolState::Inactive => self.activate(),
            ToolState::Active => {
                self.status.clear();
                self.deactivate();
                self.canvas.set_pan_mode();
            }
        }
    }

    /// The project was (re)loaded; re-resolve and rebind.
    pub fn notify_project_loaded(&mut self) {
        self.rebind_from_provider();
    }

    /// The project's reference system changed; re-resolve and rebind.
    pub fn notify_reference_system_changed(&mut self) {
        self.rebind_from_provider();
    }

    /// Re-query the registry and rebind the transform.
    ///
    /// The current project state is authoritative; notification
    /// payloads are never consulted. A failed rebind is surfaced once
    /// and the previous valid binding stays in effect.
    fn rebind_from_provider(&mut self) {
        let source = self.provider.current_reference_system();
        if let Err(err) = self.binding.rebind(source.clone()) {
            warn!(
                authid = %source,
                error = %err,
                "cannot bind reference system, keeping previous transform"
            );
        }
    }

    /// Redraw the reticle and reposition the text regions for a
    /// pointer position.
    fn redraw_at(&mut self, pixel: PixelPoint) {
        let extent = self.canvas.extent();
        let scale = self.canvas.map_units_per_pixel();
        let shape = compute_reticle(pixel, &extent, scale, &self.config);
        self.overlay.replace(&shape);
        for region in DisplayRegion::ALL {
            let position = self.layout.place(region, pixel);
            self.display.place(region, position);
        }
    }
}

impl PointerTool for CoordinateCursorController {
    fn activate(&mut self) {
        if self.state == ToolState::Active {
            return;
        }
        self.retained = None;
        self.canvas.hide_cursor();
        self.display.show();
        let pixel = self
            .canvas
            .last_pointer_position()
            .unwrap_or(self.layout.fallback_position);
        self.redraw_at(pixel);
        self.state = ToolState::Active;
        info!(source = %self.binding.source(), "coordinate cursor activated");
    }

    fn deactivate(&mut self) {
        if self.state == ToolState::Inactive {
            return;
        }
        self.display.hide();
        self.overlay.clear();
        self.canvas.restore_cursor();
        self.state = ToolState::Inactive;
        info!("coordinate cursor deactivated");
    }

    fn on_move(&mut self, event: &PointerEvent) {
        if self.state == ToolState::Inactive {
            return;
        }
        // Reticle geometry does not depend on the transform, so the
        // overlay always tracks the pointer even when a point fails
        // to project.
        self.redraw_at(event.pixel);

        match self.binding.transform(event.map) {
            Ok(geo) => {
                let (decimal_lat, dms_lat) = format_degrees(geo.lat, Axis::Lat);
                let (decimal_lon, dms_lon) = format_degrees(geo.lon, Axis::Lon);
                self.display.set_text(DisplayRegion::DecimalLat, &decimal_lat);
                self.display.set_text(DisplayRegion::DecimalLon, &decimal_lon);
                self.display.set_text(DisplayRegion::DmsLat, &dms_lat);
                self.display.set_text(DisplayRegion::DmsLon, &dms_lon);
                trace!(lat = geo.lat, lon = geo.lon, "pointer moved");
                self.retained = Some(FormattedCoordinate {
                    decimal_lat,
                    decimal_lon,
                    dms_lat,
                    dms_lon,
                });
            }
            Err(err) => {
                // Keep the previously displayed text; a later valid
                // event supersedes this one.
                debug!(point = %event.map, error = %err, "skipping text update");
            }
        }
    }

    fn on_click(&mut self, event: &PointerEvent) {
        if self.state == ToolState::Inactive {
            return;
        }
        let Some(retained) = &self.retained else {
            debug!(pixel = ?event.pixel, "click before first move, ignoring");
            return;
        };
        let line = retained.assemble();
        self.status.clear();
        self.status.push_persistent(&line);
        self.clipboard.set_text(&line);
        info!(text = %line, "coordinate copied to clipboard");
    }
}
