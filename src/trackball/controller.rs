use std::fmt;

use glam::{Mat4, Quat, Vec3};

use super::matrix::rotation_matrix;
use super::rotation::{
    compose, ArcKind, ArcRotation, CompositionMode, RotationSample,
};
use super::sphere::project;
use super::viewport::Viewport;
use crate::error::TrackballError;
use crate::options::TrackballOptions;

/// State captured by a pointer-down and held until the matching
/// pointer-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Sphere point under the pointer when the drag began.
    pub start: Vec3,
}

type Observer = Box<dyn FnMut(&RotationSample)>;

/// Arcball orientation controller.
///
/// Owns the committed orientation, the in-progress orientation of an
/// active drag, and the viewport used to map pixels onto the sphere.
/// Confined to the thread that dispatches input events.
pub struct Trackball {
    viewport: Viewport,
    committed: Quat,
    in_progress: Quat,
    drag: Option<DragSession>,
    mode: CompositionMode,
    min_arc_degrees: f32,
    observer: Option<Observer>,
}

impl Trackball {
    /// Create an idle controller with identity orientation and default
    /// options.
    pub fn new(width: u32, height: u32) -> Result<Self, TrackballError> {
        Self::with_options(width, height, &TrackballOptions::default())
    }

    /// Create an idle controller configured from `options`.
    pub fn with_options(
        width: u32,
        height: u32,
        options: &TrackballOptions,
    ) -> Result<Self, TrackballError> {
        options.validate()?;
        Ok(Self {
            viewport: Viewport::new(width, height)?,
            committed: Quat::IDENTITY,
            in_progress: Quat::IDENTITY,
            drag: None,
            mode: options.composition,
            min_arc_degrees: options.min_arc_degrees,
            observer: None,
        })
    }

    /// Apply composition mode and degeneracy threshold from `options`.
    /// Invalid options are rejected and the current settings kept.
    pub fn apply_options(
        &mut self,
        options: &TrackballOptions,
    ) -> Result<(), TrackballError> {
        options.validate()?;
        self.mode = options.composition;
        self.min_arc_degrees = options.min_arc_degrees;
        Ok(())
    }

    // ── Viewport ──

    /// Current viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Replace the viewport. Invalid dimensions are rejected and the
    /// previous viewport stays in effect.
    pub fn set_viewport(
        &mut self,
        width: u32,
        height: u32,
    ) -> Result<(), TrackballError> {
        match Viewport::new(width, height) {
            Ok(viewport) => {
                if self.drag.is_some() {
                    log::debug!("viewport changed during an active drag");
                }
                log::debug!("viewport set to {width}x{height}");
                self.viewport = viewport;
                Ok(())
            }
            Err(e) => {
                log::warn!("rejected viewport {width}x{height}");
                Err(e)
            }
        }
    }

    /// Sphere point under a pixel position.
    #[must_use]
    pub fn sphere_point(&self, x: f32, y: f32) -> Vec3 {
        project(self.viewport.to_normalized(x, y))
    }

    // ── Drag session ──

    /// Start a drag at a pixel position. A drag already in progress is
    /// re-anchored here without committing.
    pub fn begin_drag(&mut self, x: f32, y: f32) {
        let start = self.sphere_point(x, y);
        if self.drag.is_some() {
            log::debug!("drag re-anchored at ({x}, {y})");
        } else {
            log::debug!("drag started at ({x}, {y})");
        }
        self.drag = Some(DragSession { start });
        self.in_progress = self.committed;
    }

    /// Advance the active drag to a pixel position and return the live
    /// orientation. Without an active drag this only reads the committed
    /// orientation.
    pub fn update_drag(&mut self, x: f32, y: f32) -> Quat {
        let Some(session) = self.drag else {
            return self.committed;
        };
        let end = self.sphere_point(x, y);
        let arc = ArcRotation::between(session.start, end);

        match arc.kind(self.min_arc_degrees) {
            ArcKind::Identity => self.in_progress = self.committed,
            ArcKind::Antipodal => {
                log::trace!("antipodal arc, orientation held");
            }
            ArcKind::Proper => {
                self.in_progress =
                    compose(self.mode, arc.to_quat(), self.committed);
                log::trace!(
                    "arc axis=({:.4}, {:.4}, {:.4}) dot={:.6} angle={:.4}deg",
                    arc.axis.x,
                    arc.axis.y,
                    arc.axis.z,
                    arc.dot,
                    arc.angle_degrees,
                );
                if let Some(observer) = self.observer.as_mut() {
                    observer(&RotationSample {
                        start: session.start,
                        end,
                        arc,
                        orientation: self.in_progress,
                    });
                }
            }
        }
        self.in_progress
    }

    /// Finish the active drag at a pixel position and commit the result.
    /// Returns the committed orientation; a no-op when idle.
    pub fn end_drag(&mut self, x: f32, y: f32) -> Quat {
        if self.drag.is_none() {
            return self.committed;
        }
        let _ = self.update_drag(x, y);
        self.committed = self.in_progress.normalize();
        self.in_progress = self.committed;
        self.drag = None;
        log::debug!("drag committed at ({x}, {y})");
        self.committed
    }

    /// Abandon the active drag, restoring the orientation from before it
    /// began. A no-op when idle.
    pub fn cancel_drag(&mut self) {
        if self.drag.take().is_some() {
            self.in_progress = self.committed;
            log::debug!("drag cancelled");
        }
    }

    /// Return to the identity orientation, closing any active drag.
    pub fn reset(&mut self) {
        self.committed = Quat::IDENTITY;
        self.in_progress = Quat::IDENTITY;
        self.drag = None;
        log::debug!("orientation reset");
    }

    /// Whether a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// The active drag session, if any.
    #[must_use]
    pub fn drag_session(&self) -> Option<DragSession> {
        self.drag
    }

    // ── Orientation ──

    /// Orientation to render now: in-progress while dragging, committed
    /// otherwise.
    #[must_use]
    pub fn orientation(&self) -> Quat {
        if self.drag.is_some() {
            self.in_progress
        } else {
            self.committed
        }
    }

    /// Orientation persisted by the last completed drag.
    #[must_use]
    pub fn committed(&self) -> Quat {
        self.committed
    }

    /// Model rotation matrix for the current frame.
    #[must_use]
    pub fn rotation_matrix(&self) -> Mat4 {
        rotation_matrix(self.orientation())
    }

    /// How drag increments are composed.
    #[must_use]
    pub fn composition_mode(&self) -> CompositionMode {
        self.mode
    }

    /// Change how subsequent drag samples are composed.
    pub fn set_composition_mode(&mut self, mode: CompositionMode) {
        self.mode = mode;
    }

    /// Arcs shorter than this, or this close to a half turn, are degenerate.
    #[must_use]
    pub fn min_arc_degrees(&self) -> f32 {
        self.min_arc_degrees
    }

    // ── Observability ──

    /// Install a callback invoked with every composed drag sample.
    pub fn set_observer(
        &mut self,
        observer: impl FnMut(&RotationSample) + 'static,
    ) {
        self.observer = Some(Box::new(observer));
    }

    /// Remove the drag-sample callback.
    pub fn clear_observer(&mut self) {
        self.observer = None;
    }
}

impl fmt::Debug for Trackball {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trackball")
            .field("viewport", &self.viewport)
            .field("committed", &self.committed)
            .field("in_progress", &self.in_progress)
            .field("drag", &self.drag)
            .field("mode", &self.mode)
            .field("min_arc_degrees", &self.min_arc_degrees)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}
