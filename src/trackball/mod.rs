//! Arcball orientation control.
//!
//! Pointer positions are mapped to centered window coordinates, lifted onto
//! a virtual unit sphere, and the arc between the drag-start and current
//! sphere points becomes an incremental rotation composed with the
//! committed orientation.

/// Arcball controller holding committed and in-progress orientations.
pub mod controller;
/// Quaternion to rotation-matrix conversion.
pub mod matrix;
/// Arc measurement, degeneracy policy, and composition modes.
pub mod rotation;
/// Virtual-sphere projection.
pub mod sphere;
/// Pixel to normalized window coordinate mapping.
pub mod viewport;

pub use controller::{DragSession, Trackball};
pub use matrix::{rotation_matrix, rotation_matrix3};
pub use rotation::{ArcKind, ArcRotation, CompositionMode, RotationSample};
pub use viewport::Viewport;
