//! Model placement: centering and unit-scaling a point set before the
//! trackball rotation is applied.

/// Axis-aligned bounds and the canonical model frame.
pub mod frame;

pub use frame::{Aabb, ModelFrame};
