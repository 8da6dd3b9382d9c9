//! Arc between two sphere points and its composition with an orientation.

use glam::{Quat, Vec3};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How a drag increment is combined with the committed orientation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum CompositionMode {
    /// The increment turns the rendered model about a fixed world axis.
    ///
    /// Stored as `committed ∘ increment`, because
    /// [`rotation_matrix`](super::rotation_matrix) renders the inverse of
    /// the stored orientation.
    #[default]
    World,
    /// The increment turns the rendered model about an axis fixed in the
    /// model's own frame. Stored as `increment ∘ committed`.
    Local,
}

/// Classification of an arc for the degenerate-axis policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcKind {
    /// Start and end coincide: no rotation.
    Identity,
    /// Start and end are opposite: the axis is not unique.
    Antipodal,
    /// A well-defined rotation.
    Proper,
}

/// Rotation carrying one unit-sphere point toward another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcRotation {
    /// Unit axis `normalize(end × start)`, or zero when undefined.
    pub axis: Vec3,
    /// Cosine of the arc, clamped to `[-1, 1]`.
    pub dot: f32,
    /// Arc angle in degrees.
    pub angle_degrees: f32,
}

impl ArcRotation {
    /// Measure the arc between two sphere points.
    #[must_use]
    pub fn between(start: Vec3, end: Vec3) -> Self {
        let axis = end.cross(start).normalize_or_zero();
        let dot = start.dot(end).clamp(-1.0, 1.0);
        Self {
            axis,
            dot,
            angle_degrees: dot.acos().to_degrees(),
        }
    }

    /// Classify the arc, treating angles within `epsilon_degrees` of 0 or
    /// 180 as degenerate.
    #[must_use]
    pub fn kind(&self, epsilon_degrees: f32) -> ArcKind {
        if self.axis == Vec3::ZERO {
            return if self.dot >= 0.0 {
                ArcKind::Identity
            } else {
                ArcKind::Antipodal
            };
        }
        if self.angle_degrees < epsilon_degrees {
            ArcKind::Identity
        } else if self.angle_degrees > 180.0 - epsilon_degrees {
            ArcKind::Antipodal
        } else {
            ArcKind::Proper
        }
    }

    /// Quaternion rotating by the arc angle about the arc axis.
    ///
    /// Only meaningful for [`ArcKind::Proper`] arcs.
    #[must_use]
    pub fn to_quat(self) -> Quat {
        Quat::from_axis_angle(self.axis, self.angle_degrees.to_radians())
    }
}

/// Structured values of one composed drag sample, handed to observers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationSample {
    /// Sphere point captured at drag start.
    pub start: Vec3,
    /// Sphere point under the pointer now.
    pub end: Vec3,
    /// Arc between the two points.
    pub arc: ArcRotation,
    /// Orientation after composition.
    pub orientation: Quat,
}

/// Combine an increment with a committed orientation and renormalize.
#[must_use]
pub fn compose(mode: CompositionMode, increment: Quat, committed: Quat) -> Quat {
    let q = match mode {
        CompositionMode::World => committed * increment,
        CompositionMode::Local => increment * committed,
    };
    q.normalize()
}
