use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::TrackballError;
use crate::input::MouseButton;
use crate::trackball::CompositionMode;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Trackball", inline)]
#[serde(default)]
/// Arcball behavior parameters.
pub struct TrackballOptions {
    /// Whether drag increments apply in world or object space.
    #[schemars(title = "Composition")]
    pub composition: CompositionMode,
    /// Arcs shorter than this many degrees (or this close to a half turn)
    /// leave the orientation unchanged.
    #[schemars(title = "Minimum Arc", range(min = 0.0, max = 1.0), extend("step" = 0.0001))]
    pub min_arc_degrees: f32,
    /// Mouse button that drives rotation.
    #[schemars(skip)]
    pub drag_button: MouseButton,
}

impl Default for TrackballOptions {
    fn default() -> Self {
        Self {
            composition: CompositionMode::World,
            min_arc_degrees: 1e-3,
            drag_button: MouseButton::Left,
        }
    }
}

impl TrackballOptions {
    /// Largest accepted `min_arc_degrees`. At a quarter turn every arc would
    /// be degenerate at one end or the other.
    pub const MAX_MIN_ARC_DEGREES: f32 = 90.0;

    /// Check that `min_arc_degrees` is finite and in `[0, 90)`.
    pub fn validate(&self) -> Result<(), TrackballError> {
        let v = self.min_arc_degrees;
        if v.is_finite() && (0.0..Self::MAX_MIN_ARC_DEGREES).contains(&v) {
            return Ok(());
        }
        log::warn!("rejected trackball.min_arc_degrees = {v}");
        Err(TrackballError::OptionsParse(format!(
            "trackball.min_arc_degrees must be in [0, {}), got {v}",
            Self::MAX_MIN_ARC_DEGREES
        )))
    }
}
