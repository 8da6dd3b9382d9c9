//! The trackball's complete interactive vocabulary.
//!
//! Pointer gestures and key presses are both reduced to a
//! `TrackballCommand`, which is then applied to a
//! [`Trackball`](crate::trackball::Trackball).

use crate::error::TrackballError;
use crate::trackball::Trackball;

/// A single operation on a [`Trackball`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackballCommand {
    /// Viewport resized.
    Resize {
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
    },
    /// Pointer pressed: open a drag.
    BeginDrag {
        /// Horizontal pixel position.
        x: f32,
        /// Vertical pixel position.
        y: f32,
    },
    /// Pointer moved while pressed.
    UpdateDrag {
        /// Horizontal pixel position.
        x: f32,
        /// Vertical pixel position.
        y: f32,
    },
    /// Pointer released: commit the drag.
    EndDrag {
        /// Horizontal pixel position.
        x: f32,
        /// Vertical pixel position.
        y: f32,
    },
    /// Abandon the active drag.
    CancelDrag,
    /// Return to the identity orientation.
    ResetOrientation,
}

impl TrackballCommand {
    /// Apply this command. Only a rejected resize fails.
    pub fn apply(self, trackball: &mut Trackball) -> Result<(), TrackballError> {
        match self {
            Self::Resize { width, height } => {
                trackball.set_viewport(width, height)?;
            }
            Self::BeginDrag { x, y } => trackball.begin_drag(x, y),
            Self::UpdateDrag { x, y } => {
                let _ = trackball.update_drag(x, y);
            }
            Self::EndDrag { x, y } => {
                let _ = trackball.end_drag(x, y);
            }
            Self::CancelDrag => trackball.cancel_drag(),
            Self::ResetOrientation => trackball.reset(),
        }
        Ok(())
    }
}
