use serde::{Deserialize, Serialize};

use super::command::TrackballCommand;

/// Trackball actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML files stay readable:
/// ```toml
/// [keybindings.bindings]
/// cancel_drag = "Escape"
/// reset_orientation = "KeyR"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Abandon the active drag and restore the pre-drag orientation.
    CancelDrag,
    /// Return to the identity orientation.
    ResetOrientation,
}

impl KeyAction {
    /// The parameterless command this action triggers.
    #[must_use]
    pub fn to_command(self) -> TrackballCommand {
        match self {
            Self::CancelDrag => TrackballCommand::CancelDrag,
            Self::ResetOrientation => TrackballCommand::ResetOrientation,
        }
    }
}
