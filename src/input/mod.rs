//! Input handling: event types, key actions, and the input processor
//! that converts raw window events into trackball commands.

/// Commands understood by the trackball.
pub mod command;
/// Platform-agnostic input events.
pub mod event;
/// Bindable keyboard actions.
pub mod keyboard;
/// Converts raw events into trackball commands.
pub mod processor;

pub use command::TrackballCommand;
pub use event::{InputEvent, MouseButton};
pub use keyboard::KeyAction;
pub use processor::InputProcessor;
