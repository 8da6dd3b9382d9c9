//! Converts raw platform events into trackball commands.
//!
//! The `InputProcessor` owns all transient input state (cursor tracking and
//! whether the drag button is held) and the key-binding map. It is the only
//! thing that sits between raw window events and
//! [`TrackballCommand::apply`].

use glam::Vec2;

use super::command::TrackballCommand;
use super::event::{InputEvent, MouseButton};
use super::keyboard::KeyAction;
use crate::options::{KeybindingOptions, Options};

/// Converts raw window events into [`TrackballCommand`]s.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(cmd) = input_processor.handle_event(event) {
///     cmd.apply(&mut trackball)?;
/// }
///
/// if let Some(cmd) = input_processor.handle_key_press("Escape") {
///     cmd.apply(&mut trackball)?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct InputProcessor {
    /// Last known cursor position in physical pixels.
    cursor: Option<Vec2>,
    /// Whether the drag button is currently held.
    pressed: bool,
    /// Button that drives rotation.
    drag_button: MouseButton,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a processor dragging with the left button and default key
    /// bindings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cursor: None,
            pressed: false,
            drag_button: MouseButton::Left,
            key_bindings: KeybindingOptions::default(),
        }
    }

    /// Create a processor configured from `options`.
    #[must_use]
    pub fn with_options(options: &Options) -> Self {
        Self {
            drag_button: options.trackball.drag_button,
            key_bindings: options.keybindings.clone(),
            ..Self::new()
        }
    }

    /// Last known cursor position, if the cursor has been seen.
    #[must_use]
    pub fn cursor_pos(&self) -> Option<Vec2> {
        self.cursor
    }

    /// Whether the drag button is held.
    #[must_use]
    pub fn mouse_pressed(&self) -> bool {
        self.pressed
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Look up a key press and return the corresponding command, if bound.
    ///
    /// Both bound actions close the drag, so a held drag button stops
    /// producing updates until it is pressed again.
    pub fn handle_key_press(&mut self, key: &str) -> Option<TrackballCommand> {
        let cmd = self.key_bindings.lookup(key).map(KeyAction::to_command)?;
        self.pressed = false;
        Some(cmd)
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<TrackballCommand> {
        match event {
            InputEvent::Resized { width, height } => {
                Some(TrackballCommand::Resize { width, height })
            }
            InputEvent::CursorMoved { x, y } => {
                self.cursor = Some(Vec2::new(x, y));
                self.pressed
                    .then_some(TrackballCommand::UpdateDrag { x, y })
            }
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed)
            }
            InputEvent::FocusLost => {
                let was_pressed = std::mem::replace(&mut self.pressed, false);
                was_pressed.then_some(TrackballCommand::CancelDrag)
            }
        }
    }

    /// Drag button press/release: open or close a drag at the cursor.
    fn handle_mouse_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
    ) -> Option<TrackballCommand> {
        if button != self.drag_button {
            return None;
        }

        let Some(cursor) = self.cursor else {
            log::debug!("drag button changed before any cursor position");
            return None;
        };
        let (x, y) = (cursor.x, cursor.y);

        if pressed {
            self.pressed = true;
            return Some(TrackballCommand::BeginDrag { x, y });
        }

        // Release
        if !self.pressed {
            return None;
        }
        self.pressed = false;
        Some(TrackballCommand::EndDrag { x, y })
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}
