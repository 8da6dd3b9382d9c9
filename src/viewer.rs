//! Standalone arcball window backed by winit.
//!
//! The window has no renderer of its own. Pointer drags rotate the model
//! and the resulting model matrix is reported through `log` whenever it
//! changes, so the viewer doubles as an interactive check of the
//! controller.
//!
//! ```no_run
//! # use trackball::Viewer;
//! Viewer::builder()
//!     .with_title("Arcball")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use glam::{Mat4, Vec3};
use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::{
    error::TrackballError,
    input::{InputEvent, InputProcessor, MouseButton, TrackballCommand},
    options::Options,
    scene::ModelFrame,
    trackball::Trackball,
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    frame: ModelFrame,
    title: Option<String>,
}

impl ViewerBuilder {
    /// Create a builder with default options and an identity model frame.
    fn new() -> Self {
        Self {
            options: None,
            frame: ModelFrame::default(),
            title: None,
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Fit the model frame to a point set.
    #[must_use]
    pub fn with_points(mut self, points: &[Vec3]) -> Self {
        self.frame = ModelFrame::fit_points(points);
        self
    }

    /// Use an explicit model frame.
    #[must_use]
    pub const fn with_model_frame(mut self, frame: ModelFrame) -> Self {
        self.frame = frame;
        self
    }

    /// Set the window title, overriding `[window] title`.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        let mut options = self.options.unwrap_or_default();
        if let Some(title) = self.title {
            options.window.title = title;
        }
        Viewer {
            options,
            frame: self.frame,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window driving a [`Trackball`] from pointer input.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    frame: ModelFrame,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    pub fn run(self) -> Result<(), TrackballError> {
        let event_loop = EventLoop::new()
            .map_err(|e| TrackballError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut app = ViewerApp {
            window: None,
            trackball: None,
            input: InputProcessor::with_options(&self.options),
            options: self.options,
            frame: self.frame,
            last_model: None,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| TrackballError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    trackball: Option<Trackball>,
    input: InputProcessor,
    options: Options,
    frame: ModelFrame,
    /// Last model matrix reported, to log only on change.
    last_model: Option<Mat4>,
}

/// Clamp a window size to a usable viewport; minimized windows report 0.
fn viewport_size(inner: winit::dpi::PhysicalSize<u32>) -> (u32, u32) {
    (inner.width.max(1), inner.height.max(1))
}

impl ViewerApp {
    /// Feed one input event through the processor and apply the command.
    fn dispatch(&mut self, event: InputEvent) {
        let Some(cmd) = self.input.handle_event(event) else {
            return;
        };
        self.apply(cmd);
    }

    fn apply(&mut self, cmd: TrackballCommand) {
        let Some(trackball) = &mut self.trackball else {
            return;
        };
        if let Err(e) = cmd.apply(trackball) {
            log::warn!("command {cmd:?} rejected: {e}");
        }
        if let Some(w) = &self.window {
            w.request_redraw();
        }
    }

    /// Log the current model matrix if it moved since the last report.
    fn report_model(&mut self) {
        let Some(trackball) = &self.trackball else {
            return;
        };
        let model = self.frame.model_matrix(trackball.rotation_matrix());
        if self
            .last_model
            .is_some_and(|last| last.abs_diff_eq(model, 1e-6))
        {
            return;
        }
        self.last_model = Some(model);
        log::debug!(
            "model matrix (orientation {:?}): {:?}",
            trackball.orientation(),
            model.to_cols_array_2d()
        );
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_opts = &self.options.window;
        let attrs = Window::default_attributes()
            .with_title(&window_opts.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                window_opts.width,
                window_opts.height,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let (vp_w, vp_h) = viewport_size(window.inner_size());
        let trackball = match Trackball::with_options(
            vp_w,
            vp_h,
            &self.options.trackball,
        ) {
            Ok(t) => t,
            Err(e) => {
                log::error!("Failed to initialize trackball: {e}");
                event_loop.exit();
                return;
            }
        };
        log::info!("viewer ready at {vp_w}x{vp_h}");

        window.request_redraw();
        self.window = Some(window);
        self.trackball = Some(trackball);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        // Guard: both window and trackball must be initialised.
        if self.window.is_none() || self.trackball.is_none() {
            return;
        }

        match event {
            WindowEvent::Resized(event_size) => {
                let (width, height) = viewport_size(event_size);
                self.dispatch(InputEvent::Resized { width, height });
            }

            WindowEvent::RedrawRequested => self.report_model(),

            WindowEvent::MouseInput { button, state, .. } => {
                let Some(button) = MouseButton::from_winit(button) else {
                    return;
                };
                self.dispatch(InputEvent::MouseButton {
                    button,
                    pressed: state == ElementState::Pressed,
                });
            }

            WindowEvent::Focused(false) => self.dispatch(InputEvent::FocusLost),

            WindowEvent::CursorMoved { position, .. } => {
                #[allow(clippy::cast_possible_truncation)]
                let (x, y) = (position.x as f32, position.y as f32);
                self.dispatch(InputEvent::CursorMoved { x, y });
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                use winit::keyboard::PhysicalKey;
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };

                let key_str = format!("{code:?}");
                if let Some(cmd) = self.input.handle_key_press(&key_str) {
                    log::debug!("key {key_str} -> {cmd:?}");
                    self.apply(cmd);
                }
            }

            _ => (),
        }
    }
}
