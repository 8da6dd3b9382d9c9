// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Arcball orientation control for pointer-driven 3D model rotation.
//!
//! A drag across the window is lifted onto a virtual unit sphere; the arc
//! between the drag-start and current sphere points becomes a rotation
//! composed with the committed orientation, which is finally expressed as
//! a model rotation matrix.
//!
//! # Key entry points
//!
//! - [`trackball::Trackball`] - the drag state machine and orientation
//! - [`trackball::rotation_matrix`] - quaternion to model matrix
//! - [`input::InputProcessor`] - raw pointer/key events to commands
//! - [`scene::ModelFrame`] - centering and unit scaling of the model
//! - [`options::Options`] - TOML-backed configuration
//!
//! ```
//! use trackball::Trackball;
//!
//! let mut ball = Trackball::new(800, 600)?;
//! ball.begin_drag(400.0, 300.0);
//! let q = ball.update_drag(500.0, 300.0);
//! let _ = ball.end_drag(500.0, 300.0);
//! assert!((q.length() - 1.0).abs() < 1e-5);
//! # Ok::<(), trackball::TrackballError>(())
//! ```

pub mod error;
pub mod input;
pub mod options;
pub mod scene;
pub mod trackball;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use error::TrackballError;
pub use input::{InputEvent, InputProcessor, MouseButton, TrackballCommand};
pub use options::Options;
pub use scene::{Aabb, ModelFrame};
pub use trackball::Trackball;
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};
