//! Centralized trackball and viewer options with TOML support.
//!
//! Arcball behavior, key bindings, and viewer window settings are
//! consolidated here. Options serialize to/from TOML so a viewer session
//! can be configured from a file.

mod keybindings;
mod trackball;
mod window;

use std::path::Path;

pub use keybindings::KeybindingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use trackball::TrackballOptions;
pub use window::WindowOptions;

use crate::error::TrackballError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[trackball]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Arcball behavior.
    pub trackball: TrackballOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
    /// Viewer window parameters.
    #[schemars(skip)]
    pub window: WindowOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults; values
    /// out of range are an [`TrackballError::OptionsParse`].
    pub fn from_toml(content: &str) -> Result<Self, TrackballError> {
        let mut opts: Self = toml::from_str(content)
            .map_err(|e| TrackballError::OptionsParse(e.to_string()))?;
        opts.trackball.validate()?;
        opts.keybindings.rebuild_reverse_map();
        Ok(opts)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, TrackballError> {
        let content =
            std::fs::read_to_string(path).map_err(TrackballError::Io)?;
        let opts = Self::from_toml(&content)?;
        log::debug!("loaded options from {}", path.display());
        Ok(opts)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), TrackballError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TrackballError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(TrackballError::Io)?;
        }
        std::fs::write(path, content).map_err(TrackballError::Io)
    }
}
