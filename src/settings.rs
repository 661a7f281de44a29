//! Client settings and configuration

use crate::protocol::DEFAULT_MAX_MESSAGE_LENGTH;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Client settings
///
/// Settings are stored in JSON format and can be loaded/saved from disk.
/// Missing fields fall back to their defaults.
///
/// # Example
/// ```rust,no_run
/// use chatview::settings::Settings;
///
/// // Load settings (returns default if file doesn't exist)
/// let mut settings = Settings::load("chatview.json").expect("Failed to load");
///
/// settings.viewer = "alice".to_string();
/// settings.save("chatview.json").expect("Failed to save");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Logged-in user's id; empty when signed out
    pub viewer: String,
    /// Emit read requests for messages the viewer has not read
    pub mark_read_on_view: bool,
    /// Maximum outgoing message length in characters
    pub max_message_length: usize,
    /// Default `tracing` filter when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Settings {
    /// Create settings for a signed-in viewer
    pub fn for_viewer(viewer: impl Into<String>) -> Self {
        Self {
            viewer: viewer.into(),
            ..Self::default()
        }
    }

    /// Load settings from a JSON file
    ///
    /// # Arguments
    /// * `path` - Path to the settings file
    ///
    /// # Returns
    /// The loaded settings, or default settings if file doesn't exist
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let data = std::fs::read_to_string(path)
            .map_err(|e| Error::Settings(format!("Failed to read settings: {}", e)))?;

        // Handle empty file (return defaults)
        if data.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_json::from_str(&data)
            .map_err(|e| Error::Settings(format!("Failed to parse settings: {}", e)))
    }

    /// Save settings to a JSON file
    ///
    /// Creates the parent directory when missing.
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::Settings(format!("Failed to create settings directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| Error::Settings(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(path, json)
            .map_err(|e| Error::Settings(format!("Failed to write settings: {}", e)))?;

        Ok(())
    }

    /// Check if a viewer is signed in
    pub fn is_signed_in(&self) -> bool {
        !self.viewer.is_empty()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            viewer: String::new(),
            mark_read_on_view: true,
            max_message_length: DEFAULT_MAX_MESSAGE_LENGTH,
            log_filter: "info".to_string(),
        }
    }
}
