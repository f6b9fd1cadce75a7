//! Editor configuration persistence
//!
//! Stores user preferences in `~/.config/jotter/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::editable::{BufferLimits, MAX_NAME, MAX_TEXT};

/// Editor configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Capacity of the file name label (stored names are one byte shorter)
    #[serde(default = "default_max_name_length")]
    pub max_name_length: usize,

    /// Capacity of the text buffer in bytes
    #[serde(default = "default_max_text_length")]
    pub max_text_length: usize,

    /// Print the menu before every prompt
    #[serde(default = "default_show_menu")]
    pub show_menu: bool,
}

fn default_max_name_length() -> usize {
    MAX_NAME
}

fn default_max_text_length() -> usize {
    MAX_TEXT
}

fn default_show_menu() -> bool {
    true
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            max_name_length: default_max_name_length(),
            max_text_length: default_max_text_length(),
            show_menu: default_show_menu(),
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, or return defaults on any failure
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to a specific file
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Buffer limits described by this config
    pub fn limits(&self) -> BufferLimits {
        BufferLimits::new(self.max_name_length, self.max_text_length)
    }

    /// Check that both limits leave room for content
    pub fn validate(&self) -> Result<(), String> {
        if self.max_name_length == 0 {
            return Err("max_name_length must be at least 1".to_string());
        }
        if self.max_text_length == 0 {
            return Err("max_text_length must be at least 1".to_string());
        }
        Ok(())
    }
}
