//! Command-line argument parsing for the editor
//!
//! Supports:
//! - Naming the buffer up front
//! - Overriding the configured capacity limits
//! - Loading an alternate config file
//! - Hiding the menu block

use clap::Parser;
use std::path::PathBuf;

use crate::config::EditorConfig;

/// A tiny menu-driven text editor
#[derive(Parser, Debug)]
#[command(name = "jotter", version, about = "A tiny menu-driven text editor")]
pub struct CliArgs {
    /// File name to give the buffer at startup
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Maximum text length in bytes
    #[arg(long, value_name = "N")]
    pub max_text: Option<usize>,

    /// Maximum file name length (names keep one byte less)
    #[arg(long, value_name = "N")]
    pub max_name: Option<usize>,

    /// Read configuration from this file instead of the default
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Do not print the menu before each prompt
    #[arg(short = 'q', long)]
    pub quiet_menu: bool,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// Name given to the buffer before the first prompt
    pub initial_name: Option<String>,
    /// Effective editor configuration (file + CLI overrides)
    pub editor: EditorConfig,
}

impl CliArgs {
    /// Config file to load, if the user pointed at one
    pub fn config_path(&self) -> Option<&PathBuf> {
        self.config.as_ref()
    }

    /// Apply CLI overrides on top of a loaded config
    pub fn into_config(self, mut editor: EditorConfig) -> Result<StartupConfig, String> {
        if let Some(max_text) = self.max_text {
            editor.max_text_length = max_text;
        }
        if let Some(max_name) = self.max_name {
            editor.max_name_length = max_name;
        }
        if self.quiet_menu {
            editor.show_menu = false;
        }
        editor.validate()?;

        Ok(StartupConfig {
            initial_name: self.name,
            editor,
        })
    }
}
