//! jotter - Elm-style menu-driven text editor
//!
//! This crate provides the core types and logic for a single-buffer editor
//! with one step of undo/redo, implementing the Elm Architecture pattern.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod messages;
pub mod model;
pub mod notice;
pub mod runtime;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use editable::TextBuffer;
pub use messages::Msg;
pub use model::AppModel;
pub use notice::Notice;
