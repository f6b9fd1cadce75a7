//! Runtime module - console integration
//!
//! - `app` - the menu loop and command execution
//! - `input` - scanf-style tokenizer over the console input

pub mod app;
pub mod input;

pub use app::Runtime;
pub use input::Prompter;
