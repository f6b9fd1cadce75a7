//! Application model - the complete state of the editor
//!
//! There is no global state: `main` builds one `AppModel` and hands it to
//! the runtime, tests build their own.

use crate::config::EditorConfig;
use crate::editable::TextBuffer;

/// The complete application model
#[derive(Debug, Clone)]
pub struct AppModel {
    /// The one and only text buffer
    pub buffer: TextBuffer,
    /// Configuration the buffer was created with
    pub config: EditorConfig,
}

impl AppModel {
    /// Create a model with an initialized, empty buffer
    pub fn new(config: EditorConfig) -> Self {
        Self {
            buffer: TextBuffer::new(config.limits()),
            config,
        }
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}
