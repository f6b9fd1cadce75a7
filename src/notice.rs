//! User-visible console notices
//!
//! Every outcome of an editor operation, success or failure, ends up as one
//! of these. The `Display` text is exactly what the console shows.

use crate::editable::EditError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    FileCreated(String),
    FileRenamed(String),
    TextAppended,
    NoSpace,
    WordDeleted(String),
    WordNotFound,
    UndoCompleted,
    UndoUnavailable,
    RedoCompleted,
    RedoUnavailable,
    /// Buffer content, shown by the display command
    Text(String),
    TextEmpty,
    FileSaved(String),
    SaveFailed,
    InvalidChoice,
    Exiting,
}

impl From<EditError> for Notice {
    fn from(err: EditError) -> Self {
        match err {
            EditError::NoSpace => Self::NoSpace,
            EditError::WordNotFound => Self::WordNotFound,
            EditError::UndoUnavailable => Self::UndoUnavailable,
            EditError::RedoUnavailable => Self::RedoUnavailable,
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FileCreated(name) => write!(f, "File '{}' created.", name),
            Self::FileRenamed(name) => write!(f, "File renamed to '{}'.", name),
            Self::TextAppended => write!(f, "Text appended."),
            Self::NoSpace => write!(f, "No space available for appending text."),
            Self::WordDeleted(word) => write!(f, "Word '{}' deleted.", word),
            Self::WordNotFound => write!(f, "Word not found."),
            Self::UndoCompleted => write!(f, "Undo completed."),
            Self::UndoUnavailable => write!(f, "Undo not available."),
            Self::RedoCompleted => write!(f, "Redo completed."),
            Self::RedoUnavailable => write!(f, "Redo not available."),
            Self::Text(text) => write!(f, "Text: {}", text),
            Self::TextEmpty => write!(f, "Text is empty."),
            Self::FileSaved(name) => write!(f, "File '{}' saved.", name),
            Self::SaveFailed => write!(f, "Error saving file."),
            Self::InvalidChoice => write!(f, "Invalid choice. Please try again."),
            Self::Exiting => write!(f, "Exiting..."),
        }
    }
}
