//! Recoverable failures of buffer operations.

/// Why a buffer operation did not (fully) happen.
///
/// None of these are fatal; the editor reports them and keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditError {
    /// Append found no free capacity
    NoSpace,
    /// Delete target is not in the buffer
    WordNotFound,
    /// Undo slot is empty
    UndoUnavailable,
    /// Redo slot is empty
    RedoUnavailable,
}

impl std::fmt::Display for EditError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoSpace => write!(f, "no space available"),
            Self::WordNotFound => write!(f, "word not found"),
            Self::UndoUnavailable => write!(f, "undo not available"),
            Self::RedoUnavailable => write!(f, "redo not available"),
        }
    }
}

impl std::error::Error for EditError {}
