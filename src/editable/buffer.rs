//! The capacity-bounded text buffer.
//!
//! `TextBuffer` owns the content, the name label and the single-step
//! history. Every mutation goes through the methods here so the capacity
//! invariants (`len() <= max_text`, name shorter than `max_name`) always hold.

use super::constraints::{truncate_to, BufferLimits};
use super::error::EditError;
use super::history::{Snapshot, SnapshotSlots};

/// The last space-delimited word seen by `append`.
///
/// Informational only: nothing else in the editor reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailingWord {
    /// Text after the last space in the buffer
    pub word: String,
    /// Pre-append length plus one, minus the word's start offset.
    /// Negative when the word starts past the old end of the text.
    pub position: isize,
}

/// In-memory text with a name, bounded capacity and one step of undo/redo.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    name: String,
    content: String,
    history: SnapshotSlots,
    last_word: Option<TrailingWord>,
    limits: BufferLimits,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new(BufferLimits::default())
    }
}

impl TextBuffer {
    /// Create an empty, unnamed buffer
    pub fn new(limits: BufferLimits) -> Self {
        Self {
            name: String::new(),
            content: String::with_capacity(limits.max_text),
            history: SnapshotSlots::new(),
            last_word: None,
            limits,
        }
    }

    /// Reset to the freshly created state, keeping the limits
    pub fn initialize(&mut self) {
        self.name.clear();
        self.content.clear();
        self.history.clear();
        self.last_word = None;
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Content length in bytes
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn limits(&self) -> BufferLimits {
        self.limits
    }

    /// Bytes that can still be appended
    pub fn available(&self) -> usize {
        self.limits.available_text(self.len())
    }

    pub fn undo_snapshot(&self) -> Option<&Snapshot> {
        self.history.undo_snapshot()
    }

    pub fn redo_snapshot(&self) -> Option<&Snapshot> {
        self.history.redo_snapshot()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn last_word(&self) -> Option<&TrailingWord> {
        self.last_word.as_ref()
    }

    /// Content for display, `None` when there is nothing to show
    pub fn display(&self) -> Option<&str> {
        if self.content.is_empty() {
            None
        } else {
            Some(&self.content)
        }
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Set the name label, truncating it to the label capacity.
    ///
    /// Used for both create and rename. Returns the name actually stored.
    pub fn set_name(&mut self, name: &str) -> &str {
        let stored = truncate_to(name, self.limits.name_capacity());
        self.name.clear();
        self.name.push_str(stored);
        &self.name
    }

    /// Append as much of `text` as fits, returning the number of bytes added.
    ///
    /// The undo slot is overwritten with the previous content even when the
    /// buffer turns out to be full.
    pub fn append(&mut self, text: &str) -> Result<usize, EditError> {
        self.history.record_undo(&self.content);

        let available = self.available();
        if available == 0 {
            return Err(EditError::NoSpace);
        }

        let len_before = self.content.len();
        let fitting = truncate_to(text, available);
        self.content.push_str(fitting);

        if let Some(space) = self.content.rfind(' ') {
            let word_start = space + 1;
            self.last_word = Some(TrailingWord {
                word: self.content[word_start..].to_string(),
                position: len_before as isize + 1 - word_start as isize,
            });
        }

        Ok(fitting.len())
    }

    /// Remove the first occurrence of `word`, returning its byte offset.
    ///
    /// Both history slots are overwritten with the pre-delete content.
    pub fn delete_word(&mut self, word: &str) -> Result<usize, EditError> {
        if word.is_empty() {
            return Err(EditError::WordNotFound);
        }
        let position = self.content.find(word).ok_or(EditError::WordNotFound)?;

        self.history.record_undo(&self.content);
        self.history.record_redo(&self.content);

        self.content.replace_range(position..position + word.len(), "");
        Ok(position)
    }

    /// Restore the undo snapshot, moving the current content to the redo slot
    pub fn undo(&mut self) -> Result<(), EditError> {
        let snapshot = self
            .history
            .take_undo(&self.content)
            .ok_or(EditError::UndoUnavailable)?;
        self.restore(snapshot);
        Ok(())
    }

    /// Restore the redo snapshot, moving the current content to the undo slot
    pub fn redo(&mut self) -> Result<(), EditError> {
        let snapshot = self
            .history
            .take_redo(&self.content)
            .ok_or(EditError::RedoUnavailable)?;
        self.restore(snapshot);
        Ok(())
    }

    fn restore(&mut self, snapshot: Snapshot) {
        // Snapshots are taken from content that already respected the cap
        debug_assert!(snapshot.len() <= self.limits.max_text);
        self.content = snapshot.into_text();
    }
}
