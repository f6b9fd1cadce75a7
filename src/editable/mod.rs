//! Text buffer and edit history for the jotter editor.
//!
//! # Architecture
//!
//! - [`TextBuffer`]: bounded content + name label, owns all mutations
//! - [`SnapshotSlots`]: one undo slot and one redo slot (not a stack)
//! - [`BufferLimits`]: the two hard caps (label, content)
//! - [`EditError`]: recoverable failures reported by buffer operations
//!
//! # Example
//!
//! ```
//! use jotter::editable::{BufferLimits, TextBuffer};
//!
//! let mut buffer = TextBuffer::new(BufferLimits::default());
//! buffer.append("hello world").unwrap();
//! buffer.delete_word("hello").unwrap();
//! assert_eq!(buffer.content(), " world");
//!
//! buffer.undo().unwrap();
//! assert_eq!(buffer.content(), "hello world");
//! ```

mod buffer;
mod constraints;
mod error;
mod history;

pub use buffer::{TextBuffer, TrailingWord};
pub use constraints::{truncate_to, BufferLimits, MAX_NAME, MAX_TEXT};
pub use error::EditError;
pub use history::{Snapshot, SnapshotSlots};
