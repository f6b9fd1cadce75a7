//! Capacity limits for the text buffer.
//!
//! Both limits are hard caps: input that does not fit is truncated, never
//! rejected. Lengths are measured in bytes.

/// Default capacity of the name label (the label holds one byte less)
pub const MAX_NAME: usize = 50;

/// Default capacity of the buffer content
pub const MAX_TEXT: usize = 1000;

/// Hard caps shared by every buffer operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferLimits {
    /// Label capacity. A stored name is at most `max_name - 1` bytes long.
    pub max_name: usize,

    /// Content capacity in bytes.
    pub max_text: usize,
}

impl Default for BufferLimits {
    fn default() -> Self {
        Self {
            max_name: MAX_NAME,
            max_text: MAX_TEXT,
        }
    }
}

impl BufferLimits {
    pub fn new(max_name: usize, max_text: usize) -> Self {
        Self { max_name, max_text }
    }

    /// Longest name the label can hold
    pub fn name_capacity(&self) -> usize {
        self.max_name.saturating_sub(1)
    }

    /// Bytes still free for content of the given length
    pub fn available_text(&self, current_len: usize) -> usize {
        self.max_text.saturating_sub(current_len)
    }
}

/// Longest prefix of `text` that is at most `max_bytes` long.
///
/// The cut never splits a multi-byte character, so the prefix may be a few
/// bytes shorter than `max_bytes`.
pub fn truncate_to(text: &str, max_bytes: usize) -> &str {
    if text.len() <= max_bytes {
        return text;
    }
    let mut end = max_bytes;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
