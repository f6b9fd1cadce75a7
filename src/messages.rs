//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

/// Buffer messages (text editing and naming)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferMsg {
    /// Give the buffer its first name
    Create(String),
    /// Give the buffer a new name
    Rename(String),
    /// Append text at the end of the buffer
    Append(String),
    /// Remove the first occurrence of a word
    DeleteWord(String),
    /// Restore the undo snapshot
    Undo,
    /// Restore the redo snapshot
    Redo,
    /// Show the buffer content
    Display,
}

/// App messages (file I/O, menu, lifecycle)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMsg {
    /// Save the buffer to the file named by the buffer
    SaveFile,
    /// File save completed
    SaveCompleted(Result<(), String>),
    /// Menu received a character it does not know
    InvalidChoice(char),
    /// Quit the application
    Quit,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Buffer messages (text editing)
    Buffer(BufferMsg),
    /// App messages (file I/O, lifecycle)
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    pub fn create(name: impl Into<String>) -> Self {
        Msg::Buffer(BufferMsg::Create(name.into()))
    }

    pub fn rename(name: impl Into<String>) -> Self {
        Msg::Buffer(BufferMsg::Rename(name.into()))
    }

    pub fn append(text: impl Into<String>) -> Self {
        Msg::Buffer(BufferMsg::Append(text.into()))
    }

    pub fn delete_word(word: impl Into<String>) -> Self {
        Msg::Buffer(BufferMsg::DeleteWord(word.into()))
    }

    pub fn undo() -> Self {
        Msg::Buffer(BufferMsg::Undo)
    }

    pub fn redo() -> Self {
        Msg::Buffer(BufferMsg::Redo)
    }

    pub fn display() -> Self {
        Msg::Buffer(BufferMsg::Display)
    }

    pub fn save() -> Self {
        Msg::App(AppMsg::SaveFile)
    }

    pub fn quit() -> Self {
        Msg::App(AppMsg::Quit)
    }
}
