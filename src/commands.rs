//! Command types for the Elm-style architecture
//!
//! Two kinds of "command" live here: the menu registry (what the user can
//! type at the prompt) and `Cmd`, the side effects returned by `update`.

use std::path::PathBuf;

use crate::messages::Msg;
use crate::notice::Notice;

// ============================================================================
// Menu Registry
// ============================================================================

/// Identifies an entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuCommand {
    CreateFile,
    AppendText,
    DisplayText,
    Rename,
    DeleteWord,
    Undo,
    Redo,
    SaveFile,
    Exit,
}

impl MenuCommand {
    /// Build the message for this command.
    ///
    /// `argument` is whatever the entry's [`Argument`] read; it is ignored
    /// by commands that take none.
    pub fn to_msg(self, argument: String) -> Msg {
        match self {
            MenuCommand::CreateFile => Msg::create(argument),
            MenuCommand::AppendText => Msg::append(argument),
            MenuCommand::DisplayText => Msg::display(),
            MenuCommand::Rename => Msg::rename(argument),
            MenuCommand::DeleteWord => Msg::delete_word(argument),
            MenuCommand::Undo => Msg::undo(),
            MenuCommand::Redo => Msg::redo(),
            MenuCommand::SaveFile => Msg::save(),
            MenuCommand::Exit => Msg::quit(),
        }
    }
}

/// What a menu command reads after its key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument {
    /// Nothing, the key alone runs the command
    None,
    /// One whitespace-delimited token
    Token(&'static str),
    /// The rest of the line, leading whitespace skipped
    Line(&'static str),
}

/// A menu entry definition
#[derive(Debug, Clone)]
pub struct MenuEntry {
    pub id: MenuCommand,
    pub label: &'static str,
    pub key: char,
    pub argument: Argument,
}

/// Static registry of the menu, in display order
pub static MENU: &[MenuEntry] = &[
    MenuEntry {
        id: MenuCommand::CreateFile,
        label: "Create File",
        key: 'c',
        argument: Argument::Token("Enter filename: "),
    },
    MenuEntry {
        id: MenuCommand::AppendText,
        label: "Append Text",
        key: 'a',
        argument: Argument::Line("Enter text to append: "),
    },
    MenuEntry {
        id: MenuCommand::DisplayText,
        label: "Display Text",
        key: 'd',
        argument: Argument::None,
    },
    MenuEntry {
        id: MenuCommand::Rename,
        label: "Rename",
        key: 'e',
        argument: Argument::Token("Enter new filename: "),
    },
    MenuEntry {
        id: MenuCommand::DeleteWord,
        label: "Delete",
        key: 't',
        argument: Argument::Token("Enter the word: "),
    },
    MenuEntry {
        id: MenuCommand::Undo,
        label: "Undo",
        key: 'u',
        argument: Argument::None,
    },
    MenuEntry {
        id: MenuCommand::Redo,
        label: "Redo",
        key: 'r',
        argument: Argument::None,
    },
    MenuEntry {
        id: MenuCommand::SaveFile,
        label: "Save File",
        key: 's',
        argument: Argument::None,
    },
    MenuEntry {
        id: MenuCommand::Exit,
        label: "Exit",
        key: 'q',
        argument: Argument::None,
    },
];

/// Look up the menu entry bound to a key (case-sensitive)
pub fn entry_for_key(key: char) -> Option<&'static MenuEntry> {
    MENU.iter().find(|entry| entry.key == key)
}

/// Render the menu block printed before each prompt
pub fn render_menu() -> String {
    let mut out = String::from("\n--------Text Editor Menu---------\n");
    for entry in MENU {
        out.push_str(&format!("-> {}({})\n", entry.label, entry.key));
    }
    out
}

/// The prompt asking for a menu choice
pub const CHOICE_PROMPT: &str = "Enter your choice: ";

// ============================================================================
// Side-Effect Commands (returned from update)
// ============================================================================

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Print a notice on the console
    Notify(Notice),
    /// Write content to a file
    SaveFile { path: PathBuf, content: String },
    /// Stop the menu loop
    Quit,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    pub fn notify(notice: impl Into<Notice>) -> Self {
        Cmd::Notify(notice.into())
    }

    /// Check if this command ends the session
    pub fn is_quit(&self) -> bool {
        match self {
            Cmd::Quit => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.is_quit()),
            _ => false,
        }
    }

    /// Notices carried by this command, in order
    pub fn notices(&self) -> Vec<&Notice> {
        match self {
            Cmd::Notify(notice) => vec![notice],
            Cmd::Batch(cmds) => cmds.iter().flat_map(|c| c.notices()).collect(),
            _ => Vec::new(),
        }
    }
}
