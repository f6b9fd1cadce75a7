//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions. They never touch
//! the console or the filesystem; side effects come back as [`Cmd`]s.

use std::path::PathBuf;

use crate::commands::Cmd;
use crate::messages::{AppMsg, BufferMsg, Msg};
use crate::model::AppModel;
use crate::notice::Notice;

/// Main update function - dispatches to sub-handlers
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Buffer(m) => update_buffer(model, m),
        Msg::App(m) => update_app(model, m),
    }
}

/// Handle buffer messages (naming and text editing)
pub fn update_buffer(model: &mut AppModel, msg: BufferMsg) -> Option<Cmd> {
    let buffer = &mut model.buffer;

    match msg {
        BufferMsg::Create(name) => {
            let stored = buffer.set_name(&name).to_string();
            tracing::debug!(name = %stored, "buffer created");
            Some(Cmd::notify(Notice::FileCreated(stored)))
        }

        BufferMsg::Rename(name) => {
            let stored = buffer.set_name(&name).to_string();
            tracing::debug!(name = %stored, "buffer renamed");
            Some(Cmd::notify(Notice::FileRenamed(stored)))
        }

        BufferMsg::Append(text) => match buffer.append(&text) {
            Ok(added) => {
                if added < text.len() {
                    tracing::debug!(
                        requested = text.len(),
                        added,
                        "append truncated to remaining capacity"
                    );
                }
                Some(Cmd::notify(Notice::TextAppended))
            }
            Err(e) => {
                tracing::debug!(len = buffer.len(), "append rejected: {}", e);
                Some(Cmd::notify(e))
            }
        },

        BufferMsg::DeleteWord(word) => match buffer.delete_word(&word) {
            Ok(position) => {
                tracing::debug!(word = %word, position, "word deleted");
                Some(Cmd::notify(Notice::WordDeleted(word)))
            }
            Err(e) => {
                tracing::debug!(word = %word, "delete rejected: {}", e);
                Some(Cmd::notify(e))
            }
        },

        BufferMsg::Undo => match buffer.undo() {
            Ok(()) => {
                tracing::debug!(len = buffer.len(), "undo");
                Some(Cmd::notify(Notice::UndoCompleted))
            }
            Err(e) => Some(Cmd::notify(e)),
        },

        BufferMsg::Redo => match buffer.redo() {
            Ok(()) => {
                tracing::debug!(len = buffer.len(), "redo");
                Some(Cmd::notify(Notice::RedoCompleted))
            }
            Err(e) => Some(Cmd::notify(e)),
        },

        BufferMsg::Display => match buffer.display() {
            Some(text) => Some(Cmd::notify(Notice::Text(text.to_string()))),
            None => Some(Cmd::notify(Notice::TextEmpty)),
        },
    }
}

/// Handle app messages (file I/O, menu, lifecycle)
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::SaveFile => {
            let name = model.buffer.name();
            if name.is_empty() {
                tracing::warn!("Cannot save: buffer has no file name");
                return Some(Cmd::notify(Notice::SaveFailed));
            }
            Some(Cmd::SaveFile {
                path: PathBuf::from(name),
                content: model.buffer.content().to_string(),
            })
        }

        AppMsg::SaveCompleted(result) => match result {
            Ok(()) => Some(Cmd::notify(Notice::FileSaved(
                model.buffer.name().to_string(),
            ))),
            Err(e) => {
                tracing::warn!("Failed to save {}: {}", model.buffer.name(), e);
                Some(Cmd::notify(Notice::SaveFailed))
            }
        },

        AppMsg::InvalidChoice(key) => {
            tracing::debug!(key = %key, "invalid menu choice");
            Some(Cmd::notify(Notice::InvalidChoice))
        }

        AppMsg::Quit => Some(Cmd::batch(vec![Cmd::notify(Notice::Exiting), Cmd::Quit])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notice_of(cmd: Option<Cmd>) -> Notice {
        let cmd = cmd.expect("expected a command");
        let notices = cmd.notices();
        notices.first().map(|n| (*n).clone()).expect("expected a notice")
    }

    #[test]
    fn test_append_notice() {
        let mut model = AppModel::default();
        let notice = notice_of(update(&mut model, Msg::append("hello")));
        assert_eq!(notice, Notice::TextAppended);
        assert_eq!(model.buffer.content(), "hello");
    }

    #[test]
    fn test_save_without_name_fails_without_io() {
        let mut model = AppModel::default();
        update(&mut model, Msg::append("hello"));
        let cmd = update(&mut model, Msg::save());
        assert_eq!(notice_of(cmd), Notice::SaveFailed);
    }

    #[test]
    fn test_save_emits_file_command() {
        let mut model = AppModel::default();
        update(&mut model, Msg::create("notes.txt"));
        update(&mut model, Msg::append("hello"));

        let cmd = update(&mut model, Msg::save());
        assert_eq!(
            cmd,
            Some(Cmd::SaveFile {
                path: PathBuf::from("notes.txt"),
                content: "hello".to_string(),
            })
        );
    }

    #[test]
    fn test_save_completed_reports_name() {
        let mut model = AppModel::default();
        update(&mut model, Msg::create("notes.txt"));
        update(&mut model, Msg::append("hello"));

        let cmd = update(&mut model, Msg::App(AppMsg::SaveCompleted(Ok(()))));
        assert_eq!(notice_of(cmd), Notice::FileSaved("notes.txt".to_string()));
    }

    #[test]
    fn test_save_failed_keeps_state() {
        let mut model = AppModel::default();
        update(&mut model, Msg::create("notes.txt"));
        update(&mut model, Msg::append("hello"));

        let cmd = update(
            &mut model,
            Msg::App(AppMsg::SaveCompleted(Err("denied".to_string()))),
        );
        assert_eq!(notice_of(cmd), Notice::SaveFailed);
        assert_eq!(model.buffer.content(), "hello");
    }

    #[test]
    fn test_quit_batches_notice_and_quit() {
        let mut model = AppModel::default();
        let cmd = update(&mut model, Msg::quit()).unwrap();
        assert!(cmd.is_quit());
        assert_eq!(cmd.notices(), vec![&Notice::Exiting]);
    }

    #[test]
    fn test_invalid_choice() {
        let mut model = AppModel::default();
        let cmd = update(&mut model, Msg::App(AppMsg::InvalidChoice('x')));
        assert_eq!(notice_of(cmd), Notice::InvalidChoice);
    }
}
