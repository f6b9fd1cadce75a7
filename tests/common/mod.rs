//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::io::Cursor;

use jotter::config::EditorConfig;
use jotter::messages::Msg;
use jotter::model::AppModel;
use jotter::notice::Notice;
use jotter::runtime::Runtime;
use jotter::update::update;

/// Create a test model with the given limits and the menu hidden
pub fn test_model_with_limits(max_name: usize, max_text: usize) -> AppModel {
    AppModel::new(EditorConfig {
        max_name_length: max_name,
        max_text_length: max_text,
        show_menu: false,
    })
}

/// Create a test model with default limits and the menu hidden
pub fn test_model() -> AppModel {
    AppModel::new(EditorConfig {
        show_menu: false,
        ..EditorConfig::default()
    })
}

/// Create a test model whose buffer already holds `text`
pub fn test_model_with_text(text: &str) -> AppModel {
    let mut model = test_model();
    update(&mut model, Msg::append(text));
    model
}

/// Run `msg` and return the notice it produced
pub fn notice(model: &mut AppModel, msg: Msg) -> Notice {
    let cmd = update(model, msg).expect("update returned no command");
    let notices = cmd.notices();
    notices
        .first()
        .map(|n| (*n).clone())
        .expect("command carried no notice")
}

/// Helper to get the undo snapshot text
pub fn undo_text(model: &AppModel) -> Option<String> {
    model
        .buffer
        .undo_snapshot()
        .map(|s| s.as_str().to_string())
}

/// Helper to get the redo snapshot text
pub fn redo_text(model: &AppModel) -> Option<String> {
    model
        .buffer
        .redo_snapshot()
        .map(|s| s.as_str().to_string())
}

/// Feed `input` to a runtime over `model`, returning the final model and
/// everything written to the console
pub fn run_session(model: AppModel, input: &str) -> (AppModel, String) {
    let mut runtime = Runtime::new(model, Cursor::new(input.as_bytes().to_vec()), Vec::new());
    runtime.run().expect("session failed");
    let (model, output) = runtime.into_parts();
    (model, String::from_utf8(output).expect("output is not UTF-8"))
}
