//! The interactive menu loop
//!
//! `Runtime` owns the model, reads commands through a [`Prompter`], routes
//! them through `update` and executes the returned commands. It is the only
//! place that touches the console or the filesystem.

use std::io::{self, BufRead, Write};

use crate::commands::{entry_for_key, render_menu, Argument, Cmd, CHOICE_PROMPT};
use crate::messages::{AppMsg, Msg};
use crate::model::AppModel;
use crate::update::update;

use super::input::Prompter;

pub struct Runtime<R, W> {
    model: AppModel,
    input: Prompter<R>,
    output: W,
}

impl<R: BufRead, W: Write> Runtime<R, W> {
    pub fn new(model: AppModel, input: R, output: W) -> Self {
        Self {
            model,
            input: Prompter::new(input),
            output,
        }
    }

    /// Consume the runtime, returning the final model and the output sink
    pub fn into_parts(self) -> (AppModel, W) {
        (self.model, self.output)
    }

    /// Run the menu loop until the user quits or input ends
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            if self.model.config.show_menu {
                self.output.write_all(render_menu().as_bytes())?;
            }
            self.prompt(CHOICE_PROMPT)?;

            let Some(key) = self.input.next_char()? else {
                tracing::debug!("input closed at menu prompt");
                break;
            };
            let Some(msg) = self.read_msg(key)? else {
                tracing::debug!(key = %key, "input closed while reading argument");
                break;
            };

            if let Some(cmd) = update(&mut self.model, msg) {
                if self.execute(cmd)? {
                    break;
                }
            }
        }
        self.output.flush()
    }

    /// Turn a menu key into a message, reading its argument if it has one.
    /// Returns `None` when input ends before the argument arrives.
    fn read_msg(&mut self, key: char) -> io::Result<Option<Msg>> {
        let Some(entry) = entry_for_key(key) else {
            return Ok(Some(Msg::App(AppMsg::InvalidChoice(key))));
        };

        let argument = match entry.argument {
            Argument::None => Some(String::new()),
            Argument::Token(prompt) => {
                self.prompt(prompt)?;
                self.input.next_token()?
            }
            Argument::Line(prompt) => {
                self.prompt(prompt)?;
                self.input.rest_of_line()?
            }
        };

        Ok(argument.map(|arg| entry.id.to_msg(arg)))
    }

    /// Execute a command, returning `true` when the session should end
    pub fn execute(&mut self, cmd: Cmd) -> io::Result<bool> {
        match cmd {
            Cmd::None => Ok(false),
            Cmd::Notify(notice) => {
                writeln!(self.output, "{}", notice)?;
                Ok(false)
            }
            Cmd::SaveFile { path, content } => {
                let result = std::fs::write(&path, content.as_bytes()).map_err(|e| e.to_string());
                if result.is_ok() {
                    tracing::info!("Saved {} bytes to {}", content.len(), path.display());
                }
                match update(&mut self.model, Msg::App(AppMsg::SaveCompleted(result))) {
                    Some(next) => self.execute(next),
                    None => Ok(false),
                }
            }
            Cmd::Quit => Ok(true),
            Cmd::Batch(cmds) => {
                let mut quit = false;
                for cmd in cmds {
                    quit |= self.execute(cmd)?;
                }
                Ok(quit)
            }
        }
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }
}
