//! Console input tokenizer
//!
//! Reads the menu protocol the way `scanf` does: a single command character,
//! a whitespace-delimited token, or the rest of a line. Whatever is left on
//! the current line stays pending for the next read, so `c notes.txt` typed
//! on one line creates `notes.txt` without a second prompt round-trip.

use std::io::{self, BufRead};

/// Pull-based reader over any buffered input
#[derive(Debug)]
pub struct Prompter<R> {
    reader: R,
    line: String,
    pos: usize,
}

impl<R: BufRead> Prompter<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            pos: 0,
        }
    }

    /// Next non-whitespace character, `None` at end of input
    pub fn next_char(&mut self) -> io::Result<Option<char>> {
        if !self.skip_whitespace()? {
            return Ok(None);
        }
        let ch = self.pending().chars().next();
        if let Some(ch) = ch {
            self.pos += ch.len_utf8();
        }
        Ok(ch)
    }

    /// Next whitespace-delimited token, `None` at end of input
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        if !self.skip_whitespace()? {
            return Ok(None);
        }
        let pending = self.pending();
        let end = pending
            .find(char::is_whitespace)
            .unwrap_or(pending.len());
        let token = pending[..end].to_string();
        self.pos += end;
        Ok(Some(token))
    }

    /// Rest of the current line after skipping leading whitespace
    /// (including blank lines), without the line terminator.
    pub fn rest_of_line(&mut self) -> io::Result<Option<String>> {
        if !self.skip_whitespace()? {
            return Ok(None);
        }
        let pending = self.pending();
        let end = pending.find('\n').unwrap_or(pending.len());
        let text = pending[..end].trim_end_matches('\r').to_string();
        // Leave the newline pending, it is skipped by the next read
        self.pos += end;
        Ok(Some(text))
    }

    fn pending(&self) -> &str {
        &self.line[self.pos..]
    }

    /// Advance past whitespace, reading more lines as needed.
    /// Returns `false` once input is exhausted.
    fn skip_whitespace(&mut self) -> io::Result<bool> {
        loop {
            let (skipped, exhausted) = {
                let pending = self.pending();
                let trimmed = pending.trim_start();
                (pending.len() - trimmed.len(), trimmed.is_empty())
            };
            self.pos += skipped;
            if !exhausted {
                return Ok(true);
            }
            self.line.clear();
            self.pos = 0;
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(false);
            }
        }
    }
}
