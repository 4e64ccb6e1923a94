use std::io::ErrorKind;

use super::History;
use crate::error::ShellError;
use crate::render::Writer;
use crate::terminal::{Key, KeySource};

/// What a key did to the line being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    /// The line is complete and non-blank.
    Commit,
    /// Enter on a blank line.
    BlankLine,
    Redraw,
    Ignore,
}

/// The in-progress command line.
#[derive(Debug, Default, Clone)]
pub struct LineBuffer {
    command: String,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, key: Key, history: &mut History) -> Edit {
        match key {
            Key::Enter if self.command.trim().is_empty() => Edit::BlankLine,
            Key::Enter => Edit::Commit,
            Key::Backspace => {
                self.command.pop();
                Edit::Redraw
            }
            Key::Up => {
                if let Some(entry) = history.previous() {
                    self.command = entry.to_owned();
                }
                Edit::Redraw
            }
            Key::Down => {
                if let Some(entry) = history.next() {
                    self.command = entry.to_owned();
                }
                Edit::Redraw
            }
            Key::Char(c) if !c.is_control() => {
                self.command.push(c);
                Edit::Redraw
            }
            Key::Char(_) | Key::Interrupt | Key::Other => Edit::Ignore,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.command
    }
}

/// Turns key presses into committed command lines.
pub struct InputEditor {
    keys: Box<dyn KeySource>,
}

impl InputEditor {
    pub fn new(keys: Box<dyn KeySource>) -> Self {
        Self { keys }
    }

    /// Edits one line until it is committed, echoing every change through
    /// `writer`. The trimmed line is recorded in `history` and returned.
    pub fn fetch(
        &mut self,
        prompt: &str,
        history: &mut History,
        writer: &Writer,
    ) -> Result<String, ShellError> {
        let mut line = LineBuffer::new();

        loop {
            let key = match self.keys.read_key() {
                Ok(key) => key,
                Err(e) if e.kind() == ErrorKind::Interrupted => {
                    tracing::debug!("interrupted key read, retrying");
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            match line.apply(key, history) {
                Edit::Commit => break,
                Edit::BlankLine => {
                    writer.add("\n")?;
                    writer.add(redraw(prompt, &line))?;
                }
                Edit::Redraw => writer.add(redraw(prompt, &line))?,
                Edit::Ignore => tracing::debug!(?key, "key ignored"),
            }
        }

        writer.add("\n")?;
        let command = line.as_str().trim();
        history.add(command);
        tracing::debug!("committed: {}", command);
        Ok(command.to_string())
    }
}

fn redraw(prompt: &str, line: &LineBuffer) -> String {
    format!("\r{}{}", prompt, line.as_str())
}
