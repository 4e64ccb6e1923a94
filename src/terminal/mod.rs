//! Terminal I/O seams.
//!
//! The shell never talks to the tty directly. Drawing goes through a
//! [`Surface`] owned by the writer thread, key input comes from a
//! [`KeySource`] on the session thread, and the saved tty mode lives behind
//! a [`TerminalMode`] that is restored once at shutdown.

mod tty;

pub use tty::{TtyKeys, TtyMode, TtySurface};

use std::io;

/// Line feed as delivered by a cbreak-mode tty when Enter is pressed.
pub const NEWLINE_CODE: u32 = 10;

/// A decoded key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Up,
    Down,
    /// Ctrl-C delivered as a key instead of a signal.
    Interrupt,
    /// Anything the editor has no binding for.
    Other,
}

impl Key {
    /// Maps a raw key code to a key, rejecting codes that are not a printable
    /// character instead of converting them blindly.
    pub fn from_code(code: u32) -> Self {
        match code {
            NEWLINE_CODE | 13 => Key::Enter,
            8 | 127 => Key::Backspace,
            3 => Key::Interrupt,
            _ => match char::from_u32(code) {
                Some(c) if !c.is_control() => Key::Char(c),
                _ => Key::Other,
            },
        }
    }
}

/// Blocking source of key presses.
pub trait KeySource {
    /// Waits for the next key. An `Interrupted` error means a signal landed
    /// while blocked; callers retry.
    fn read_key(&mut self) -> io::Result<Key>;
}

/// Drawing target of the writer thread. Coordinates are `(row, column)`.
pub trait Surface: Send {
    /// Viewport dimensions as `(height, width)`.
    fn size(&self) -> io::Result<(u16, u16)>;
    fn move_to(&mut self, row: u16, column: u16) -> io::Result<()>;
    fn put_char(&mut self, row: u16, column: u16, ch: char) -> io::Result<()>;
    fn clear_to_eol(&mut self) -> io::Result<()>;
    fn scroll(&mut self, lines: u16) -> io::Result<()>;
    fn refresh(&mut self) -> io::Result<()>;
}

/// Terminal state to put back on the way out.
pub trait TerminalMode {
    fn restore(&mut self) -> io::Result<()>;
}
