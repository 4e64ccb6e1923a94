use std::io::{self, Stdout, Write};

use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, ScrollUp};
use crossterm::{execute, QueueableCommand};

use super::{Key, KeySource, Surface, TerminalMode};

/// Cbreak mode on the controlling tty: no line buffering, no echo, but
/// Ctrl-C still raises SIGINT so a running child can be interrupted.
pub struct TtyMode {
    saved: libc::termios,
    restored: bool,
}

impl TtyMode {
    pub fn enter() -> io::Result<Self> {
        let fd = libc::STDIN_FILENO;
        // SAFETY: termios is plain data, so all-zero is a valid value.
        let mut termios: libc::termios = unsafe { std::mem::zeroed() };
        // SAFETY: `termios` is a live, writable termios for the call.
        if unsafe { libc::tcgetattr(fd, &mut termios) } != 0 {
            return Err(io::Error::last_os_error());
        }
        let saved = termios;

        termios.c_lflag &= !(libc::ICANON | libc::ECHO);
        termios.c_cc[libc::VMIN] = 1;
        termios.c_cc[libc::VTIME] = 0;
        // SAFETY: `termios` was filled by tcgetattr and outlives the call.
        if unsafe { libc::tcsetattr(fd, libc::TCSANOW, &termios) } != 0 {
            return Err(io::Error::last_os_error());
        }

        let mut mode = Self {
            saved,
            restored: false,
        };
        if let Err(e) = execute!(
            io::stdout(),
            EnterAlternateScreen,
            Clear(ClearType::All),
            MoveTo(0, 0)
        ) {
            let _ = mode.restore();
            return Err(e);
        }
        tracing::debug!("terminal switched to cbreak mode");
        Ok(mode)
    }
}

impl TerminalMode for TtyMode {
    fn restore(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;

        let screen = execute!(io::stdout(), LeaveAlternateScreen);
        // SAFETY: `saved` holds the attributes tcgetattr returned in `enter`.
        if unsafe { libc::tcsetattr(libc::STDIN_FILENO, libc::TCSANOW, &self.saved) } != 0 {
            return Err(io::Error::last_os_error());
        }
        tracing::debug!("terminal mode restored");
        screen
    }
}

impl Drop for TtyMode {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

pub struct TtySurface {
    out: Stdout,
}

impl Default for TtySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl TtySurface {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Surface for TtySurface {
    fn size(&self) -> io::Result<(u16, u16)> {
        let (width, height) = terminal::size()?;
        Ok((height, width))
    }

    fn move_to(&mut self, row: u16, column: u16) -> io::Result<()> {
        self.out.queue(MoveTo(column, row))?;
        Ok(())
    }

    fn put_char(&mut self, row: u16, column: u16, ch: char) -> io::Result<()> {
        self.out.queue(MoveTo(column, row))?.queue(Print(ch))?;
        Ok(())
    }

    fn clear_to_eol(&mut self) -> io::Result<()> {
        self.out.queue(Clear(ClearType::UntilNewLine))?;
        Ok(())
    }

    fn scroll(&mut self, lines: u16) -> io::Result<()> {
        self.out.queue(ScrollUp(lines))?;
        Ok(())
    }

    fn refresh(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

#[derive(Default)]
pub struct TtyKeys;

impl TtyKeys {
    pub fn new() -> Self {
        Self
    }
}

impl KeySource for TtyKeys {
    fn read_key(&mut self) -> io::Result<Key> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(map_key(key.code, key.modifiers));
                }
            }
        }
    }
}

fn map_key(code: KeyCode, modifiers: KeyModifiers) -> Key {
    match code {
        KeyCode::Enter => Key::Enter,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Key::Interrupt,
        KeyCode::Char(_) if modifiers.contains(KeyModifiers::CONTROL) => Key::Other,
        KeyCode::Char(c) => Key::from_code(c as u32),
        _ => Key::Other,
    }
}
