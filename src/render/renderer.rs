use std::io;

use super::cursor::Cursor;
use crate::terminal::Surface;

/// Applies fragments to a surface and tracks where the next character
/// lands. Lives on the writer thread only.
pub(crate) struct Renderer<S> {
    surface: S,
    cursor: Cursor,
}

impl<S: Surface> Renderer<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            cursor: Cursor::default(),
        }
    }

    /// Prints one fragment, then parks the physical cursor and flushes.
    pub fn apply(&mut self, fragment: &str) -> io::Result<()> {
        self.print(fragment)?;
        self.surface.move_to(self.cursor.y, self.cursor.x)?;
        self.surface.refresh()
    }

    fn print(&mut self, fragment: &str) -> io::Result<()> {
        let (height, _) = self.surface.size()?;
        self.clamp_to(height);

        for ch in fragment.chars() {
            match ch {
                '\n' => self.newline(height)?,
                '\r' => self.carriage_return()?,
                _ => {
                    self.surface.put_char(self.cursor.y, self.cursor.x, ch)?;
                    self.cursor.right();
                }
            }
        }
        Ok(())
    }

    fn newline(&mut self, height: u16) -> io::Result<()> {
        self.cursor.reset();
        if self.cursor.y.saturating_add(1) >= height {
            self.surface.scroll(1)?;
        } else {
            self.cursor.down();
        }
        Ok(())
    }

    fn carriage_return(&mut self) -> io::Result<()> {
        self.cursor.reset();
        self.surface.move_to(self.cursor.y, self.cursor.x)?;
        self.surface.clear_to_eol()
    }

    // The viewport may have shrunk since the last fragment.
    fn clamp_to(&mut self, height: u16) {
        let last_row = height.saturating_sub(1);
        if self.cursor.y > last_row {
            self.cursor.move_to(self.cursor.x, last_row);
        }
    }

    #[cfg(test)]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }
}
