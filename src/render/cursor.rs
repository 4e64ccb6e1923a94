/// Logical screen position of the writer. Bounds are enforced by the
/// renderer, not here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Cursor {
    pub x: u16,
    pub y: u16,
}

impl Cursor {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    pub fn move_to(&mut self, x: u16, y: u16) {
        self.x = x;
        self.y = y;
    }

    pub fn reset(&mut self) {
        self.x = 0;
    }

    #[allow(dead_code)]
    pub fn left(&mut self) {
        self.x = self.x.saturating_sub(1);
    }

    pub fn right(&mut self) {
        self.x = self.x.saturating_add(1);
    }

    #[allow(dead_code)]
    pub fn up(&mut self) {
        self.y = self.y.saturating_sub(1);
    }

    pub fn down(&mut self) {
        self.y = self.y.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves() {
        let mut cursor = Cursor::new(3, 4);
        cursor.right();
        cursor.down();
        assert_eq!(cursor, Cursor::new(4, 5));

        cursor.left();
        cursor.up();
        assert_eq!(cursor, Cursor::new(3, 4));

        cursor.reset();
        assert_eq!(cursor, Cursor::new(0, 4));

        cursor.move_to(7, 1);
        assert_eq!(cursor, Cursor::new(7, 1));
    }

    #[test]
    fn test_moves_saturate_at_origin() {
        let mut cursor = Cursor::default();
        cursor.left();
        cursor.up();
        assert_eq!(cursor, Cursor::new(0, 0));
    }
}
