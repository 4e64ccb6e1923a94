/// Commands committed during this session, oldest first, with a selection
/// index used by Up/Down navigation.
///
/// The selection ranges over `0..=len`; `len` means "past the newest entry",
/// i.e. a fresh line. Every [`add`](History::add) resets it there.
#[derive(Debug, Default, Clone)]
pub struct History {
    entries: Vec<String>,
    selected: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry. Duplicates are kept.
    pub fn add(&mut self, entry: &str) {
        self.entries.push(entry.to_owned());
        self.selected = self.entries.len();
    }

    /// Steps back one entry. `None` at the oldest entry, without moving.
    pub fn previous(&mut self) -> Option<&str> {
        if self.selected == 0 {
            return None;
        }
        self.selected -= 1;
        self.entries.get(self.selected).map(String::as_str)
    }

    /// Steps forward one entry. `None` once the newest entry is selected,
    /// without moving.
    pub fn next(&mut self) -> Option<&str> {
        if self.selected + 1 >= self.entries.len() {
            return None;
        }
        self.selected += 1;
        self.entries.get(self.selected).map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
