//! In-memory stand-ins for the tty, child processes and the filesystem.

use std::collections::{HashSet, VecDeque};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::core::commands::Filesystem;
use crate::process::{ProcessError, ProcessRunner};
use crate::terminal::{Key, KeySource, Surface, TerminalMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceOp {
    Move(u16, u16),
    Put(u16, u16, char),
    ClearToEol,
    Scroll(u16),
    Refresh,
}

struct Screen {
    height: u16,
    width: u16,
    rows: Vec<Vec<char>>,
    position: (u16, u16),
    ops: Vec<SurfaceOp>,
}

/// A character grid that records every call made on it. Clones share the
/// same grid, so a test can keep one handle while the writer owns another.
#[derive(Clone)]
pub struct RecordingSurface {
    screen: Arc<Mutex<Screen>>,
    failing: bool,
}

impl RecordingSurface {
    pub fn new(height: u16, width: u16) -> Self {
        let screen = Screen {
            height,
            width,
            rows: vec![vec![' '; width as usize]; height as usize],
            position: (0, 0),
            ops: Vec::new(),
        };
        Self {
            screen: Arc::new(Mutex::new(screen)),
            failing: false,
        }
    }

    /// Every drawing call fails with an I/O error.
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    pub fn resize(&self, height: u16, width: u16) {
        let mut screen = self.screen.lock().unwrap();
        screen.height = height;
        screen.width = width;
        screen.rows = vec![vec![' '; width as usize]; height as usize];
    }

    pub fn ops(&self) -> Vec<SurfaceOp> {
        self.screen.lock().unwrap().ops.clone()
    }

    pub fn scroll_count(&self) -> usize {
        self.ops()
            .iter()
            .filter(|op| matches!(op, SurfaceOp::Scroll(_)))
            .count()
    }

    pub fn row_text(&self, row: usize) -> String {
        let screen = self.screen.lock().unwrap();
        screen.rows[row].iter().collect::<String>().trim_end().to_string()
    }

    /// All non-blank rows joined with newlines.
    pub fn text(&self) -> String {
        let screen = self.screen.lock().unwrap();
        screen
            .rows
            .iter()
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
            .filter(|row| !row.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn record(&self, op: SurfaceOp) -> io::Result<()> {
        if self.failing {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "surface gone"));
        }

        let mut screen = self.screen.lock().unwrap();
        screen.ops.push(op);
        match op {
            SurfaceOp::Move(row, column) => screen.position = (row, column),
            SurfaceOp::Put(row, column, ch) => {
                if row < screen.height && column < screen.width {
                    screen.rows[row as usize][column as usize] = ch;
                }
                screen.position = (row, column.saturating_add(1));
            }
            SurfaceOp::ClearToEol => {
                let (row, column) = screen.position;
                if row < screen.height {
                    for cell in screen.rows[row as usize].iter_mut().skip(column as usize) {
                        *cell = ' ';
                    }
                }
            }
            SurfaceOp::Scroll(lines) => {
                for _ in 0..lines {
                    let width = screen.width as usize;
                    screen.rows.remove(0);
                    screen.rows.push(vec![' '; width]);
                }
            }
            SurfaceOp::Refresh => {}
        }
        Ok(())
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> io::Result<(u16, u16)> {
        let screen = self.screen.lock().unwrap();
        Ok((screen.height, screen.width))
    }

    fn move_to(&mut self, row: u16, column: u16) -> io::Result<()> {
        self.record(SurfaceOp::Move(row, column))
    }

    fn put_char(&mut self, row: u16, column: u16, ch: char) -> io::Result<()> {
        self.record(SurfaceOp::Put(row, column, ch))
    }

    fn clear_to_eol(&mut self) -> io::Result<()> {
        self.record(SurfaceOp::ClearToEol)
    }

    fn scroll(&mut self, lines: u16) -> io::Result<()> {
        self.record(SurfaceOp::Scroll(lines))
    }

    fn refresh(&mut self) -> io::Result<()> {
        self.record(SurfaceOp::Refresh)
    }
}

/// Replays a fixed sequence of keys, then fails with `UnexpectedEof`.
#[derive(Default)]
pub struct ScriptedKeys {
    keys: VecDeque<io::Result<Key>>,
}

impl ScriptedKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: &str) -> Self {
        self.keys.extend(text.chars().map(|c| Ok(Key::Char(c))));
        self
    }

    pub fn key(mut self, key: Key) -> Self {
        self.keys.push_back(Ok(key));
        self
    }

    /// `text` followed by Enter.
    pub fn line(self, text: &str) -> Self {
        self.text(text).key(Key::Enter)
    }

    /// A signal landing while the read is blocked.
    pub fn interrupted_read(mut self) -> Self {
        self.keys
            .push_back(Err(io::Error::new(io::ErrorKind::Interrupted, "EINTR")));
        self
    }
}

impl KeySource for ScriptedKeys {
    fn read_key(&mut self) -> io::Result<Key> {
        self.keys.pop_front().unwrap_or_else(|| {
            Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "key script exhausted",
            ))
        })
    }
}

/// Knows `echo` and `true`; `interrupted` behaves like a child killed by
/// Ctrl-C; anything else is missing from PATH.
#[derive(Clone, Default)]
pub struct FakeRunner {
    calls: Arc<Mutex<Vec<Vec<String>>>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }
}

impl ProcessRunner for FakeRunner {
    fn run(&self, argv: &[String]) -> Result<Vec<u8>, ProcessError> {
        self.calls.lock().unwrap().push(argv.to_vec());
        match argv.first().map(String::as_str) {
            Some("echo") => Ok(format!("{}\n", argv[1..].join(" ")).into_bytes()),
            Some("true") => Ok(Vec::new()),
            Some("interrupted") => Err(ProcessError::Interrupted),
            Some(program) => Err(ProcessError::CommandNotFound(program.to_string())),
            None => Err(ProcessError::EmptyCommand),
        }
    }
}

/// A directory tree made of a fixed set of absolute paths.
#[derive(Clone)]
pub struct FakeFilesystem {
    dirs: Arc<HashSet<PathBuf>>,
    cwd: Arc<Mutex<PathBuf>>,
}

impl FakeFilesystem {
    pub fn new(cwd: &str, dirs: &[&str]) -> Self {
        let mut known: HashSet<PathBuf> = dirs.iter().map(PathBuf::from).collect();
        known.insert(PathBuf::from(cwd));
        Self {
            dirs: Arc::new(known),
            cwd: Arc::new(Mutex::new(PathBuf::from(cwd))),
        }
    }

    pub fn cwd(&self) -> PathBuf {
        self.cwd.lock().unwrap().clone()
    }
}

impl Filesystem for FakeFilesystem {
    fn change_directory(&self, path: &Path) -> io::Result<()> {
        let mut cwd = self.cwd.lock().unwrap();
        let target = cwd.join(path);
        if self.dirs.contains(&target) {
            *cwd = target;
            Ok(())
        } else {
            Err(io::Error::new(io::ErrorKind::NotFound, "no such directory"))
        }
    }

    fn current_directory(&self) -> io::Result<PathBuf> {
        Ok(self.cwd())
    }
}

#[derive(Clone, Default)]
pub struct FakeTerminal {
    restores: Arc<AtomicUsize>,
}

impl FakeTerminal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn restore_count(&self) -> usize {
        self.restores.load(Ordering::SeqCst)
    }
}

impl TerminalMode for FakeTerminal {
    fn restore(&mut self) -> io::Result<()> {
        self.restores.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Collects formatted log lines so a test can check what was reported.
#[derive(Clone, Default)]
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` with a subscriber writing into this capture on the current
    /// thread.
    pub fn record<T>(&self, f: impl FnOnce() -> T) -> T {
        let capture = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || capture.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, f)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock().unwrap()).into_owned()
    }
}

impl Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
