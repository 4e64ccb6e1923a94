//! Asynchronous screen writer.
//!
//! Producers call [`Writer::add`] with text fragments; a dedicated thread
//! drains them in FIFO order and is the only code that touches the
//! [`Surface`]. `\r` repaints the current line and `\n` advances or scrolls.

mod cursor;
mod renderer;

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::terminal::Surface;
use renderer::Renderer;

/// How long the drain thread waits on an empty queue before re-checking
/// the stop flag.
pub const IDLE_INTERVAL: Duration = Duration::from_millis(10);

#[derive(Debug)]
pub enum RenderError {
    Io(std::io::Error),
    /// The drain thread is gone; nothing more can be shown.
    Closed,
    Panicked,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Io(e) => write!(f, "IO error: {}", e),
            RenderError::Closed => write!(f, "writer is not running"),
            RenderError::Panicked => write!(f, "writer thread panicked"),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<std::io::Error> for RenderError {
    fn from(e: std::io::Error) -> Self {
        RenderError::Io(e)
    }
}

pub struct Writer {
    queue: Sender<String>,
    stop: Arc<AtomicBool>,
    worker: Option<JoinHandle<Result<(), RenderError>>>,
}

impl Writer {
    /// Spawns the drain thread, which takes ownership of `surface`.
    pub fn start<S: Surface + 'static>(surface: S) -> Result<Self, RenderError> {
        let (queue, fragments) = mpsc::channel();
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);

        let worker = thread::Builder::new()
            .name("vein-writer".to_string())
            .spawn(move || drain(Renderer::new(surface), fragments, stop_flag))?;
        tracing::info!("writer started");

        Ok(Self {
            queue,
            stop,
            worker: Some(worker),
        })
    }

    /// Queues a fragment. Empty fragments are dropped.
    pub fn add(&self, fragment: impl Into<String>) -> Result<(), RenderError> {
        let fragment = fragment.into();
        if fragment.is_empty() {
            return Ok(());
        }
        self.queue.send(fragment).map_err(|_| RenderError::Closed)
    }

    /// Asks the drain thread to finish and waits for it. Everything queued
    /// before this call is still rendered. Calling it again is a no-op.
    pub fn stop(&mut self) -> Result<(), RenderError> {
        let Some(worker) = self.worker.take() else {
            return Ok(());
        };
        tracing::info!("stopping writer");
        self.stop.store(true, Ordering::Release);
        worker.join().map_err(|_| RenderError::Panicked)?
    }

    pub fn is_running(&self) -> bool {
        self.worker.is_some()
    }
}

impl Drop for Writer {
    fn drop(&mut self) {
        if let Err(e) = self.stop() {
            tracing::error!("writer stopped with error: {}", e);
        }
    }
}

fn drain<S: Surface>(
    mut renderer: Renderer<S>,
    fragments: Receiver<String>,
    stop: Arc<AtomicBool>,
) -> Result<(), RenderError> {
    while !stop.load(Ordering::Acquire) {
        match fragments.recv_timeout(IDLE_INTERVAL) {
            Ok(fragment) => renderer.apply(&fragment)?,
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    while let Ok(fragment) = fragments.try_recv() {
        renderer.apply(&fragment)?;
    }
    tracing::debug!("writer drained");
    Ok(())
}
