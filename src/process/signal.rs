use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::process::ProcessError;

/// Records Ctrl-C instead of letting SIGINT terminate the shell. The
/// foreground child still receives the signal from the tty.
#[derive(Clone, Default)]
pub struct Interrupts {
    pending: Arc<AtomicBool>,
}

impl Interrupts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the process-wide SIGINT handler. Only one handler may exist
    /// per process.
    pub fn install() -> Result<Self, ProcessError> {
        let interrupts = Self::new();
        let handle = interrupts.clone();
        ctrlc::set_handler(move || handle.raise())
            .map_err(|e| ProcessError::SignalError(e.to_string()))?;
        Ok(interrupts)
    }

    pub fn raise(&self) {
        self.pending.store(true, Ordering::SeqCst);
    }

    /// Returns whether an interrupt arrived since the last call.
    pub fn take(&self) -> bool {
        self.pending.swap(false, Ordering::SeqCst)
    }
}
