use std::fmt;

pub mod executor;
pub mod signal;

pub use executor::SystemRunner;

#[derive(Debug)]
pub enum ProcessError {
    CommandNotFound(String),
    /// The wait for the child was cut short by Ctrl-C.
    Interrupted,
    EmptyCommand,
    SignalError(String),
    Other(String),
}

impl From<std::io::Error> for ProcessError {
    fn from(e: std::io::Error) -> Self {
        ProcessError::Other(e.to_string())
    }
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::CommandNotFound(cmd) => write!(f, "Command not found: {}", cmd),
            ProcessError::Interrupted => write!(f, "Interrupted"),
            ProcessError::EmptyCommand => write!(f, "Empty command"),
            ProcessError::SignalError(msg) => write!(f, "Signal error: {}", msg),
            ProcessError::Other(msg) => write!(f, "Other error: {}", msg),
        }
    }
}

impl std::error::Error for ProcessError {}

/// Runs an external program to completion and hands back its stdout.
pub trait ProcessRunner {
    fn run(&self, argv: &[String]) -> Result<Vec<u8>, ProcessError>;
}
