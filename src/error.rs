use crate::core::commands::CommandError;
use crate::core::env::EnvError;
use crate::process::ProcessError;
use crate::render::RenderError;

#[derive(Debug)]
pub enum ShellError {
    Io(std::io::Error),
    ProcessError(ProcessError),
    CommandError(CommandError),
    RenderError(RenderError),
    EnvError(EnvError),
    FlagError(String),
}

impl From<std::io::Error> for ShellError {
    fn from(err: std::io::Error) -> Self {
        ShellError::Io(err)
    }
}

impl From<ProcessError> for ShellError {
    fn from(err: ProcessError) -> Self {
        ShellError::ProcessError(err)
    }
}

impl From<CommandError> for ShellError {
    fn from(err: CommandError) -> Self {
        ShellError::CommandError(err)
    }
}

impl From<RenderError> for ShellError {
    fn from(err: RenderError) -> Self {
        ShellError::RenderError(err)
    }
}

impl From<EnvError> for ShellError {
    fn from(err: EnvError) -> Self {
        ShellError::EnvError(err)
    }
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShellError::Io(e) => write!(f, "IO error: {}", e),
            ShellError::ProcessError(e) => write!(f, "Process error: {}", e),
            ShellError::CommandError(e) => write!(f, "Command error: {}", e),
            ShellError::RenderError(e) => write!(f, "Render error: {}", e),
            ShellError::EnvError(e) => write!(f, "Environment error: {}", e),
            ShellError::FlagError(msg) => write!(f, "Flag error: {}", msg),
        }
    }
}

impl std::error::Error for ShellError {}
