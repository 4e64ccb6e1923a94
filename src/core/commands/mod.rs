use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

pub mod cd;
mod exit;

pub use cd::CdCommand;
pub use exit::ExitCommand;

use crate::config::Config;
use crate::core::env::{EnvError, Environment};
use crate::render::RenderError;

#[derive(Debug)]
pub enum CommandError {
    /// Wrong usage; the message is shown to the user as is.
    InvalidArguments(String),
    /// The command ran but failed; the message is shown to the user as is.
    ExecutionError(String),
    IoError(io::Error),
    RenderError(RenderError),
    EnvError(EnvError),
}

impl CommandError {
    /// The line to print for errors the user caused. `None` for faults.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            CommandError::InvalidArguments(msg) | CommandError::ExecutionError(msg) => Some(msg),
            _ => None,
        }
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::InvalidArguments(msg) => write!(f, "invalid arguments: {}", msg),
            CommandError::ExecutionError(msg) => write!(f, "execution error: {}", msg),
            CommandError::IoError(err) => write!(f, "IO error: {}", err),
            CommandError::RenderError(err) => write!(f, "Render error: {}", err),
            CommandError::EnvError(err) => write!(f, "Environment error: {}", err),
        }
    }
}

impl From<io::Error> for CommandError {
    fn from(err: io::Error) -> Self {
        CommandError::IoError(err)
    }
}

impl From<RenderError> for CommandError {
    fn from(err: RenderError) -> Self {
        CommandError::RenderError(err)
    }
}

impl From<EnvError> for CommandError {
    fn from(err: EnvError) -> Self {
        CommandError::EnvError(err)
    }
}

/// What the session loop does after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Working-directory access, so `cd` can be exercised without touching the
/// test process.
pub trait Filesystem {
    fn change_directory(&self, path: &Path) -> io::Result<()>;
    fn current_directory(&self) -> io::Result<PathBuf>;
}

#[derive(Clone, Default)]
pub struct SystemFilesystem;

impl Filesystem for SystemFilesystem {
    fn change_directory(&self, path: &Path) -> io::Result<()> {
        std::env::set_current_dir(path)
    }

    fn current_directory(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }
}

/// Session state a built-in may read or change.
pub struct CommandContext<'a> {
    pub environment: &'a mut Environment,
    pub config: &'a mut Config,
    pub filesystem: &'a dyn Filesystem,
}

pub trait Command {
    fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>)
        -> Result<Flow, CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Cd(CdCommand),
    Exit(ExitCommand),
}

impl Command for CommandType {
    fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError> {
        match self {
            CommandType::Cd(cmd) => cmd.execute(args, ctx),
            CommandType::Exit(cmd) => cmd.execute(args, ctx),
        }
    }
}

/// Commands the shell runs itself instead of spawning.
#[derive(Clone)]
pub struct Builtins {
    commands: BTreeMap<&'static str, CommandType>,
}

impl Default for Builtins {
    fn default() -> Self {
        Self::new()
    }
}

impl Builtins {
    pub fn new() -> Self {
        let mut commands = BTreeMap::new();
        commands.insert("cd", CommandType::Cd(CdCommand::new()));
        commands.insert("exit", CommandType::Exit(ExitCommand::new()));
        Self { commands }
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|cmd| cmd as &dyn Command)
    }
}
