use super::{Command, CommandContext, CommandError, Flow};
use crate::core::env::PWD;
use crate::path::PathExpander;

pub const USAGE: &str = "cd: Need directory as argument.";
pub const INVALID_PATH: &str = "cd: Invalid path. Did not change directory.";

#[derive(Clone, Default)]
pub struct CdCommand;

impl CdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for CdCommand {
    fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError> {
        let [path] = args else {
            return Err(CommandError::InvalidArguments(USAGE.to_string()));
        };

        let target = PathExpander::new(ctx.environment.home()).expand(path);
        let cwd = ctx
            .filesystem
            .change_directory(&target)
            .and_then(|_| ctx.filesystem.current_directory())
            .map_err(|e| {
                tracing::info!("cd to {} failed: {}", target.display(), e);
                CommandError::ExecutionError(INVALID_PATH.to_string())
            })?;

        ctx.environment.set(PWD, &cwd.to_string_lossy())?;
        ctx.config.reset_prompt(&*ctx.environment);
        tracing::info!("changed directory to {}", cwd.display());
        Ok(Flow::Continue)
    }
}
