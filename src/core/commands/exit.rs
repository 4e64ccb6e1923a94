use super::{Command, CommandContext, CommandError, Flow};

#[derive(Clone, Default)]
pub struct ExitCommand;

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    fn execute(&self, _args: &[String], _ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError> {
        tracing::info!("exit called by user");
        Ok(Flow::Exit)
    }
}
