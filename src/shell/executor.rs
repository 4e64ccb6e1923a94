use crate::core::commands::{Builtins, CommandContext, Flow};
use crate::error::ShellError;
use crate::process::{ProcessError, ProcessRunner};
use crate::render::Writer;

/// Runs one committed command line: `$VAR` substitution, then a built-in
/// or an external program.
pub struct Dispatcher {
    builtins: Builtins,
    runner: Box<dyn ProcessRunner>,
}

impl Dispatcher {
    pub fn new(runner: Box<dyn ProcessRunner>) -> Self {
        Self {
            builtins: Builtins::new(),
            runner,
        }
    }

    pub fn execute(
        &self,
        line: &str,
        ctx: &mut CommandContext<'_>,
        writer: &Writer,
    ) -> Result<Flow, ShellError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let argv = ctx.environment.substitute_all(&tokens);
        let Some(name) = argv.first() else {
            return Ok(Flow::Continue);
        };
        tracing::info!("executing: {:?}", argv);

        if let Some(builtin) = self.builtins.get(name) {
            return match builtin.execute(&argv[1..], ctx) {
                Ok(flow) => Ok(flow),
                Err(e) => match e.user_message() {
                    Some(msg) => {
                        writer.add(format!("{}\n", msg))?;
                        Ok(Flow::Continue)
                    }
                    None => Err(e.into()),
                },
            };
        }

        self.spawn(&argv, writer)?;
        Ok(Flow::Continue)
    }

    fn spawn(&self, argv: &[String], writer: &Writer) -> Result<(), ShellError> {
        match self.runner.run(argv) {
            Ok(stdout) => writer.add(String::from_utf8_lossy(&stdout).into_owned())?,
            Err(ProcessError::CommandNotFound(name)) => {
                writer.add(format!("Command not found: {}\n", name))?
            }
            Err(ProcessError::Interrupted) => tracing::debug!("interrupted while waiting for child"),
            Err(ProcessError::Other(msg)) => {
                tracing::warn!("failed to run {}: {}", argv[0], msg);
                writer.add(format!("{}: {}\n", argv[0], msg))?
            }
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }
}
