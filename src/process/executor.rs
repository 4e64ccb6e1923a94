use std::io::ErrorKind;
use std::process::{Command, Stdio};

use super::{ProcessError, ProcessRunner};

/// Spawns children from `PATH` with stdout and stderr captured. Stdin stays
/// attached to the tty.
#[derive(Clone, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&self, argv: &[String]) -> Result<Vec<u8>, ProcessError> {
        let (program, args) = argv.split_first().ok_or(ProcessError::EmptyCommand)?;

        let result = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output();

        let output = match result {
            Ok(output) => output,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ProcessError::CommandNotFound(program.to_string()))
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => return Err(ProcessError::Interrupted),
            Err(e) => return Err(e.into()),
        };

        if !output.stderr.is_empty() {
            tracing::warn!(
                program = %program,
                "stderr: {}",
                String::from_utf8_lossy(&output.stderr).trim_end()
            );
        }
        if !output.status.success() {
            tracing::info!(program = %program, "process exited with status: {}", output.status);
        }

        Ok(output.stdout)
    }
}
