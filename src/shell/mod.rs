mod executor;

pub use executor::Dispatcher;

use crate::{
    config::Config,
    core::commands::{CommandContext, Filesystem, Flow, SystemFilesystem},
    core::env::Environment,
    error::ShellError,
    input::{History, InputEditor},
    process::{signal::Interrupts, ProcessRunner, SystemRunner},
    render::Writer,
    terminal::{KeySource, Surface, TerminalMode, TtyKeys, TtyMode, TtySurface},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    ShuttingDown,
    Terminated,
}

/// Everything a session is wired from. The real terminal, processes and
/// filesystem are plugged in by [`Shell::new`].
pub struct ShellParts<S> {
    pub keys: Box<dyn KeySource>,
    pub surface: S,
    pub runner: Box<dyn ProcessRunner>,
    pub filesystem: Box<dyn Filesystem>,
    pub terminal: Box<dyn TerminalMode>,
    pub environment: Environment,
    pub config: Config,
    pub interrupts: Interrupts,
}

pub struct Shell {
    editor: InputEditor,
    dispatcher: Dispatcher,
    history: History,
    environment: Environment,
    config: Config,
    filesystem: Box<dyn Filesystem>,
    writer: Writer,
    terminal: Box<dyn TerminalMode>,
    interrupts: Interrupts,
    state: SessionState,
}

impl Shell {
    /// Takes over the controlling tty.
    pub fn new(config: Config, environment: Environment) -> Result<Self, ShellError> {
        let interrupts = Interrupts::install()?;
        let terminal = TtyMode::enter()?;

        Self::from_parts(ShellParts {
            keys: Box::new(TtyKeys::new()),
            surface: TtySurface::new(),
            runner: Box::new(SystemRunner::new()),
            filesystem: Box::new(SystemFilesystem),
            terminal: Box::new(terminal),
            environment,
            config,
            interrupts,
        })
    }

    pub fn from_parts<S: Surface + 'static>(parts: ShellParts<S>) -> Result<Self, ShellError> {
        tracing::info!("starting writer");
        let writer = Writer::start(parts.surface)?;

        Ok(Shell {
            editor: InputEditor::new(parts.keys),
            dispatcher: Dispatcher::new(parts.runner),
            history: History::new(),
            environment: parts.environment,
            config: parts.config,
            filesystem: parts.filesystem,
            writer,
            terminal: parts.terminal,
            interrupts: parts.interrupts,
            state: SessionState::Running,
        })
    }

    /// Runs the read-eval loop until `exit` or a fault, then shuts down.
    /// A fault is returned after the terminal has been restored.
    pub fn run(&mut self) -> Result<(), ShellError> {
        if self.state != SessionState::Running {
            return Ok(());
        }

        let outcome = self.run_loop();
        match &outcome {
            Ok(()) => tracing::info!("exit called by user"),
            Err(e) => tracing::error!("session fault: {}", e),
        }

        let teardown = self.shutdown();
        match (outcome, teardown) {
            (Err(e), Err(cause)) => {
                tracing::error!("shutdown after fault failed: {}", cause);
                Err(e)
            }
            (outcome, teardown) => outcome.and(teardown),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    fn run_loop(&mut self) -> Result<(), ShellError> {
        loop {
            self.writer.add(format!("\r{}", self.config.prompt()))?;
            self.editor
                .fetch(self.config.prompt(), &mut self.history, &self.writer)?;
            self.swallow_interrupts();

            let flow = self.execute_last()?;
            self.swallow_interrupts();
            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    fn execute_last(&mut self) -> Result<Flow, ShellError> {
        let Some(line) = self.history.last() else {
            return Ok(Flow::Continue);
        };

        let mut ctx = CommandContext {
            environment: &mut self.environment,
            config: &mut self.config,
            filesystem: self.filesystem.as_ref(),
        };
        self.dispatcher.execute(line, &mut ctx, &self.writer)
    }

    fn swallow_interrupts(&self) {
        if self.interrupts.take() {
            tracing::debug!("interrupt swallowed");
        }
    }

    /// Stops the writer after it drained, then restores the terminal. Runs
    /// at most once.
    fn shutdown(&mut self) -> Result<(), ShellError> {
        if self.state != SessionState::Running {
            return Ok(());
        }
        self.state = SessionState::ShuttingDown;

        let writer = self.writer.stop();
        tracing::info!("restoring terminal");
        let terminal = self.terminal.restore();
        self.state = SessionState::Terminated;
        tracing::info!("application closing");

        writer?;
        terminal?;
        Ok(())
    }
}

impl Drop for Shell {
    fn drop(&mut self) {
        if let Err(e) = self.shutdown() {
            tracing::error!("shutdown failed: {}", e);
        }
    }
}
