use std::env;
use std::process::ExitCode;

use vein::config::Config;
use vein::core::env::Environment;
use vein::error::ShellError;
use vein::flags::Flags;
use vein::shell::Shell;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("vein: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(());
    }

    if flags.is_set("version") {
        println!("vein {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let environment = Environment::from_process()?;
    let config = Config::from_flags(&flags, &environment);
    // Dropped last, after the shell restored the terminal, to flush the log.
    let _log_guard = vein::logging::init(&config)?;
    tracing::info!("starting vein {}", env!("CARGO_PKG_VERSION"));

    let mut shell = Shell::new(config, environment)?;
    shell.run()
}
