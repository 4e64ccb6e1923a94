use std::path::PathBuf;

use crate::core::env::Environment;
use crate::flags::Flags;
use crate::path::PathExpander;

pub const DEFAULT_LOG_FILE: &str = "debug.log";

/// Session settings. The prompt is derived from the environment and must be
/// refreshed whenever `PWD` changes.
#[derive(Debug, Clone)]
pub struct Config {
    prompt: String,
    log_file: PathBuf,
    debug: bool,
}

impl Config {
    pub fn new(environment: &Environment) -> Self {
        Self {
            prompt: prompt_for(environment),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            debug: false,
        }
    }

    pub fn from_flags(flags: &Flags, environment: &Environment) -> Self {
        let mut config = Self::new(environment);
        if let Some(path) = flags.get_value("log") {
            config.log_file = PathBuf::from(path);
        }
        config.debug = flags.is_set("debug");
        config
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn reset_prompt(&mut self, environment: &Environment) {
        self.prompt = prompt_for(environment);
    }

    pub fn log_file(&self) -> &PathBuf {
        &self.log_file
    }

    pub fn debug(&self) -> bool {
        self.debug
    }
}

/// `PWD` with the home directory shown as `~`, then ` $ `.
pub fn prompt_for(environment: &Environment) -> String {
    let pwd = PathExpander::new(environment.home()).collapse(environment.pwd());
    format!("{} $ ", pwd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_collapses_home() {
        let environment = Environment::with_home_and_pwd("/home/test", "/home/test/src");
        assert_eq!(prompt_for(&environment), "~/src $ ");
    }

    #[test]
    fn test_prompt_outside_home() {
        let environment = Environment::with_home_and_pwd("/home/test", "/var/log");
        assert_eq!(prompt_for(&environment), "/var/log $ ");
    }

    #[test]
    fn test_reset_prompt_follows_pwd() {
        let mut environment = Environment::with_home_and_pwd("/home/test", "/home/test");
        let mut config = Config::new(&environment);
        assert_eq!(config.prompt(), "~ $ ");

        environment.set("PWD", "/tmp").unwrap();
        config.reset_prompt(&environment);
        assert_eq!(config.prompt(), "/tmp $ ");
    }

    #[test]
    fn test_from_flags() {
        let environment = Environment::with_home_and_pwd("/home/test", "/home/test");
        let mut flags = Flags::new();
        flags
            .parse(&["--debug".to_string(), "-l".to_string(), "/tmp/vein.log".to_string()])
            .unwrap();

        let config = Config::from_flags(&flags, &environment);
        assert!(config.debug());
        assert_eq!(config.log_file(), &PathBuf::from("/tmp/vein.log"));
    }

    #[test]
    fn test_defaults() {
        let environment = Environment::with_home_and_pwd("/home/test", "/home/test");
        let config = Config::from_flags(&Flags::new(), &environment);
        assert!(!config.debug());
        assert_eq!(config.log_file(), &PathBuf::from(DEFAULT_LOG_FILE));
    }
}
