use super::EnvError;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::env;

pub const HOME: &str = "HOME";
pub const PWD: &str = "PWD";

/// The shell's own variable table. Seeded from the process environment at
/// startup and never written back to it.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    vars: BTreeMap<Box<str>, Box<str>>,
}

impl Environment {
    /// Snapshots the process environment. `HOME` falls back to the user's
    /// home directory and `PWD` is taken from the actual working directory.
    pub fn from_process() -> Result<Self, EnvError> {
        let mut environment = Self::default();
        // Non UTF-8 names or values are kept, lossily converted.
        for (key, value) in env::vars_os() {
            if !key.is_empty() {
                environment.set(&key.to_string_lossy(), &value.to_string_lossy())?;
            }
        }

        if environment.get(HOME).is_err() {
            let home = dirs::home_dir().ok_or(EnvError::HomeDirNotFound)?;
            environment.set(HOME, &home.to_string_lossy())?;
        }

        let pwd = env::current_dir()?;
        environment.set(PWD, &pwd.to_string_lossy())?;
        Ok(environment)
    }

    pub fn with_home_and_pwd(home: &str, pwd: &str) -> Self {
        let mut vars = BTreeMap::new();
        vars.insert(HOME.into(), home.into());
        vars.insert(PWD.into(), pwd.into());
        Self { vars }
    }

    pub fn set(&mut self, name: &str, value: &str) -> Result<(), EnvError> {
        if name.is_empty() {
            return Err(EnvError::InvalidValue("Empty variable name"));
        }
        self.vars.insert(name.into(), value.into());
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&str, EnvError> {
        self.vars
            .get(name)
            .map(|s| s.as_ref())
            .ok_or_else(move || EnvError::VarNotFound(name.to_string()))
    }

    pub fn home(&self) -> &str {
        self.get(HOME).unwrap_or_default()
    }

    pub fn pwd(&self) -> &str {
        self.get(PWD).unwrap_or_default()
    }

    /// Resolves a `$NAME` token. Unknown names and plain words come back
    /// untouched.
    pub fn substitute<'a>(&'a self, token: &'a str) -> Cow<'a, str> {
        let Some(name) = token.strip_prefix('$') else {
            return Cow::Borrowed(token);
        };

        match self.get(name) {
            Ok(value) => {
                tracing::debug!("replaced {} with {}", token, value);
                Cow::Borrowed(value)
            }
            Err(_) => Cow::Borrowed(token),
        }
    }

    pub fn substitute_all(&self, tokens: &[&str]) -> Vec<String> {
        tokens
            .iter()
            .map(|token| self.substitute(token).into_owned())
            .collect()
    }
}
