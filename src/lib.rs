pub mod config;
pub mod error;
pub mod flags;
pub mod logging;
pub mod shell;

pub mod core;
pub mod input;
pub mod path;
pub mod process;
pub mod render;
pub mod terminal;

#[cfg(test)]
mod testing;
