pub mod args;
pub mod commands;

pub use args::{Args, Commands, ConfigCommands};
pub use commands::CliApp;
