mod args;
mod commands;
pub mod config;
mod handlers;
pub mod output;
pub mod types;

pub use args::{Cli, Commands, QueryCommand};
pub use commands::run;
