pub mod commands;
pub mod handlers;

pub use commands::{Cli, Commands, ConfigCommands, TablesCommands};
pub use handlers::handle_command;
