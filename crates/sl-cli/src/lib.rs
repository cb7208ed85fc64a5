pub mod cli;
pub mod console;
pub mod error;
pub mod input;
pub mod render;

pub use cli::{run, run_with_config, Cli};
pub use console::ConsoleSession;
pub use error::CliError;
