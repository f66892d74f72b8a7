pub mod commands;
pub mod logging;

pub use commands::{Cli, execute, run};
pub use logging::init_logging;
