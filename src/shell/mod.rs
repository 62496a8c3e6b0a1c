//! Shell command execution.

pub mod command;
pub mod mock;
pub mod runner;

pub use command::{execute, execute_quiet, CommandOptions, CommandResult};
pub use mock::MockShell;
pub use runner::{quote, Shell, SystemShell};
