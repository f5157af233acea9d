//! erun: run an entry routine against a caller-supplied executor.
//!
//! The entry routine prints a banner, awaits the executor with the fixed
//! input `"world"`, and prints the resolved value. The executor itself is
//! opaque: library users implement [`Executor`], the CLI wraps a shell
//! command.

pub mod cli;
pub mod config;
pub mod entry;
pub mod executor;
pub mod printer;

pub use entry::{run, BANNER, ENTRY_INPUT};
pub use executor::{command::CommandExecutor, Executor};
