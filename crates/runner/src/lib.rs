//! `runner` crate — the `CommandRunner` trait and its implementations.
//!
//! Jobs and hooks share one execution contract: hand a shell command string
//! to a runner, get back the combined output and a success flag. The engine
//! crate dispatches all command execution through this trait object.

pub mod mock;
pub mod shell;
pub mod traits;

pub use shell::ShellRunner;
pub use traits::{CommandRunner, RunOutput};
