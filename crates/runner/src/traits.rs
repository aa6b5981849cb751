//! The `CommandRunner` trait — the contract every runner must fulfil.

/// The result of running one command to completion.
///
/// A failed spawn and a non-zero exit are not distinguished here: both come
/// back as `success == false`. The caller decides what failure means.
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// Combined stdout + stderr of the subprocess, in arrival order.
    pub output: Vec<u8>,
    /// True iff the subprocess spawned and exited with status zero.
    pub success: bool,
}

impl RunOutput {
    /// A failure result with no captured output (e.g. the shell never spawned).
    pub fn spawn_failed() -> Self {
        Self {
            output: Vec::new(),
            success: false,
        }
    }
}

/// The core runner trait.
///
/// Implementations block until the command has fully terminated; there is no
/// timeout and no cancellation.
pub trait CommandRunner: Send + Sync {
    /// Run `command` through a shell and return its combined output and
    /// success flag.
    fn run(&self, command: &str) -> RunOutput;
}
