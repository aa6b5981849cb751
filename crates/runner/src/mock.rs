//! `MockRunner` — a test double for `CommandRunner`.
//!
//! Useful in engine tests where actually shelling out is either too slow or
//! irrelevant. Records every command it is asked to run, in call order.

use std::collections::HashSet;
use std::sync::Mutex;

use crate::{CommandRunner, RunOutput};

/// A mock runner that succeeds for every command except those registered
/// with [`MockRunner::fail_on`].
#[derive(Debug, Default)]
pub struct MockRunner {
    failing: HashSet<String>,
    calls: Mutex<Vec<String>>,
}

impl MockRunner {
    /// A mock that succeeds for everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command string that should report failure when run.
    pub fn fail_on(mut self, command: impl Into<String>) -> Self {
        self.failing.insert(command.into());
        self
    }

    /// All commands seen so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of times `command` was run.
    pub fn count_of(&self, command: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.as_str() == command)
            .count()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, command: &str) -> RunOutput {
        self.calls.lock().unwrap().push(command.to_owned());

        RunOutput {
            output: Vec::new(),
            success: !self.failing.contains(command),
        }
    }
}
