//! `ShellRunner` — runs commands through `sh -c`.

use std::io::{self, Write};

use duct::cmd;
use tracing::error;

use crate::{CommandRunner, RunOutput};

/// Runs each command in a fresh `sh -c` subprocess, capturing stdout and
/// stderr interleaved into one stream.
///
/// The captured stream is always echoed to this process's stdout, succeed or
/// fail, so a run's console output reads the same as running the commands by
/// hand. The command string is passed to the shell untouched; quoting and
/// escaping are the workflow author's problem.
#[derive(Debug, Default)]
pub struct ShellRunner;

impl ShellRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> RunOutput {
        // `unchecked` keeps a non-zero exit as data rather than an Err; the
        // only Err left is a spawn/IO failure, which we fold into failure.
        let result = cmd!("sh", "-c", command)
            .stderr_to_stdout()
            .stdout_capture()
            .unchecked()
            .run();

        match result {
            Ok(output) => {
                let mut stdout = io::stdout();
                let _ = stdout.write_all(&output.stdout);
                let _ = stdout.flush();

                RunOutput {
                    success: output.status.success(),
                    output: output.stdout,
                }
            }
            Err(e) => {
                error!(command, error = %e, "failed to spawn shell");
                RunOutput::spawn_failed()
            }
        }
    }
}
