//! Engine-level error types.

use thiserror::Error;

/// Errors produced by workflow construction (validation) and execution.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    // ------ Validation errors ------

    /// Two or more jobs share the same name.
    #[error("duplicate job name: '{0}'")]
    DuplicateJobName(String),

    /// A job declares a hook that does not exist in the hook registry.
    #[error("job '{job}' references unknown {field} hook '{hook}'")]
    UnknownHook {
        job: String,
        field: &'static str,
        hook: String,
    },

    // ------ Execution errors ------

    /// A job marked `exit_on_error` failed; the run stopped there.
    #[error("run aborted: critical job '{job}' failed")]
    CriticalJobFailed { job: String },
}
