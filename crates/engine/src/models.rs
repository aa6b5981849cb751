//! Core domain models for the workflow runner.
//!
//! These types are the source of truth for what a workflow looks like in
//! memory. `Job` and `Hook` deserialize straight from the loader's YAML;
//! `Workflow` can only be built through [`Workflow::new`], which validates.

use serde::Deserialize;

use crate::registry::HookRegistry;
use crate::{validate, EngineError};

// ---------------------------------------------------------------------------
// Job
// ---------------------------------------------------------------------------

/// A named, shell-executed unit of work.
///
/// Immutable once loaded: the engine only reads jobs and records outcomes in
/// its own run-scoped table.
#[derive(Debug, Clone, Deserialize)]
pub struct Job {
    /// Unique identifier within the workflow (checked at load time).
    pub name: String,
    /// Shell command string, opaque to the engine.
    pub command: String,
    /// Names of jobs that must have succeeded before this one may run.
    /// Existence of these names is deliberately not validated; a name that
    /// never resolves leaves this job permanently skipped.
    #[serde(default)]
    pub depends_on: Vec<String>,
    /// If true the job is never executed and never enters the outcome table.
    #[serde(default)]
    pub skip: bool,
    /// If true, a failure of this job aborts the whole run.
    #[serde(default)]
    pub exit_on_error: bool,
    /// Hook to fire when the job fails. Empty string means no hook.
    #[serde(default, alias = "error_hook")]
    pub on_error: String,
    /// Hook to fire when the job succeeds. Empty string means no hook.
    #[serde(default, alias = "success_hook")]
    pub on_success: String,
}

impl Job {
    /// The `on_error` hook name, if one is declared.
    pub fn error_hook(&self) -> Option<&str> {
        (!self.on_error.is_empty()).then_some(self.on_error.as_str())
    }

    /// The `on_success` hook name, if one is declared.
    pub fn success_hook(&self) -> Option<&str> {
        (!self.on_success.is_empty()).then_some(self.on_success.as_str())
    }
}

// ---------------------------------------------------------------------------
// Hook
// ---------------------------------------------------------------------------

/// A named, shell-executed side-effect action triggered by a job's success
/// or failure. Hooks have no dependencies and no skip flag, and their own
/// failure never escalates.
#[derive(Debug, Clone, Deserialize)]
pub struct Hook {
    pub name: String,
    pub command: String,
}

// ---------------------------------------------------------------------------
// Workflow
// ---------------------------------------------------------------------------

/// The aggregate root: an ordered job sequence plus the hook registry
/// derived from the declared hook list. Read-only after construction.
#[derive(Debug, Clone)]
pub struct Workflow {
    jobs: Vec<Job>,
    hooks: HookRegistry,
}

impl Workflow {
    /// Build a workflow from already-parsed jobs and hooks.
    ///
    /// # Errors
    /// Fails when job names are not unique or a job references a hook that
    /// does not exist. Construction never partially succeeds; on error there
    /// is no workflow and nothing has executed.
    pub fn new(jobs: Vec<Job>, hooks: Vec<Hook>) -> Result<Self, EngineError> {
        let hooks = HookRegistry::build(hooks);
        validate::validate(&jobs, &hooks)?;

        Ok(Self { jobs, hooks })
    }

    /// The jobs, in declared order.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn hooks(&self) -> &HookRegistry {
        &self.hooks
    }
}
