//! Workflow execution engine.
//!
//! `WorkflowExecutor` is the central orchestrator:
//! 1. Walks the job list strictly in declared order — no reordering, no
//!    backtracking, no re-queueing.
//! 2. Applies the skip gate and the dependency gate to each job.
//! 3. Dispatches eligible jobs via [`CommandRunner`] and records the outcome
//!    in a run-scoped table.
//! 4. Fires the job's `on_success`/`on_error` hook, if declared.
//! 5. Aborts the whole run when a job marked `exit_on_error` fails.

use std::collections::HashMap;
use std::sync::Arc;

use runner::CommandRunner;
use tracing::{error, info, warn};

use crate::models::{Job, Workflow};
use crate::EngineError;

/// The result of a run that was not aborted.
#[derive(Debug)]
pub struct RunReport {
    /// Final outcome table: job name → succeeded. Jobs that never ran
    /// (skip flag, unsatisfied dependencies) have no entry.
    pub outcomes: HashMap<String, bool>,
}

/// Stateless orchestrator that runs a single workflow.
///
/// All per-run state lives in a table local to [`WorkflowExecutor::run`], so
/// one executor can be reused across runs; each run starts from an empty
/// outcome table.
pub struct WorkflowExecutor {
    runner: Arc<dyn CommandRunner>,
}

impl WorkflowExecutor {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    /// Run every job in `workflow`, in declared order.
    ///
    /// # Errors
    /// Returns [`EngineError::CriticalJobFailed`] when a job marked
    /// `exit_on_error` fails; no later job is considered. Non-critical
    /// failures are recorded in the report and the run continues.
    pub fn run(&self, workflow: &Workflow) -> Result<RunReport, EngineError> {
        let mut outcomes: HashMap<String, bool> = HashMap::new();

        for job in workflow.jobs() {
            if job.skip {
                info!(
                    kind = "job",
                    name = %job.name,
                    action = "skip",
                    "property skip is set to true"
                );
                continue;
            }

            if let Some(dep) = first_unmet_dependency(job, &outcomes) {
                info!(
                    kind = "job",
                    name = %job.name,
                    action = "skip",
                    dependency = dep,
                    "job dependencies not satisfied"
                );
                continue;
            }

            info!(
                kind = "job",
                name = %job.name,
                action = "execute",
                "executing command"
            );

            let result = self.runner.run(&job.command);

            if result.success {
                outcomes.insert(job.name.clone(), true);
                self.fire_hook(workflow, job, job.success_hook(), "on_success");
            } else {
                error!(
                    kind = "job",
                    name = %job.name,
                    action = "error",
                    "job execution failed"
                );
                outcomes.insert(job.name.clone(), false);
                self.fire_hook(workflow, job, job.error_hook(), "on_error");

                if job.exit_on_error {
                    info!(
                        kind = "job",
                        name = %job.name,
                        action = "exit",
                        "property exit_on_error is set to true"
                    );
                    return Err(EngineError::CriticalJobFailed {
                        job: job.name.clone(),
                    });
                }
            }
        }

        Ok(RunReport { outcomes })
    }

    /// Fire the named hook for `job`, if one is declared.
    ///
    /// Validation guarantees declared hooks resolve, so a miss here is just a
    /// no-op. A hook's own failure is logged and dropped: it never changes
    /// the job's recorded outcome and never stops the run.
    fn fire_hook(
        &self,
        workflow: &Workflow,
        job: &Job,
        hook_name: Option<&str>,
        trigger: &'static str,
    ) {
        let Some(name) = hook_name else { return };
        let Some(hook) = workflow.hooks().resolve(name) else {
            return;
        };

        info!(
            kind = "hook",
            name = %hook.name,
            job = %job.name,
            action = "execute",
            "executing hook: {trigger}"
        );

        let result = self.runner.run(&hook.command);
        if !result.success {
            warn!(
                kind = "hook",
                name = %hook.name,
                job = %job.name,
                action = "error",
                "hook execution failed"
            );
        }
    }
}

/// First dependency of `job` not recorded as succeeded, if any.
///
/// Absent entries count as unsatisfied, so a dependency that was skipped,
/// failed, or is declared later in the list permanently blocks the job —
/// execution is single-pass and never re-checks.
fn first_unmet_dependency<'a>(job: &'a Job, outcomes: &HashMap<String, bool>) -> Option<&'a str> {
    job.depends_on
        .iter()
        .map(String::as_str)
        .find(|dep| !outcomes.get(*dep).copied().unwrap_or(false))
}
