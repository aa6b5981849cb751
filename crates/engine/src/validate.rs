//! Load-time workflow validation.
//!
//! Two checks, run once inside `Workflow::new` before anything executes:
//! job names must be unique, and every declared hook must resolve in the
//! registry. Dependency names are deliberately NOT checked — a name that
//! never resolves is treated as a never-satisfied dependency, and the
//! dependent job is silently skipped at run time.

use std::collections::HashSet;

use crate::models::Job;
use crate::registry::HookRegistry;
use crate::EngineError;

pub fn validate(jobs: &[Job], hooks: &HookRegistry) -> Result<(), EngineError> {
    let mut seen = HashSet::new();
    for job in jobs {
        if !seen.insert(job.name.as_str()) {
            return Err(EngineError::DuplicateJobName(job.name.clone()));
        }
    }

    for job in jobs {
        if let Some(hook) = job.error_hook() {
            if !hooks.contains(hook) {
                return Err(EngineError::UnknownHook {
                    job: job.name.clone(),
                    field: "on_error",
                    hook: hook.to_owned(),
                });
            }
        }

        if let Some(hook) = job.success_hook() {
            if !hooks.contains(hook) {
                return Err(EngineError::UnknownHook {
                    job: job.name.clone(),
                    field: "on_success",
                    hook: hook.to_owned(),
                });
            }
        }
    }

    Ok(())
}
