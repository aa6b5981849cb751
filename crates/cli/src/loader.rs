//! YAML workflow loader — the thin I/O adapter in front of the engine.
//!
//! Reads a workflow file, deserializes the job and hook lists, and hands
//! them to `Workflow::new`, which owns all validation. The engine never
//! sees file paths or YAML.

use std::fs;
use std::path::Path;

use anyhow::Context;
use engine::{Hook, Job, Workflow};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct WorkflowFile {
    #[serde(default)]
    jobs: Vec<Job>,
    #[serde(default)]
    hooks: Vec<Hook>,
}

/// Load and validate a workflow from a YAML file.
pub fn load(path: &Path) -> anyhow::Result<Workflow> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("cannot read workflow file {}", path.display()))?;

    let file: WorkflowFile = serde_yaml::from_str(&content)
        .with_context(|| format!("invalid YAML in {}", path.display()))?;

    let workflow = Workflow::new(file.jobs, file.hooks)
        .with_context(|| format!("invalid workflow in {}", path.display()))?;

    Ok(workflow)
}
