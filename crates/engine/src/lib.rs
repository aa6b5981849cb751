//! `engine` crate — domain models, load-time validation, and the sequential
//! execution engine.

pub mod error;
pub mod executor;
pub mod models;
pub mod registry;
pub mod validate;

pub use error::EngineError;
pub use executor::{RunReport, WorkflowExecutor};
pub use models::{Hook, Job, Workflow};
pub use registry::HookRegistry;
