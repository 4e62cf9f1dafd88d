//! Workflow submission.
//!
//! - [`backend`]: the `WorkflowBackend` port implemented by the HTTP client
//!   in `intelliagent-infra`.
//! - [`service`]: `WorkflowService`, which turns every outcome of a
//!   submission into a renderable `WorkflowResult`.

pub mod backend;
pub mod service;
