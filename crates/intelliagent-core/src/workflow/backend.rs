//! Workflow backend port.
//!
//! The backend that actually runs the agent workflow lives outside this
//! repository. `intelliagent-infra` implements this trait over HTTP; tests
//! implement it in memory.

use intelliagent_types::error::BackendError;
use intelliagent_types::workflow::WorkflowRequest;
use serde_json::Value;

/// Starts an agent workflow and returns the backend's JSON response.
///
/// Uses native async fn in traits (Rust 2024 edition, no async_trait macro).
pub trait WorkflowBackend: Send + Sync {
    /// Submit one workflow request. Exactly one outbound call per invocation.
    fn start(
        &self,
        request: &WorkflowRequest,
    ) -> impl std::future::Future<Output = Result<Value, BackendError>> + Send;
}
