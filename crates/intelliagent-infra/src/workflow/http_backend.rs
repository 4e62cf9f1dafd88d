//! HttpWorkflowBackend -- concrete [`WorkflowBackend`] over HTTP.
//!
//! Posts `{client, prompt, platform}` as JSON to
//! `{base_url}/api/workflow/start`. No timeout and no retries are applied;
//! the call is bounded only by the network stack.

use intelliagent_core::workflow::backend::WorkflowBackend;
use intelliagent_types::error::BackendError;
use intelliagent_types::workflow::{WORKFLOW_START_PATH, WorkflowRequest, is_truthy};
use serde_json::Value;

/// Workflow backend reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpWorkflowBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpWorkflowBackend {
    /// `base_url` without trailing slash, e.g. `http://127.0.0.1:8000`.
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn start_url(&self) -> String {
        format!("{}{}", self.base_url, WORKFLOW_START_PATH)
    }
}

impl WorkflowBackend for HttpWorkflowBackend {
    async fn start(&self, request: &WorkflowRequest) -> Result<Value, BackendError> {
        let url = self.start_url();
        tracing::debug!(%url, "POST workflow start");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // A malformed error body counts as an empty object.
            let body: Value = response
                .json()
                .await
                .unwrap_or_else(|_| Value::Object(Default::default()));
            return Err(BackendError::Status {
                status: status.as_u16(),
                detail: error_detail(&body),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))
    }
}

/// The `detail` field of an error body. Falsy details (`null`, `""`, `0`,
/// `false`) count as absent. Non-string details (FastAPI validation errors
/// are arrays) are kept as compact JSON.
fn error_detail(body: &Value) -> Option<String> {
    match body.get("detail").filter(|d| is_truthy(d))? {
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
