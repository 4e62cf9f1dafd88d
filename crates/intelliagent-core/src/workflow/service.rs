//! Workflow submission service.
//!
//! `WorkflowService` is the Submit operation of the workflow page: it skips
//! submissions without a client, calls the backend once otherwise, and turns
//! every failure into an error result the card can render.

use intelliagent_types::error::BackendError;
use intelliagent_types::workflow::{WorkflowRequest, WorkflowResult};

use super::backend::WorkflowBackend;

/// Shown when the backend could not be reached or sent an unreadable body.
pub const START_FAILED_MESSAGE: &str = "Failed to start the workflow.";

/// Outcome of [`WorkflowService::submit`].
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// No client was selected; nothing was sent.
    Skipped,
    /// The backend was called. Failures are folded into an error result.
    Completed(WorkflowResult),
}

impl Submission {
    /// The result to display, if any.
    pub fn result(&self) -> Option<&WorkflowResult> {
        match self {
            Submission::Skipped => None,
            Submission::Completed(result) => Some(result),
        }
    }
}

/// Submits workflow requests through a [`WorkflowBackend`].
///
/// Stateless between calls: concurrent submissions do not coordinate and
/// the caller displays whichever result it receives last.
pub struct WorkflowService<B: WorkflowBackend> {
    backend: B,
}

impl<B: WorkflowBackend> WorkflowService<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Submit `client`, `prompt` and `platform` to the backend.
    ///
    /// - Empty `client`: [`Submission::Skipped`], no network call.
    /// - Non-success status: the backend's `detail`, else a status message.
    /// - Transport or decode failure: [`START_FAILED_MESSAGE`].
    /// - Success: the backend's JSON, unchanged.
    pub async fn submit(&self, client: &str, prompt: &str, platform: &str) -> Submission {
        if client.is_empty() {
            tracing::debug!("Workflow submission skipped: no client selected");
            return Submission::Skipped;
        }

        let request = WorkflowRequest {
            client: client.to_string(),
            prompt: prompt.to_string(),
            platform: platform.to_string(),
        };

        tracing::info!(client = %request.client, platform = %request.platform, "Starting workflow");

        let result = match self.backend.start(&request).await {
            Ok(value) => {
                tracing::debug!(result = %value, "Workflow finished");
                WorkflowResult::from_value(value)
            }
            Err(e) => {
                tracing::error!(client = %request.client, error = %e, "Workflow API error");
                WorkflowResult::failure(failure_message(&e))
            }
        };

        Submission::Completed(result)
    }
}

/// User-visible message for a failed submission.
pub fn failure_message(error: &BackendError) -> String {
    match error {
        BackendError::Status {
            detail: Some(detail),
            ..
        } if !detail.is_empty() => detail.clone(),
        BackendError::Status { status, .. } => format!("Request failed with status {status}"),
        BackendError::Transport(_) | BackendError::InvalidResponse(_) => {
            START_FAILED_MESSAGE.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use serde_json::{Value, json};

    use super::*;

    /// Backend double that records requests and replays a canned outcome.
    struct MockBackend {
        outcome: fn() -> Result<Value, BackendError>,
        requests: Mutex<Vec<WorkflowRequest>>,
    }

    impl MockBackend {
        fn new(outcome: fn() -> Result<Value, BackendError>) -> Self {
            Self {
                outcome,
                requests: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<WorkflowRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl WorkflowBackend for MockBackend {
        async fn start(&self, request: &WorkflowRequest) -> Result<Value, BackendError> {
            self.requests.lock().unwrap().push(request.clone());
            (self.outcome)()
        }
    }

    #[tokio::test]
    async fn test_empty_client_makes_no_call() {
        let service = WorkflowService::new(MockBackend::new(|| Ok(json!({}))));
        let submission = service.submit("", "anything", "website").await;
        assert_eq!(submission, Submission::Skipped);
        assert!(submission.result().is_none());
        assert!(service.backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_success_passes_result_through_unchanged() {
        let service = WorkflowService::new(MockBackend::new(|| {
            Ok(json!({ "status": "done", "result": { "content_agent": "Hi" }, "extra": [1, 2] }))
        }));
        let submission = service.submit("mtm", "Spring post", "website").await;

        let result = submission.result().unwrap();
        assert_eq!(
            result.as_value(),
            &json!({ "status": "done", "result": { "content_agent": "Hi" }, "extra": [1, 2] })
        );
        assert_eq!(
            service.backend.calls(),
            vec![WorkflowRequest {
                client: "mtm".into(),
                prompt: "Spring post".into(),
                platform: "website".into(),
            }]
        );
    }

    #[tokio::test]
    async fn test_status_error_with_detail_surfaces_detail() {
        let service = WorkflowService::new(MockBackend::new(|| {
            Err(BackendError::Status {
                status: 422,
                detail: Some("Unknown client".into()),
            })
        }));
        let submission = service.submit("mtm", "", "website").await;
        assert_eq!(submission.result().unwrap().error().as_deref(), Some("Unknown client"));
    }

    #[tokio::test]
    async fn test_status_error_without_detail_uses_status() {
        let service = WorkflowService::new(MockBackend::new(|| {
            Err(BackendError::Status {
                status: 502,
                detail: None,
            })
        }));
        let submission = service.submit("mtm", "", "website").await;
        assert_eq!(
            submission.result().unwrap().error().as_deref(),
            Some("Request failed with status 502")
        );
    }

    #[tokio::test]
    async fn test_transport_error_uses_fixed_message() {
        let service = WorkflowService::new(MockBackend::new(|| {
            Err(BackendError::Transport("connection refused".into()))
        }));
        let submission = service.submit("mtm", "", "website").await;
        assert_eq!(
            submission.result().unwrap().error().as_deref(),
            Some(START_FAILED_MESSAGE)
        );
    }

    #[tokio::test]
    async fn test_each_submission_calls_backend_again() {
        let service = WorkflowService::new(MockBackend::new(|| Ok(json!({ "result": {} }))));
        service.submit("mtm", "a", "website").await;
        service.submit("mtm", "a", "website").await;
        assert_eq!(service.backend.calls().len(), 2);
    }

    #[test]
    fn test_empty_detail_falls_back_to_status() {
        let message = failure_message(&BackendError::Status {
            status: 500,
            detail: Some(String::new()),
        });
        assert_eq!(message, "Request failed with status 500");
    }
}
