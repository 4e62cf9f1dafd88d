//! Application state wiring all services together.
//!
//! AppState holds the concrete service instances used by both the CLI and
//! the HTTP server. Everything is built once from resolved [`Settings`];
//! handlers never read the environment.

use std::sync::Arc;

use intelliagent_core::webhook::WebhookVerifier;
use intelliagent_core::workflow::service::WorkflowService;
use intelliagent_infra::config::Settings;
use intelliagent_infra::webhook::forwarder::EventForwarder;
use intelliagent_infra::workflow::http_backend::HttpWorkflowBackend;

/// Workflow service pinned to the HTTP backend.
pub type ConcreteWorkflowService = WorkflowService<HttpWorkflowBackend>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub verifier: Arc<WebhookVerifier>,
    pub forwarder: Option<EventForwarder>,
    pub workflow_service: Arc<ConcreteWorkflowService>,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Build the state from resolved settings. One `reqwest::Client` is
    /// shared by the workflow backend and the event forwarder.
    pub fn new(settings: Settings) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("intelliagent/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let verifier = WebhookVerifier::new(settings.verify_token.clone());
        let forwarder = settings
            .forward_url
            .clone()
            .map(|url| EventForwarder::new(http.clone(), url));
        let backend = HttpWorkflowBackend::new(http, settings.backend_url.clone());

        Ok(Self {
            verifier: Arc::new(verifier),
            forwarder,
            workflow_service: Arc::new(WorkflowService::new(backend)),
            settings: Arc::new(settings),
        })
    }
}
