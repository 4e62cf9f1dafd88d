//! Forwards received Meta events to the backend pipeline.
//!
//! One attempt per event with a 5 second timeout. The webhook response never
//! waits on the forward; failures are only logged.

use std::time::Duration;

use reqwest::Url;
use serde_json::Value;

/// Per-request timeout for a forward.
const FORWARD_TIMEOUT: Duration = Duration::from_secs(5);

/// Posts events to a fixed pipeline URL.
#[derive(Debug, Clone)]
pub struct EventForwarder {
    client: reqwest::Client,
    target: Url,
}

impl EventForwarder {
    pub fn new(client: reqwest::Client, target: Url) -> Self {
        Self { client, target }
    }

    pub fn target(&self) -> &Url {
        &self.target
    }

    /// Forward one event and wait for the pipeline to accept it.
    pub async fn forward(&self, event: &Value) -> Result<(), reqwest::Error> {
        self.client
            .post(self.target.clone())
            .timeout(FORWARD_TIMEOUT)
            .json(event)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// Forward in a detached task. Errors are logged, never returned.
    pub fn spawn_forward(&self, event: Value) -> tokio::task::JoinHandle<()> {
        let forwarder = self.clone();
        tokio::spawn(async move {
            match forwarder.forward(&event).await {
                Ok(()) => {
                    tracing::debug!(target_url = %forwarder.target, "Meta event forwarded");
                }
                Err(e) => {
                    tracing::error!(
                        target_url = %forwarder.target,
                        error = %e,
                        "Forward failed"
                    );
                }
            }
        })
    }
}
