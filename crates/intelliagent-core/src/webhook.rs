//! Meta webhook rules.
//!
//! Provides:
//! - `WebhookVerifier` -- the `hub.mode` / `hub.verify_token` handshake check
//! - `parse_event()` -- JSON parsing of an event delivery body
//! - `should_forward()` -- whether an event is handed to the backend pipeline

use intelliagent_types::webhook::{SUBSCRIBE_MODE, Verification, VerificationQuery};
use intelliagent_types::workflow::is_truthy;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

/// Checks verification handshakes against the configured token.
///
/// The token is fixed at construction. A verifier built without a token
/// rejects every request.
#[derive(Debug, Clone)]
pub struct WebhookVerifier {
    token: Option<SecretString>,
}

impl WebhookVerifier {
    pub fn new(token: Option<SecretString>) -> Self {
        Self { token }
    }

    /// Whether a verify token is configured at all.
    pub fn is_configured(&self) -> bool {
        self.token.is_some()
    }

    /// Accept iff `mode` is `subscribe` and the presented token matches.
    ///
    /// The challenge is echoed unmodified; an absent challenge echoes as the
    /// empty string.
    pub fn verify(&self, query: &VerificationQuery) -> Verification {
        let Some(expected) = &self.token else {
            tracing::warn!("Webhook verification rejected: no verify token configured");
            return Verification::Rejected;
        };

        let mode_ok = query.mode.as_deref() == Some(SUBSCRIBE_MODE);
        let token_ok = query.verify_token.as_deref().is_some_and(|provided| {
            constant_time_eq(expected.expose_secret().as_bytes(), provided.as_bytes())
        });

        if mode_ok && token_ok {
            tracing::info!("Meta webhook verified");
            Verification::Accepted {
                challenge: query.challenge.clone().unwrap_or_default(),
            }
        } else {
            tracing::warn!(
                mode = ?query.mode,
                token_present = query.verify_token.is_some(),
                "Meta webhook verification failed"
            );
            Verification::Rejected
        }
    }
}

/// Parse an event delivery body. The shape is never validated.
pub fn parse_event(body: &[u8]) -> Result<Value, serde_json::Error> {
    serde_json::from_slice(body)
}

/// Only events carrying a non-empty `entry` are worth forwarding.
pub fn should_forward(event: &Value) -> bool {
    match event.get("entry") {
        Some(Value::Array(entries)) => !entries.is_empty(),
        Some(Value::Object(entry)) => !entry.is_empty(),
        Some(other) => is_truthy(other),
        None => false,
    }
}

/// Compare two byte slices in time independent of where they differ.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut result: u8 = 0;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}
