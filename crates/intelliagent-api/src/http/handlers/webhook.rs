//! Meta webhook handlers.
//!
//! GET answers the verification handshake; POST takes event deliveries.
//! Both are stateless apart from the verify token and optional forwarder
//! fixed in `AppState` at startup.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Query, State};
use uuid::Uuid;

use intelliagent_core::webhook::{parse_event, should_forward};
use intelliagent_types::webhook::{EventAck, Verification, VerificationQuery};

use crate::http::error::AppError;
use crate::state::AppState;

/// GET /api/meta/webhook - Verification handshake.
///
/// 200 with the `hub.challenge` value echoed as plain text, or 403.
/// Parameters are taken as raw pairs so a repeated key still ends in a 403
/// rather than an extractor rejection.
pub async fn verify_webhook(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<String, AppError> {
    let query = VerificationQuery::from_pairs(pairs);
    match state.verifier.verify(&query) {
        Verification::Accepted { challenge } => Ok(challenge),
        Verification::Rejected => Err(AppError::VerificationFailed),
    }
}

/// POST /api/meta/webhook - Receive a Meta event.
///
/// The body only has to be JSON; its content is logged, never interpreted.
/// Events with entries are handed to the forwarder in the background when
/// one is configured.
pub async fn receive_webhook(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<EventAck>, AppError> {
    let request_id = Uuid::now_v7().to_string();

    let event = parse_event(&body).map_err(|e| {
        tracing::error!(%request_id, error = %e, "Failed to parse Meta event");
        AppError::InvalidBody
    })?;

    tracing::info!(
        %request_id,
        bytes = body.len(),
        event = %event,
        "Meta event received"
    );

    if let Some(forwarder) = &state.forwarder {
        if should_forward(&event) {
            tracing::debug!(%request_id, target_url = %forwarder.target(), "Forwarding Meta event");
            forwarder.spawn_forward(event);
        }
    }

    Ok(Json(EventAck { received: true }))
}
