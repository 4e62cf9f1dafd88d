//! Meta webhook wire types.
//!
//! The verification handshake arrives as a GET with `hub.*` query parameters;
//! events arrive as arbitrary JSON and are never given a typed shape.

use serde::{Deserialize, Serialize};

/// The only `hub.mode` value that may complete a verification.
pub const SUBSCRIBE_MODE: &str = "subscribe";

/// Body of the 403 response for a rejected verification.
pub const VERIFICATION_FAILED: &str = "Verification failed";

/// `error` value of the 400 response for an unparseable event body.
pub const INVALID_BODY: &str = "Invalid body";

/// Query parameters of the verification handshake. All of them may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationQuery {
    #[serde(rename = "hub.mode", default)]
    pub mode: Option<String>,
    #[serde(rename = "hub.verify_token", default)]
    pub verify_token: Option<String>,
    #[serde(rename = "hub.challenge", default)]
    pub challenge: Option<String>,
}

impl VerificationQuery {
    /// Build from decoded query pairs. A repeated `hub.*` key keeps its first
    /// value; unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "hub.mode" => &mut query.mode,
                "hub.verify_token" => &mut query.verify_token,
                "hub.challenge" => &mut query.challenge,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        query
    }
}

/// Result of checking a [`VerificationQuery`] against the configured token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    /// Echo `challenge` back with 200.
    Accepted { challenge: String },
    /// Respond 403 with [`VERIFICATION_FAILED`].
    Rejected,
}

/// Acknowledgement body for a received event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventAck {
    pub received: bool,
}

/// Error body for an unparseable event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRejection {
    pub error: String,
}
