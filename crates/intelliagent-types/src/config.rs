//! Global configuration types for IntelliAgent.
//!
//! `GlobalConfig` represents the top-level `config.toml` that controls the
//! webhook verify token, the workflow backend location and the UI options.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the IntelliAgent gateway.
///
/// Loaded from `~/.intelliagent/config.toml`. All sections have defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub webhook: WebhookConfig,

    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub ui: UiConfig,
}

/// Meta webhook settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebhookConfig {
    /// Shared secret Meta sends as `hub.verify_token`. No default: without a
    /// token every verification attempt is rejected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verify_token: Option<String>,

    /// Backend pipeline URL that events carrying an `entry` are forwarded to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forward_url: Option<String>,
}

/// Workflow backend location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL; `/api/workflow/start` is appended for submissions.
    #[serde(default = "default_backend_url")]
    pub base_url: String,
}

fn default_backend_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_backend_url(),
        }
    }
}

/// Options for the workflow page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Platform string sent with every workflow request.
    #[serde(default = "default_platform")]
    pub platform: String,

    /// Clients offered in the selector, in display order.
    #[serde(default = "default_clients")]
    pub clients: Vec<ClientOption>,
}

fn default_platform() -> String {
    "website".to_string()
}

fn default_clients() -> Vec<ClientOption> {
    vec![ClientOption {
        value: "mtm".to_string(),
        label: "MTM – Möbel Transport Montage".to_string(),
    }]
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            platform: default_platform(),
            clients: default_clients(),
        }
    }
}

/// One entry of the client selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientOption {
    /// Identifier sent to the backend as `client`.
    pub value: String,
    /// Human-readable label.
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_config_default_values() {
        let config = GlobalConfig::default();
        assert!(config.webhook.verify_token.is_none());
        assert!(config.webhook.forward_url.is_none());
        assert_eq!(config.backend.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.ui.platform, "website");
        assert_eq!(config.ui.clients.len(), 1);
        assert_eq!(config.ui.clients[0].value, "mtm");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: GlobalConfig = toml::from_str(
            r#"
[webhook]
verify_token = "s3cret"
"#,
        )
        .unwrap();
        assert_eq!(config.webhook.verify_token.as_deref(), Some("s3cret"));
        assert_eq!(config.backend.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.ui.platform, "website");
    }

    #[test]
    fn test_custom_client_list_replaces_default() {
        let config: GlobalConfig = toml::from_str(
            r#"
[ui]
platform = "instagram"

[[ui.clients]]
value = "acme"
label = "ACME Corp"

[[ui.clients]]
value = "globex"
label = "Globex"
"#,
        )
        .unwrap();
        assert_eq!(config.ui.platform, "instagram");
        let values: Vec<&str> = config.ui.clients.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, ["acme", "globex"]);
    }
}
