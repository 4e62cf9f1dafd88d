//! Global configuration loader for IntelliAgent.
//!
//! Reads `config.toml` from the data directory (`~/.intelliagent/` in
//! production) and deserializes it into [`GlobalConfig`]. Falls back to
//! defaults when the file is missing or malformed.
//!
//! [`Settings::resolve`] then layers command-line/environment overrides on
//! top and validates the result once, at startup. Handlers only ever see the
//! resolved [`Settings`].

use std::path::{Path, PathBuf};

use intelliagent_types::config::{ClientOption, GlobalConfig};
use intelliagent_types::error::ConfigError;
use reqwest::Url;
use secrecy::SecretString;

/// Resolve the data directory.
///
/// `$INTELLIAGENT_DATA_DIR` wins, then `~/.intelliagent`, then
/// `./.intelliagent`.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("INTELLIAGENT_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".intelliagent");
    }

    PathBuf::from(".intelliagent")
}

/// Load global configuration from `{data_dir}/config.toml`.
pub async fn load_global_config(data_dir: &Path) -> GlobalConfig {
    load_config_file(&data_dir.join("config.toml")).await
}

/// Load configuration from an explicit file.
///
/// - If the file does not exist, returns [`GlobalConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_config_file(config_path: &Path) -> GlobalConfig {
    let content = match tokio::fs::read_to_string(config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config file at {}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
    };

    match toml::from_str::<GlobalConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            GlobalConfig::default()
        }
    }
}

/// Values supplied on the command line or through the environment. Each one
/// replaces the corresponding config file value when set.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub verify_token: Option<String>,
    pub backend_url: Option<String>,
    pub forward_url: Option<String>,
    pub platform: Option<String>,
}

/// Validated runtime settings shared by the webhook and the workflow page.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Meta verify token; `None` rejects every handshake.
    pub verify_token: Option<SecretString>,
    /// Where events with entries are forwarded, if anywhere.
    pub forward_url: Option<Url>,
    /// Workflow backend base URL, without trailing slash.
    pub backend_url: String,
    /// Platform sent with every workflow request.
    pub platform: String,
    /// Client selector entries.
    pub clients: Vec<ClientOption>,
}

impl Settings {
    /// Merge `overrides` over `config` and validate URLs.
    ///
    /// An empty verify token counts as unset.
    pub fn resolve(config: GlobalConfig, overrides: SettingsOverrides) -> Result<Self, ConfigError> {
        let verify_token = overrides
            .verify_token
            .or(config.webhook.verify_token)
            .filter(|t| !t.is_empty())
            .map(SecretString::from);

        let backend_url = overrides.backend_url.unwrap_or(config.backend.base_url);
        let backend_url = backend_url.trim_end_matches('/').to_string();
        if backend_url.is_empty() {
            return Err(ConfigError::Empty("backend.base_url"));
        }
        parse_url("backend.base_url", &backend_url)?;

        let forward_url = overrides
            .forward_url
            .or(config.webhook.forward_url)
            .filter(|u| !u.is_empty())
            .map(|u| parse_url("webhook.forward_url", &u))
            .transpose()?;

        Ok(Self {
            verify_token,
            forward_url,
            backend_url,
            platform: overrides.platform.unwrap_or(config.ui.platform),
            clients: config.ui.clients,
        })
    }
}

fn parse_url(field: &'static str, value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|_| ConfigError::InvalidUrl {
        field,
        value: value.to_string(),
    })
}
