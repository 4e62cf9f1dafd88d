//! Workflow request/result types.
//!
//! The workflow backend owns the result shape; this crate only knows the five
//! agent keys it renders and the optional top-level `error` field. Results
//! are kept as raw JSON so nothing the backend sends is lost.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Path appended to the backend base URL for submissions.
pub const WORKFLOW_START_PATH: &str = "/api/workflow/start";

/// Body of `POST {backend}/api/workflow/start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowRequest {
    pub client: String,
    pub prompt: String,
    pub platform: String,
}

/// Agents whose sub-results are rendered, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentKey {
    ContentAgent,
    DesignAgent,
    CommunicationAgent,
    PublishAgent,
    AnalyticsAgent,
}

impl AgentKey {
    /// All keys in display order.
    pub const ALL: [AgentKey; 5] = [
        AgentKey::ContentAgent,
        AgentKey::DesignAgent,
        AgentKey::CommunicationAgent,
        AgentKey::PublishAgent,
        AgentKey::AnalyticsAgent,
    ];

    /// Field name inside `result`.
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentKey::ContentAgent => "content_agent",
            AgentKey::DesignAgent => "design_agent",
            AgentKey::CommunicationAgent => "communication_agent",
            AgentKey::PublishAgent => "publish_agent",
            AgentKey::AnalyticsAgent => "analytics_agent",
        }
    }

    /// Card title.
    pub fn label(&self) -> &'static str {
        match self {
            AgentKey::ContentAgent => "ContentAgent",
            AgentKey::DesignAgent => "DesignAgent",
            AgentKey::CommunicationAgent => "CommunicationAgent",
            AgentKey::PublishAgent => "PublishAgent",
            AgentKey::AnalyticsAgent => "AnalyticsAgent",
        }
    }

    /// One-line description shown under the title.
    pub fn description(&self) -> &'static str {
        match self {
            AgentKey::ContentAgent => "Text proposal",
            AgentKey::DesignAgent => "Design description or image",
            AgentKey::CommunicationAgent => "Social media text / customer communication",
            AgentKey::PublishAgent => "Publishing proposal",
            AgentKey::AnalyticsAgent => "Analysis / recommendations",
        }
    }
}

impl fmt::Display for AgentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AgentKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("unknown agent key: '{s}'"))
    }
}

/// A workflow result as the backend sent it, or an error result produced
/// locally when the submission failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkflowResult(Value);

impl WorkflowResult {
    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    /// An error-only result: `{"error": message}`.
    pub fn failure(message: impl Into<String>) -> Self {
        Self(serde_json::json!({ "error": message.into() }))
    }

    /// The error message, if the top-level `error` field is present.
    ///
    /// Non-string errors are rendered as compact JSON.
    pub fn error(&self) -> Option<String> {
        let error = self.0.get("error").filter(|v| is_truthy(v))?;
        Some(match error {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    /// The sub-result for `key` under `result`, if present.
    pub fn agent(&self, key: AgentKey) -> Option<&Value> {
        self.0
            .get("result")
            .and_then(|r| r.get(key.as_str()))
            .filter(|v| is_truthy(v))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

/// Presence test used for `error` and agent keys: `null`, `false`, `0` and
/// the empty string count as absent.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
