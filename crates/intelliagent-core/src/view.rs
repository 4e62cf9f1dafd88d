//! View model of the workflow result card.
//!
//! [`card_view`] is the Render operation: a pure function from
//! `(result, loading, platform)` to what the card shows. Turning a
//! [`CardView`] into markup is the HTTP layer's job.

use intelliagent_types::workflow::{AgentKey, WorkflowResult, is_truthy};
use serde_json::Value;

/// Prefixes that mark a design result as an image location.
const IMAGE_PREFIXES: [&str; 2] = ["http", "/static/"];

/// What the result card displays.
#[derive(Debug, Clone, PartialEq)]
pub enum CardView {
    /// A workflow is in flight.
    Loading,
    /// Nothing has been submitted yet.
    Idle,
    /// The result carried an error; nothing else is shown.
    Error(String),
    /// One section per present agent key, in display order.
    Agents(Vec<AgentSection>),
    /// A result without any of the known agent keys.
    NoAgentResults,
}

/// One agent's card.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentSection {
    pub key: AgentKey,
    /// Platform the workflow ran for; `-` when unknown.
    pub platform: String,
    pub body: SectionBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SectionBody {
    /// A design rendered as an image, with an optional mode caption.
    Image { src: String, mode: Option<String> },
    /// Preformatted text: pretty JSON for objects/arrays, the raw string
    /// for strings.
    Text(String),
}

/// Build the card for the current page state.
///
/// Precedence: loading, no result, error, agent sections, fallback.
pub fn card_view(result: Option<&WorkflowResult>, loading: bool, platform: &str) -> CardView {
    if loading {
        return CardView::Loading;
    }
    let Some(result) = result else {
        return CardView::Idle;
    };
    if let Some(error) = result.error() {
        return CardView::Error(error);
    }

    let platform = if platform.is_empty() { "-" } else { platform };
    let sections: Vec<AgentSection> = AgentKey::ALL
        .into_iter()
        .filter_map(|key| {
            result.agent(key).map(|value| AgentSection {
                key,
                platform: platform.to_string(),
                body: section_body(key, value),
            })
        })
        .collect();

    if sections.is_empty() {
        CardView::NoAgentResults
    } else {
        CardView::Agents(sections)
    }
}

fn section_body(key: AgentKey, value: &Value) -> SectionBody {
    if key == AgentKey::DesignAgent {
        if let Some(image) = design_image(value) {
            return image;
        }
    }
    SectionBody::Text(preformat(value))
}

/// A design result is an image when its location (the value itself, or its
/// `design` field) is an absolute URL or a `/static/` path.
fn design_image(value: &Value) -> Option<SectionBody> {
    let src = match value {
        Value::String(s) => s.as_str(),
        Value::Object(map) => map.get("design")?.as_str()?,
        _ => return None,
    };
    if !IMAGE_PREFIXES.iter().any(|prefix| src.starts_with(prefix)) {
        return None;
    }
    let mode = value
        .get("mode")
        .filter(|m| is_truthy(m))
        .map(|m| match m {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        });
    Some(SectionBody::Image {
        src: src.to_string(),
        mode,
    })
}

fn preformat(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Object(_) | Value::Array(_) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn result(value: Value) -> WorkflowResult {
        WorkflowResult::from_value(value)
    }

    #[test]
    fn test_loading_ignores_result() {
        let r = result(json!({ "error": "X" }));
        assert_eq!(card_view(Some(&r), true, "website"), CardView::Loading);
        assert_eq!(card_view(None, true, "website"), CardView::Loading);
    }

    #[test]
    fn test_no_result_is_idle() {
        assert_eq!(card_view(None, false, "website"), CardView::Idle);
    }

    #[test]
    fn test_error_wins_over_agent_results() {
        let r = result(json!({
            "error": "X",
            "result": { "content_agent": "should not show" }
        }));
        assert_eq!(card_view(Some(&r), false, "website"), CardView::Error("X".into()));
    }

    #[test]
    fn test_design_url_renders_image_with_mode() {
        let r = result(json!({
            "result": { "design_agent": { "design": "http://x/y.png", "mode": "draft" } }
        }));
        let CardView::Agents(sections) = card_view(Some(&r), false, "website") else {
            panic!("expected agent sections");
        };
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].key, AgentKey::DesignAgent);
        assert_eq!(
            sections[0].body,
            SectionBody::Image {
                src: "http://x/y.png".into(),
                mode: Some("draft".into()),
            }
        );
    }

    #[test]
    fn test_design_static_path_renders_image_without_mode() {
        let r = result(json!({ "result": { "design_agent": { "design": "/static/out/1.png" } } }));
        let CardView::Agents(sections) = card_view(Some(&r), false, "website") else {
            panic!("expected agent sections");
        };
        assert_eq!(
            sections[0].body,
            SectionBody::Image {
                src: "/static/out/1.png".into(),
                mode: None,
            }
        );
    }

    #[test]
    fn test_design_bare_url_string_renders_image() {
        let r = result(json!({ "result": { "design_agent": "https://cdn.example.com/a.jpg" } }));
        let CardView::Agents(sections) = card_view(Some(&r), false, "website") else {
            panic!("expected agent sections");
        };
        assert!(matches!(sections[0].body, SectionBody::Image { .. }));
    }

    #[test]
    fn test_design_description_renders_as_json_text() {
        let r = result(json!({ "result": { "design_agent": { "design": "Blue banner", "mode": "text" } } }));
        let CardView::Agents(sections) = card_view(Some(&r), false, "website") else {
            panic!("expected agent sections");
        };
        let SectionBody::Text(text) = &sections[0].body else {
            panic!("expected text body");
        };
        assert!(text.contains("\"design\": \"Blue banner\""));
        assert!(text.starts_with("{\n  "));
    }

    #[test]
    fn test_url_in_non_design_agent_stays_text() {
        let r = result(json!({ "result": { "publish_agent": "https://example.com/post/1" } }));
        let CardView::Agents(sections) = card_view(Some(&r), false, "website") else {
            panic!("expected agent sections");
        };
        assert_eq!(
            sections[0].body,
            SectionBody::Text("https://example.com/post/1".into())
        );
    }

    #[test]
    fn test_sections_follow_fixed_order() {
        let r = result(json!({
            "result": {
                "analytics_agent": { "score": 3 },
                "content_agent": "text",
                "lead_agent": "ignored",
                "communication_agent": 7,
            }
        }));
        let CardView::Agents(sections) = card_view(Some(&r), false, "website") else {
            panic!("expected agent sections");
        };
        let keys: Vec<AgentKey> = sections.iter().map(|s| s.key).collect();
        assert_eq!(
            keys,
            [
                AgentKey::ContentAgent,
                AgentKey::CommunicationAgent,
                AgentKey::AnalyticsAgent
            ]
        );
        assert_eq!(sections[1].body, SectionBody::Text("7".into()));
    }

    #[test]
    fn test_empty_result_map_falls_back() {
        let r = result(json!({ "result": {} }));
        assert_eq!(card_view(Some(&r), false, "website"), CardView::NoAgentResults);
    }

    #[test]
    fn test_missing_result_map_falls_back() {
        let r = result(json!({ "status": "queued" }));
        assert_eq!(card_view(Some(&r), false, "website"), CardView::NoAgentResults);
    }

    #[test]
    fn test_empty_platform_shows_dash() {
        let r = result(json!({ "result": { "content_agent": "x" } }));
        let CardView::Agents(sections) = card_view(Some(&r), false, "") else {
            panic!("expected agent sections");
        };
        assert_eq!(sections[0].platform, "-");
    }
}
