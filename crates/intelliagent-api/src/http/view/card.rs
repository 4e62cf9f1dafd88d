//! Result card markup.

use intelliagent_core::view::{AgentSection, CardView, SectionBody};

use super::escape_html;

pub const LOADING_TEXT: &str = "Workflow running…";
pub const IDLE_TEXT: &str = "No workflow started yet";
pub const NO_AGENT_RESULTS_TEXT: &str = "No agent results available.";

/// Render the card for `view`.
pub fn render_card(view: &CardView) -> String {
    match view {
        CardView::Loading => format!(r#"<div class="card placeholder">{LOADING_TEXT}</div>"#),
        CardView::Idle => format!(r#"<div class="card placeholder muted">{IDLE_TEXT}</div>"#),
        CardView::Error(message) => format!(
            r#"<div class="card placeholder error">{}</div>"#,
            escape_html(message)
        ),
        CardView::NoAgentResults => format!(
            r#"<div class="agents"><div class="muted">{NO_AGENT_RESULTS_TEXT}</div></div>"#
        ),
        CardView::Agents(sections) => {
            let cards: String = sections.iter().map(render_section).collect();
            format!(r#"<div class="agents">{cards}</div>"#)
        }
    }
}

fn render_section(section: &AgentSection) -> String {
    let body = match &section.body {
        SectionBody::Image { src, mode } => {
            let caption = mode
                .as_deref()
                .map(|m| format!(r#"<div class="mode">Mode: {}</div>"#, escape_html(m)))
                .unwrap_or_default();
            format!(
                r#"<div><img src="{}" alt="{} output" class="design">{caption}</div>"#,
                escape_html(src),
                section.key.label()
            )
        }
        SectionBody::Text(text) => format!(r#"<pre class="output">{}</pre>"#, escape_html(text)),
    };

    format!(
        r#"<div class="agent-card" data-agent="{key}"><div class="title">{label} result</div><div class="platform">Platform: {platform}</div><div class="desc">{desc}</div>{body}</div>"#,
        key = section.key.as_str(),
        label = section.key.label(),
        platform = escape_html(&section.platform),
        desc = section.key.description(),
    )
}

#[cfg(test)]
mod tests {
    use intelliagent_core::view::card_view;
    use intelliagent_types::workflow::WorkflowResult;
    use serde_json::json;

    use super::*;

    fn render(value: serde_json::Value, loading: bool) -> String {
        let result = WorkflowResult::from_value(value);
        render_card(&card_view(Some(&result), loading, "website"))
    }

    #[test]
    fn loading_shows_only_placeholder() {
        let html = render(json!({ "result": { "content_agent": "hidden" } }), true);
        assert!(html.contains(LOADING_TEXT));
        assert!(!html.contains("hidden"));
    }

    #[test]
    fn idle_placeholder() {
        assert!(render_card(&card_view(None, false, "website")).contains(IDLE_TEXT));
    }

    #[test]
    fn error_shows_only_message() {
        let html = render(
            json!({ "error": "X", "result": { "content_agent": "hidden" } }),
            false,
        );
        assert!(html.contains(">X<"));
        assert!(!html.contains("agent-card"));
        assert!(!html.contains("hidden"));
    }

    #[test]
    fn design_image_with_mode_caption() {
        let html = render(
            json!({ "result": { "design_agent": { "design": "http://x/y.png", "mode": "draft" } } }),
            false,
        );
        assert!(html.contains(r#"<img src="http://x/y.png""#));
        assert!(html.contains("Mode: draft"));
    }

    #[test]
    fn empty_result_shows_fallback_line() {
        let html = render(json!({ "result": {} }), false);
        assert!(html.contains(NO_AGENT_RESULTS_TEXT));
        assert!(!html.contains("agent-card"));
    }

    #[test]
    fn section_has_label_platform_and_escaped_text() {
        let html = render(
            json!({ "result": { "content_agent": "<b>Sale</b> & more" } }),
            false,
        );
        assert!(html.contains("ContentAgent result"));
        assert!(html.contains("Platform: website"));
        assert!(html.contains("&lt;b&gt;Sale&lt;/b&gt; &amp; more"));
        assert!(!html.contains("<b>Sale</b>"));
    }

    #[test]
    fn object_values_render_as_indented_json() {
        let html = render(json!({ "result": { "analytics_agent": { "reach": 120 } } }), false);
        assert!(html.contains("{\n  &quot;reach&quot;: 120\n}"));
    }
}
