//! The workflow page: client selector, prompt form and result card.

use intelliagent_core::view::{CardView, card_view};
use intelliagent_infra::config::Settings;
use intelliagent_types::workflow::WorkflowResult;

use super::card::render_card;
use super::escape_html;

/// Everything the page shows for one request.
pub struct PageModel<'a> {
    pub settings: &'a Settings,
    pub selected_client: &'a str,
    pub prompt: &'a str,
    pub result: Option<&'a WorkflowResult>,
}

const STYLE: &str = r#"
body { font-family: sans-serif; background: #f9fafb; margin: 0; padding: 2rem; display: flex; flex-direction: column; align-items: center; min-height: 100vh; }
header { text-align: center; margin-bottom: 2rem; }
main { width: 100%; max-width: 28rem; display: flex; flex-direction: column; gap: 1.5rem; }
select, textarea { width: 100%; padding: .5rem; font-size: 16px; border: 1px solid #ccc; border-radius: 8px; box-sizing: border-box; }
textarea { min-height: 100px; }
button { background: #2563eb; color: #fff; border: 0; padding: .5rem 1rem; border-radius: 4px; cursor: pointer; }
button:disabled { background: #9ca3af; cursor: default; }
.card { border: 1px solid #ddd; border-radius: 4px; padding: 1rem; text-align: center; }
.muted { color: #6b7280; }
.error { color: #dc2626; }
.agents { display: grid; gap: 1rem; }
.agent-card { border: 1px solid #ddd; border-radius: 8px; background: #fff; padding: 1rem; box-shadow: 0 1px 2px rgba(0,0,0,.1); }
.agent-card .title { font-weight: bold; font-size: 1.1rem; margin-bottom: .25rem; }
.agent-card .platform { font-size: .75rem; color: #6b7280; margin-bottom: .5rem; }
.agent-card .desc { font-size: .75rem; font-style: italic; color: #9ca3af; margin-bottom: .5rem; }
.agent-card .output { background: #f3f4f6; border-radius: 4px; padding: .25rem .5rem; font-size: .875rem; white-space: pre-wrap; margin: 0; }
.agent-card .design { max-width: 100%; border: 1px solid #ddd; border-radius: 4px; margin-bottom: .5rem; }
.agent-card .mode { font-size: .75rem; color: #16a34a; }
footer { margin-top: 2rem; font-size: .875rem; color: #6b7280; }
"#;

/// Enables the submit button once a client is picked and swaps the card for
/// the loading placeholder while the form is in flight.
const SCRIPT: &str = r#"
const form = document.getElementById("workflow-form");
const select = document.getElementById("client");
const button = document.getElementById("submit");
select.addEventListener("change", () => { button.disabled = !select.value; });
form.addEventListener("submit", (e) => {
  if (!select.value) { e.preventDefault(); return; }
  document.getElementById("result").innerHTML = document.getElementById("loading-card").innerHTML;
});
"#;

/// Render the full page.
pub fn render_page(model: &PageModel<'_>) -> String {
    let settings = model.settings;
    let options: String = settings
        .clients
        .iter()
        .map(|client| {
            let selected = if client.value == model.selected_client {
                " selected"
            } else {
                ""
            };
            format!(
                r#"<option value="{}"{selected}>{}</option>"#,
                escape_html(&client.value),
                escape_html(&client.label)
            )
        })
        .collect();

    let disabled = if model.selected_client.is_empty() {
        " disabled"
    } else {
        ""
    };
    let card = render_card(&card_view(model.result, false, &settings.platform));
    let loading = render_card(&CardView::Loading);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>IntelliAgent</title>
<style>{STYLE}</style>
</head>
<body>
<header><h1>IntelliAgent Multi-Agent Platform</h1></header>
<main>
<form id="workflow-form" method="post" action="/workflow">
<select id="client" name="client">
<option value="">-- Please select a client --</option>{options}
</select>
<textarea name="prompt" placeholder="What should the agents generate?">{prompt}</textarea>
<button id="submit" type="submit"{disabled}>Generate</button>
</form>
<div id="result">{card}</div>
<template id="loading-card">{loading}</template>
</main>
<footer>Powered by IntelliAgent</footer>
<script>{SCRIPT}</script>
</body>
</html>"#,
        prompt = escape_html(model.prompt),
    )
}

#[cfg(test)]
mod tests {
    use intelliagent_infra::config::SettingsOverrides;
    use intelliagent_types::config::GlobalConfig;
    use serde_json::json;

    use super::*;
    use crate::http::view::card::{IDLE_TEXT, LOADING_TEXT};

    fn settings() -> Settings {
        Settings::resolve(GlobalConfig::default(), SettingsOverrides::default()).unwrap()
    }

    #[test]
    fn initial_page_has_disabled_button_and_idle_card() {
        let settings = settings();
        let html = render_page(&PageModel {
            settings: &settings,
            selected_client: "",
            prompt: "",
            result: None,
        });
        assert!(html.contains(r#"<button id="submit" type="submit" disabled>"#));
        assert!(html.contains(r#"<option value="mtm">MTM – Möbel Transport Montage</option>"#));
        assert!(html.contains(IDLE_TEXT));
        // An empty prompt is a valid submission.
        assert!(html.contains(r#"<textarea name="prompt" placeholder="What should the agents generate?"></textarea>"#));
        assert!(!html.contains("required"));
        // The loading placeholder only lives in the template.
        assert!(html.contains(&format!(r#"<template id="loading-card"><div class="card placeholder">{LOADING_TEXT}</div></template>"#)));
    }

    #[test]
    fn submitted_page_keeps_selection_prompt_and_result() {
        let settings = settings();
        let result = WorkflowResult::from_value(json!({ "result": { "content_agent": "Draft" } }));
        let html = render_page(&PageModel {
            settings: &settings,
            selected_client: "mtm",
            prompt: "Post about <chairs>",
            result: Some(&result),
        });
        assert!(html.contains(r#"<option value="mtm" selected>"#));
        assert!(html.contains("Post about &lt;chairs&gt;</textarea>"));
        assert!(html.contains(r#"<button id="submit" type="submit">"#));
        assert!(html.contains("ContentAgent result"));
    }
}
