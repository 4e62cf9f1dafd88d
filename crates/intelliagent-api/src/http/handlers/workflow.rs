//! Workflow page handlers.
//!
//! GET / renders the empty page; POST /workflow submits the form through the
//! workflow service and renders the page again with the result card.

use axum::Form;
use axum::extract::State;
use axum::response::Html;
use serde::Deserialize;

use crate::http::view::page::{PageModel, render_page};
use crate::state::AppState;

/// Form fields posted by the workflow page.
#[derive(Debug, Default, Deserialize)]
pub struct WorkflowForm {
    #[serde(default)]
    pub client: String,
    #[serde(default)]
    pub prompt: String,
}

/// GET / - The workflow page before any submission.
pub async fn show_page(State(state): State<AppState>) -> Html<String> {
    Html(render_page(&PageModel {
        settings: &state.settings,
        selected_client: "",
        prompt: "",
        result: None,
    }))
}

/// POST /workflow - Submit the form and show the result.
///
/// With no client selected nothing is sent and the page is shown unchanged.
pub async fn submit_workflow(
    State(state): State<AppState>,
    Form(form): Form<WorkflowForm>,
) -> Html<String> {
    let platform = state.settings.platform.as_str();
    let submission = state
        .workflow_service
        .submit(&form.client, &form.prompt, platform)
        .await;

    Html(render_page(&PageModel {
        settings: &state.settings,
        selected_client: &form.client,
        prompt: &form.prompt,
        result: submission.result(),
    }))
}
