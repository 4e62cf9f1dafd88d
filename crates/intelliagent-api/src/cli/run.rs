//! `intelliagent run` -- start a workflow from the terminal.

use anyhow::Result;
use console::style;

use intelliagent_core::view::{CardView, SectionBody, card_view};
use intelliagent_core::workflow::service::Submission;

use crate::state::AppState;

/// Submit one workflow and print the result card as text (or the raw JSON).
pub async fn run_workflow(state: &AppState, client: &str, prompt: &str, json: bool) -> Result<()> {
    let platform = state.settings.platform.as_str();
    let submission = state.workflow_service.submit(client, prompt, platform).await;

    if json {
        let value = match &submission {
            Submission::Skipped => serde_json::json!({ "skipped": true }),
            Submission::Completed(result) => result.as_value().clone(),
        };
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    print_card(&card_view(submission.result(), false, platform));
    Ok(())
}

fn print_card(view: &CardView) {
    println!();
    match view {
        CardView::Loading => println!("  {}", style("Workflow running…").dim()),
        CardView::Idle => println!("  {}", style("No client selected, nothing submitted.").dim()),
        CardView::Error(message) => println!("  {} {}", style("✗").red(), style(message).red()),
        CardView::NoAgentResults => {
            println!("  {}", style("No agent results available.").dim())
        }
        CardView::Agents(sections) => {
            for section in sections {
                println!(
                    "  {} {}",
                    style(format!("── {} result ──", section.key.label())).bold(),
                    style(format!("(platform: {})", section.platform)).dim()
                );
                println!("  {}", style(section.key.description()).italic().dim());
                match &section.body {
                    SectionBody::Image { src, mode } => {
                        println!("  Image: {}", style(src).cyan());
                        if let Some(mode) = mode {
                            println!("  Mode:  {}", style(mode).green());
                        }
                    }
                    SectionBody::Text(text) => {
                        for line in text.lines() {
                            println!("  {line}");
                        }
                    }
                }
                println!();
            }
        }
    }
    println!();
}
