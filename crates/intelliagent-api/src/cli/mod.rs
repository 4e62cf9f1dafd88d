//! CLI command definitions for the `intelliagent` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod run;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use intelliagent_infra::config::SettingsOverrides;

/// Meta webhook receiver and agent workflow console.
#[derive(Parser)]
#[command(name = "intelliagent", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Export spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    /// Config file (defaults to `$INTELLIAGENT_DATA_DIR/config.toml`).
    #[arg(long, global = true, env = "INTELLIAGENT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server (webhook + workflow page).
    Serve {
        /// Port to listen on.
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Token Meta must present as `hub.verify_token`.
        #[arg(long, env = "META_VERIFY_TOKEN", hide_env_values = true)]
        verify_token: Option<String>,

        /// Forward events with entries to this URL.
        #[arg(long, env = "META_FORWARD_URL")]
        forward_url: Option<String>,

        #[command(flatten)]
        backend: BackendArgs,
    },

    /// Start one workflow from the terminal and print the agent results.
    Run {
        /// Client identifier (e.g. `mtm`).
        #[arg(short, long)]
        client: String,

        /// What the agents should generate.
        #[arg(short = 'P', long, default_value = "")]
        prompt: String,

        #[command(flatten)]
        backend: BackendArgs,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

/// Workflow backend options shared by `serve` and `run`.
#[derive(Args)]
pub struct BackendArgs {
    /// Workflow backend base URL.
    #[arg(long, env = "INTELLIAGENT_BACKEND_URL")]
    pub backend_url: Option<String>,

    /// Platform sent with workflow requests.
    #[arg(long)]
    pub platform: Option<String>,
}

impl BackendArgs {
    pub fn into_overrides(self) -> SettingsOverrides {
        SettingsOverrides {
            backend_url: self.backend_url,
            platform: self.platform,
            ..Default::default()
        }
    }
}
