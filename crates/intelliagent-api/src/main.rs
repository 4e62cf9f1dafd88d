//! IntelliAgent entry point.
//!
//! Binary name: `intelliagent`
//!
//! Parses CLI arguments, resolves configuration once, then either starts the
//! HTTP server (Meta webhook + workflow page) or runs a single workflow from
//! the terminal.

mod cli;
mod http;
mod state;

use clap::Parser;
use clap_complete::generate;

use cli::{Cli, Commands};
use intelliagent_infra::config::{
    Settings, SettingsOverrides, load_config_file, load_global_config, resolve_data_dir,
};
use intelliagent_observe::tracing_setup::{TracingOptions, init_tracing, shutdown_tracing};
use intelliagent_types::config::GlobalConfig;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn,intelliagent=info",
        1 => "info,intelliagent=debug",
        _ => "trace",
    };

    init_tracing(&TracingOptions {
        default_directive: filter.to_string(),
        json: cli.log_json,
        enable_otel: cli.otel,
    })
    .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "intelliagent", &mut std::io::stdout());
        return Ok(());
    }

    let config = load_config(&cli).await;
    let result = dispatch(cli, config).await;
    shutdown_tracing();
    result
}

async fn load_config(cli: &Cli) -> GlobalConfig {
    match &cli.config {
        Some(path) => load_config_file(path).await,
        None => load_global_config(&resolve_data_dir()).await,
    }
}

async fn dispatch(cli: Cli, config: GlobalConfig) -> anyhow::Result<()> {
    match cli.command {
        Commands::Serve {
            port,
            host,
            verify_token,
            forward_url,
            backend,
        } => {
            let overrides = SettingsOverrides {
                verify_token,
                forward_url,
                ..backend.into_overrides()
            };
            let state = AppState::new(Settings::resolve(config, overrides)?)?;

            if !state.verifier.is_configured() {
                tracing::warn!("No verify token configured; Meta webhook verification will fail");
            }

            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            if !cli.quiet {
                println!(
                    "  {} IntelliAgent listening on {}",
                    console::style("⚡").bold(),
                    console::style(format!("http://{addr}")).cyan()
                );
                println!(
                    "  {} {}",
                    console::style("Backend:").dim(),
                    state.settings.backend_url
                );
                println!("  {}", console::style("Press Ctrl+C to stop").dim());
            }

            tracing::info!(%addr, backend = %state.settings.backend_url, "Server starting");

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            if !cli.quiet {
                println!("\n  Server stopped.");
            }
        }

        Commands::Run {
            client,
            prompt,
            backend,
        } => {
            let state = AppState::new(Settings::resolve(config, backend.into_overrides())?)?;
            cli::run::run_workflow(&state, &client, &prompt, cli.json).await?;
        }

        // Generated before config is loaded.
        Commands::Completions { .. } => {}
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
