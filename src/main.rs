// strapkit - Bootstrap component engine
//
// The binary is a thin host around the library:
// - CLI (clap): render components, search, print theme attributes
// - HTTP API (axum): the same operations as JSON endpoints
//
// Logs go to stderr (and optionally to rolling JSON files) so stdout only
// carries command output.

mod cli;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use strapkit::config::Config;
use strapkit::server::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config commands run before loading so a broken file can be repaired
    if cli::handle_config_command(&cli.command)? {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::load()?;

    // The guard must be kept alive for the duration of the program to ensure logs flush
    let _file_guard = strapkit::logging::init(&config.logging);

    match cli.command {
        Commands::Render {
            component,
            props,
            set,
            route,
            path,
        } => cli::run_render(
            &config,
            &component,
            props.as_deref(),
            &set,
            route.as_deref(),
            path.as_deref(),
        ),
        Commands::Search { query, limit } => cli::run_search(&config, &query, limit),
        Commands::Theme => {
            cli::run_theme(&config);
            Ok(())
        }
        Commands::Serve => {
            tracing::info!(
                version = strapkit::config::VERSION,
                routes = config.routes.len(),
                project_dir = %config.project_dir.display(),
                "Starting strapkit API"
            );
            let state = AppState::from_config(&config);
            server::serve(config.bind_addr, state, async {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    tracing::error!("Failed to listen for Ctrl+C: {}", e);
                }
                tracing::info!("Shutting down...");
            })
            .await
        }
        Commands::Config { .. } => Ok(()),
    }
}
