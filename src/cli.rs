// CLI module - command-line argument parsing and handlers
//
// Subcommands:
// - render: Resolve a component and print its render options
// - search: Query the route/documentation index
// - theme: Print the <html> theme attributes
// - serve: Run the local HTTP API
// - config: Show, reset, edit or locate the configuration file

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde_json::{Map, Value};
use std::io::Write;
use std::process::Command;

use strapkit::components::{self, MountContext, RandomIdGenerator};
use strapkit::config::{Config, VERSION};
use strapkit::routing::RequestContext;
use strapkit::search::{SearchResponse, SearchService};
use strapkit::theme::ThemeRuntime;

/// strapkit - Bootstrap components rendered on the server
#[derive(Parser)]
#[command(name = "strapkit")]
#[command(version = VERSION)]
#[command(about = "Bootstrap component options, site search and theme helpers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a component's props and print its render options
    Render {
        /// Component name (button, accordion-item, ListGroupItem, ...)
        component: String,

        /// Props as a JSON object
        #[arg(long)]
        props: Option<String>,

        /// Single prop as key=value (value parsed as JSON when possible)
        #[arg(long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,

        /// Current route name, for route-aware components
        #[arg(long)]
        route: Option<String>,

        /// Current request path, for route-aware components
        #[arg(long)]
        path: Option<String>,
    },

    /// Search routes and documentation
    Search {
        query: String,

        /// Max results
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Print the document-level theme attributes
    Theme,

    /// Run the HTTP API
    Serve,

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Open config file in $EDITOR
        #[arg(long)]
        edit: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

/// Handle config commands, which must work even when the config is broken.
/// Returns true if a command was handled.
pub fn handle_config_command(command: &Commands) -> Result<bool> {
    let Commands::Config {
        show,
        reset,
        edit,
        path,
    } = command
    else {
        return Ok(false);
    };

    if *path {
        handle_config_path()?;
    } else if *show {
        handle_config_show()?;
    } else if *reset {
        handle_config_reset()?;
    } else if *edit {
        handle_config_edit()?;
    } else {
        // No flag provided, show help
        println!("Usage: strapkit config [--show|--reset|--edit|--path]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --reset   Reset config file to defaults");
        println!("  --edit    Open config file in $EDITOR");
        println!("  --path    Show config file path");
    }
    Ok(true)
}

fn config_path() -> Result<std::path::PathBuf> {
    Config::config_path().context("Could not determine config path")
}

fn handle_config_path() -> Result<()> {
    println!("{}", config_path()?.display());
    Ok(())
}

fn handle_config_show() -> Result<()> {
    let config = Config::load()?;

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    // Show source info
    println!();
    let path = config_path()?;
    if path.exists() {
        println!("# Source: {}", path.display());
    } else {
        println!("# Source: defaults (no config file)");
    }
    Ok(())
}

fn handle_config_reset() -> Result<()> {
    let path = config_path()?;

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    Config::write_template(&path)?;
    println!("Config reset to defaults: {}", path.display());
    Ok(())
}

fn handle_config_edit() -> Result<()> {
    let path = config_path()?;

    if !path.exists() {
        Config::write_template(&path)?;
        println!("Created new config file: {}", path.display());
    }

    let editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(windows) {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    println!("Opening {} with {}", path.display(), editor);

    let status = Command::new(&editor)
        .arg(&path)
        .status()
        .with_context(|| {
            format!(
                "Failed to launch editor '{}'. Set $EDITOR to your preferred editor",
                editor
            )
        })?;
    if !status.success() {
        bail!("Editor exited with status: {}", status);
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Engine commands
// ─────────────────────────────────────────────────────────────────────────────

/// `key=value`; the value is JSON when it parses as JSON, a string otherwise
pub fn parse_set(arg: &str) -> Result<(String, Value)> {
    let Some((key, raw)) = arg.split_once('=') else {
        bail!("Expected KEY=VALUE, got '{}'", arg);
    };
    let key = key.trim();
    if key.is_empty() {
        bail!("Empty key in '{}'", arg);
    }
    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}

/// Merge `--props` and `--set` into one props object, `--set` winning
pub fn build_props(props: Option<&str>, sets: &[String]) -> Result<Value> {
    let mut map = match props {
        Some(raw) => match serde_json::from_str::<Value>(raw).context("--props is not valid JSON")? {
            Value::Object(map) => map,
            other => bail!("--props must be a JSON object, got {}", other),
        },
        None => Map::new(),
    };
    for set in sets {
        let (key, value) = parse_set(set)?;
        map.insert(key, value);
    }
    Ok(Value::Object(map))
}

pub fn run_render(
    config: &Config,
    component: &str,
    props: Option<&str>,
    sets: &[String],
    route: Option<&str>,
    path: Option<&str>,
) -> Result<()> {
    let props = build_props(props, sets)?;
    let ids = RandomIdGenerator::new();
    let routes = config.route_table();
    let request = (route.is_some() || path.is_some())
        .then(|| RequestContext::new(route, path.unwrap_or("/")));

    let mut ctx = MountContext::new(&config.components, &ids).with_router(&routes);
    if let Some(request) = &request {
        ctx = ctx.with_request(request);
    }

    let options = components::render(component, props, &ctx)?;
    let attributes = options.attributes("attrs").render();
    println!("{}", serde_json::to_string_pretty(&options)?);
    println!();
    println!("{}", attributes);
    Ok(())
}

pub fn run_search(config: &Config, query: &str, limit: Option<usize>) -> Result<()> {
    let service = SearchService::new(
        config.project_dir.clone(),
        config.route_table(),
        config.search.clone(),
    );
    let results = service.search(query, limit);
    let response = SearchResponse::new(query, results);
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

pub fn run_theme(config: &Config) {
    println!("{}", ThemeRuntime::new(&config.theme).html_attributes());
}
