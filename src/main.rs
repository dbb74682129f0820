//! Router introspection CLI (v1)
//!
//! Loads an application manifest, assembles its router tree and prints every
//! route signature the application registers.
//!
//! # Architecture Overview
//!
//! ```text
//!   config.toml
//!       │
//!       ▼
//!  ┌─────────┐    ┌─────────┐    ┌──────────┐    ┌──────────┐
//!  │ config  │───▶│ adapter │───▶│ routing  │───▶│  output  │──▶ stdout
//!  │ loader  │    │  tree   │    │  walker  │    │  render  │
//!  └─────────┘    └─────────┘    └──────────┘    └──────────┘
//!                                      │
//!                                      ▼
//!                                ┌──────────┐
//!                                │  admin   │──▶ GET /admin/routes
//!                                └──────────┘
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use route_introspect::admin;
use route_introspect::config::{load_config, IntrospectConfig, OutputFormat};
use route_introspect::observability::logging;
use route_introspect::{build_tree, RouteInventory};

#[derive(Parser)]
#[command(name = "route-introspect")]
#[command(about = "List every route an application's router tree responds to", long_about = None)]
struct Cli {
    /// Application manifest and settings (TOML).
    #[arg(short, long, global = true, default_value = "route-introspect.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the route list (then serve it when [admin] is enabled)
    List {
        /// Override the configured output format
        #[arg(short, long, value_parser = parse_format)]
        format: Option<OutputFormat>,
    },
    /// Serve the route list over HTTP
    Serve {
        /// Override the configured bind address
        #[arg(short, long)]
        bind: Option<String>,
    },
}

fn parse_format(value: &str) -> Result<OutputFormat, String> {
    match value {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => Err(format!("unknown format '{}', expected text or json", other)),
    }
}

fn collect(config: &IntrospectConfig) -> Result<RouteInventory, Box<dyn std::error::Error>> {
    let tree = build_tree(&config.app, &config.routers, config.adapter_options())?;
    let inventory = RouteInventory::from_tree(&tree, config.walk_options());

    tracing::info!(
        count = inventory.len(),
        complex = inventory.complex_count(),
        routes = ?inventory.routes,
        "ROUTES"
    );
    Ok(inventory)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match load_config(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            logging::init(&Default::default());
            tracing::error!(path = %cli.config.display(), "Failed to load config: {}", e);
            return Err(e.into());
        }
    };
    logging::init(&config.observability);

    let inventory = collect(&config)?;

    match cli.command {
        Commands::List { format } => {
            let format = format.unwrap_or(config.output.format);
            println!("{}", inventory.render(format)?);

            if config.admin.enabled {
                admin::serve(&config.admin.bind_address, inventory).await?;
            }
        }
        Commands::Serve { bind } => {
            let bind = bind.unwrap_or_else(|| config.admin.bind_address.clone());
            admin::serve(&bind, inventory).await?;
        }
    }

    Ok(())
}
