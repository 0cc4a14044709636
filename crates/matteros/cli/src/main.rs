//! MatterOS CLI - terminal interface to the legal matter risk dashboard
//!
//! This CLI gives attorneys and operations staff a terminal view of:
//! - The command bridge: posture, exposure window, 48-hour docket
//! - The matters list and per-matter detail with event timelines
//! - Policy snapshots backing clearance decisions
//!
//! With no endpoint configured every view renders from the bundled
//! fallback dataset, so the tool works offline out of the box.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;
mod output;

use commands::{bridge, matters, snapshots};
use matteros_client::{ClientConfig, MatterosClient, ENDPOINT_ENV};
use output::print_error;

/// MatterOS CLI application
#[derive(Parser)]
#[command(name = "matteros")]
#[command(about = "MatterOS - legal matter risk dashboard CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Risk API endpoint; unset means fallback-data mode
    #[arg(short, long, env = ENDPOINT_ENV)]
    endpoint: Option<String>,

    /// Output format (table, json, yaml)
    #[arg(short, long, default_value = "table")]
    output: output::OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Render the command bridge
    Bridge,

    /// Browse matters
    Matters {
        #[command(subcommand)]
        command: matters::MatterCommands,
    },

    /// Browse policy snapshots
    Snapshots {
        #[command(subcommand)]
        command: snapshots::SnapshotCommands,
    },

    /// Show effective configuration
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config = match &cli.endpoint {
        Some(endpoint) => ClientConfig::with_endpoint(endpoint),
        None => ClientConfig::default(),
    };
    let client = MatterosClient::new(&config)?;

    let result = match cli.command {
        Commands::Bridge => bridge::execute(&client, cli.output).await,
        Commands::Matters { command } => matters::execute(command, &client, cli.output).await,
        Commands::Snapshots { command } => snapshots::execute(command, &client, cli.output).await,
        Commands::Config => {
            match &config.base_url {
                Some(url) => println!("Endpoint: {url}"),
                None => println!("Endpoint: (none)"),
            }
            println!("Timeout:  {}ms", config.timeout.as_millis());
            println!(
                "Mode:     {}",
                if client.is_live() { "live" } else { "fallback" }
            );
            Ok(())
        }
    };

    if let Err(error) = result {
        print_error(&error.to_string());
        std::process::exit(1);
    }

    Ok(())
}
