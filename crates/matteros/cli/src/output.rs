//! Output formatting utilities

use colored::*;
use matteros_types::{DataOrigin, ExposureState, OperationalPosture};
use serde::Serialize;
use tabled::{Table, Tabled};

use crate::error::CliResult;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Print a vector of items in the specified format
pub fn print_output<T: Serialize + Tabled>(data: Vec<T>, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Table => {
            if data.is_empty() {
                println!("{}", "No results".dimmed());
            } else {
                println!("{}", Table::new(data));
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
        OutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(&data)?);
        }
    }
    Ok(())
}

/// Print a single item in the specified format
pub fn print_single<T: Serialize>(data: &T, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Table | OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(data)?);
        }
        OutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(data)?);
        }
    }
    Ok(())
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Posture chip text in the posture's tone.
pub fn colorize_posture(posture: OperationalPosture) -> ColoredString {
    let label = posture.to_string();
    match posture {
        OperationalPosture::ImmediateRisk => label.red().bold(),
        OperationalPosture::AttentionRequired => label.yellow().bold(),
        OperationalPosture::Stable => label.green().bold(),
    }
}

/// Exposure state label in its tone.
pub fn colorize_exposure(state: ExposureState) -> ColoredString {
    let label = state.to_string();
    match state {
        ExposureState::StrategicRisk => label.red(),
        ExposureState::ReviewRequired => label.yellow(),
        ExposureState::Monitoring => label.blue(),
        ExposureState::Stable => label.green(),
    }
}

/// Provenance note for a rendered slice.
pub fn origin_note(origin: DataOrigin) -> ColoredString {
    match origin {
        DataOrigin::Live => "live".green(),
        DataOrigin::Fallback => "fallback".yellow(),
    }
}
