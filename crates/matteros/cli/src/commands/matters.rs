//! Matter list and detail commands

use chrono::Utc;
use clap::Subcommand;
use colored::*;
use serde::Serialize;
use tabled::Tabled;

use matteros_bridge::{compact_matter_type, format_countdown};
use matteros_client::MatterosClient;
use matteros_types::MatterRecord;

use crate::error::CliResult;
use crate::output::{colorize_exposure, origin_note, print_output, print_single, OutputFormat};

/// Matter subcommands
#[derive(Subcommand)]
pub enum MatterCommands {
    /// List all matters
    List,

    /// Show one matter with its timeline and linked policy snapshot
    Show {
        /// Matter ID
        matter_id: String,
    },
}

#[derive(Serialize, Tabled)]
#[serde(rename_all = "camelCase")]
struct MatterRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Client")]
    client: String,
    #[tabled(rename = "Type")]
    matter_type: String,
    #[tabled(rename = "Stage")]
    stage: String,
    #[tabled(rename = "Exposure")]
    exposure: String,
    #[tabled(rename = "Deadline")]
    deadline: String,
}

impl MatterRow {
    fn from_record(matter: &MatterRecord, now: chrono::DateTime<Utc>) -> Self {
        Self {
            id: matter.id.clone(),
            title: matter.title.clone(),
            client: matter.client_name.clone(),
            matter_type: compact_matter_type(&matter.matter_type),
            stage: matter.stage.clone(),
            exposure: matter.exposure_state.to_string(),
            deadline: format_countdown(matter.deadline_at, now),
        }
    }
}


/// Execute a matter command
pub async fn execute(
    command: MatterCommands,
    client: &MatterosClient,
    format: OutputFormat,
) -> CliResult<()> {
    match command {
        MatterCommands::List => {
            let now = Utc::now();
            let data = client.matters().await;

            if matches!(format, OutputFormat::Table) {
                let rows: Vec<MatterRow> = data
                    .matters
                    .iter()
                    .map(|matter| MatterRow::from_record(matter, now))
                    .collect();
                print_output(rows, format)?;
                println!("{} {}", "data:".dimmed(), origin_note(data.source));
                Ok(())
            } else {
                print_single(&data, format)
            }
        }

        MatterCommands::Show { matter_id } => {
            let now = Utc::now();
            let detail = client.matter_detail(&matter_id).await?;

            if !matches!(format, OutputFormat::Table) {
                return print_single(&detail, format);
            }

            let matter = &detail.matter;
            println!("{} - {}", matter.id.bold(), matter.title);
            println!("Client:   {}", matter.client_name);
            println!("Type:     {}", compact_matter_type(&matter.matter_type));
            println!("Stage:    {}", matter.stage);
            println!("Exposure: {}", colorize_exposure(matter.exposure_state));
            println!("Deadline: {}", format_countdown(matter.deadline_at, now));
            if let Some(opened_at) = matter.opened_at {
                println!("Opened:   {}", opened_at.format("%Y-%m-%d"));
            }

            println!("\nTimeline:");
            for event in &detail.events {
                let stage = event.stage.as_deref().unwrap_or("-");
                println!(
                    "  {}  {:<24} {:<22} {}",
                    event.occurred_at.format("%Y-%m-%d %H:%M"),
                    event.event_type,
                    stage.dimmed(),
                    event.description,
                );
            }

            match &detail.policy_snapshot {
                Some(snapshot) => {
                    println!("\nPolicy Snapshot: {} - {}", snapshot.id.bold(), snapshot.title);
                    println!("  Decision:  {}", snapshot.clearance_decision);
                    println!("  Rationale: {}", snapshot.rationale);
                    println!("  Hash:      {}", snapshot.immutable_hash.dimmed());
                }
                None => println!("\n{}", "No linked policy snapshot".dimmed()),
            }

            println!(
                "\n{} matter: {}, events: {}, snapshot: {}",
                "data".dimmed(),
                origin_note(detail.source.matter),
                origin_note(detail.source.events),
                origin_note(detail.source.policy_snapshot),
            );
            Ok(())
        }
    }
}
