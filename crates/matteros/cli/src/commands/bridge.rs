//! Command bridge rendering

use chrono::{DateTime, Utc};
use colored::*;
use serde::Serialize;

use matteros_bridge::{
    at_risk_count, build_docket, classify_posture, compact_matter_type, compact_title,
    exposure_ring, format_countdown, format_last_evaluated, rank_matters, row_status,
    DocketItem, ExposureRing, MatterRowStatus,
};
use matteros_client::MatterosClient;
use matteros_types::{AtRiskMatter, CommandCenterData, CommandCenterSource, OperationalPosture};

use crate::error::CliResult;
use crate::output::{colorize_posture, origin_note, print_single, OutputFormat};

/// Everything the bridge renders, in one serializable view for the
/// structured output formats.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BridgeView {
    posture: OperationalPosture,
    active_matters: u64,
    escalations: u64,
    deadlines_next7_days: u64,
    stalled_matters: u64,
    at_risk_count: usize,
    exposure_window: Vec<AtRiskMatter>,
    docket: Vec<DocketItem>,
    ring: ExposureRing,
    source: CommandCenterSource,
}

/// Run the derivation pipeline over one fetched snapshot. The docket is
/// built from the ranked exposure window, not the raw at-risk list, so the
/// two panels always agree on which matters are in play.
fn compose_view(data: &CommandCenterData, now: DateTime<Utc>) -> BridgeView {
    let window = rank_matters(&data.at_risk_matters, now);
    let docket = build_docket(&window, now);
    let flagged = at_risk_count(&window, now);

    BridgeView {
        posture: classify_posture(&data.dashboard, &data.at_risk_matters, now),
        active_matters: data.dashboard.active_matters,
        escalations: data.dashboard.escalations,
        deadlines_next7_days: data.dashboard.deadlines_next7_days,
        stalled_matters: data.dashboard.stalled_matters,
        at_risk_count: flagged,
        exposure_window: window,
        docket,
        ring: exposure_ring(&data.dashboard.risk_counts),
        source: data.source,
    }
}

/// Render the command bridge.
pub async fn execute(client: &MatterosClient, format: OutputFormat) -> CliResult<()> {
    let now = Utc::now();
    let data = client.command_center().await;
    let view = compose_view(&data, now);

    if !matches!(format, OutputFormat::Table) {
        return print_single(&view, format);
    }

    // Posture chip and meta counters
    println!("Operational Posture: {}", colorize_posture(view.posture));
    println!(
        "{}",
        format_last_evaluated(data.dashboard.last_evaluated_at, now).dimmed()
    );
    println!();
    println!(
        "Active {}   Escalations {}   Deadlines 7d {}   Stalled {}",
        view.active_matters, view.escalations, view.deadlines_next7_days, view.stalled_matters,
    );

    // Exposure window
    println!();
    println!("Exposure Window ({} at risk)", view.at_risk_count);
    if view.exposure_window.is_empty() {
        println!("  {}", "No matters flagged".dimmed());
    }
    for matter in &view.exposure_window {
        println!(
            "  {:<9} {:<28} {:<22} {:<12} {}",
            matter.id,
            compact_title(&matter.title),
            compact_matter_type(&matter.matter_type),
            format_countdown(matter.deadline_at, now),
            colorize_row_status(row_status(matter, now)),
        );
    }

    // 48-hour docket
    println!();
    println!("Next 48 Hours");
    if view.docket.is_empty() {
        println!("  {}", "Nothing due".dimmed());
    }
    for item in &view.docket {
        println!(
            "  {:<9} {:<28} {:<12} {}",
            item.id,
            compact_title(&item.title),
            item.due_text,
            item.action,
        );
    }

    // Exposure ring legend
    println!();
    println!("Exposure Breakdown");
    println!(
        "  {} {:.0}%   {} {:.0}%   {} {:.0}%   {} {:.0}%",
        "Strategic Risk".red(),
        view.ring.strategic_risk_pct,
        "Review Required".yellow(),
        view.ring.review_required_pct,
        "Monitoring".blue(),
        view.ring.monitoring_pct,
        "Stable".green(),
        view.ring.stable_pct,
    );

    // Operational closure
    println!();
    println!(
        "Closure: {} prevented, {} surfaced, {} resolved",
        data.dashboard.closure.prevented,
        data.dashboard.closure.surfaced,
        data.dashboard.closure.resolved,
    );

    println!();
    println!(
        "{} dashboard: {}, at-risk: {}",
        "data".dimmed(),
        origin_note(data.source.dashboard),
        origin_note(data.source.at_risk),
    );

    Ok(())
}

fn colorize_row_status(status: MatterRowStatus) -> ColoredString {
    let label = status.to_string();
    match status {
        MatterRowStatus::AtRisk => label.red().bold(),
        MatterRowStatus::Watch => label.yellow(),
        MatterRowStatus::OnTrack => label.green(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use matteros_types::{
        DashboardSummary, DataOrigin, ExposureState, OperationalClosure, RiskCounts,
    };

    fn matter(id: &str, state: ExposureState, deadline_hours: Option<i64>, now: DateTime<Utc>) -> AtRiskMatter {
        AtRiskMatter {
            id: id.into(),
            title: format!("Matter {id}"),
            matter_type: "PR".into(),
            stage: "FILED".into(),
            exposure_state: state,
            reasons: vec![],
            last_progress_at: None,
            deadline_at: deadline_hours.map(|h| now + Duration::hours(h)),
        }
    }

    fn data(at_risk_matters: Vec<AtRiskMatter>) -> CommandCenterData {
        CommandCenterData {
            dashboard: DashboardSummary {
                active_matters: at_risk_matters.len() as u64,
                escalations: 0,
                deadlines_next7_days: 0,
                stalled_matters: 0,
                risk_counts: RiskCounts::default(),
                last_evaluated_at: Utc::now(),
                closure: OperationalClosure::default(),
            },
            at_risk_matters,
            source: CommandCenterSource {
                dashboard: DataOrigin::Fallback,
                at_risk: DataOrigin::Fallback,
            },
        }
    }

    #[test]
    fn docket_is_built_from_the_ranked_window() {
        let now = Utc::now();
        // Six strategic-risk matters without deadlines fill the window; a
        // stable matter due in 5h ranks below all of them and must not
        // reach the docket.
        let mut matters: Vec<AtRiskMatter> = (0..6)
            .map(|i| matter(&format!("MAT-S{i}"), ExposureState::StrategicRisk, None, now))
            .collect();
        matters.push(matter("MAT-STABLE", ExposureState::Stable, Some(5), now));

        let view = compose_view(&data(matters), now);

        let window_ids: Vec<&str> = view
            .exposure_window
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        assert!(!window_ids.contains(&"MAT-STABLE"));

        // Relaxed fallback over the window: four strategic rows, no stable.
        let docket_ids: Vec<&str> = view.docket.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(docket_ids, ["MAT-S0", "MAT-S1", "MAT-S2", "MAT-S3"]);
    }

    #[test]
    fn window_and_counter_agree() {
        let now = Utc::now();
        let matters = vec![
            matter("MAT-1", ExposureState::StrategicRisk, Some(18), now),
            matter("MAT-2", ExposureState::Monitoring, None, now),
        ];
        let view = compose_view(&data(matters), now);
        assert_eq!(view.at_risk_count, 1);
        assert_eq!(view.exposure_window.len(), 2);
    }
}
