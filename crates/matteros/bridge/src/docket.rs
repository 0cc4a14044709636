//! The 48-hour execution docket.

use chrono::{DateTime, Utc};
use matteros_types::{AtRiskMatter, ExposureState};
use serde::{Deserialize, Serialize};

use crate::rank::{row_status, MatterRowStatus};
use crate::time::{format_countdown, hours_until};

/// Execution horizon in hours. Inclusive upper bound.
const DOCKET_HORIZON_HOURS: f64 = 48.0;

/// Row cap when matters fall inside the horizon.
const DOCKET_LIMIT: usize = 6;

/// Row cap for the relaxed fallback selection.
const DOCKET_FALLBACK_LIMIT: usize = 4;

/// One actionable row of the docket panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocketItem {
    /// Matter identifier.
    pub id: String,

    /// Matter title.
    pub title: String,

    /// Countdown text, e.g. "18h left".
    pub due_text: String,

    /// Recommended next action.
    pub action: String,

    /// Derived row status.
    pub status: MatterRowStatus,
}

/// Recommended next action for a matter. Fixed mapping, not configurable.
pub fn next_action(state: ExposureState) -> &'static str {
    match state {
        ExposureState::StrategicRisk => "Partner review now",
        ExposureState::ReviewRequired => "Attorney check today",
        _ => "Monitor",
    }
}

fn docket_item(matter: &AtRiskMatter, now: DateTime<Utc>) -> DocketItem {
    DocketItem {
        id: matter.id.clone(),
        title: matter.title.clone(),
        due_text: format_countdown(matter.deadline_at, now),
        action: next_action(matter.exposure_state).to_string(),
        status: row_status(matter, now),
    }
}

/// Build the docket: matters with a deadline inside (0, 48] hours, soonest
/// first, capped at six. When nothing is inside the horizon, fall back to up
/// to four non-stable matters in their existing order — the docket should
/// not sit empty while unresolved risk exists outside the window, though
/// that fallback carries no urgency ordering.
pub fn build_docket(matters: &[AtRiskMatter], now: DateTime<Utc>) -> Vec<DocketItem> {
    let mut in_horizon: Vec<(&AtRiskMatter, f64)> = matters
        .iter()
        .filter_map(|matter| {
            let hours = hours_until(matter.deadline_at, now)?;
            (hours > 0.0 && hours <= DOCKET_HORIZON_HOURS).then_some((matter, hours))
        })
        .collect();

    if !in_horizon.is_empty() {
        in_horizon.sort_by(|a, b| a.1.total_cmp(&b.1));
        return in_horizon
            .iter()
            .take(DOCKET_LIMIT)
            .map(|(matter, _)| docket_item(matter, now))
            .collect();
    }

    matters
        .iter()
        .filter(|matter| matter.exposure_state != ExposureState::Stable)
        .take(DOCKET_FALLBACK_LIMIT)
        .map(|matter| docket_item(matter, now))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn fixed_now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-03-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn matter(id: &str, state: ExposureState, deadline_hours: Option<i64>) -> AtRiskMatter {
        AtRiskMatter {
            id: id.into(),
            title: format!("Matter {id}"),
            matter_type: "PR".into(),
            stage: "FILED".into(),
            exposure_state: state,
            reasons: vec![],
            last_progress_at: None,
            deadline_at: deadline_hours.map(|h| fixed_now() + Duration::hours(h)),
        }
    }

    #[test]
    fn horizon_rows_sorted_soonest_first() {
        let now = fixed_now();
        let matters = [
            matter("MAT-1", ExposureState::ReviewRequired, Some(34)),
            matter("MAT-2", ExposureState::StrategicRisk, Some(18)),
            matter("MAT-3", ExposureState::Monitoring, Some(60)),
            matter("MAT-4", ExposureState::Stable, None),
        ];

        let docket = build_docket(&matters, now);
        let ids: Vec<&str> = docket.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, ["MAT-2", "MAT-1"]);
        assert_eq!(docket[0].due_text, "18h left");
        assert_eq!(docket[0].action, "Partner review now");
        assert_eq!(docket[0].status, MatterRowStatus::AtRisk);
        assert_eq!(docket[1].action, "Attorney check today");
    }

    #[test]
    fn overdue_and_boundary_membership() {
        let now = fixed_now();
        // Overdue (<= 0h) is outside the horizon; exactly 48h is inside.
        let matters = [
            matter("MAT-1", ExposureState::StrategicRisk, Some(-2)),
            matter("MAT-2", ExposureState::Monitoring, Some(48)),
        ];
        let docket = build_docket(&matters, now);
        assert_eq!(docket.len(), 1);
        assert_eq!(docket[0].id, "MAT-2");
    }

    #[test]
    fn horizon_rows_capped_at_six() {
        let now = fixed_now();
        let matters: Vec<AtRiskMatter> = (1..=9)
            .map(|i| matter(&format!("MAT-{i}"), ExposureState::Monitoring, Some(i)))
            .collect();
        assert_eq!(build_docket(&matters, now).len(), 6);
    }

    #[test]
    fn empty_horizon_falls_back_to_non_stable() {
        let now = fixed_now();
        let matters = [
            matter("MAT-1", ExposureState::Stable, Some(100)),
            matter("MAT-2", ExposureState::Monitoring, Some(90)),
            matter("MAT-3", ExposureState::ReviewRequired, None),
            matter("MAT-4", ExposureState::StrategicRisk, Some(80)),
            matter("MAT-5", ExposureState::Monitoring, None),
            matter("MAT-6", ExposureState::ReviewRequired, Some(120)),
        ];

        let docket = build_docket(&matters, now);
        // Existing order, stable excluded, capped at four.
        let ids: Vec<&str> = docket.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, ["MAT-2", "MAT-3", "MAT-4", "MAT-5"]);
        assert_eq!(docket[1].due_text, "no due date");
        assert_eq!(docket[1].action, "Attorney check today");
    }

    #[test]
    fn all_stable_far_out_yields_empty_docket() {
        let now = fixed_now();
        let matters = [matter("MAT-1", ExposureState::Stable, Some(100))];
        assert!(build_docket(&matters, now).is_empty());
    }
}
