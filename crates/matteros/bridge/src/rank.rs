//! Severity/urgency ranking for the exposure window.

use chrono::{DateTime, Utc};
use matteros_types::{AtRiskMatter, ExposureState};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::time::hours_until;

/// Row cap of the exposure window panel.
pub const EXPOSURE_WINDOW_LIMIT: usize = 6;

/// Hours-to-deadline at or under which a row is flagged at risk regardless
/// of exposure state. Inclusive: exactly 72h is at risk.
const AT_RISK_HORIZON_HOURS: f64 = 72.0;

/// Per-row status shown next to each ranked matter. Derived independently of
/// the sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatterRowStatus {
    /// Strategic risk, or a deadline within 72 hours.
    AtRisk,

    /// Review-required or monitoring exposure without deadline pressure.
    Watch,

    /// Nothing to act on.
    OnTrack,
}

impl fmt::Display for MatterRowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatterRowStatus::AtRisk => write!(f, "AT RISK"),
            MatterRowStatus::Watch => write!(f, "WATCH"),
            MatterRowStatus::OnTrack => write!(f, "ON TRACK"),
        }
    }
}

/// Derive the row status for one matter.
pub fn row_status(matter: &AtRiskMatter, now: DateTime<Utc>) -> MatterRowStatus {
    let hours = hours_until(matter.deadline_at, now);

    if matter.exposure_state == ExposureState::StrategicRisk
        || hours.is_some_and(|h| h <= AT_RISK_HORIZON_HOURS)
    {
        return MatterRowStatus::AtRisk;
    }

    if matches!(
        matter.exposure_state,
        ExposureState::ReviewRequired | ExposureState::Monitoring
    ) {
        return MatterRowStatus::Watch;
    }

    MatterRowStatus::OnTrack
}

/// Order matters by exposure severity (descending), breaking ties by
/// hours-to-deadline (ascending; no deadline sorts last), and truncate to
/// the exposure window limit.
pub fn rank_matters(matters: &[AtRiskMatter], now: DateTime<Utc>) -> Vec<AtRiskMatter> {
    let mut rows = matters.to_vec();
    rows.sort_by(|a, b| {
        b.exposure_state
            .severity()
            .cmp(&a.exposure_state.severity())
            .then_with(|| {
                let a_hours = hours_until(a.deadline_at, now).unwrap_or(f64::INFINITY);
                let b_hours = hours_until(b.deadline_at, now).unwrap_or(f64::INFINITY);
                a_hours.total_cmp(&b_hours)
            })
    });
    rows.truncate(EXPOSURE_WINDOW_LIMIT);
    rows
}

/// Number of rows whose derived status is at-risk; the "N at risk" counter
/// in the exposure window header.
pub fn at_risk_count(matters: &[AtRiskMatter], now: DateTime<Utc>) -> usize {
    matters
        .iter()
        .filter(|matter| row_status(matter, now) == MatterRowStatus::AtRisk)
        .count()
}
