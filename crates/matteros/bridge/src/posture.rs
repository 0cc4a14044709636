//! Whole-dashboard posture classification.

use chrono::{DateTime, Utc};
use matteros_types::{AtRiskMatter, DashboardSummary, OperationalPosture};

use crate::time::hours_until;

/// Classify the dashboard's operational posture. Rules are evaluated in
/// strict precedence order; the first match wins:
///
/// 1. `ImmediateRisk` when any matter carries strategic risk, or any matter's
///    deadline is at most 24 hours away. A deadline already in the past is
///    overdue, which also satisfies "at most 24 hours away".
/// 2. `AttentionRequired` when there are escalations, deadlines inside the
///    7-day window, or matters awaiting review.
/// 3. `Stable` otherwise. Urgency only escalates on a concrete, countable
///    signal; absence of data is never treated as a signal.
pub fn classify_posture(
    dashboard: &DashboardSummary,
    matters: &[AtRiskMatter],
    now: DateTime<Utc>,
) -> OperationalPosture {
    let urgent_deadline = matters.iter().any(|matter| {
        hours_until(matter.deadline_at, now).is_some_and(|hours| hours <= 24.0)
    });

    if dashboard.risk_counts.strategic_risk > 0 || urgent_deadline {
        return OperationalPosture::ImmediateRisk;
    }

    let attention = dashboard.escalations > 0
        || dashboard.deadlines_next7_days > 0
        || dashboard.risk_counts.review_required > 0;

    if attention {
        OperationalPosture::AttentionRequired
    } else {
        OperationalPosture::Stable
    }
}
