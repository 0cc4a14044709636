//! Dashboard aggregate counters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Matter counts per exposure state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskCounts {
    /// Matters with no open signal.
    pub stable: u64,

    /// Matters under soft-signal monitoring.
    pub monitoring: u64,

    /// Matters awaiting attorney review.
    pub review_required: u64,

    /// Matters whose strategy is at risk.
    pub strategic_risk: u64,
}

impl RiskCounts {
    /// Sum across all four states.
    pub fn total(&self) -> u64 {
        self.stable + self.monitoring + self.review_required + self.strategic_risk
    }
}

/// Outcome counters for the current reporting period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationalClosure {
    /// Issues prevented before they surfaced.
    pub prevented: u64,

    /// Issues surfaced for partner judgment.
    pub surfaced: u64,

    /// Issues resolved.
    pub resolved: u64,
}

/// One evaluation of the whole dashboard. No identity; a fresh snapshot is
/// fetched per render and discarded afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Open matters across the firm.
    pub active_matters: u64,

    /// Open escalations.
    pub escalations: u64,

    /// Matters with a deadline inside the next 7 days.
    pub deadlines_next7_days: u64,

    /// Matters with no recent progress.
    pub stalled_matters: u64,

    /// Per-exposure-state breakdown.
    pub risk_counts: RiskCounts,

    /// When the upstream engine last evaluated the portfolio.
    pub last_evaluated_at: DateTime<Utc>,

    /// Period outcome counters.
    pub closure: OperationalClosure,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_counts_total() {
        let counts = RiskCounts {
            stable: 27,
            monitoring: 11,
            review_required: 7,
            strategic_risk: 3,
        };
        assert_eq!(counts.total(), 48);
        assert_eq!(RiskCounts::default().total(), 0);
    }

    #[test]
    fn camel_case_wire_names() {
        let counts = RiskCounts {
            review_required: 7,
            strategic_risk: 3,
            ..Default::default()
        };
        let json = serde_json::to_value(counts).unwrap();
        assert_eq!(json["reviewRequired"], 7);
        assert_eq!(json["strategicRisk"], 3);
    }
}
