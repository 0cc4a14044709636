//! Dashboard summary normalization.

use chrono::{DateTime, Utc};
use matteros_types::{DashboardSummary, OperationalClosure, RiskCounts};
use serde_json::Value;

use crate::value::{as_object, coerce_count, coerce_timestamp, pick};

fn normalize_risk_counts(raw: Option<&Value>) -> RiskCounts {
    let empty = serde_json::Map::new();
    let obj = raw.and_then(as_object).unwrap_or(&empty);

    RiskCounts {
        stable: coerce_count(pick(obj, &["stable"]), 0),
        monitoring: coerce_count(pick(obj, &["monitoring"]), 0),
        review_required: coerce_count(pick(obj, &["reviewRequired", "review_required"]), 0),
        strategic_risk: coerce_count(pick(obj, &["strategicRisk", "strategic_risk"]), 0),
    }
}

fn normalize_closure(raw: Option<&Value>) -> OperationalClosure {
    let empty = serde_json::Map::new();
    let obj = raw.and_then(as_object).unwrap_or(&empty);

    OperationalClosure {
        prevented: coerce_count(pick(obj, &["prevented"]), 0),
        surfaced: coerce_count(pick(obj, &["surfaced"]), 0),
        resolved: coerce_count(pick(obj, &["resolved"]), 0),
    }
}

/// Normalize a dashboard summary payload. An empty or non-object payload
/// fails normalization; a present-but-partial one gets zero defaults per
/// counter and `now` as the evaluation time.
pub fn normalize_dashboard(raw: &Value, now: DateTime<Utc>) -> Option<DashboardSummary> {
    let obj = as_object(raw).filter(|obj| !obj.is_empty())?;

    Some(DashboardSummary {
        active_matters: coerce_count(pick(obj, &["activeMatters", "active_matters"]), 0),
        escalations: coerce_count(pick(obj, &["escalations"]), 0),
        deadlines_next7_days: coerce_count(
            pick(obj, &["deadlinesNext7Days", "deadlines_next_7_days"]),
            0,
        ),
        stalled_matters: coerce_count(pick(obj, &["stalledMatters", "stalled_matters"]), 0),
        risk_counts: normalize_risk_counts(pick(obj, &["riskCounts", "exposure", "risks"])),
        last_evaluated_at: coerce_timestamp(pick(obj, &["lastEvaluatedAt", "last_evaluated_at"]))
            .unwrap_or(now),
        closure: normalize_closure(pick(obj, &["closure", "operationalClosure"])),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_payload_fails_normalization() {
        let now = Utc::now();
        assert!(normalize_dashboard(&json!({}), now).is_none());
        assert!(normalize_dashboard(&json!(null), now).is_none());
        assert!(normalize_dashboard(&json!([1, 2]), now).is_none());
    }

    #[test]
    fn snake_case_synonyms_accepted() {
        let now = Utc::now();
        let raw = json!({
            "active_matters": "48",
            "deadlines_next_7_days": 7,
            "risks": { "strategic_risk": 3, "review_required": 7 },
            "operationalClosure": { "prevented": 3 }
        });

        let dashboard = normalize_dashboard(&raw, now).unwrap();
        assert_eq!(dashboard.active_matters, 48);
        assert_eq!(dashboard.deadlines_next7_days, 7);
        assert_eq!(dashboard.risk_counts.strategic_risk, 3);
        assert_eq!(dashboard.risk_counts.review_required, 7);
        assert_eq!(dashboard.risk_counts.stable, 0);
        assert_eq!(dashboard.closure.prevented, 3);
        assert_eq!(dashboard.last_evaluated_at, now);
    }

    #[test]
    fn idempotent_on_normalized_output() {
        let now = Utc::now();
        let raw = json!({
            "activeMatters": 12,
            "escalations": 2,
            "riskCounts": { "stable": 8, "monitoring": 2, "reviewRequired": 1, "strategicRisk": 1 },
            "lastEvaluatedAt": "2026-03-01T09:30:00Z",
            "closure": { "prevented": 1, "surfaced": 2, "resolved": 3 }
        });

        let first = normalize_dashboard(&raw, now).unwrap();
        let reserialized = serde_json::to_value(&first).unwrap();
        let second = normalize_dashboard(&reserialized, now).unwrap();
        assert_eq!(first, second);
    }
}
