//! Property tests for ranking and docket bounds.

use chrono::{DateTime, Duration, Utc};
use matteros_bridge::{build_docket, hours_until, rank_matters, EXPOSURE_WINDOW_LIMIT};
use matteros_types::{AtRiskMatter, ExposureState};
use proptest::prelude::*;

fn fixed_now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2026-03-01T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

fn arb_exposure() -> impl Strategy<Value = ExposureState> {
    prop_oneof![
        Just(ExposureState::Stable),
        Just(ExposureState::Monitoring),
        Just(ExposureState::ReviewRequired),
        Just(ExposureState::StrategicRisk),
    ]
}

fn arb_matters() -> impl Strategy<Value = Vec<AtRiskMatter>> {
    prop::collection::vec((arb_exposure(), proptest::option::of(-200i64..400i64)), 0..20).prop_map(
        |entries| {
            entries
                .into_iter()
                .enumerate()
                .map(|(index, (state, hours))| AtRiskMatter {
                    id: format!("MAT-{index:04}"),
                    title: format!("Matter {index}"),
                    matter_type: "PR".into(),
                    stage: "FILED".into(),
                    exposure_state: state,
                    reasons: vec![],
                    last_progress_at: None,
                    deadline_at: hours.map(|h| fixed_now() + Duration::hours(h)),
                })
                .collect()
        },
    )
}

proptest! {
    #[test]
    fn ranking_is_bounded_and_ordered(matters in arb_matters()) {
        let now = fixed_now();
        let ranked = rank_matters(&matters, now);

        prop_assert!(ranked.len() <= EXPOSURE_WINDOW_LIMIT);
        prop_assert!(ranked.len() <= matters.len());

        for pair in ranked.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(a.exposure_state.severity() >= b.exposure_state.severity());
            if a.exposure_state.severity() == b.exposure_state.severity() {
                let a_hours = hours_until(a.deadline_at, now).unwrap_or(f64::INFINITY);
                let b_hours = hours_until(b.deadline_at, now).unwrap_or(f64::INFINITY);
                prop_assert!(a_hours <= b_hours);
            }
        }
    }

    #[test]
    fn docket_membership_and_order(matters in arb_matters()) {
        let now = fixed_now();
        let docket = build_docket(&matters, now);

        let in_horizon: Vec<f64> = matters
            .iter()
            .filter_map(|m| hours_until(m.deadline_at, now))
            .filter(|h| *h > 0.0 && *h <= 48.0)
            .collect();

        if in_horizon.is_empty() {
            // Relaxed fallback: at most four, all non-stable.
            prop_assert!(docket.len() <= 4);
            let non_stable = matters
                .iter()
                .filter(|m| m.exposure_state != ExposureState::Stable)
                .count();
            prop_assert_eq!(docket.len(), non_stable.min(4));
        } else {
            prop_assert!(docket.len() <= 6);
            prop_assert_eq!(docket.len(), in_horizon.len().min(6));

            // Soonest-first over horizon members.
            let by_id: std::collections::HashMap<&str, f64> = matters
                .iter()
                .filter_map(|m| {
                    hours_until(m.deadline_at, now).map(|h| (m.id.as_str(), h))
                })
                .collect();
            let hours: Vec<f64> = docket.iter().map(|item| by_id[item.id.as_str()]).collect();
            for pair in hours.windows(2) {
                prop_assert!(pair[0] <= pair[1]);
            }
            for h in hours {
                prop_assert!(h > 0.0 && h <= 48.0);
            }
        }
    }
}
