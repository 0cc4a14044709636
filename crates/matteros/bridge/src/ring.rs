//! Proportional exposure breakdown for the radial summary.

use matteros_types::RiskCounts;
use serde::{Deserialize, Serialize};

/// Percentage shares of the four exposure states plus their cumulative
/// boundaries, in the fixed segment order strategic-risk, review-required,
/// monitoring, stable. The boundaries tile `[0, 100]` contiguously so the
/// ring renders without gaps or overlaps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExposureRing {
    pub strategic_risk_pct: f64,
    pub review_required_pct: f64,
    pub monitoring_pct: f64,
    pub stable_pct: f64,

    /// Cumulative segment boundaries: end of strategic-risk, review-required,
    /// monitoring, stable, in percent.
    pub stops: [f64; 4],
}

/// Convert risk counts into ring segments. The denominator is floored at 1,
/// so an all-zero breakdown yields four 0% shares instead of a division
/// fault.
pub fn exposure_ring(counts: &RiskCounts) -> ExposureRing {
    let total = counts.total().max(1) as f64;

    let strategic_risk_pct = counts.strategic_risk as f64 / total * 100.0;
    let review_required_pct = counts.review_required as f64 / total * 100.0;
    let monitoring_pct = counts.monitoring as f64 / total * 100.0;
    let stable_pct = counts.stable as f64 / total * 100.0;

    let stop1 = strategic_risk_pct;
    let stop2 = stop1 + review_required_pct;
    let stop3 = stop2 + monitoring_pct;
    let stop4 = stop3 + stable_pct;

    ExposureRing {
        strategic_risk_pct,
        review_required_pct,
        monitoring_pct,
        stable_pct,
        stops: [stop1, stop2, stop3, stop4],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_counts_yield_zero_shares() {
        let ring = exposure_ring(&RiskCounts::default());
        assert_eq!(ring.strategic_risk_pct, 0.0);
        assert_eq!(ring.review_required_pct, 0.0);
        assert_eq!(ring.monitoring_pct, 0.0);
        assert_eq!(ring.stable_pct, 0.0);
        assert_eq!(ring.stops, [0.0; 4]);
    }

    #[test]
    fn shares_sum_to_full_circle() {
        let counts = RiskCounts {
            stable: 27,
            monitoring: 11,
            review_required: 7,
            strategic_risk: 3,
        };
        let ring = exposure_ring(&counts);
        let sum =
            ring.strategic_risk_pct + ring.review_required_pct + ring.monitoring_pct + ring.stable_pct;
        assert!((sum - 100.0).abs() < 1e-9);
        assert!((ring.stops[3] - 100.0).abs() < 1e-9);
    }

    #[test]
    fn stops_are_monotonic_and_contiguous() {
        let counts = RiskCounts {
            stable: 1,
            monitoring: 2,
            review_required: 3,
            strategic_risk: 4,
        };
        let ring = exposure_ring(&counts);
        assert!(ring.stops.windows(2).all(|w| w[0] <= w[1]));
        assert!((ring.stops[0] - ring.strategic_risk_pct).abs() < 1e-9);
        assert!((ring.stops[1] - ring.stops[0] - ring.review_required_pct).abs() < 1e-9);
    }
}
