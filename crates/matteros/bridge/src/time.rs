//! Deadline math and human-readable time formatting.

use chrono::{DateTime, Utc};

/// Fractional hours from `now` until the deadline. Negative when the
/// deadline has passed, `None` when there is no deadline.
pub fn hours_until(deadline: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Option<f64> {
    let due = deadline?;
    Some(due.signed_duration_since(now).num_milliseconds() as f64 / 3_600_000.0)
}

/// Countdown text for a deadline: `"no due date"`, `"overdue"`,
/// `"{h}h left"` under a day (floored at 1h so it never reads `0h`),
/// `"{d}d left"` otherwise.
pub fn format_countdown(deadline: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let hours = match hours_until(deadline, now) {
        Some(hours) => hours,
        None => return "no due date".to_string(),
    };

    if hours <= 0.0 {
        return "overdue".to_string();
    }

    if hours < 24.0 {
        return format!("{}h left", hours.round().max(1.0) as i64);
    }

    format!("{}d left", (hours / 24.0).round() as i64)
}

/// Header line for the last portfolio evaluation: minutes under an hour
/// (floored at 1m), whole hours after that.
pub fn format_last_evaluated(evaluated_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now.signed_duration_since(evaluated_at).num_milliseconds() as f64 / 60_000.0)
        .round()
        .max(1.0);

    if minutes < 60.0 {
        return format!("Last evaluated {}m ago", minutes as i64);
    }

    format!("Last evaluated {}h ago", (minutes / 60.0).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn hours_until_is_signed() {
        let now = Utc::now();
        let ahead = hours_until(Some(now + Duration::hours(18)), now).unwrap();
        assert!((ahead - 18.0).abs() < 0.01);
        let behind = hours_until(Some(now - Duration::hours(2)), now).unwrap();
        assert!(behind < 0.0);
        assert!(hours_until(None, now).is_none());
    }

    #[test]
    fn countdown_tiers() {
        let now = Utc::now();
        assert_eq!(format_countdown(None, now), "no due date");
        assert_eq!(format_countdown(Some(now - Duration::hours(1)), now), "overdue");
        assert_eq!(format_countdown(Some(now), now), "overdue");
        assert_eq!(
            format_countdown(Some(now + Duration::hours(18)), now),
            "18h left"
        );
        assert_eq!(
            format_countdown(Some(now + Duration::hours(3) * 24), now),
            "3d left"
        );
    }

    #[test]
    fn countdown_never_reads_zero_hours() {
        let now = Utc::now();
        let soon = now + Duration::minutes(10);
        assert_eq!(format_countdown(Some(soon), now), "1h left");
    }

    #[test]
    fn last_evaluated_floors_at_one_minute() {
        let now = Utc::now();
        assert_eq!(
            format_last_evaluated(now - Duration::seconds(5), now),
            "Last evaluated 1m ago"
        );
        assert_eq!(
            format_last_evaluated(now - Duration::minutes(6), now),
            "Last evaluated 6m ago"
        );
        assert_eq!(
            format_last_evaluated(now - Duration::hours(3), now),
            "Last evaluated 3h ago"
        );
    }
}
