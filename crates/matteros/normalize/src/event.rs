//! Matter event normalization.

use chrono::{DateTime, Utc};
use matteros_types::MatterEventRecord;
use serde_json::Value;

use crate::value::{as_list, as_object, coerce_opt_string, coerce_string, coerce_timestamp, pick};

/// Normalize a single event. Requires both the event id and the owning
/// matter id; otherwise the record is dropped.
pub fn normalize_event(raw: &Value, now: DateTime<Utc>) -> Option<MatterEventRecord> {
    let obj = as_object(raw)?;
    let id = coerce_opt_string(pick(obj, &["id", "eventId"]))?;
    let matter_id = coerce_opt_string(pick(obj, &["matterId", "matter_id"]))?;

    Some(MatterEventRecord {
        occurred_at: coerce_timestamp(pick(
            obj,
            &["occurredAt", "timestamp", "createdAt", "created_at"],
        ))
        .unwrap_or(now),
        actor: coerce_string(pick(obj, &["actor", "by"]), "System"),
        event_type: coerce_string(pick(obj, &["eventType", "type"]), "NOTE_ADDED"),
        stage: coerce_opt_string(pick(obj, &["stage"])),
        description: coerce_string(
            pick(obj, &["description", "message", "details"]),
            "Event recorded",
        ),
        id,
        matter_id,
    })
}

/// Normalize an event list payload, sorted by occurrence time for timeline
/// display.
pub fn normalize_event_list(raw: &Value, now: DateTime<Utc>) -> Option<Vec<MatterEventRecord>> {
    let mut events: Vec<MatterEventRecord> = as_list(raw)?
        .iter()
        .filter_map(|entry| normalize_event(entry, now))
        .collect();
    events.sort_by_key(|event| event.occurred_at);
    Some(events)
}
