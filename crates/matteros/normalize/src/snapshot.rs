//! Policy snapshot normalization.

use chrono::{DateTime, Utc};
use matteros_types::PolicySnapshotRecord;
use serde_json::Value;

use crate::value::{
    as_list, as_object, coerce_opt_string, coerce_string, coerce_string_array, coerce_timestamp,
    pick,
};

/// Normalize a single policy snapshot. Only the id is mandatory; every other
/// field has a stated default so a sparse upstream record still displays.
pub fn normalize_snapshot(raw: &Value, now: DateTime<Utc>) -> Option<PolicySnapshotRecord> {
    let obj = as_object(raw)?;
    let id = coerce_opt_string(pick(obj, &["id", "snapshotId"]))?;

    let policy_source = coerce_string(
        pick(obj, &["policySource", "policy_source", "source"]),
        "Policy source",
    );

    let mut impacted_matter_ids = coerce_string_array(pick(
        obj,
        &["impactedMatterIds", "impacted_matter_ids", "matterIds", "matter_ids"],
    ));
    if impacted_matter_ids.is_empty() {
        if let Some(matter_id) = coerce_opt_string(pick(obj, &["matterId", "matter_id"])) {
            impacted_matter_ids.push(matter_id);
        }
    }

    Some(PolicySnapshotRecord {
        title: coerce_string(pick(obj, &["title", "name", "policyName"]), &policy_source),
        source_url: coerce_opt_string(pick(obj, &["sourceUrl", "source_url", "url"])),
        impacted_matter_ids,
        captured_at: coerce_timestamp(pick(obj, &["capturedAt", "captured_at", "createdAt"]))
            .unwrap_or(now),
        captured_by: coerce_string(pick(obj, &["capturedBy", "captured_by"]), "System"),
        policy_version: coerce_string(
            pick(obj, &["policyVersion", "policy_version", "version"]),
            "unknown",
        ),
        jurisdiction: coerce_string(pick(obj, &["jurisdiction"]), "Unknown"),
        clearance_decision: coerce_string(
            pick(obj, &["clearanceDecision", "decision"]),
            "Decision not provided",
        ),
        rationale: coerce_string(pick(obj, &["rationale", "reasoning"]), "Rationale not provided"),
        immutable_hash: coerce_string(
            pick(obj, &["immutableHash", "hash", "checksum"]),
            "hash-unavailable",
        ),
        policy_source,
        id,
    })
}

/// Normalize a snapshot list payload.
pub fn normalize_snapshot_list(
    raw: &Value,
    now: DateTime<Utc>,
) -> Option<Vec<PolicySnapshotRecord>> {
    Some(
        as_list(raw)?
            .iter()
            .filter_map(|entry| normalize_snapshot(entry, now))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sparse_record_gets_stated_defaults() {
        let now = Utc::now();
        let raw = json!({ "snapshotId": "PS-1", "policy_source": "IRCC Bulletin" });
        let snapshot = normalize_snapshot(&raw, now).unwrap();
        assert_eq!(snapshot.id, "PS-1");
        assert_eq!(snapshot.title, "IRCC Bulletin");
        assert_eq!(snapshot.policy_version, "unknown");
        assert_eq!(snapshot.jurisdiction, "Unknown");
        assert_eq!(snapshot.clearance_decision, "Decision not provided");
        assert_eq!(snapshot.immutable_hash, "hash-unavailable");
        assert_eq!(snapshot.captured_at, now);
        assert!(snapshot.impacted_matter_ids.is_empty());
    }

    #[test]
    fn single_matter_id_backfills_impacted_list() {
        let now = Utc::now();
        let raw = json!({ "id": "PS-2", "matter_id": "MAT-9" });
        let snapshot = normalize_snapshot(&raw, now).unwrap();
        assert_eq!(snapshot.impacted_matter_ids, vec!["MAT-9"]);
    }

    #[test]
    fn missing_id_drops_record() {
        let now = Utc::now();
        assert!(normalize_snapshot(&json!({ "title": "No id" }), now).is_none());
        let list = json!([{ "id": "PS-3" }, { "title": "dropped" }]);
        assert_eq!(normalize_snapshot_list(&list, now).unwrap().len(), 1);
    }
}
