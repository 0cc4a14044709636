//! Matter and at-risk projection normalization.

use matteros_types::{AtRiskMatter, ExposureState, MatterRecord};
use serde_json::{Map, Value};

use crate::value::{
    as_list, as_object, coerce_opt_string, coerce_string, coerce_string_array, coerce_timestamp,
    pick,
};

fn exposure_state(obj: &Map<String, Value>) -> ExposureState {
    match pick(obj, &["exposureState", "exposure_state"]) {
        Some(Value::String(s)) => ExposureState::from_wire(s),
        _ => ExposureState::Monitoring,
    }
}

/// Normalize a single matter record. Returns `None` when the record has no
/// usable identifier or title; such records are dropped, not defaulted.
pub fn normalize_matter(raw: &Value) -> Option<MatterRecord> {
    let obj = as_object(raw)?;
    let id = coerce_opt_string(pick(obj, &["id", "matterId"]))?;
    let title = coerce_opt_string(pick(obj, &["title", "name"]))?;

    Some(MatterRecord {
        client_name: coerce_string(pick(obj, &["clientName", "client_name", "client"]), &title),
        matter_type: coerce_string(pick(obj, &["type"]), "UNKNOWN"),
        stage: coerce_string(pick(obj, &["stage"]), "UNKNOWN"),
        exposure_state: exposure_state(obj),
        deadline_at: coerce_timestamp(pick(obj, &["deadlineAt", "deadline_at", "dueDate"])),
        opened_at: coerce_timestamp(pick(obj, &["openedAt", "createdAt", "created_at"])),
        policy_snapshot_id: coerce_opt_string(pick(obj, &["policySnapshotId", "policy_snapshot_id"])),
        id,
        title,
    })
}

/// Normalize a matter list payload. `None` means the payload was not a list
/// in any accepted shape and the whole slice should fall back.
pub fn normalize_matter_list(raw: &Value) -> Option<Vec<MatterRecord>> {
    Some(as_list(raw)?.iter().filter_map(normalize_matter).collect())
}

/// Normalize a single at-risk projection. Same identity policy as matters.
pub fn normalize_at_risk_matter(raw: &Value) -> Option<AtRiskMatter> {
    let obj = as_object(raw)?;
    let id = coerce_opt_string(pick(obj, &["id", "matterId"]))?;
    let title = coerce_opt_string(pick(obj, &["title", "name"]))?;

    Some(AtRiskMatter {
        matter_type: coerce_string(pick(obj, &["type"]), "UNKNOWN"),
        stage: coerce_string(pick(obj, &["stage"]), "UNKNOWN"),
        exposure_state: exposure_state(obj),
        reasons: coerce_string_array(pick(obj, &["reasons", "riskReasons"])),
        last_progress_at: coerce_timestamp(pick(obj, &["lastProgressAt", "last_progress_at"])),
        deadline_at: coerce_timestamp(pick(obj, &["deadlineAt", "deadline_at"])),
        id,
        title,
    })
}

/// Normalize an at-risk list payload.
pub fn normalize_at_risk_list(raw: &Value) -> Option<Vec<AtRiskMatter>> {
    Some(
        as_list(raw)?
            .iter()
            .filter_map(normalize_at_risk_matter)
            .collect(),
    )
}
