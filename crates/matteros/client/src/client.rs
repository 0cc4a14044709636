//! HTTP client with per-slice fallback

use chrono::{DateTime, Utc};
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use matteros_types::{
    CommandCenterData, CommandCenterSource, DataOrigin, MatterDetailData, MatterDetailSource,
    MatterRecord, MattersListData, PolicySnapshotRecord, PolicySnapshotsData,
};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Client for the MatterOS risk API.
///
/// Every slice is fetched with one attempt and a short timeout; anything
/// that goes wrong on the wire or in normalization degrades that slice to
/// the bundled dataset, tagged [`DataOrigin::Fallback`]. A render never
/// fails because the upstream did. The only hard error surfaced to callers
/// is [`ClientError::NotFound`], raised when a requested id exists in
/// neither the live data nor the bundled dataset.
pub struct MatterosClient {
    client: Client,
    base_url: Option<String>,
}

impl MatterosClient {
    /// Create a client from configuration.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Whether an upstream endpoint is configured at all.
    pub fn is_live(&self) -> bool {
        self.base_url.is_some()
    }

    // ========== Composed operations ==========

    /// Data behind the command bridge view: dashboard counters plus the
    /// at-risk projection, with per-slice provenance.
    pub async fn command_center(&self) -> CommandCenterData {
        let now = Utc::now();
        let (raw_dashboard, raw_at_risk) = tokio::join!(
            self.fetch_slice("/api/dashboard"),
            self.fetch_slice("/api/at-risk"),
        );

        let live_dashboard = raw_dashboard
            .as_ref()
            .and_then(|raw| matteros_normalize::normalize_dashboard(raw, now));
        let live_at_risk = raw_at_risk
            .as_ref()
            .and_then(matteros_normalize::normalize_at_risk_list);

        let dashboard_origin = origin_of(live_dashboard.is_some(), "dashboard");
        let at_risk_origin = origin_of(live_at_risk.is_some(), "at-risk");

        CommandCenterData {
            dashboard: live_dashboard.unwrap_or_else(|| matteros_fallback::dashboard(now)),
            at_risk_matters: live_at_risk
                .unwrap_or_else(|| matteros_fallback::at_risk_matters(now)),
            source: CommandCenterSource {
                dashboard: dashboard_origin,
                at_risk: at_risk_origin,
            },
        }
    }

    /// The full matters list.
    pub async fn matters(&self) -> MattersListData {
        let now = Utc::now();
        let live = self
            .fetch_slice("/api/matters")
            .await
            .as_ref()
            .and_then(matteros_normalize::normalize_matter_list);

        let source = origin_of(live.is_some(), "matters");
        MattersListData {
            matters: live.unwrap_or_else(|| matteros_fallback::matters(now)),
            source,
        }
    }

    /// One matter with its event timeline and, when the matter references
    /// one, its policy snapshot.
    pub async fn matter_detail(&self, matter_id: &str) -> ClientResult<MatterDetailData> {
        let now = Utc::now();
        let matter_path = format!("/api/matters/{matter_id}");
        let events_path = format!("/api/matters/{matter_id}/events");
        let (raw_matter, raw_events) = tokio::join!(
            self.fetch_slice(&matter_path),
            self.fetch_slice(&events_path),
        );

        let live_matter = raw_matter
            .as_ref()
            .and_then(matteros_normalize::normalize_matter);
        let matter_origin = origin_of(live_matter.is_some(), "matter");
        let matter = match live_matter {
            Some(matter) => matter,
            None => self.fallback_matter(matter_id, now)?,
        };

        let live_events = raw_events
            .as_ref()
            .and_then(|raw| matteros_normalize::normalize_event_list(raw, now));
        let events_origin = origin_of(live_events.is_some(), "events");
        let events =
            live_events.unwrap_or_else(|| matteros_fallback::matter_events(matter_id, now));

        let (policy_snapshot, snapshot_origin) = match &matter.policy_snapshot_id {
            Some(snapshot_id) => self.linked_snapshot(snapshot_id, now).await,
            None => (None, DataOrigin::Fallback),
        };

        Ok(MatterDetailData {
            matter,
            events,
            policy_snapshot,
            source: MatterDetailSource {
                matter: matter_origin,
                events: events_origin,
                policy_snapshot: snapshot_origin,
            },
        })
    }

    /// The policy snapshot index.
    pub async fn policy_snapshots(&self) -> PolicySnapshotsData {
        let now = Utc::now();
        let live = self
            .fetch_slice("/api/policy-snapshots")
            .await
            .as_ref()
            .and_then(|raw| matteros_normalize::normalize_snapshot_list(raw, now));

        let source = origin_of(live.is_some(), "policy-snapshots");
        PolicySnapshotsData {
            snapshots: live.unwrap_or_else(|| matteros_fallback::policy_snapshots(now)),
            source,
        }
    }

    /// One policy snapshot by id.
    pub async fn policy_snapshot(
        &self,
        snapshot_id: &str,
    ) -> ClientResult<(PolicySnapshotRecord, DataOrigin)> {
        let now = Utc::now();
        let live = self
            .fetch_slice(&format!("/api/policy-snapshots/{snapshot_id}"))
            .await
            .as_ref()
            .and_then(|raw| matteros_normalize::normalize_snapshot(raw, now));

        match live {
            Some(snapshot) => Ok((snapshot, DataOrigin::Live)),
            None => matteros_fallback::policy_snapshots(now)
                .into_iter()
                .find(|snapshot| snapshot.id == snapshot_id)
                .map(|snapshot| (snapshot, DataOrigin::Fallback))
                .ok_or_else(|| {
                    ClientError::NotFound(format!("policy snapshot {snapshot_id}"))
                }),
        }
    }

    // ========== Internals ==========

    fn fallback_matter(
        &self,
        matter_id: &str,
        now: DateTime<Utc>,
    ) -> ClientResult<MatterRecord> {
        matteros_fallback::matters(now)
            .into_iter()
            .find(|matter| matter.id == matter_id)
            .ok_or_else(|| ClientError::NotFound(format!("matter {matter_id}")))
    }

    async fn linked_snapshot(
        &self,
        snapshot_id: &str,
        now: DateTime<Utc>,
    ) -> (Option<PolicySnapshotRecord>, DataOrigin) {
        let live = self
            .fetch_slice(&format!("/api/policy-snapshots/{snapshot_id}"))
            .await
            .as_ref()
            .and_then(|raw| matteros_normalize::normalize_snapshot(raw, now));

        match live {
            Some(snapshot) => (Some(snapshot), DataOrigin::Live),
            None => {
                let snapshot = matteros_fallback::policy_snapshots(now)
                    .into_iter()
                    .find(|snapshot| snapshot.id == snapshot_id);
                (snapshot, DataOrigin::Fallback)
            }
        }
    }

    /// One attempt against one endpoint. `None` covers every degraded
    /// outcome: no endpoint configured, transport failure, non-2xx status,
    /// or an unparseable body. The `{ "data": ... }` envelope is unwrapped
    /// when present.
    async fn fetch_slice(&self, path: &str) -> Option<Value> {
        let base_url = self.base_url.as_ref()?;
        let url = format!("{base_url}{path}");
        debug!(%url, "fetching slice");

        let response = match self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
        {
            Ok(response) => response,
            Err(error) => {
                warn!(%url, %error, "slice fetch failed, degrading to fallback data");
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "slice returned non-success status");
            return None;
        }

        match response.json::<Value>().await {
            Ok(body) => Some(unwrap_envelope(body)),
            Err(error) => {
                warn!(%url, %error, "slice body was not valid JSON");
                None
            }
        }
    }
}

fn origin_of(live: bool, slice: &str) -> DataOrigin {
    if live {
        DataOrigin::Live
    } else {
        debug!(slice, "rendering slice from fallback data");
        DataOrigin::Fallback
    }
}

fn unwrap_envelope(body: Value) -> Value {
    match body {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}
