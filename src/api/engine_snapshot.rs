use serde::{Deserialize, Serialize};

use crate::core::{LayoutMetrics, PlacedEvent, Viewport};
use crate::error::{TimelineError, TimelineResult};
use crate::render::{Renderer, SeriesSummary};

use super::TimelineEngine;

pub const ENGINE_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub zoom: f64,
    pub base_px_per_sec: f64,
    pub nominal_duration: f64,
    pub layout: LayoutMetrics,
    pub surface: Viewport,
    pub visible_range: (f64, f64),
    pub events: Vec<PlacedEvent>,
    pub series: Vec<SeriesSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: EngineSnapshot,
}

impl EngineSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> TimelineResult<String> {
        let payload = EngineSnapshotJsonContractV1 {
            schema_version: ENGINE_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            TimelineError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Parses either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> TimelineResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<EngineSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: EngineSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            TimelineError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != ENGINE_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(TimelineError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R: Renderer> TimelineEngine<R> {
    /// Captures the full observable state for regression comparison.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            zoom: self.zoom(),
            base_px_per_sec: self.base_px_per_sec(),
            nominal_duration: self.nominal_duration(),
            layout: self.layout(),
            surface: self.surface(),
            visible_range: self.visible_range(),
            events: self.events().to_vec(),
            series: self
                .model
                .data
                .iter()
                .map(|(key, data)| SeriesSummary::of(key, data))
                .collect(),
        }
    }

    pub fn snapshot_json_contract_v1_pretty(&self) -> TimelineResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
