mod engine;
mod engine_config;
mod engine_snapshot;
mod ingest;
mod model;
mod style_vars;
mod validation;

pub use engine::{
    ATTR_DURATION, ATTR_POSITION, ATTR_PX_PER_SEC, OBSERVED_ATTRIBUTES, TimelineEngine,
};
pub use engine_config::{
    DEFAULT_BASE_PX_PER_SEC, DEFAULT_NOMINAL_DURATION_SECS, DEFAULT_ZOOM, TimelineEngineConfig,
};
pub use engine_snapshot::{
    ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshot, EngineSnapshotJsonContractV1,
};
pub use style_vars::{EventStyleVars, TimelineStyleVars};
