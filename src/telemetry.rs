//! Opt-in tracing setup for hosts embedding `timeline-rs`.
//!
//! Nothing here runs implicitly. Hosts either call [`init_default_tracing`]
//! once at startup or install their own subscriber; the engine only ever
//! emits through the `tracing` macros, including the per-frame series lines
//! at debug level.

/// Installs a compact stderr subscriber honoring `RUST_LOG`, with `info` as
/// the fallback filter.
///
/// Returns `false` when the `telemetry` feature is off or another global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
