//! Telemetry helpers for applications embedding `chart-prep`.
//!
//! `DefaultHandler` emits `debug!`/`trace!` events for every transform and
//! `warn!` for rejected calls. Installing a subscriber is left to the host:
//! call `init_default_tracing` for a compact stderr setup, or wire your own.

/// Filter used when `RUST_LOG` is unset: warnings from everything, plus this
/// crate's own per-series summaries.
pub const DEFAULT_FILTER: &str = "warn,chart_prep=debug";

/// Initializes a `tracing` subscriber when the `telemetry` feature is enabled.
///
/// `RUST_LOG` takes precedence over [`DEFAULT_FILTER`]. Returns `false` when
/// the feature is disabled or the host already installed a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
