//! Telemetry helpers for applications embedding `gantt-rs`.
//!
//! The engine only emits `tracing` events (item replacement, packing, drag
//! transitions, zoom). Installing a subscriber is left to the host; these
//! helpers cover the common case behind the `telemetry` feature.

/// Initializes a compact `tracing` subscriber with an `info` default filter.
///
/// `RUST_LOG` overrides the default when set.
/// Returns `false` when the feature is disabled or a global subscriber is
/// already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_default_filter("info")
}

/// Same as [`init_default_tracing`] with a caller-chosen fallback directive,
/// e.g. `"gantt_rs=trace"` to follow every pointer transition.
#[must_use]
pub fn init_tracing_with_default_filter(default_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
            )
            .with_target(true)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = default_filter;
        false
    }
}
