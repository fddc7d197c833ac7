//! Telemetry helpers for hosts embedding `boxoffice-charts`.
//!
//! The pipeline only emits `tracing` events; installing a subscriber is the
//! host's call. `init_default_tracing` covers the common case.

/// Installs a compact `tracing` subscriber when the `telemetry` feature is enabled.
///
/// The filter comes from `RUST_LOG` and falls back to `info`.
/// Returns `false` when the feature is disabled or a global subscriber is
/// already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
