//! Telemetry helpers for applications embedding `seqlogo-rs`.
//!
//! The library only emits `tracing` events (layout summaries at `debug`,
//! per-styling-call detail at `trace`, rejected input at `warn`). Consumers
//! can either call one of the helpers below or wire their own subscriber.

/// Initializes a compact `tracing` subscriber filtered at `info` unless
/// `RUST_LOG` says otherwise.
///
/// Returns `false` when the `telemetry` feature is disabled or when the host
/// application already installed a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_default_filter("info")
}

/// Same as [`init_default_tracing`], with a caller-chosen fallback directive
/// such as `"seqlogo_rs=trace"`.
#[must_use]
pub fn init_tracing_with_default_filter(default_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = default_filter;
        false
    }
}
