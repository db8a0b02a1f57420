// File: crates/chart-core/src/telemetry.rs
// Summary: Opt-in tracing subscriber setup for hosts that do not bring their own.

/// Filter directives for a subscriber: an explicit `level` wins, then
/// `RUST_LOG` (passed in as `from_env`), then `info`.
pub fn filter_directives(level: Option<&str>, from_env: Option<String>) -> String {
    match (level, from_env) {
        (Some(level), _) => level.to_string(),
        (None, Some(env)) if !env.trim().is_empty() => env,
        _ => "info".to_string(),
    }
}

/// Install a compact `tracing` subscriber at `level`, or per `RUST_LOG` when
/// no level is given. Unparsable directives fall back to `info`.
///
/// Returns `false` when the `telemetry` feature is off or a global subscriber
/// is already installed.
#[must_use]
pub fn init_tracing(level: Option<&str>) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let directives = filter_directives(level, std::env::var("RUST_LOG").ok());
        let filter = tracing_subscriber::EnvFilter::try_new(&directives)
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = level;
        false
    }
}

/// [`init_tracing`] driven by `RUST_LOG`, defaulting to `info`.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing(None)
}
