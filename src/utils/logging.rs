//! Logging initialization for the orchestrator
//!
//! Respects the RUST_LOG environment variable; falls back to the filter
//! derived from the launch configuration's verbosity level, then to "info".

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Map the launch configuration's numeric verbosity (0 = critical,
/// 5 = debug) to a tracing filter directive.
pub fn verbosity_filter(level: u8) -> &'static str {
    match level {
        0 | 1 => "error",
        2 => "warn",
        3 => "info",
        4 => "debug",
        _ => "trace",
    }
}

/// Initialize logging for the orchestrator process.
///
/// RUST_LOG always takes precedence; `filter` (typically
/// `verbosity_filter(options.verbose)`) is used when RUST_LOG is unset.
/// Safe to call once per process; later calls are ignored.
pub fn init_logging(filter: Option<&str>) {
    let env_filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(filter.unwrap_or("info"))
    };

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_tracing_levels() {
        assert_eq!(verbosity_filter(0), "error");
        assert_eq!(verbosity_filter(1), "error");
        assert_eq!(verbosity_filter(2), "warn");
        assert_eq!(verbosity_filter(3), "info");
        assert_eq!(verbosity_filter(4), "debug");
        assert_eq!(verbosity_filter(5), "trace");
        assert_eq!(verbosity_filter(42), "trace");
    }

    #[test]
    fn init_logging_is_reentrant() {
        init_logging(Some(verbosity_filter(3)));
        init_logging(None);
    }
}
