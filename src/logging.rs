// Logging bootstrap for the demo binaries.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Build the filter: `RUST_LOG` wins, `fallback` is used otherwise.
pub fn build_env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install a stderr `fmt` subscriber as the global default.
///
/// Returns `false` when a subscriber was already installed.
pub fn init(fallback: &str) -> bool {
    tracing_subscriber::registry()
        .with(build_env_filter(fallback))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_rejected() {
        // The first call may succeed or lose to another test; the second never installs.
        let _ = init("debug");
        assert!(!init("debug"));
    }

    #[test]
    fn test_invalid_fallback_filter_still_builds() {
        // Falls back to "info" when both RUST_LOG and the fallback are unusable.
        let filter = build_env_filter("[[not a filter");
        assert!(!filter.to_string().is_empty());
    }
}
