//! crates/logging/src/tracing_bridge.rs
//! Installation of the process-wide tracing subscriber.
//!
//! Events are written to stderr by a `fmt` layer without timestamps. Which
//! events pass is decided by an [`EnvFilter`] built from the
//! [`VerbosityConfig`]; a non-empty `RUST_LOG` replaces that directive
//! entirely.
//!
//! # Usage
//!
//! ```rust,ignore
//! use logging::{VerbosityConfig, init_tracing};
//!
//! init_tracing(VerbosityConfig::from_verbose_level(2));
//! tracing::debug!(target: "validus::hash", octets = 42, "reader hashed");
//! ```

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use super::config::VerbosityConfig;

/// Picks the filter directive: `env` when it holds a valid, non-empty
/// directive, otherwise the one derived from `config`.
#[must_use]
pub fn resolve_directive(config: &VerbosityConfig, env: Option<&str>) -> String {
    match env.map(str::trim) {
        Some(directive) if !directive.is_empty() && EnvFilter::try_new(directive).is_ok() => {
            directive.to_owned()
        }
        _ => config.filter_directive(),
    }
}

/// Builds the filter used by [`init_tracing`], consulting `RUST_LOG`.
#[must_use]
pub fn build_filter(config: &VerbosityConfig) -> EnvFilter {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = resolve_directive(config, env.as_deref());
    EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(config.filter_directive()))
}

/// Initialize tracing with the given verbosity configuration.
///
/// Returns `false` when a global subscriber was already installed; the
/// existing subscriber is left in place.
pub fn init_tracing(config: VerbosityConfig) -> bool {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(true);

    tracing_subscriber::registry()
        .with(build_filter(&config))
        .with(layer)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_env_falls_back_to_config() {
        let config = VerbosityConfig::from_verbose_level(1);
        assert_eq!(resolve_directive(&config, None), config.filter_directive());
        assert_eq!(resolve_directive(&config, Some("  ")), config.filter_directive());
    }

    #[test]
    fn env_directive_replaces_config() {
        let config = VerbosityConfig::from_verbose_level(0);
        assert_eq!(
            resolve_directive(&config, Some("validus::hash=trace")),
            "validus::hash=trace"
        );
    }

    #[test]
    fn invalid_env_directive_is_ignored() {
        let config = VerbosityConfig::from_verbose_level(2);
        assert_eq!(
            resolve_directive(&config, Some("validus::hash=loudest")),
            config.filter_directive()
        );
    }
}
