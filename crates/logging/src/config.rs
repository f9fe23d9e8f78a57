//! crates/logging/src/config.rs
//! Verbosity configuration mapping `-v` counts to per-subsystem levels.

use std::fmt::Write as _;

use tracing::level_filters::LevelFilter;

use super::levels::Subsystem;

/// Per-subsystem verbosity.
///
/// `fallback` applies to every target that is not owned by a [`Subsystem`],
/// which in practice means third-party crates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerbosityConfig {
    /// Level for targets outside the workspace.
    pub fallback: LevelFilter,
    /// Fingerprint computation.
    pub hash: LevelFilter,
    /// Throughput measurement.
    pub perf: LevelFilter,
    /// Command-line front end.
    pub cli: LevelFilter,
}

impl Default for VerbosityConfig {
    fn default() -> Self {
        Self::from_verbose_level(0)
    }
}

impl VerbosityConfig {
    /// Create a configuration from a `-v` count.
    ///
    /// | level | workspace targets | other targets |
    /// |-------|-------------------|---------------|
    /// | 0     | warn              | warn          |
    /// | 1     | info              | warn          |
    /// | 2     | debug             | info          |
    /// | 3+    | trace             | debug         |
    #[must_use]
    pub const fn from_verbose_level(level: u8) -> Self {
        let (own, fallback) = match level {
            0 => (LevelFilter::WARN, LevelFilter::WARN),
            1 => (LevelFilter::INFO, LevelFilter::WARN),
            2 => (LevelFilter::DEBUG, LevelFilter::INFO),
            _ => (LevelFilter::TRACE, LevelFilter::DEBUG),
        };
        Self {
            fallback,
            hash: own,
            perf: own,
            cli: own,
        }
    }

    /// Level configured for `subsystem`.
    #[must_use]
    pub const fn get(&self, subsystem: Subsystem) -> LevelFilter {
        match subsystem {
            Subsystem::Hash => self.hash,
            Subsystem::Perf => self.perf,
            Subsystem::Cli => self.cli,
        }
    }

    /// Overrides the level of one subsystem.
    pub fn set(&mut self, subsystem: Subsystem, level: LevelFilter) {
        match subsystem {
            Subsystem::Hash => self.hash = level,
            Subsystem::Perf => self.perf = level,
            Subsystem::Cli => self.cli = level,
        }
    }

    /// Most verbose level enabled for any target.
    #[must_use]
    pub fn max_level(&self) -> LevelFilter {
        Subsystem::ALL
            .into_iter()
            .map(|subsystem| self.get(subsystem))
            .fold(self.fallback, Ord::max)
    }

    /// Reports whether an event at `level` from `target` passes this configuration.
    #[must_use]
    pub fn enabled(&self, target: &str, level: tracing::Level) -> bool {
        let threshold = Subsystem::from_target(target).map_or(self.fallback, |s| self.get(s));
        threshold >= level
    }

    /// Renders the configuration as an `EnvFilter` directive.
    ///
    /// ```
    /// use logging::VerbosityConfig;
    ///
    /// assert_eq!(
    ///     VerbosityConfig::from_verbose_level(1).filter_directive(),
    ///     "warn,validus::hash=info,validus::perf=info,validus::cli=info"
    /// );
    /// ```
    #[must_use]
    pub fn filter_directive(&self) -> String {
        let mut directive = level_name(self.fallback).to_owned();
        for subsystem in Subsystem::ALL {
            let _ = write!(
                directive,
                ",{}={}",
                subsystem.target(),
                level_name(self.get(subsystem))
            );
        }
        directive
    }
}

fn level_name(level: LevelFilter) -> &'static str {
    match level.into_level() {
        None => "off",
        Some(tracing::Level::ERROR) => "error",
        Some(tracing::Level::WARN) => "warn",
        Some(tracing::Level::INFO) => "info",
        Some(tracing::Level::DEBUG) => "debug",
        Some(_) => "trace",
    }
}
