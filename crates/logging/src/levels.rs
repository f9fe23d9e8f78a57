//! crates/logging/src/levels.rs
//! Diagnostic subsystems and their tracing targets.

/// Subsystems that emit diagnostics.
///
/// Each subsystem owns one tracing target. Verbosity is configured per
/// subsystem by [`VerbosityConfig`](crate::VerbosityConfig).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Subsystem {
    /// Fingerprint computation over strings, readers and files.
    Hash,
    /// Throughput measurement.
    Perf,
    /// Command-line front end.
    Cli,
}

impl Subsystem {
    /// Every subsystem, in directive order.
    pub const ALL: [Self; 3] = [Self::Hash, Self::Perf, Self::Cli];

    /// Tracing target used by events of this subsystem.
    #[must_use]
    pub const fn target(self) -> &'static str {
        match self {
            Self::Hash => "validus::hash",
            Self::Perf => "validus::perf",
            Self::Cli => "validus::cli",
        }
    }

    /// Looks up the subsystem that owns `target`.
    ///
    /// Nested targets such as `validus::hash::file` resolve to their parent.
    #[must_use]
    pub fn from_target(target: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|subsystem| {
            target
                .strip_prefix(subsystem.target())
                .is_some_and(|rest| rest.is_empty() || rest.starts_with("::"))
        })
    }
}
