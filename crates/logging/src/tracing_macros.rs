//! crates/logging/src/tracing_macros.rs
//! Convenience macros for validus-specific tracing.
//!
//! These macros wrap the standard tracing macros with the target of the
//! matching [`Subsystem`](crate::Subsystem). Callers must depend on `tracing`.

/// Emit a hashing trace.
///
/// # Example
/// ```ignore
/// trace_hash!(octets = total, "reader hashed");
/// ```
#[macro_export]
macro_rules! trace_hash {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "validus::hash", $($arg)*);
    };
}

/// Emit a throughput measurement trace.
///
/// # Example
/// ```ignore
/// trace_perf!(blocks, block_size, "starting run");
/// ```
#[macro_export]
macro_rules! trace_perf {
    ($($arg:tt)*) => {
        ::tracing::info!(target: "validus::perf", $($arg)*);
    };
}

/// Emit a command-line front end trace.
///
/// # Example
/// ```ignore
/// trace_cli!(?action, "dispatching");
/// ```
#[macro_export]
macro_rules! trace_cli {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "validus::cli", $($arg)*);
    };
}
