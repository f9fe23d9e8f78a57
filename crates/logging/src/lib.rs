#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` turns the command line's `-v` count into tracing filters and
//! installs the process-wide subscriber. Library crates emit events through the
//! `trace_*` macros, which pin each event to the target of its [`Subsystem`].
//!
//! # Design
//!
//! [`VerbosityConfig`] stores one [`LevelFilter`](tracing::level_filters::LevelFilter)
//! per subsystem plus a fallback for foreign targets. The configuration renders
//! to an `EnvFilter` directive, so the same text a user could put in `RUST_LOG`
//! is what the binary installs by default.
//!
//! # Examples
//!
//! ```
//! use logging::{Subsystem, VerbosityConfig};
//! use tracing::Level;
//!
//! let config = VerbosityConfig::from_verbose_level(2);
//! assert!(config.enabled(Subsystem::Hash.target(), Level::DEBUG));
//! assert!(!config.enabled(Subsystem::Hash.target(), Level::TRACE));
//! ```

mod config;
mod levels;
mod tracing_bridge;
mod tracing_macros;

pub use config::VerbosityConfig;
pub use levels::Subsystem;
pub use tracing_bridge::{build_filter, init_tracing, resolve_directive};
