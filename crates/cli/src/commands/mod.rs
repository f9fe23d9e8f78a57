//! Implementations of the individual actions.

pub mod hash;
pub mod perf;
pub mod sanity;
