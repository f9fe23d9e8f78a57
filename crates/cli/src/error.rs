use std::io;

use checksums::HashError;
use thiserror::Error;

/// Failures reported by command execution.
#[derive(Debug, Error)]
pub enum CliError {
    /// `-s` was given an empty string.
    #[error("invalid string supplied; ignoring.")]
    EmptyString,
    /// No action flag was supplied.
    #[error("no argument supplied")]
    NoAction,
    /// Hashing an input failed.
    #[error(transparent)]
    Hash(#[from] HashError),
    /// Writing results failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
    /// Argument parsing failed.
    #[error("{0}")]
    Usage(String),
}

impl CliError {
    /// Builds a usage error from a clap failure, keeping only its headline.
    pub(crate) fn from_clap(error: &clap::Error) -> Self {
        let rendered = error.to_string();
        let headline = rendered.lines().next().unwrap_or_default();
        let headline = headline.strip_prefix("error: ").unwrap_or(headline);
        Self::Usage(headline.to_owned())
    }

    /// Process exit status for this failure.
    pub const fn exit_code(&self) -> i32 {
        1
    }
}
