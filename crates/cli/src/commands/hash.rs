//! `-s` and `-f`: fingerprint a string or files.

use std::fmt::Display;
use std::io::Write;
use std::path::PathBuf;

use checksums::{Fingerprint, HashError, hash_string};

use crate::arguments::PROGRAM_NAME;
use crate::error::CliError;

/// Writes one `validus ['<input>'] = <hex>` line.
pub fn write_fingerprint_line<W: Write>(
    out: &mut W,
    input: impl Display,
    fingerprint: &Fingerprint,
) -> std::io::Result<()> {
    writeln!(out, "{PROGRAM_NAME} ['{input}'] = {fingerprint}")
}

/// Hashes `text` and prints its fingerprint.
pub fn run_string<W: Write>(text: &str, out: &mut W) -> Result<(), CliError> {
    if text.is_empty() {
        return Err(CliError::EmptyString);
    }
    let fingerprint = hash_string(text);
    logging::trace_cli!(len = text.len(), "string hashed");
    write_fingerprint_line(out, text, &fingerprint)?;
    Ok(())
}

/// Hashes every file and prints one line per success, in argument order.
///
/// Failures do not stop the remaining files; they are returned for the caller
/// to report.
pub fn run_files<W: Write>(files: &[PathBuf], out: &mut W) -> Result<Vec<HashError>, CliError> {
    let mut failures = Vec::new();
    for (path, result) in files.iter().zip(fingerprint_all(files)) {
        match result {
            Ok(fingerprint) => write_fingerprint_line(out, path.display(), &fingerprint)?,
            Err(error) => failures.push(error),
        }
    }
    logging::trace_cli!(
        files = files.len(),
        failed = failures.len(),
        "file batch finished"
    );
    Ok(failures)
}

#[cfg(feature = "parallel")]
fn fingerprint_all(files: &[PathBuf]) -> Vec<Result<Fingerprint, HashError>> {
    checksums::parallel::hash_files(files)
}

#[cfg(not(feature = "parallel"))]
fn fingerprint_all(files: &[PathBuf]) -> Vec<Result<Fingerprint, HashError>> {
    files.iter().map(checksums::hash_file).collect()
}
