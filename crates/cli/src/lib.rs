#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the command-line front end of the `validus` binary. It
//! recognises one action per invocation: hash a string (`-s`), hash files
//! (`-f`), measure throughput (`-p`), run the sanity suite (`-t`), or print
//! help and version information.
//!
//! # Design
//!
//! [`run`] accepts an iterator of arguments together with handles for standard
//! output and error, so tests drive the whole front end with in-memory
//! buffers. A [`clap`](https://docs.rs/clap/) builder performs the parse; each
//! action lives in its own module under `commands`.
//!
//! # Invariants
//!
//! - `run` never panics; failures surface as exit code `1`.
//! - Diagnostics go to the error handle as `validus: <message>`.
//! - Fingerprint lines go to the output handle as `validus ['<input>'] = <hex>`.
//!
//! # Examples
//!
//! ```
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let exit_code = cli::run(["validus", "-s", "abc"], &mut stdout, &mut stderr);
//!
//! assert_eq!(exit_code, 0);
//! assert_eq!(
//!     String::from_utf8(stdout).unwrap(),
//!     "validus ['abc'] = f7ffabe54ddb09a93ebde51b90d1796a63ea3cc1a5ed093f\n"
//! );
//! assert!(stderr.is_empty());
//! ```

use std::ffi::OsString;
use std::io::{self, Write};

use is_terminal::IsTerminal;
use logging::{Subsystem, VerbosityConfig};
use tracing::level_filters::LevelFilter;

mod arguments;
mod color;
mod commands;
mod error;

pub use arguments::{Action, PROGRAM_NAME, ParsedArgs, parse_args};
pub use color::{ColorChoice, Palette};
pub use commands::perf::PerfConfig;
pub use error::CliError;

/// Maximum exit code representable by a Unix process.
const MAX_EXIT_CODE: i32 = u8::MAX as i32;

/// Help text describing every option.
const HELP_TEXT: &str = concat!(
    "validus - 192-bit Validus fingerprints\n",
    "\n",
    "Usage: validus [-v...] [--color=WHEN] <ACTION>\n",
    "\n",
    "Actions:\n",
    "  -s, --string <STRING>  Hash STRING and show its fingerprint.\n",
    "  -f, --file <FILE>      Hash FILE and show its fingerprint (repeatable).\n",
    "  -p, --perf             Measure hashing throughput.\n",
    "      --perf-blocks <COUNT>       Blocks hashed by --perf (default 1000000).\n",
    "      --perf-block-size <OCTETS>  Octets per block for --perf (default 100000).\n",
    "  -t, --test             Verify the hasher against the reference fingerprints.\n",
    "  -V, --version          Output version information and exit.\n",
    "  -h, --help             Show this help message and exit.\n",
    "\n",
    "Options:\n",
    "  -v, --verbose          Increase diagnostic output (repeatable).\n",
    "      --color <WHEN>     Colourise output: auto, always or never.\n",
    "\n",
    "RUST_LOG overrides the diagnostic filter derived from -v.\n",
);

/// Short usage summary written when no action was requested.
const USAGE_TEXT: &str = concat!(
    "\n",
    "validus usage:\n",
    "\t-s <string>: Hash string and show fingerprint.\n",
    "\t-p: Performance measurement.\n",
    "\t-t: Verify sanity.\n",
    "\t-f <file>: Hash file and show fingerprint.\n",
    "\t-V: Display version information.\n",
);

/// Renders the help text.
#[must_use]
pub fn render_help() -> &'static str {
    HELP_TEXT
}

/// Renders the version banner.
#[must_use]
pub fn render_version() -> String {
    format!("{PROGRAM_NAME} v{}\n", env!("CARGO_PKG_VERSION"))
}

/// Runs the CLI using the provided argument iterator and output handles.
///
/// The function returns the process exit code that should be used by the
/// caller.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    match parse_args(arguments) {
        Ok(parsed) => {
            install_tracing(parsed.verbosity);
            let out_palette = Palette::new(parsed.color.enabled(io::stdout().is_terminal()));
            let err_palette = Palette::new(parsed.color.enabled(io::stderr().is_terminal()));
            execute(parsed.action, stdout, stderr, &out_palette, &err_palette)
        }
        Err(error) => {
            let palette = Palette::new(ColorChoice::Auto.enabled(io::stderr().is_terminal()));
            let failure = CliError::from_clap(&error);
            report(stderr, &palette, &failure);
            let _ = writeln!(stderr, "Try '{PROGRAM_NAME} --help' for more information.");
            failure.exit_code()
        }
    }
}

fn execute<Out, Err>(
    action: Action,
    stdout: &mut Out,
    stderr: &mut Err,
    out_palette: &Palette,
    err_palette: &Palette,
) -> i32
where
    Out: Write,
    Err: Write,
{
    logging::trace_cli!(?action, "dispatching");

    let outcome = match action {
        Action::Help => stdout
            .write_all(render_help().as_bytes())
            .map_err(CliError::from),
        Action::Version => stdout
            .write_all(render_version().as_bytes())
            .map_err(CliError::from),
        Action::HashString(text) => commands::hash::run_string(&text, stdout),
        Action::HashFiles(files) => match commands::hash::run_files(&files, stdout) {
            Ok(failures) if failures.is_empty() => Ok(()),
            Ok(failures) => {
                for failure in failures {
                    report(stderr, err_palette, &CliError::from(failure));
                }
                return 1;
            }
            Err(error) => Err(error),
        },
        Action::Perf(config) => commands::perf::run_perf(config, stdout)
            .map(drop)
            .map_err(CliError::from),
        Action::Sanity => match commands::sanity::run_sanity(stdout, out_palette) {
            Ok(true) => Ok(()),
            Ok(false) => return 1,
            Err(error) => Err(CliError::from(error)),
        },
        Action::Usage => {
            report(stderr, err_palette, &CliError::NoAction);
            let _ = stderr.write_all(USAGE_TEXT.as_bytes());
            return 1;
        }
    };

    match outcome.and_then(|()| stdout.flush().map_err(CliError::from)) {
        Ok(()) => 0,
        Err(error) => {
            report(stderr, err_palette, &error);
            error.exit_code()
        }
    }
}

/// Writes `validus: <message>` to the error handle.
fn report<W: Write>(stderr: &mut W, palette: &Palette, error: &CliError) {
    let line = format!("{PROGRAM_NAME}: {error}");
    let _ = writeln!(stderr, "{}", palette.fail(&line));
}

/// Installs the tracing subscriber for the given `-v` count.
///
/// Hash failures are already reported on stderr by the front end, so at the
/// default verbosity the hashing subsystem only logs errors.
fn install_tracing(verbosity: u8) {
    let mut config = VerbosityConfig::from_verbose_level(verbosity);
    if verbosity == 0 {
        config.set(Subsystem::Hash, LevelFilter::ERROR);
    }
    let _ = logging::init_tracing(config);
}

/// Converts a numeric exit code into an [`std::process::ExitCode`].
#[must_use]
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    std::process::ExitCode::from(clamped as u8)
}
