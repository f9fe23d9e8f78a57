//! Command definition and argument parsing.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::builder::{PathBufValueParser, PossibleValuesParser};
use clap::{Arg, ArgAction, ArgGroup, Command, value_parser};

use crate::color::ColorChoice;
use crate::commands::perf::{DEFAULT_PERF_BLOCKS, DEFAULT_PERF_BLOCK_SIZE, PerfConfig};

/// Program name used in every diagnostic and output line.
pub const PROGRAM_NAME: &str = "validus";

/// What the invocation asked for.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Action {
    /// Print the help text.
    Help,
    /// Print the version banner.
    Version,
    /// Hash a string argument.
    HashString(String),
    /// Hash each file in order.
    HashFiles(Vec<PathBuf>),
    /// Run the throughput measurement.
    Perf(PerfConfig),
    /// Run the sanity suite.
    Sanity,
    /// No action flag was supplied.
    Usage,
}

/// Parsed command produced by [`parse_args`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParsedArgs {
    /// Selected action.
    pub action: Action,
    /// Number of `-v` flags.
    pub verbosity: u8,
    /// `--color` setting.
    pub color: ColorChoice,
}

/// Actions the perf tuning flags may not be combined with.
const OTHER_ACTIONS: [&str; 4] = ["version", "string", "file", "test"];

/// Builds the `clap` command used for parsing.
pub(crate) fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("help")
                .long("help")
                .short('h')
                .help("Show this help message and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .short('V')
                .help("Output version information and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("string")
                .long("string")
                .short('s')
                .value_name("STRING")
                .help("Hash STRING and show its fingerprint.")
                .allow_hyphen_values(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("file")
                .long("file")
                .short('f')
                .value_name("FILE")
                .help("Hash FILE and show its fingerprint (repeatable).")
                .value_parser(PathBufValueParser::new())
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("perf")
                .long("perf")
                .short('p')
                .help("Measure hashing throughput.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("perf-blocks")
                .long("perf-blocks")
                .value_name("COUNT")
                .help("Number of blocks hashed by --perf.")
                .value_parser(value_parser!(u64).range(1..))
                .requires("perf")
                .conflicts_with_all(OTHER_ACTIONS)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("perf-block-size")
                .long("perf-block-size")
                .value_name("OCTETS")
                .help("Size of each block hashed by --perf.")
                .value_parser(value_parser!(u64).range(1..=u64::from(u32::MAX)))
                .requires("perf")
                .conflicts_with_all(OTHER_ACTIONS)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("test")
                .long("test")
                .short('t')
                .help("Verify the hasher against the reference fingerprints.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase diagnostic output (repeatable).")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("color")
                .long("color")
                .value_name("WHEN")
                .help("Colourise output: auto, always or never.")
                .value_parser(PossibleValuesParser::new(["auto", "always", "never"]))
                .default_value("auto")
                .action(ArgAction::Set),
        )
        .group(
            ArgGroup::new("action")
                .args(["version", "string", "file", "perf", "test"])
                .multiple(false),
        )
}

/// Parses command-line arguments into a [`ParsedArgs`] structure.
pub fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();

    if args.is_empty() {
        args.push(OsString::from(PROGRAM_NAME));
    }

    let mut matches = clap_command().try_get_matches_from(args)?;

    let verbosity = matches.get_count("verbose");
    let color = matches
        .remove_one::<String>("color")
        .and_then(|value| value.parse().ok())
        .unwrap_or_default();

    let action = if matches.get_flag("help") {
        Action::Help
    } else if matches.get_flag("version") {
        Action::Version
    } else if let Some(text) = matches.remove_one::<String>("string") {
        Action::HashString(text)
    } else if let Some(files) = matches.remove_many::<PathBuf>("file") {
        Action::HashFiles(files.collect())
    } else if matches.get_flag("perf") {
        Action::Perf(PerfConfig {
            blocks: matches
                .remove_one::<u64>("perf-blocks")
                .unwrap_or(DEFAULT_PERF_BLOCKS),
            block_size: matches
                .remove_one::<u64>("perf-block-size")
                .map_or(DEFAULT_PERF_BLOCK_SIZE, |size| size as usize),
        })
    } else if matches.get_flag("test") {
        Action::Sanity
    } else {
        Action::Usage
    };

    Ok(ParsedArgs {
        action,
        verbosity,
        color,
    })
}
