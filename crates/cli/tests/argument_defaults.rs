//! Argument default value tests.
//!
//! Validates that options left off the command line fall back to the
//! documented defaults.

use cli::{Action, ColorChoice, PerfConfig, parse_args};

#[test]
fn test_verbosity_defaults_to_zero() {
    let args = parse_args(["validus", "-t"]).unwrap();
    assert_eq!(args.verbosity, 0, "verbosity should default to 0");
}

#[test]
fn test_color_defaults_to_auto() {
    let args = parse_args(["validus", "-t"]).unwrap();
    assert_eq!(args.color, ColorChoice::Auto, "color should default to auto");
}

#[test]
fn test_perf_defaults_to_million_blocks_of_100k() {
    let args = parse_args(["validus", "-p"]).unwrap();
    assert_eq!(
        args.action,
        Action::Perf(PerfConfig {
            blocks: 1_000_000,
            block_size: 100_000,
        })
    );
    assert_eq!(PerfConfig::default().total_octets(), 100_000_000_000);
}

#[test]
fn test_perf_block_size_override_keeps_block_default() {
    let args = parse_args(["validus", "-p", "--perf-block-size", "4096"]).unwrap();
    assert_eq!(
        args.action,
        Action::Perf(PerfConfig {
            blocks: 1_000_000,
            block_size: 4096,
        })
    );
}

#[test]
fn test_verbose_counts_repetitions() {
    let args = parse_args(["validus", "-v", "--verbose", "-v", "-t"]).unwrap();
    assert_eq!(args.verbosity, 3);
}

#[test]
fn test_no_action_selects_usage() {
    let args = parse_args(["validus", "-v"]).unwrap();
    assert_eq!(args.action, Action::Usage);
}
