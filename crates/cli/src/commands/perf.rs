//! `-p`: hashing throughput measurement.
//!
//! A single block of `0xEE` octets is fed to one hasher `blocks` times. Wall
//! clock times are shown in local time when the offset can be determined and
//! in UTC otherwise; the elapsed time comes from a monotonic clock.

use std::io::Write;
use std::time::{Duration, Instant};

use checksums::Fingerprint;
use checksums::strong::Validus;
use time::OffsetDateTime;
use time::macros::format_description;

use crate::arguments::PROGRAM_NAME;

/// Default number of blocks hashed.
pub const DEFAULT_PERF_BLOCKS: u64 = 1_000_000;

/// Default block size in octets.
pub const DEFAULT_PERF_BLOCK_SIZE: usize = 100_000;

/// Fill octet of every block.
pub const PERF_FILL: u8 = 0xEE;

const MIB: f64 = 1024.0 * 1024.0;
const GIB: f64 = MIB * 1024.0;

/// Size of a measurement run.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PerfConfig {
    /// Number of `update` calls.
    pub blocks: u64,
    /// Octets per call.
    pub block_size: usize,
}

impl Default for PerfConfig {
    fn default() -> Self {
        Self {
            blocks: DEFAULT_PERF_BLOCKS,
            block_size: DEFAULT_PERF_BLOCK_SIZE,
        }
    }
}

impl PerfConfig {
    /// Total octets hashed by the run.
    #[must_use]
    pub const fn total_octets(&self) -> u64 {
        self.blocks.saturating_mul(self.block_size as u64)
    }
}

/// Outcome of a measurement run.
#[derive(Clone, Copy, Debug)]
pub struct PerfReport {
    /// Octets hashed.
    pub octets: u64,
    /// Time spent hashing.
    pub elapsed: Duration,
    /// Fingerprint of the whole run.
    pub fingerprint: Fingerprint,
}

impl PerfReport {
    /// Throughput in MiB per second.
    #[must_use]
    pub fn mib_per_sec(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64().max(f64::EPSILON);
        self.octets as f64 / MIB / secs
    }
}

/// Hashes the configured data and times it.
#[must_use]
pub fn measure(config: PerfConfig) -> PerfReport {
    let block = vec![PERF_FILL; config.block_size];
    let start = Instant::now();

    let mut hasher = Validus::new();
    for _ in 0..config.blocks {
        hasher.update(&block);
    }
    let fingerprint = hasher.finalize();

    PerfReport {
        octets: config.total_octets(),
        elapsed: start.elapsed(),
        fingerprint,
    }
}

/// Runs the measurement and prints the report.
pub fn run_perf<W: Write>(config: PerfConfig, out: &mut W) -> std::io::Result<PerfReport> {
    write!(
        out,
        "{PROGRAM_NAME} perf test: begin at {}; {} {}-byte blocks ({:.2} GiB)...",
        wall_clock(),
        config.blocks,
        config.block_size,
        config.total_octets() as f64 / GIB
    )?;
    out.flush()?;

    logging::trace_perf!(
        blocks = config.blocks,
        block_size = config.block_size,
        "measurement started"
    );
    let report = measure(config);
    logging::trace_perf!(
        elapsed_ms = report.elapsed.as_millis() as u64,
        "measurement finished"
    );

    writeln!(
        out,
        "done at {}.\nElapsed: {:.3} sec\nThroughput: {:.2} MiB/sec\nFingerprint: {}",
        wall_clock(),
        report.elapsed.as_secs_f64(),
        report.mib_per_sec(),
        report.fingerprint
    )?;
    Ok(report)
}

/// Current wall-clock time as `HH:MM:SS`.
fn wall_clock() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    now.format(format_description!("[hour]:[minute]:[second]"))
        .unwrap_or_else(|_| String::from("--:--:--"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_matches_one_shot_digest() {
        let config = PerfConfig {
            blocks: 5,
            block_size: 1000,
        };
        let report = measure(config);
        assert_eq!(report.octets, 5000);
        assert_eq!(
            report.fingerprint,
            Validus::digest(&vec![PERF_FILL; 5000])
        );
    }

    #[test]
    fn hundred_thousand_octet_run_matches_reference() {
        let report = measure(PerfConfig {
            blocks: 1,
            block_size: 100_000,
        });
        assert_eq!(
            report.fingerprint.to_string(),
            "babd3e072523b10a8891b8581596ab73d3c1be90bea96210"
        );
    }

    #[test]
    fn throughput_handles_zero_elapsed() {
        let report = PerfReport {
            octets: 1 << 20,
            elapsed: Duration::ZERO,
            fingerprint: Fingerprint::default(),
        };
        assert!(report.mib_per_sec().is_finite());

        let one_second = PerfReport {
            elapsed: Duration::from_secs(1),
            ..report
        };
        assert!((one_second.mib_per_sec() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn report_lines() {
        let mut out = Vec::new();
        let report = run_perf(
            PerfConfig {
                blocks: 2,
                block_size: 192,
            },
            &mut out,
        )
        .expect("write to vec");
        let text = String::from_utf8(out).expect("utf-8");
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("validus perf test: begin at "));
        assert!(lines[0].contains("; 2 192-byte blocks (0.00 GiB)...done at "));
        assert!(lines[1].starts_with("Elapsed: "));
        assert!(lines[2].starts_with("Throughput: "));
        assert_eq!(lines[3], format!("Fingerprint: {}", report.fingerprint));
    }

    #[test]
    fn wall_clock_is_hh_mm_ss() {
        let clock = wall_clock();
        assert_eq!(clock.len(), 8);
        assert_eq!(clock.as_bytes()[2], b':');
        assert_eq!(clock.as_bytes()[5], b':');
    }
}
