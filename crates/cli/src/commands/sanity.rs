//! `-t`: verify the hasher against the reference fingerprints.

use std::io::Write;

use checksums::{Fingerprint, hash_string};

use crate::arguments::PROGRAM_NAME;
use crate::color::Palette;

/// Reference inputs and their published fingerprints.
pub const SANITY_VECTORS: [(&str, Fingerprint); 8] = [
    (
        "",
        Fingerprint::from_words([
            0xd3f0ad33, 0x79790917, 0x69135e44, 0xeb28aeda, 0x40e5423d, 0xd2e956e7,
        ]),
    ),
    (
        "abc",
        Fingerprint::from_words([
            0xf7ffabe5, 0x4ddb09a9, 0x3ebde51b, 0x90d1796a, 0x63ea3cc1, 0xa5ed093f,
        ]),
    ),
    (
        "ABC",
        Fingerprint::from_words([
            0x9c273091, 0x9216af67, 0xc3d9a325, 0x4401ade8, 0x5920b7c1, 0xd707c65d,
        ]),
    ),
    (
        "validus",
        Fingerprint::from_words([
            0xa16bbad7, 0x293dac29, 0x04cc1807, 0x6636125c, 0x2c68c29c, 0xcffa779d,
        ]),
    ),
    (
        "1111111",
        Fingerprint::from_words([
            0x4f7879df, 0xe986f48e, 0x047190fe, 0x0961783a, 0x177b6dc1, 0x9d5f30d1,
        ]),
    ),
    (
        "1111112",
        Fingerprint::from_words([
            0x5f26b88d, 0xd4c24f7d, 0xe828d3ed, 0x18dc0a05, 0x45f26eb0, 0xc0b09061,
        ]),
    ),
    (
        "hello, world",
        Fingerprint::from_words([
            0xa54b0bad, 0xf8061b9b, 0x6f14c542, 0x0d2bd823, 0x9fbb7f67, 0x50b67af7,
        ]),
    ),
    (
        "dlrow ,olleh",
        Fingerprint::from_words([
            0x3a39f172, 0xc900b9d8, 0x6efe31dd, 0xc065bdf9, 0xe02c4837, 0x50f9af86,
        ]),
    ),
];

/// Width the quoted input is padded to so fingerprints line up.
const LABEL_WIDTH: usize = 12;

/// Checks every vector, printing one line each. Returns whether all matched.
pub fn check_vectors<W: Write>(
    vectors: &[(&str, Fingerprint)],
    out: &mut W,
    palette: &Palette,
) -> std::io::Result<bool> {
    let mut all_pass = true;
    for &(input, expected) in vectors {
        let computed = hash_string(input);
        let pass = computed == expected;
        all_pass &= pass;

        let label = format!("{PROGRAM_NAME} ['{input}'] {:pad$} =", "", pad = pad(input));
        let hex = computed.to_string();
        let hex = if pass {
            palette.pass(&hex)
        } else {
            palette.fail(&hex)
        };
        writeln!(out, "{} {hex}", palette.label(&label))?;
    }
    logging::trace_cli!(vectors = vectors.len(), all_pass, "sanity suite finished");
    Ok(all_pass)
}

/// Runs the built-in sanity suite.
pub fn run_sanity<W: Write>(out: &mut W, palette: &Palette) -> std::io::Result<bool> {
    check_vectors(&SANITY_VECTORS, out, palette)
}

fn pad(input: &str) -> usize {
    LABEL_WIDTH.saturating_sub(input.chars().count())
}
