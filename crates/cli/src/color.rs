//! Terminal colour selection and styling.

use std::str::FromStr;

use anstyle::{AnsiColor, Color, Style};

/// `--color` setting.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ColorChoice {
    /// Colour only when the stream is a terminal.
    #[default]
    Auto,
    /// Always emit ANSI escapes.
    Always,
    /// Never emit ANSI escapes.
    Never,
}

impl ColorChoice {
    /// Resolves the choice for a stream.
    #[must_use]
    pub const fn enabled(self, is_terminal: bool) -> bool {
        match self {
            Self::Auto => is_terminal,
            Self::Always => true,
            Self::Never => false,
        }
    }
}

impl FromStr for ColorChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            other => Err(format!("unknown colour mode '{other}'")),
        }
    }
}

/// Styles used for one output stream.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    label: Style,
    pass: Style,
    fail: Style,
}

impl Palette {
    /// Creates a palette; a disabled palette renders text unchanged.
    #[must_use]
    pub fn new(use_color: bool) -> Self {
        if use_color {
            Self {
                label: Style::new().fg_color(Some(Color::Ansi(AnsiColor::BrightWhite))),
                pass: Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))),
                fail: Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))),
            }
        } else {
            Self {
                label: Style::new(),
                pass: Style::new(),
                fail: Style::new(),
            }
        }
    }

    /// Input label of a sanity line.
    pub fn label(&self, text: &str) -> String {
        paint(self.label, text)
    }

    /// Fingerprint that matched its reference.
    pub fn pass(&self, text: &str) -> String {
        paint(self.pass, text)
    }

    /// Fingerprint that did not match, or an error message.
    pub fn fail(&self, text: &str) -> String {
        paint(self.fail, text)
    }
}

fn paint(style: Style, text: &str) -> String {
    format!("{}{}{}", style.render(), text, style.render_reset())
}
