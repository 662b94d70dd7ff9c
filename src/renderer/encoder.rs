use crate::core::{Attribute, RenderOutput};
use crate::error::{Result, ScreenError};
use crate::settings::{HardwareSettings, Options};
use std::fmt;
use std::io::IsTerminal;
use std::str::FromStr;

const BOLD_ON: &str = "\x1b[1m";
const DIM_ON: &str = "\x1b[30;1m";
const REVERSE_ON: &str = "\x1b[7m";
const RESET: &str = "\x1b[0m";

/// Terminal capability class used to turn a render grid into text.
///
/// Each variant requests only the attributes it can encode, and must encode
/// every attribute it requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AttributeEncoder {
    /// Characters only
    #[default]
    PlainAscii,
    /// Bright cells in ANSI bold
    Ansi,
    /// Linux console bold, dim and reverse video
    LinuxConsole,
}

impl AttributeEncoder {
    pub const ALL: [AttributeEncoder; 3] = [
        AttributeEncoder::PlainAscii,
        AttributeEncoder::Ansi,
        AttributeEncoder::LinuxConsole,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AttributeEncoder::PlainAscii => "ascii",
            AttributeEncoder::Ansi => "ansi",
            AttributeEncoder::LinuxConsole => "linux",
        }
    }

    /// Attribute categories to request from the engine.
    pub fn options(self) -> Options {
        match self {
            AttributeEncoder::PlainAscii => Options::NORMAL,
            AttributeEncoder::Ansi => Options::NORMAL | Options::BRIGHT,
            AttributeEncoder::LinuxConsole => {
                Options::NORMAL | Options::BOLD | Options::DIM | Options::REVERSE
            }
        }
    }

    /// Default hardware settings with this variant's options.
    pub fn hardware_defaults(self) -> HardwareSettings {
        HardwareSettings {
            options: self.options(),
            ..HardwareSettings::DEFAULT
        }
    }

    /// `(prefix, suffix)` wrapped around a character carrying `attribute`.
    pub fn wrap(self, attribute: Attribute) -> Option<(&'static str, &'static str)> {
        match (self, attribute) {
            (_, Attribute::Normal) => Some(("", "")),
            (AttributeEncoder::Ansi, Attribute::Bright) => Some((BOLD_ON, RESET)),
            (AttributeEncoder::LinuxConsole, Attribute::Bold) => Some((BOLD_ON, RESET)),
            (AttributeEncoder::LinuxConsole, Attribute::Dim) => Some((DIM_ON, RESET)),
            (AttributeEncoder::LinuxConsole, Attribute::Reverse) => Some((REVERSE_ON, RESET)),
            _ => None,
        }
    }

    /// Encodes every cell and joins rows with `\n`.
    pub fn flatten(self, output: &RenderOutput) -> Result<String> {
        let mut text = String::with_capacity(output.width() * output.height() + output.height());
        for (y, row) in output.rows().enumerate() {
            if y > 0 {
                text.push('\n');
            }
            for cell in row {
                let (prefix, suffix) = self.wrap(cell.attribute).ok_or(ScreenError::EncodingGap {
                    encoder: self.name(),
                    attribute: cell.attribute,
                })?;
                text.push_str(prefix);
                text.push(cell.as_char());
                text.push_str(suffix);
            }
        }
        Ok(text)
    }

    /// Picks a variant for the given output: plain when not a terminal,
    /// Linux console for `TERM=linux`, ANSI otherwise.
    pub fn for_terminal(is_tty: bool, term: Option<&str>) -> Self {
        if !is_tty {
            AttributeEncoder::PlainAscii
        } else if term == Some("linux") {
            AttributeEncoder::LinuxConsole
        } else {
            AttributeEncoder::Ansi
        }
    }

    /// [`AttributeEncoder::for_terminal`] applied to stdout and `$TERM`.
    pub fn detect() -> Self {
        let term = std::env::var("TERM").ok();
        Self::for_terminal(std::io::stdout().is_terminal(), term.as_deref())
    }
}

impl fmt::Display for AttributeEncoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AttributeEncoder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        AttributeEncoder::ALL
            .into_iter()
            .find(|e| e.name() == s)
            .ok_or_else(|| format!("unknown encoder `{}` (expected ascii, ansi or linux)", s))
    }
}
