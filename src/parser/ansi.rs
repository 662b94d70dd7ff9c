use vte::{Parser, Perform};

/// Removes escape sequences from encoded screen output.
///
/// Printable characters, line feeds and tabs pass through; CSI, OSC and other
/// control sequences are dropped.
pub struct AnsiStripper {
    parser: Parser,
    performer: PlainText,
}

impl AnsiStripper {
    pub fn new() -> Self {
        Self {
            parser: Parser::new(),
            performer: PlainText::default(),
        }
    }

    /// Feeds more output; may be called repeatedly with partial input.
    pub fn feed(&mut self, data: &[u8]) {
        self.parser.advance(&mut self.performer, data);
    }

    /// Text collected so far.
    pub fn text(&self) -> &str {
        &self.performer.text
    }

    pub fn finish(self) -> String {
        self.performer.text
    }
}

impl Default for AnsiStripper {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Default)]
struct PlainText {
    text: String,
}

impl Perform for PlainText {
    fn print(&mut self, c: char) {
        self.text.push(c);
    }

    fn execute(&mut self, byte: u8) {
        if matches!(byte, b'\n' | b'\t') {
            self.text.push(char::from(byte));
        }
    }
}

/// Plain character art from the output of any encoder.
pub fn strip_escapes(text: &str) -> String {
    let mut stripper = AnsiStripper::new();
    stripper.feed(text.as_bytes());
    stripper.finish()
}
