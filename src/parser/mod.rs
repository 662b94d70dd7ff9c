pub mod ansi;

pub use ansi::{AnsiStripper, strip_escapes};
