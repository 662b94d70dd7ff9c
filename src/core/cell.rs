use crate::error::{Result, ScreenError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Visual emphasis the engine assigns to a rendered character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Attribute {
    #[default]
    Normal = 0,
    Dim = 1,
    Bright = 2,
    Bold = 3,
    Reverse = 4,
    /// Reserved by the engine for special characters
    Special = 5,
}

impl Attribute {
    pub const ALL: [Attribute; 6] = [
        Attribute::Normal,
        Attribute::Dim,
        Attribute::Bright,
        Attribute::Bold,
        Attribute::Reverse,
        Attribute::Special,
    ];

    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Attribute {
    type Error = ScreenError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Attribute::Normal),
            1 => Ok(Attribute::Dim),
            2 => Ok(Attribute::Bright),
            3 => Ok(Attribute::Bold),
            4 => Ok(Attribute::Reverse),
            5 => Ok(Attribute::Special),
            other => Err(ScreenError::InvalidAttribute(other)),
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Attribute::Normal => "normal",
            Attribute::Dim => "dim",
            Attribute::Bright => "bright",
            Attribute::Bold => "bold",
            Attribute::Reverse => "reverse",
            Attribute::Special => "special",
        };
        f.write_str(name)
    }
}

/// Single rendered character cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub character: u8,
    pub attribute: Attribute,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            character: b' ',
            attribute: Attribute::Normal,
        }
    }
}

impl Cell {
    pub const fn new(character: u8) -> Self {
        Self {
            character,
            attribute: Attribute::Normal,
        }
    }

    pub const fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attribute = attribute;
        self
    }

    /// The character as a `char`; engine bytes above 0x7f map to Latin-1.
    pub fn as_char(&self) -> char {
        char::from(self.character)
    }
}
