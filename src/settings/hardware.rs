use super::{Negotiable, SettingValue, invalid};
use crate::error::{Result, ScreenError};
use serde::{Deserialize, Serialize};

bitflags::bitflags! {
    /// Attribute categories the engine may emit, plus character-set extensions.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Options: u32 {
        const NORMAL = 1;
        const DIM = 2;
        const BRIGHT = 4;
        const BOLD = 8;
        const REVERSE = 16;
        /// Use every character code, not only printable ASCII
        const ALL = 128;
        /// Use characters above 0x7f
        const EIGHT_BITS = 256;
    }
}

/// Engine font, looked up by name when the context is created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Font(String);

impl Font {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Screen geometry and capabilities requested from the engine.
///
/// Widths and heights are pixels except `physical_*`, which are millimetres.
/// Zero leaves the choice to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardwareSettings {
    pub font: Option<Font>,
    pub options: Options,
    pub min_width: i32,
    pub min_height: i32,
    pub max_width: i32,
    pub max_height: i32,
    pub recommended_width: i32,
    pub recommended_height: i32,
    pub physical_width: i32,
    pub physical_height: i32,
    pub width: i32,
    pub height: i32,
    pub dim_value: f64,
    pub bold_value: f64,
}

impl HardwareSettings {
    /// Mirrors AAlib's `aa_defparams` without the extended character set.
    /// With the `libaa` feature, `engine::libaa::library_defaults` reads the
    /// linked library's own values instead.
    pub const DEFAULT: HardwareSettings = HardwareSettings {
        font: None,
        options: Options::NORMAL
            .union(Options::DIM)
            .union(Options::BRIGHT)
            .union(Options::REVERSE),
        min_width: 0,
        min_height: 0,
        max_width: 0,
        max_height: 0,
        recommended_width: 80,
        recommended_height: 25,
        physical_width: 0,
        physical_height: 0,
        width: 0,
        height: 0,
        dim_value: 5.3,
        bold_value: 2.7,
    };
}

impl Default for HardwareSettings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Negotiable for HardwareSettings {
    const FIELDS: &'static [&'static str] = &[
        "font",
        "options",
        "min_width",
        "min_height",
        "max_width",
        "max_height",
        "recommended_width",
        "recommended_height",
        "physical_width",
        "physical_height",
        "width",
        "height",
        "dim_value",
        "bold_value",
    ];

    fn apply(&mut self, name: &str, value: &SettingValue) -> Result<()> {
        match name {
            "font" => self.font = Some(Font::new(value.as_text(name)?)),
            "options" => {
                let bits = u32::try_from(value.as_i32(name)?)
                    .map_err(|_| invalid(name, "a non-negative bitmask"))?;
                self.options =
                    Options::from_bits(bits).ok_or_else(|| invalid(name, "known option bits"))?;
            }
            "min_width" => self.min_width = value.as_i32(name)?,
            "min_height" => self.min_height = value.as_i32(name)?,
            "max_width" => self.max_width = value.as_i32(name)?,
            "max_height" => self.max_height = value.as_i32(name)?,
            "recommended_width" => self.recommended_width = value.as_i32(name)?,
            "recommended_height" => self.recommended_height = value.as_i32(name)?,
            "physical_width" => self.physical_width = value.as_i32(name)?,
            "physical_height" => self.physical_height = value.as_i32(name)?,
            "width" => self.width = value.as_i32(name)?,
            "height" => self.height = value.as_i32(name)?,
            "dim_value" => self.dim_value = value.as_f64(name)?,
            "bold_value" => self.bold_value = value.as_f64(name)?,
            _ => return Err(ScreenError::UnknownSetting(name.to_string())),
        }
        Ok(())
    }
}
