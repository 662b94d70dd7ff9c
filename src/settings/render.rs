use super::{Negotiable, SettingValue, invalid};
use crate::error::{Result, ScreenError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[repr(i32)]
pub enum Dithering {
    None = 0,
    ErrorDistribution = 1,
    #[default]
    FloydSteinberg = 2,
}

impl TryFrom<i32> for Dithering {
    type Error = ScreenError;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            0 => Ok(Dithering::None),
            1 => Ok(Dithering::ErrorDistribution),
            2 => Ok(Dithering::FloydSteinberg),
            _ => Err(invalid("dithering_mode", "a dithering mode (0, 1 or 2)")),
        }
    }
}

impl FromStr for Dithering {
    type Err = ScreenError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "none" => Ok(Dithering::None),
            "error-distribution" => Ok(Dithering::ErrorDistribution),
            "floyd-steinberg" => Ok(Dithering::FloydSteinberg),
            _ => Err(invalid("dithering_mode", "a dithering mode name")),
        }
    }
}

/// Tone-mapping parameters for a single render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSettings {
    pub brightness: i32,
    pub contrast: i32,
    pub gamma: f32,
    pub dithering_mode: Dithering,
    pub inversion: bool,
    pub random: i32,
}

impl RenderSettings {
    /// Mirrors AAlib's `aa_defrenderparams`.
    pub const DEFAULT: RenderSettings = RenderSettings {
        brightness: 0,
        contrast: 0,
        gamma: 1.0,
        dithering_mode: Dithering::FloydSteinberg,
        inversion: false,
        random: 0,
    };
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Negotiable for RenderSettings {
    const FIELDS: &'static [&'static str] = &[
        "brightness",
        "contrast",
        "gamma",
        "dithering_mode",
        "inversion",
        "random",
    ];

    fn apply(&mut self, name: &str, value: &SettingValue) -> Result<()> {
        match name {
            "brightness" => self.brightness = value.as_i32(name)?,
            "contrast" => self.contrast = value.as_i32(name)?,
            "gamma" => self.gamma = value.as_f64(name)? as f32,
            "dithering_mode" => {
                self.dithering_mode = match value {
                    SettingValue::Text(s) => s.parse()?,
                    other => Dithering::try_from(other.as_i32(name)?)?,
                }
            }
            "inversion" => self.inversion = value.as_bool(name)?,
            "random" => self.random = value.as_i32(name)?,
            _ => return Err(ScreenError::UnknownSetting(name.to_string())),
        }
        Ok(())
    }
}
