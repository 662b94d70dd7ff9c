//! Settings negotiation
//!
//! Defaults are immutable constants. Every negotiation clones them and applies
//! named overrides to the copy, so a failed override never leaks a half-applied
//! value and the defaults themselves are never touched.

pub mod hardware;
pub mod render;

pub use hardware::{Font, HardwareSettings, Options};
pub use render::{Dithering, RenderSettings};

use crate::error::{Result, ScreenError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Value of a single override
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl SettingValue {
    pub(crate) fn as_i32(&self, name: &str) -> Result<i32> {
        match self {
            SettingValue::Int(v) => i32::try_from(*v).map_err(|_| invalid(name, "a 32-bit integer")),
            _ => Err(invalid(name, "an integer")),
        }
    }

    pub(crate) fn as_f64(&self, name: &str) -> Result<f64> {
        match self {
            SettingValue::Float(v) => Ok(*v),
            SettingValue::Int(v) => Ok(*v as f64),
            _ => Err(invalid(name, "a number")),
        }
    }

    pub(crate) fn as_bool(&self, name: &str) -> Result<bool> {
        match self {
            SettingValue::Bool(v) => Ok(*v),
            SettingValue::Int(0) => Ok(false),
            SettingValue::Int(1) => Ok(true),
            _ => Err(invalid(name, "a boolean")),
        }
    }

    pub(crate) fn as_text(&self, name: &str) -> Result<&str> {
        match self {
            SettingValue::Text(v) => Ok(v),
            _ => Err(invalid(name, "a string")),
        }
    }
}

pub(crate) fn invalid(name: &str, expected: &'static str) -> ScreenError {
    ScreenError::InvalidSettingValue {
        name: name.to_string(),
        expected,
    }
}

impl From<bool> for SettingValue {
    fn from(v: bool) -> Self {
        SettingValue::Bool(v)
    }
}

impl From<i32> for SettingValue {
    fn from(v: i32) -> Self {
        SettingValue::Int(v.into())
    }
}

impl From<i64> for SettingValue {
    fn from(v: i64) -> Self {
        SettingValue::Int(v)
    }
}

impl From<f32> for SettingValue {
    fn from(v: f32) -> Self {
        SettingValue::Float(v.into())
    }
}

impl From<f64> for SettingValue {
    fn from(v: f64) -> Self {
        SettingValue::Float(v)
    }
}

impl From<&str> for SettingValue {
    fn from(v: &str) -> Self {
        SettingValue::Text(v.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(v: String) -> Self {
        SettingValue::Text(v)
    }
}

impl From<Options> for SettingValue {
    fn from(v: Options) -> Self {
        SettingValue::Int(v.bits().into())
    }
}

impl From<Dithering> for SettingValue {
    fn from(v: Dithering) -> Self {
        SettingValue::Int(v as i64)
    }
}

/// Named overrides applied on top of a defaults value.
///
/// Names are unique keys, so application order never matters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Overrides {
    values: BTreeMap<String, SettingValue>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON object such as `{"width": 80, "dithering_mode": "none"}`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn set(mut self, name: impl Into<String>, value: impl Into<SettingValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<SettingValue>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&SettingValue> {
        self.values.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SettingValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A settings value whose fields can be overridden by name.
pub trait Negotiable: Clone {
    /// Field names accepted by [`Negotiable::apply`].
    const FIELDS: &'static [&'static str];

    /// Overwrites one field. Unknown names fail with `UnknownSetting`.
    fn apply(&mut self, name: &str, value: &SettingValue) -> Result<()>;
}

/// Clones `defaults` and applies every override to the clone.
pub fn negotiate<S: Negotiable>(defaults: &S, overrides: &Overrides) -> Result<S> {
    let mut settings = defaults.clone();
    for (name, value) in overrides.iter() {
        settings.apply(name, value)?;
    }
    Ok(settings)
}
