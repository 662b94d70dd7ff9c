//! Error types for screen operations

use thiserror::Error;

/// Screen error type
#[derive(Error, Debug)]
pub enum ScreenError {
    /// The engine refused to allocate a context (bad geometry, missing driver)
    #[error("Screen initialization failed")]
    ScreenInitializationFailed,

    /// The engine no longer exposes a pixel buffer for this context
    #[error("No image buffer")]
    NoImageBuffer,

    /// An override named a field the settings type does not have
    #[error("Unknown setting: {0}")]
    UnknownSetting(String),

    /// An override value has the wrong kind for its field
    #[error("Invalid value for setting `{name}`: expected {expected}")]
    InvalidSettingValue {
        name: String,
        expected: &'static str,
    },

    /// The encoder has no wrap template for an attribute the engine emitted
    #[error("{encoder} encoder cannot encode attribute {attribute:?}")]
    EncodingGap {
        encoder: &'static str,
        attribute: crate::core::Attribute,
    },

    /// The engine reported an attribute byte outside the known set
    #[error("Invalid attribute value: {0}")]
    InvalidAttribute(u8),

    /// The context was used after `close()`
    #[error("Render context is closed")]
    Closed,

    /// Overrides could not be parsed
    #[error("Invalid overrides: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for screen operations
pub type Result<T> = std::result::Result<T, ScreenError>;
