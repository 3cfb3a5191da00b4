//! Layered error definitions
//!
//! Categorized by source: config / timing input / date parsing

use thiserror::Error;

/// Unified error type
#[derive(Debug, Error)]
pub enum TimelineError {
    // ===== Configuration Errors =====
    /// Configuration parse error
    #[error("config parse error: {message}")]
    ConfigParse {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration validation error
    #[error("config validation error at '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // ===== Timing Errors =====
    /// Packet sequence absent or empty
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// GPS date string failed to parse
    #[error("malformed GPS date {raw:?}")]
    MalformedDate { raw: String },

    // ===== General Errors =====
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Other error
    #[error("{0}")]
    Other(String),
}

impl TimelineError {
    /// Create configuration parse error
    pub fn config_parse(message: impl Into<String>) -> Self {
        Self::ConfigParse {
            message: message.into(),
            source: None,
        }
    }

    /// Create configuration validation error
    pub fn config_validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create malformed date error
    pub fn malformed_date(raw: impl Into<String>) -> Self {
        Self::MalformedDate { raw: raw.into() }
    }
}
