//! Domain error types
//!
//! This module defines the error hierarchy for order-export.
//! All errors are domain-specific and don't expose third-party types.

use std::fmt;
use thiserror::Error;

/// Main error type
///
/// This is the primary error type used throughout the application.
/// Record-level validation problems are carried as [`ValidationErrors`] so a
/// caller can report every offending field at once.
#[derive(Debug, Error)]
pub enum OrderExportError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A record failed save-time validation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    /// A value could not be transliterated to ASCII
    #[error("Encoding error in column '{column}': cannot transliterate {value:?}")]
    Encoding { column: String, value: String },

    /// CSV writing/reading errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Order store errors
    #[error("Store error: {0}")]
    Store(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Attribute the error is reported against (e.g. `line_item`, `name`)
    pub field: String,

    /// Human readable message
    pub message: String,
}

impl ValidationError {
    /// Creates a new validation error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.message)
    }
}

/// The full set of validation failures for one record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    /// Returns the individual errors
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    /// Returns true if any error is reported against `field`
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{}", messages.join("; "))
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for OrderExportError {
    fn from(err: std::io::Error) -> Self {
        OrderExportError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for OrderExportError {
    fn from(err: serde_json::Error) -> Self {
        OrderExportError::Serialization(err.to_string())
    }
}

// Conversion from csv::Error
impl From<csv::Error> for OrderExportError {
    fn from(err: csv::Error) -> Self {
        OrderExportError::Csv(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for OrderExportError {
    fn from(err: toml::de::Error) -> Self {
        OrderExportError::Configuration(format!("TOML parse error: {err}"))
    }
}
