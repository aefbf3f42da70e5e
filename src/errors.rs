/*!
 * Error types for the wordswap application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use std::fmt;
use thiserror::Error;

/// A single failing form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Dotted path of the field, e.g. `translations.0.oldWord`
    pub path: String,

    /// Message shown next to the field
    pub message: String,
}

impl FieldError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Every field error collected by one validation pass
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Validation failed: {}", join_fields(.fields))]
pub struct ValidationErrors {
    pub fields: Vec<FieldError>,
}

impl ValidationErrors {
    /// Message for the given field path, if that field failed
    pub fn message_for(&self, path: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.path == path)
            .map(|f| f.message.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

fn join_fields(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors raised while building or running substitution rules
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubstitutionError {
    /// The old word of a rule does not compile as a pattern
    #[error("Rule {index} has an invalid pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// Position of the rule in the list
        index: usize,
        /// The offending old word
        pattern: String,
        /// Reason reported by the regex compiler
        reason: String,
    },
}

/// Errors that can occur when writing to the clipboard
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// The system clipboard could not be opened
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    /// Writing the text failed
    #[error("Failed to write to clipboard: {0}")]
    WriteFailed(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Form input rejected before substitution
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// Error from the substitution engine
    #[error("Substitution error: {0}")]
    Substitution(#[from] SubstitutionError),

    /// Error from the clipboard
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
