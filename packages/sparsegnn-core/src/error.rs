//! Error types for sparsegnn-core

use std::fmt;
use thiserror::Error;

use crate::config::ConfigError;

/// Graph error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Index or shape does not fit the export integer type
    IndexOverflow,
    /// Tensor index outside the declared dense shape
    OutOfBounds,
    /// Tensor component lengths disagree
    ShapeMismatch,
    /// Configuration errors
    Config,
    /// Serialization/deserialization errors
    Serialization,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::IndexOverflow => "index_overflow",
            ErrorKind::OutOfBounds => "out_of_bounds",
            ErrorKind::ShapeMismatch => "shape_mismatch",
            ErrorKind::Config => "config",
            ErrorKind::Serialization => "serialization",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Graph error type
#[derive(Debug, Error)]
#[error("[{kind}] {message}")]
pub struct GraphError {
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
    pub kind: ErrorKind,
    pub message: String,
}

impl GraphError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    // Convenience constructors
    pub fn index_overflow(value: impl fmt::Display) -> Self {
        Self::new(
            ErrorKind::IndexOverflow,
            format!("Index {} does not fit the target integer type", value),
        )
    }

    pub fn out_of_bounds(row: i64, col: i64, shape: [i64; 2]) -> Self {
        Self::new(
            ErrorKind::OutOfBounds,
            format!(
                "Index ({}, {}) outside dense shape ({}, {})",
                row, col, shape[0], shape[1]
            ),
        )
    }

    pub fn shape_mismatch(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ShapeMismatch, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config, message)
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization, message)
    }
}

impl From<ConfigError> for GraphError {
    fn from(err: ConfigError) -> Self {
        GraphError::config(err.to_string()).with_source(err)
    }
}

// JSON error conversions
impl From<serde_json::Error> for GraphError {
    fn from(err: serde_json::Error) -> Self {
        GraphError::serialization(format!("JSON error: {}", err)).with_source(err)
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, GraphError>;
