//! Core data types for the classification pipeline.
//!
//! This module provides the values that flow through a pipeline:
//! - [`VectorData`]: fixed-dimension `f32` vector with the arithmetic the models need
//! - [`Data`]: the payload handed from one transformation to the next
//! - [`Activation`]: post-layer nonlinearities for neural models
//! - [`PipelineError`]: everything that can go wrong while loading a resource
//!
//! ## Data flow
//!
//! ```text
//! Text ──(Lowercase)──▶ Text ──(HashedNGrams | MappedTokens)──▶ Vector ──(Normalization | Distribution)──▶ Vector
//! ```
//!
//! Every transformation accepts exactly one [`DataKind`]; handing it the other
//! kind yields `None` instead of a value.

pub mod activation;
pub mod vector;

pub use activation::Activation;
pub use vector::VectorData;

use std::fmt;
use thiserror::Error;

/// Error type for loading and validating pipeline resources.
///
/// Apply-time failures are not errors: a transformation handed the wrong
/// [`DataKind`] returns `None`.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The buffer is empty or not a recognizable resource
    #[error("Invalid resource: {0}")]
    InvalidResource(String),

    /// A required key or table field is absent
    #[error("Missing field: {0}")]
    MissingField(String),

    /// A field is present but its value is unusable
    #[error("Invalid field {field}: {reason}")]
    InvalidField { field: String, reason: String },

    /// A transformation entry names no known transformation
    #[error("Unknown transformation: {0}")]
    UnknownTransformation(String),

    /// The classifier entry names no known model kind
    #[error("Unknown classifier: {0}")]
    UnknownClassifier(String),

    /// The resource was trained for a different locale
    #[error("Locale mismatch: expected {expected}, got {actual}")]
    LocaleMismatch { expected: String, actual: String },

    /// Array lengths or vector dimensions disagree
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    #[error("Malformed JSON resource: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed flatbuffer resource: {0}")]
    Flatbuffer(#[from] flatbuffers::InvalidFlatbuffer),
}

pub type PipelineResult<T> = Result<T, PipelineError>;

/// Which [`Data`] variant a value is, or which one a transformation accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataKind {
    Text,
    Vector,
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataKind::Text => write!(f, "text"),
            DataKind::Vector => write!(f, "vector"),
        }
    }
}

/// Payload passed along the transformation chain.
#[derive(Debug, Clone, PartialEq)]
pub enum Data {
    /// UTF-8 text, before vectorization
    Text(String),
    /// Numeric features, the input of a model
    Vector(VectorData),
}

impl Data {
    pub fn kind(&self) -> DataKind {
        match self {
            Data::Text(_) => DataKind::Text,
            Data::Vector(_) => DataKind::Vector,
        }
    }

    /// Borrow the text, or `None` for a vector.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Data::Text(text) => Some(text),
            Data::Vector(_) => None,
        }
    }

    /// Borrow the vector, or `None` for text.
    pub fn as_vector(&self) -> Option<&VectorData> {
        match self {
            Data::Vector(vector) => Some(vector),
            Data::Text(_) => None,
        }
    }

    pub fn into_vector(self) -> Option<VectorData> {
        match self {
            Data::Vector(vector) => Some(vector),
            Data::Text(_) => None,
        }
    }
}

impl From<&str> for Data {
    fn from(text: &str) -> Self {
        Data::Text(text.to_string())
    }
}

impl From<String> for Data {
    fn from(text: String) -> Self {
        Data::Text(text)
    }
}

impl From<VectorData> for Data {
    fn from(vector: VectorData) -> Self {
        Data::Vector(vector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_kind() {
        let text = Data::from("hello");
        let vector = Data::from(VectorData::new(vec![1.0, 2.0]));

        assert_eq!(text.kind(), DataKind::Text);
        assert_eq!(vector.kind(), DataKind::Vector);
    }

    #[test]
    fn test_data_accessors() {
        let text = Data::from("hello".to_string());
        assert_eq!(text.as_text(), Some("hello"));
        assert!(text.as_vector().is_none());
        assert!(text.into_vector().is_none());

        let vector = Data::from(VectorData::new(vec![0.5]));
        assert!(vector.as_text().is_none());
        assert_eq!(vector.into_vector().map(|v| v.dimension()), Some(1));
    }

    #[test]
    fn test_error_display() {
        let err = PipelineError::LocaleMismatch {
            expected: "en".to_string(),
            actual: "fr".to_string(),
        };
        assert_eq!(err.to_string(), "Locale mismatch: expected en, got fr");

        let err = PipelineError::MissingField("classifier".to_string());
        assert_eq!(err.to_string(), "Missing field: classifier");
    }
}
