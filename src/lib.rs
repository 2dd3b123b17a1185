//! # pageclass
//!
//! On-device text classification for page and content categorization.
//!
//! ## Overview
//!
//! A trained resource (JSON or flatbuffer) describes a chain of feature
//! transformations and one scoring model. Loading validates the whole
//! resource up front and yields an immutable [`Pipeline`]; classification
//! then runs the chain over a UTF-8 string and scores the resulting vector:
//!
//! ```text
//! text → [transformations] → VectorData → Model::predict → PredictionMap → top-K
//! ```
//!
//! ## Structure
//!
//! - [`core`]: `VectorData`, `Data`, activations, errors
//! - [`transform`]: lowercase, hashed n-grams, mapped tokens, distribution, normalization
//! - [`model`]: linear and neural models, prediction ranking
//! - [`pipeline`]: transformations + model
//! - [`loader`]: JSON and flatbuffer resource parsing and validation
//! - [`processor`]: reloadable holder exposing the classification entry points

pub mod core;
pub mod loader;
pub mod model;
pub mod pipeline;
pub mod processor;
pub mod transform;

pub use crate::core::{Activation, Data, DataKind, PipelineError, PipelineResult, VectorData};
pub use loader::load_pipeline;
pub use model::{rank, LinearModel, Model, NeuralModel, PredictionMap};
pub use pipeline::Pipeline;
pub use processor::TextProcessor;
pub use transform::{HashedNGrams, MappedTokens, TokenCodec, Transformation};

/// Upper bound on the number of classes [`TextProcessor::classify_page`] returns.
pub const MAX_PREDICTIONS: usize = 100;

/// Runtime configuration for a [`TextProcessor`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Locale the loaded resource must have been trained for (case-insensitive).
    pub locale: String,
    /// Maximum number of classes returned by `classify_page`.
    pub max_predictions: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            max_predictions: MAX_PREDICTIONS,
        }
    }
}
