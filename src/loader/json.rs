//! JSON resource format.
//!
//! ```json
//! {
//!   "version": 3,
//!   "timestamp": "2024-03-01 10:00:00.000000",
//!   "locale": "en",
//!   "transformations": [
//!     {"transformation_type": "TO_LOWER"},
//!     {"transformation_type": "HASHED_NGRAMS", "params": {"num_buckets": 10000, "ngrams_range": [1, 2, 3]}},
//!     {"transformation_type": "NORMALIZE"}
//!   ],
//!   "classifier": {
//!     "classifier_type": "LINEAR",
//!     "classes": ["sports", "travel"],
//!     "class_weights": {"sports": [...], "travel": [...]},
//!     "biases": [0.0, 0.0]
//!   }
//! }
//! ```
//!
//! Mapped-token resources list their tokens in plain text; they are
//! compressed with the resource's own coding while loading.
//!
//! Objects keyed by name (`class_weights`, `huffman_coding`,
//! `token_categories`) must not repeat a key.

use super::check_locale;
use crate::core::{Activation, PipelineError, PipelineResult, VectorData};
use crate::model::{Layer, LinearModel, Model, NeuralModel, LINEAR, NEURAL};
use crate::pipeline::Pipeline;
use crate::transform::{
    CharCode, HashedNGrams, MappedTokens, TokenCodec, Transformation, HASHED_NGRAMS,
    MAPPED_TOKENS,
};
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::value::RawValue;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

/// Top-level JSON document.
#[derive(Debug, Deserialize)]
pub struct PipelineResource {
    pub version: u32,
    pub timestamp: String,
    pub locale: String,
    pub transformations: Vec<TransformationResource>,
    pub classifier: ClassifierResource,
}

#[derive(Debug, Deserialize)]
pub struct TransformationResource {
    pub transformation_type: String,
    #[serde(default)]
    pub params: Option<Box<RawValue>>,
}

/// Entries of a JSON object in document order, repeated keys included.
#[derive(Debug)]
pub struct Entries<V>(Vec<(String, V)>);

impl<V> Entries<V> {
    /// Collect into a map, rejecting a key that appears twice.
    pub fn into_unique(self, field: &str) -> PipelineResult<HashMap<String, V>> {
        let mut map = HashMap::with_capacity(self.0.len());
        for (key, value) in self.0 {
            match map.entry(key) {
                Entry::Occupied(entry) => {
                    return Err(PipelineError::InvalidField {
                        field: field.to_string(),
                        reason: format!("duplicate key {:?}", entry.key()),
                    });
                }
                Entry::Vacant(entry) => {
                    entry.insert(value);
                }
            }
        }
        Ok(map)
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Entries<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
            type Value = Entries<V>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry()? {
                    entries.push(entry);
                }
                Ok(Entries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

#[derive(Debug, Deserialize)]
struct HashedNGramsParams {
    num_buckets: usize,
    ngrams_range: Vec<usize>,
}

#[derive(Debug, Deserialize)]
struct MappedTokensParams {
    vector_dimension: usize,
    /// Character → code written as a bit string, e.g. `"0101"`
    huffman_coding: Entries<String>,
    token_categories: Entries<Vec<usize>>,
}

#[derive(Debug, Deserialize)]
pub struct ClassifierResource {
    pub classifier_type: String,
    pub classes: Vec<String>,
    /// LINEAR only
    #[serde(default)]
    pub class_weights: Option<Entries<Vec<f32>>>,
    /// LINEAR only
    #[serde(default)]
    pub biases: Option<Vec<f32>>,
    /// NEURAL only
    #[serde(default)]
    pub layers: Option<Vec<LayerResource>>,
}

#[derive(Debug, Deserialize)]
pub struct LayerResource {
    pub weights: Vec<Vec<f32>>,
    #[serde(default)]
    pub activation: Option<String>,
}

/// Parse a JSON resource.
///
/// # Errors
/// - `Json` if the buffer is not a JSON document of the expected shape
/// - `LocaleMismatch` if the resource was trained for another locale
/// - `UnknownTransformation` / `UnknownClassifier` for unrecognized kinds
/// - `MissingField`, `InvalidField` or `ShapeMismatch` for unusable contents
pub fn parse(buffer: &[u8], locale: &str) -> PipelineResult<Pipeline> {
    let resource: PipelineResource = serde_json::from_slice(buffer)?;
    check_locale(locale, &resource.locale)?;

    let transformations = resource
        .transformations
        .iter()
        .enumerate()
        .map(|(index, entry)| build_transformation(index, entry))
        .collect::<PipelineResult<Vec<_>>>()?;
    let model = build_model(resource.classifier)?;

    Pipeline::new(
        resource.version,
        resource.timestamp,
        resource.locale,
        transformations,
        model,
    )
}

fn build_transformation(index: usize, entry: &TransformationResource) -> PipelineResult<Transformation> {
    match entry.transformation_type.as_str() {
        HASHED_NGRAMS => {
            let params: HashedNGramsParams = params(index, entry)?;
            let hashed = HashedNGrams::new(params.num_buckets, params.ngrams_range)?;
            Ok(Transformation::HashedNGrams(hashed))
        }
        MAPPED_TOKENS => {
            let params: MappedTokensParams = params(index, entry)?;
            let codec = build_codec(params.huffman_coding.into_unique("huffman_coding")?)?;
            let mapped = MappedTokens::from_plain_tokens(
                params.vector_dimension,
                codec,
                params.token_categories.into_unique("token_categories")?,
            )?;
            Ok(Transformation::MappedTokens(mapped))
        }
        other => Transformation::from_simple_name(other),
    }
}

fn params<T: serde::de::DeserializeOwned>(
    index: usize,
    entry: &TransformationResource,
) -> PipelineResult<T> {
    let field = format!("transformations[{index}].params");
    let raw = entry
        .params
        .as_deref()
        .ok_or_else(|| PipelineError::MissingField(field.clone()))?;
    serde_json::from_str(raw.get()).map_err(|e| PipelineError::InvalidField {
        field,
        reason: e.to_string(),
    })
}

fn build_codec(huffman_coding: HashMap<String, String>) -> PipelineResult<TokenCodec> {
    let mut codes = HashMap::with_capacity(huffman_coding.len());
    for (key, code) in huffman_coding {
        let mut chars = key.chars();
        let (Some(character), None) = (chars.next(), chars.next()) else {
            return Err(PipelineError::InvalidField {
                field: "huffman_coding".to_string(),
                reason: format!("key {key:?} is not a single character"),
            });
        };
        codes.insert(character, CharCode::parse(&code)?);
    }
    TokenCodec::new(codes)
}

fn build_model(classifier: ClassifierResource) -> PipelineResult<Model> {
    match classifier.classifier_type.as_str() {
        LINEAR => {
            let class_weights = classifier
                .class_weights
                .ok_or_else(|| PipelineError::MissingField("classifier.class_weights".to_string()))?
                .into_unique("classifier.class_weights")?;
            let biases = classifier
                .biases
                .ok_or_else(|| PipelineError::MissingField("classifier.biases".to_string()))?;
            let model = LinearModel::from_class_weights(classifier.classes, class_weights, biases)?;
            Ok(Model::Linear(model))
        }
        NEURAL => {
            let layers = classifier
                .layers
                .ok_or_else(|| PipelineError::MissingField("classifier.layers".to_string()))?
                .into_iter()
                .map(|layer| {
                    let rows = layer.weights.into_iter().map(VectorData::new).collect();
                    let activation = Activation::from_name(layer.activation.as_deref().unwrap_or(""));
                    Layer::new(rows, activation)
                })
                .collect::<PipelineResult<Vec<_>>>()?;
            let model = NeuralModel::new(layers, classifier.classes)?;
            Ok(Model::Neural(model))
        }
        other => Err(PipelineError::UnknownClassifier(other.to_string())),
    }
}
