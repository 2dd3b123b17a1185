//! Flatbuffer resource format (`schema/text_classification.fbs`).
//!
//! Buffers are recognized by the `TCLM` file identifier and run through the
//! flatbuffers verifier before any field is read. Mapped-token resources
//! carry their tokens already compressed.

#[allow(clippy::all, dead_code, deprecated, non_snake_case, unused_imports)]
#[rustfmt::skip]
pub mod text_classification_generated;

pub use text_classification_generated as schema;

use self::schema as fb;
use super::check_locale;
use crate::core::{Activation, PipelineError, PipelineResult, VectorData};
use crate::model::{Layer, LinearModel, Model, NeuralModel};
use crate::pipeline::Pipeline;
use crate::transform::{CharCode, HashedNGrams, MappedTokens, TokenCodec, Transformation};
use std::collections::HashMap;

/// Whether `buffer` carries the pipeline file identifier.
pub fn is_flatbuffer(buffer: &[u8]) -> bool {
    // buffer_has_identifier indexes bytes 4..8 unchecked
    buffer.len() >= 8 && fb::model_buffer_has_identifier(buffer)
}

/// Verify and parse a flatbuffer resource.
///
/// # Errors
/// - `Flatbuffer` if verification fails
/// - `LocaleMismatch` if the resource was trained for another locale
/// - `UnknownTransformation` / `UnknownClassifier` for unset or unknown union members
/// - `MissingField`, `InvalidField` or `ShapeMismatch` for unusable contents
pub fn parse(buffer: &[u8], locale: &str) -> PipelineResult<Pipeline> {
    let resource = fb::root_as_model(buffer)?;

    let resource_locale = resource.locale().unwrap_or_default();
    check_locale(locale, resource_locale)?;
    let timestamp = resource
        .timestamp()
        .ok_or_else(|| missing("timestamp"))?;

    let transformations = resource
        .transformations()
        .ok_or_else(|| missing("transformations"))?
        .iter()
        .enumerate()
        .map(|(index, entry)| build_transformation(index, entry))
        .collect::<PipelineResult<Vec<_>>>()?;
    let model = build_model(&resource)?;

    Pipeline::new(
        resource.version(),
        timestamp.to_string(),
        resource_locale.to_string(),
        transformations,
        model,
    )
}

fn missing(field: &str) -> PipelineError {
    PipelineError::MissingField(field.to_string())
}

fn build_transformation(index: usize, entry: fb::Transformation<'_>) -> PipelineResult<Transformation> {
    let field = || missing(&format!("transformations[{index}].transformation"));

    match entry.transformation_type() {
        fb::TransformationType::SimpleTransformation => {
            let simple = entry
                .transformation_as_simple_transformation()
                .ok_or_else(field)?;
            let name = simple
                .transformation_type()
                .ok_or_else(|| missing(&format!("transformations[{index}].transformation_type")))?;
            Transformation::from_simple_name(name)
        }
        fb::TransformationType::HashedNGramsTransformation => {
            let hashed = entry
                .transformation_as_hashed_ngrams_transformation()
                .ok_or_else(field)?;
            let sizes = hashed
                .ngrams_range()
                .ok_or_else(|| missing(&format!("transformations[{index}].ngrams_range")))?
                .iter()
                .map(|size| size as usize)
                .collect();
            Ok(Transformation::HashedNGrams(HashedNGrams::new(
                hashed.num_buckets() as usize,
                sizes,
            )?))
        }
        fb::TransformationType::MappedTokenTransformation => {
            let mapped = entry
                .transformation_as_mapped_token_transformation()
                .ok_or_else(field)?;
            Ok(Transformation::MappedTokens(build_mapped_tokens(
                index, mapped,
            )?))
        }
        other => Err(PipelineError::UnknownTransformation(format!("{other:?}"))),
    }
}

fn build_mapped_tokens(
    index: usize,
    mapped: fb::MappedTokenTransformation<'_>,
) -> PipelineResult<MappedTokens> {
    let mut codes = HashMap::new();
    for code in mapped
        .coding()
        .ok_or_else(|| missing(&format!("transformations[{index}].coding")))?
        .iter()
    {
        let character = char::from_u32(code.character()).ok_or_else(|| PipelineError::InvalidField {
            field: format!("transformations[{index}].coding"),
            reason: format!("{:#x} is not a character", code.character()),
        })?;
        if codes
            .insert(character, CharCode::new(code.bits(), code.length())?)
            .is_some()
        {
            return Err(PipelineError::InvalidField {
                field: format!("transformations[{index}].coding"),
                reason: format!("character {character:?} coded twice"),
            });
        }
    }
    let codec = TokenCodec::new(codes)?;

    let mut token_categories = HashMap::new();
    for entry in mapped
        .mapping()
        .ok_or_else(|| missing(&format!("transformations[{index}].mapping")))?
        .iter()
    {
        let token = entry
            .token()
            .ok_or_else(|| missing(&format!("transformations[{index}].mapping.token")))?;
        let categories = entry
            .categories()
            .map(|c| c.iter().map(|i| i as usize).collect())
            .unwrap_or_default();
        if token_categories
            .insert(token.bytes().to_vec(), categories)
            .is_some()
        {
            return Err(PipelineError::InvalidField {
                field: format!("transformations[{index}].mapping"),
                reason: "token mapped twice".to_string(),
            });
        }
    }

    MappedTokens::new(mapped.vector_dimension() as usize, codec, token_categories)
}

fn build_model(resource: &fb::Model<'_>) -> PipelineResult<Model> {
    match resource.classifier_type() {
        fb::Classifier::LinearClassifier => {
            let linear = resource
                .classifier_as_linear_classifier()
                .ok_or_else(|| missing("classifier"))?;
            let classes = class_names(linear.classes())?;
            let weights = linear
                .weights()
                .ok_or_else(|| missing("classifier.weights"))?
                .iter()
                .map(weight_vector)
                .collect::<PipelineResult<Vec<_>>>()?;
            let biases = linear
                .biases()
                .ok_or_else(|| missing("classifier.biases"))?
                .iter()
                .collect();
            Ok(Model::Linear(LinearModel::new(classes, weights, biases)?))
        }
        fb::Classifier::NeuralClassifier => {
            let neural = resource
                .classifier_as_neural_classifier()
                .ok_or_else(|| missing("classifier"))?;
            let classes = class_names(neural.classes())?;
            let layers = neural
                .layers()
                .ok_or_else(|| missing("classifier.layers"))?
                .iter()
                .map(|layer| {
                    let rows = layer
                        .rows()
                        .ok_or_else(|| missing("classifier.layers.rows"))?
                        .iter()
                        .map(weight_vector)
                        .collect::<PipelineResult<Vec<_>>>()?;
                    Layer::new(rows, Activation::from_name(layer.activation().unwrap_or_default()))
                })
                .collect::<PipelineResult<Vec<_>>>()?;
            Ok(Model::Neural(NeuralModel::new(layers, classes)?))
        }
        other => Err(PipelineError::UnknownClassifier(format!("{other:?}"))),
    }
}

fn class_names(
    classes: Option<flatbuffers::Vector<'_, flatbuffers::ForwardsUOffset<&str>>>,
) -> PipelineResult<Vec<String>> {
    let classes = classes.ok_or_else(|| missing("classifier.classes"))?;
    Ok(classes.iter().map(str::to_string).collect())
}

fn weight_vector(weights: fb::WeightVector<'_>) -> PipelineResult<VectorData> {
    let values = weights
        .values()
        .ok_or_else(|| missing("weights.values"))?;
    Ok(VectorData::new(values.iter().collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Data;
    use flatbuffers::FlatBufferBuilder;

    fn simple<'a>(
        fbb: &mut FlatBufferBuilder<'a>,
        name: &str,
    ) -> flatbuffers::WIPOffset<fb::Transformation<'a>> {
        let name = fbb.create_string(name);
        let simple = fb::SimpleTransformation::create(
            fbb,
            &fb::SimpleTransformationArgs {
                transformation_type: Some(name),
            },
        );
        fb::Transformation::create(
            fbb,
            &fb::TransformationArgs {
                transformation_type: fb::TransformationType::SimpleTransformation,
                transformation: Some(simple.as_union_value()),
            },
        )
    }

    fn hashed<'a>(
        fbb: &mut FlatBufferBuilder<'a>,
        buckets: u32,
    ) -> flatbuffers::WIPOffset<fb::Transformation<'a>> {
        let range = fbb.create_vector(&[1u32, 2]);
        let hashed = fb::HashedNGramsTransformation::create(
            fbb,
            &fb::HashedNGramsTransformationArgs {
                num_buckets: buckets,
                ngrams_range: Some(range),
            },
        );
        fb::Transformation::create(
            fbb,
            &fb::TransformationArgs {
                transformation_type: fb::TransformationType::HashedNGramsTransformation,
                transformation: Some(hashed.as_union_value()),
            },
        )
    }

    /// Linear resource over `dimension` features with classes "a" and "b".
    /// The hashed n-gram step sits between `before` and `after`.
    fn linear_buffer(locale: &str, before: &[&str], after: &[&str], dimension: u32) -> Vec<u8> {
        let mut fbb = FlatBufferBuilder::new();

        let mut steps = Vec::new();
        for name in before {
            steps.push(simple(&mut fbb, name));
        }
        steps.push(hashed(&mut fbb, dimension));
        for name in after {
            steps.push(simple(&mut fbb, name));
        }
        let transformations = fbb.create_vector(&steps);

        let mut rows = Vec::new();
        for fill in [1.0f32, 0.0] {
            let values = fbb.create_vector(&vec![fill; dimension as usize]);
            rows.push(fb::WeightVector::create(
                &mut fbb,
                &fb::WeightVectorArgs {
                    values: Some(values),
                },
            ));
        }
        let weights = fbb.create_vector(&rows);
        let a = fbb.create_string("a");
        let b = fbb.create_string("b");
        let classes = fbb.create_vector(&[a, b]);
        let biases = fbb.create_vector(&[0.0f32, 0.25]);
        let linear = fb::LinearClassifier::create(
            &mut fbb,
            &fb::LinearClassifierArgs {
                classes: Some(classes),
                weights: Some(weights),
                biases: Some(biases),
            },
        );

        let timestamp = fbb.create_string("2024-03-01 10:00:00.000000");
        let locale = fbb.create_string(locale);
        let root = fb::Model::create(
            &mut fbb,
            &fb::ModelArgs {
                version: 7,
                timestamp: Some(timestamp),
                locale: Some(locale),
                transformations: Some(transformations),
                classifier_type: fb::Classifier::LinearClassifier,
                classifier: Some(linear.as_union_value()),
            },
        );
        fb::finish_model_buffer(&mut fbb, root);
        fbb.finished_data().to_vec()
    }

    #[test]
    fn test_is_flatbuffer() {
        let buffer = linear_buffer("en", &["TO_LOWER"], &[], 8);
        assert!(is_flatbuffer(&buffer));
        assert!(!is_flatbuffer(b"{\"version\": 1}"));
        assert!(!is_flatbuffer(b"TCLM"));
        assert!(!is_flatbuffer(&[]));
    }

    #[test]
    fn test_parse_linear() {
        let buffer = linear_buffer("en-US", &["TO_LOWER"], &["kNormalization"], 8);
        let pipeline = parse(&buffer, "EN-us").unwrap();

        assert_eq!(pipeline.version(), 7);
        assert_eq!(pipeline.locale(), "en-US");
        assert_eq!(
            pipeline.transformations()[2],
            Transformation::Normalization
        );

        let predictions = pipeline.apply(Data::from("Hello")).unwrap();
        assert!(predictions["a"] > 0.0);
        assert!((predictions["b"] - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_rejects_locale_mismatch() {
        let buffer = linear_buffer("fr", &["TO_LOWER"], &[], 8);
        assert!(matches!(
            parse(&buffer, "en"),
            Err(PipelineError::LocaleMismatch { .. })
        ));
    }

    #[test]
    fn test_rejects_unknown_simple_transformation() {
        let buffer = linear_buffer("en", &["TO_LOWER"], &["STEM"], 8);
        assert!(matches!(
            parse(&buffer, "en"),
            Err(PipelineError::UnknownTransformation(_))
        ));
    }

    #[test]
    fn test_rejects_truncated_buffer() {
        let buffer = linear_buffer("en", &["TO_LOWER"], &[], 8);
        let truncated = &buffer[..buffer.len() / 2];
        assert!(parse(truncated, "en").is_err());
    }

    #[test]
    fn test_rejects_missing_classifier() {
        let mut fbb = FlatBufferBuilder::new();
        let locale = fbb.create_string("en");
        let timestamp = fbb.create_string("t");
        let empty: Vec<flatbuffers::WIPOffset<fb::Transformation>> = Vec::new();
        let transformations = fbb.create_vector(&empty);
        let root = fb::Model::create(
            &mut fbb,
            &fb::ModelArgs {
                version: 1,
                timestamp: Some(timestamp),
                locale: Some(locale),
                transformations: Some(transformations),
                ..Default::default()
            },
        );
        fb::finish_model_buffer(&mut fbb, root);

        assert!(matches!(
            parse(fbb.finished_data(), "en"),
            Err(PipelineError::UnknownClassifier(_))
        ));
    }
}
