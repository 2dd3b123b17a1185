//! A loaded pipeline: ordered transformations plus one model.
//!
//! A [`Pipeline`] never changes once built. Reloading builds a new one and
//! swaps it in, so a pipeline may be shared across threads without locks.

use crate::core::{Data, DataKind, PipelineError, PipelineResult, VectorData};
use crate::model::{Model, PredictionMap};
use crate::transform::Transformation;
use tracing::debug;

/// Transformations, model, and the metadata of the resource they came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipeline {
    version: u32,
    timestamp: String,
    locale: String,
    transformations: Vec<Transformation>,
    model: Model,
}

impl Pipeline {
    /// Assemble a pipeline.
    ///
    /// The order of the transformations is not checked here: a chain in the
    /// wrong order builds fine and fails on every [`Pipeline::apply`].
    ///
    /// # Errors
    /// - `ShapeMismatch` if the last Text → Vector step produces a vector
    ///   whose dimension differs from the model input
    pub fn new(
        version: u32,
        timestamp: String,
        locale: String,
        transformations: Vec<Transformation>,
        model: Model,
    ) -> PipelineResult<Self> {
        let produced = transformations
            .iter()
            .rev()
            .find_map(Transformation::output_dimension);
        if let Some(dimension) = produced {
            if dimension != model.input_dimension() {
                return Err(PipelineError::ShapeMismatch(format!(
                    "transformations produce {dimension} features but the model expects {}",
                    model.input_dimension()
                )));
            }
        }

        Ok(Self {
            version,
            timestamp,
            locale,
            transformations,
            model,
        })
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn transformations(&self) -> &[Transformation] {
        &self.transformations
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Run the transformation chain only.
    ///
    /// Returns `None` if the chain is empty, a step rejects its input, or the
    /// chain does not end in a vector.
    pub fn vectorize(&self, data: Data) -> Option<VectorData> {
        if self.transformations.is_empty() {
            debug!("pipeline has no transformations");
            return None;
        }

        let mut current = data;
        for (step, transformation) in self.transformations.iter().enumerate() {
            let kind = current.kind();
            current = match transformation.apply(current) {
                Some(next) => next,
                None => {
                    debug!(
                        step,
                        transformation = transformation.name(),
                        input = %kind,
                        "transformation rejected its input"
                    );
                    return None;
                }
            };
        }

        match current {
            Data::Vector(vector) => Some(vector),
            Data::Text(_) => {
                debug!(output = %DataKind::Text, "transformations did not produce a vector");
                None
            }
        }
    }

    /// Transform `data` and score it with the model.
    pub fn apply(&self, data: Data) -> Option<PredictionMap> {
        let vector = self.vectorize(data)?;
        Some(self.model.predict(&vector))
    }

    /// All classes, ranked, for `data`.
    pub fn get_top_predictions(&self, data: Data) -> Option<PredictionMap> {
        self.get_top_count_predictions(data, None)
    }

    /// The `top_count` best classes for `data`, or all of them for `None`.
    pub fn get_top_count_predictions(
        &self,
        data: Data,
        top_count: Option<usize>,
    ) -> Option<PredictionMap> {
        let vector = self.vectorize(data)?;
        Some(self.model.get_top_count_predictions(&vector, top_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LinearModel;
    use crate::transform::HashedNGrams;

    fn linear_model(dimension: usize) -> Model {
        LinearModel::new(
            vec!["a".to_string(), "b".to_string()],
            vec![
                VectorData::new(vec![1.0; dimension]),
                VectorData::new(vec![0.0; dimension]),
            ],
            vec![0.0, 0.5],
        )
        .unwrap()
        .into()
    }

    fn hashed(buckets: usize) -> Transformation {
        Transformation::HashedNGrams(HashedNGrams::new(buckets, vec![1, 2]).unwrap())
    }

    fn pipeline(transformations: Vec<Transformation>, model: Model) -> PipelineResult<Pipeline> {
        Pipeline::new(1, "2024-01-01".to_string(), "en".to_string(), transformations, model)
    }

    #[test]
    fn test_apply() {
        let pipeline = pipeline(
            vec![Transformation::Lowercase, hashed(16), Transformation::Normalization],
            linear_model(16),
        )
        .unwrap();

        let predictions = pipeline.apply(Data::from("Some Text")).unwrap();
        assert_eq!(predictions.len(), 2);
        assert!((predictions["b"] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_rejects_dimension_mismatch() {
        let result = pipeline(vec![hashed(16)], linear_model(8));
        assert!(matches!(result, Err(PipelineError::ShapeMismatch(_))));
    }

    #[test]
    fn test_out_of_order_chain_builds_but_never_applies() {
        let pipeline = pipeline(
            vec![Transformation::Normalization, hashed(16)],
            linear_model(16),
        )
        .unwrap();

        assert!(pipeline.apply(Data::from("some text")).is_none());
        assert!(pipeline.apply(Data::from("")).is_none());
    }

    #[test]
    fn test_empty_chain_never_applies() {
        let pipeline = pipeline(vec![], linear_model(4)).unwrap();
        assert!(pipeline.apply(Data::from(VectorData::zeros(4))).is_none());
    }

    #[test]
    fn test_text_only_chain_never_applies() {
        let pipeline = pipeline(vec![Transformation::Lowercase], linear_model(4)).unwrap();
        assert!(pipeline.apply(Data::from("text")).is_none());
    }

    #[test]
    fn test_top_count_predictions() {
        let pipeline = pipeline(vec![hashed(16)], linear_model(16)).unwrap();
        let top = pipeline
            .get_top_count_predictions(Data::from("abc"), Some(1))
            .unwrap();
        assert_eq!(top.keys().collect::<Vec<_>>(), vec!["a"]);
    }
}
