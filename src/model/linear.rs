//! Linear classifier: `score_c = w_c · x + b_c`.

use super::{softmax, top_count_predictions, validate_classes, PredictionMap};
use crate::core::{PipelineError, PipelineResult, VectorData};
use std::collections::HashMap;

/// One weight vector and one bias per class.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    classes: Vec<String>,
    weights: Vec<VectorData>,
    biases: Vec<f32>,
}

impl LinearModel {
    /// Create a linear model. `weights[i]` and `biases[i]` belong to `classes[i]`.
    ///
    /// # Errors
    /// - `InvalidField` if the class list is empty, has blank or duplicate names
    /// - `ShapeMismatch` if the weight or bias count differs from the class
    ///   count, or the weight vectors differ in dimension
    pub fn new(
        classes: Vec<String>,
        weights: Vec<VectorData>,
        biases: Vec<f32>,
    ) -> PipelineResult<Self> {
        validate_classes(&classes)?;
        if weights.len() != classes.len() {
            return Err(PipelineError::ShapeMismatch(format!(
                "{} weight vectors for {} classes",
                weights.len(),
                classes.len()
            )));
        }
        if biases.len() != classes.len() {
            return Err(PipelineError::ShapeMismatch(format!(
                "{} biases for {} classes",
                biases.len(),
                classes.len()
            )));
        }
        let dimension = weights[0].dimension();
        if let Some((class, w)) = classes
            .iter()
            .zip(&weights)
            .find(|(_, w)| w.dimension() != dimension)
        {
            return Err(PipelineError::ShapeMismatch(format!(
                "weights of {class:?} have dimension {}, expected {dimension}",
                w.dimension()
            )));
        }

        Ok(Self {
            classes,
            weights,
            biases,
        })
    }

    /// Create a linear model from weights keyed by class name.
    ///
    /// # Errors
    /// - `MissingField` if a class has no weights
    /// - `ShapeMismatch` if there are weights for classes not in `classes`
    /// - the errors of [`LinearModel::new`]
    pub fn from_class_weights(
        classes: Vec<String>,
        mut class_weights: HashMap<String, Vec<f32>>,
        biases: Vec<f32>,
    ) -> PipelineResult<Self> {
        if class_weights.len() != classes.len() {
            return Err(PipelineError::ShapeMismatch(format!(
                "{} class weight entries for {} classes",
                class_weights.len(),
                classes.len()
            )));
        }
        let mut weights = Vec::with_capacity(classes.len());
        for class in &classes {
            let values = class_weights
                .remove(class)
                .ok_or_else(|| PipelineError::MissingField(format!("class_weights.{class}")))?;
            weights.push(VectorData::new(values));
        }
        Self::new(classes, weights, biases)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn weights(&self) -> &[VectorData] {
        &self.weights
    }

    pub fn biases(&self) -> &[f32] {
        &self.biases
    }

    pub fn input_dimension(&self) -> usize {
        self.weights[0].dimension()
    }

    /// Raw scores `w_c · x + b_c`, without normalization.
    ///
    /// # Panics
    /// If `input` does not match the weight dimension.
    pub fn predict(&self, input: &VectorData) -> PredictionMap {
        self.classes
            .iter()
            .zip(&self.weights)
            .zip(&self.biases)
            .map(|((class, weights), bias)| (class.clone(), f64::from(weights.dot(input) + bias)))
            .collect()
    }

    /// Softmax of the raw scores, all classes.
    pub fn get_top_predictions(&self, input: &VectorData) -> PredictionMap {
        self.get_top_count_predictions(input, None)
    }

    /// Softmax of the raw scores, truncated to the `top_count` best classes.
    pub fn get_top_count_predictions(
        &self,
        input: &VectorData,
        top_count: Option<usize>,
    ) -> PredictionMap {
        let probabilities = softmax(&self.predict(input));
        top_count_predictions(&probabilities, top_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn two_class_model() -> LinearModel {
        LinearModel::new(
            classes(&["sports", "crypto"]),
            vec![
                VectorData::new(vec![1.0, 0.0, 0.5]),
                VectorData::new(vec![0.0, 2.0, -1.0]),
            ],
            vec![0.1, -0.2],
        )
        .unwrap()
    }

    #[test]
    fn test_predict() {
        let model = two_class_model();
        let predictions = model.predict(&VectorData::new(vec![1.0, 1.0, 2.0]));

        assert_eq!(predictions.len(), 2);
        assert!((predictions["sports"] - 2.1).abs() < 1e-6);
        assert!((predictions["crypto"] - (-0.2)).abs() < 1e-6);
    }

    #[test]
    fn test_top_predictions_are_probabilities() {
        let model = two_class_model();
        let top = model.get_top_predictions(&VectorData::new(vec![1.0, 1.0, 2.0]));

        let sum: f64 = top.values().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!(top["sports"] > top["crypto"]);
    }

    #[test]
    fn test_top_count_truncates() {
        let model = two_class_model();
        let top = model.get_top_count_predictions(&VectorData::new(vec![0.0, 1.0, 0.0]), Some(1));
        assert_eq!(top.keys().collect::<Vec<_>>(), vec!["crypto"]);
    }

    #[test]
    fn test_rejects_mismatched_counts() {
        let result = LinearModel::new(
            classes(&["a", "b"]),
            vec![VectorData::new(vec![1.0])],
            vec![0.0, 0.0],
        );
        assert!(matches!(result, Err(PipelineError::ShapeMismatch(_))));

        let result = LinearModel::new(
            classes(&["a", "b"]),
            vec![VectorData::new(vec![1.0]), VectorData::new(vec![1.0])],
            vec![0.0],
        );
        assert!(matches!(result, Err(PipelineError::ShapeMismatch(_))));
    }

    #[test]
    fn test_rejects_ragged_weights() {
        let result = LinearModel::new(
            classes(&["a", "b"]),
            vec![VectorData::new(vec![1.0]), VectorData::new(vec![1.0, 2.0])],
            vec![0.0, 0.0],
        );
        assert!(matches!(result, Err(PipelineError::ShapeMismatch(_))));
    }

    #[test]
    fn test_rejects_empty_classes() {
        assert!(LinearModel::new(vec![], vec![], vec![]).is_err());
        assert!(LinearModel::new(
            classes(&[""]),
            vec![VectorData::new(vec![1.0])],
            vec![0.0]
        )
        .is_err());
    }

    #[test]
    fn test_from_class_weights() {
        let mut class_weights = HashMap::new();
        class_weights.insert("a".to_string(), vec![1.0, 0.0]);
        class_weights.insert("b".to_string(), vec![0.0, 1.0]);

        let model =
            LinearModel::from_class_weights(classes(&["a", "b"]), class_weights, vec![0.0, 0.5])
                .unwrap();
        assert_eq!(model.input_dimension(), 2);
        let predictions = model.predict(&VectorData::new(vec![2.0, 3.0]));
        assert!((predictions["a"] - 2.0).abs() < 1e-6);
        assert!((predictions["b"] - 3.5).abs() < 1e-6);
    }

    #[test]
    fn test_from_class_weights_missing_class() {
        let mut class_weights = HashMap::new();
        class_weights.insert("a".to_string(), vec![1.0]);
        class_weights.insert("c".to_string(), vec![1.0]);

        let result =
            LinearModel::from_class_weights(classes(&["a", "b"]), class_weights, vec![0.0, 0.0]);
        assert!(matches!(result, Err(PipelineError::MissingField(_))));
    }
}
