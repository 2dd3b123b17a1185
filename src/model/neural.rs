//! Feed-forward neural classifier.
//!
//! Each [`Layer`] is a matrix stored as row vectors. The layer output is
//! `[row_0 · x, row_1 · x, ...]` followed by the layer's [`Activation`]:
//!
//! ```text
//! h^0 = x
//! h^ℓ = f_ℓ(W^ℓ h^{ℓ-1})
//! ```
//!
//! The entries of the last layer's output map 1:1 onto the class names.

use super::{top_count_predictions, validate_classes, PredictionMap};
use crate::core::{Activation, PipelineError, PipelineResult, VectorData};

/// A dense layer without bias.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    rows: Vec<VectorData>,
    activation: Activation,
}

impl Layer {
    /// # Errors
    /// - `ShapeMismatch` if there are no rows, or the rows differ in dimension
    pub fn new(rows: Vec<VectorData>, activation: Activation) -> PipelineResult<Self> {
        let Some(first) = rows.first() else {
            return Err(PipelineError::ShapeMismatch("layer without rows".to_string()));
        };
        let dimension = first.dimension();
        if let Some(row) = rows.iter().position(|r| r.dimension() != dimension) {
            return Err(PipelineError::ShapeMismatch(format!(
                "row {row} has dimension {}, expected {dimension}",
                rows[row].dimension()
            )));
        }
        Ok(Self { rows, activation })
    }

    pub fn rows(&self) -> &[VectorData] {
        &self.rows
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Length of the vector this layer consumes.
    pub fn input_dimension(&self) -> usize {
        self.rows[0].dimension()
    }

    /// Length of the vector this layer produces.
    pub fn output_dimension(&self) -> usize {
        self.rows.len()
    }

    pub fn forward(&self, input: &VectorData) -> VectorData {
        let mut output = VectorData::new(self.rows.iter().map(|row| row.dot(input)).collect());
        self.activation.apply(&mut output);
        output
    }
}

/// Stacked layers plus class names for the final outputs.
#[derive(Debug, Clone, PartialEq)]
pub struct NeuralModel {
    layers: Vec<Layer>,
    classes: Vec<String>,
}

impl NeuralModel {
    /// # Errors
    /// - `InvalidField` if the class list is empty, has blank or duplicate names
    /// - `ShapeMismatch` if there are no layers, consecutive layers do not
    ///   chain, or the last layer's output does not match the class count
    pub fn new(layers: Vec<Layer>, classes: Vec<String>) -> PipelineResult<Self> {
        validate_classes(&classes)?;
        if layers.is_empty() {
            return Err(PipelineError::ShapeMismatch("model without layers".to_string()));
        }
        for (index, pair) in layers.windows(2).enumerate() {
            if pair[1].input_dimension() != pair[0].output_dimension() {
                return Err(PipelineError::ShapeMismatch(format!(
                    "layer {} consumes {} values but layer {index} produces {}",
                    index + 1,
                    pair[1].input_dimension(),
                    pair[0].output_dimension()
                )));
            }
        }
        let outputs = layers[layers.len() - 1].output_dimension();
        if outputs != classes.len() {
            return Err(PipelineError::ShapeMismatch(format!(
                "last layer produces {outputs} values for {} classes",
                classes.len()
            )));
        }

        Ok(Self { layers, classes })
    }

    /// Create a model from weight matrices and a parallel list of activation names.
    ///
    /// # Errors
    /// - `ShapeMismatch` if the two lists differ in length
    /// - the errors of [`Layer::new`] and [`NeuralModel::new`]
    pub fn from_matrices<S: AsRef<str>>(
        matrices: Vec<Vec<VectorData>>,
        activations: &[S],
        classes: Vec<String>,
    ) -> PipelineResult<Self> {
        if matrices.len() != activations.len() {
            return Err(PipelineError::ShapeMismatch(format!(
                "{} layers but {} activations",
                matrices.len(),
                activations.len()
            )));
        }
        let layers = matrices
            .into_iter()
            .zip(activations)
            .map(|(rows, name)| Layer::new(rows, Activation::from_name(name.as_ref())))
            .collect::<PipelineResult<Vec<_>>>()?;
        Self::new(layers, classes)
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn input_dimension(&self) -> usize {
        self.layers[0].input_dimension()
    }

    /// Feed `input` through every layer.
    ///
    /// # Panics
    /// If `input` does not have [`Self::input_dimension`] entries.
    pub fn predict(&self, input: &VectorData) -> PredictionMap {
        let mut current = input.clone();
        for layer in &self.layers {
            current = layer.forward(&current);
        }

        self.classes
            .iter()
            .zip(current.values().iter())
            .map(|(class, &score)| (class.clone(), f64::from(score)))
            .collect()
    }

    /// All classes, ranked.
    pub fn get_top_predictions(&self, input: &VectorData) -> PredictionMap {
        self.get_top_count_predictions(input, None)
    }

    /// The `top_count` best classes of [`Self::predict`], scores unchanged.
    pub fn get_top_count_predictions(
        &self,
        input: &VectorData,
        top_count: Option<usize>,
    ) -> PredictionMap {
        top_count_predictions(&self.predict(input), top_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn rows(values: &[&[f32]]) -> Vec<VectorData> {
        values.iter().map(|r| VectorData::new(r.to_vec())).collect()
    }

    fn classes(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn two_layer_model() -> NeuralModel {
        NeuralModel::from_matrices(
            vec![
                rows(&[&[1.0, 0.0, -3.5], &[0.0, 2.2, 8.3]]),
                rows(&[&[-0.5, 1.6], &[4.38, -1.0], &[2.0, 1.0]]),
            ],
            &["tanh", "softmax"],
            classes(&["class_1", "class_2", "class_3"]),
        )
        .unwrap()
    }

    #[test]
    fn test_predict_two_layers() {
        let model = two_layer_model();
        let predictions = model.predict(&VectorData::new(vec![0.2, 0.65, 0.15]));

        assert_eq!(predictions.len(), 3);
        assert_abs_diff_eq!(predictions["class_1"], 0.788_533_26, epsilon = 1e-6);
        assert_abs_diff_eq!(predictions["class_2"], 0.012_965_94, epsilon = 1e-6);
        assert_abs_diff_eq!(predictions["class_3"], 0.198_500_80, epsilon = 1e-6);
    }

    #[test]
    fn test_top_count_two_layers() {
        let model = two_layer_model();
        let top = model.get_top_count_predictions(&VectorData::new(vec![0.2, 0.65, 0.15]), Some(2));

        assert_eq!(top.len(), 2);
        assert_abs_diff_eq!(top["class_1"], 0.788_533_26, epsilon = 1e-6);
        assert_abs_diff_eq!(top["class_3"], 0.198_500_80, epsilon = 1e-6);
        assert!(!top.contains_key("class_2"));
    }

    #[test]
    fn test_unknown_activation_passes_through() {
        let model = NeuralModel::from_matrices(
            vec![rows(&[&[1.0, 1.0], &[-1.0, 2.0]])],
            &["relu"],
            classes(&["a", "b"]),
        )
        .unwrap();
        let predictions = model.predict(&VectorData::new(vec![1.0, 2.0]));
        assert_abs_diff_eq!(predictions["a"], 3.0, epsilon = 1e-6);
        assert_abs_diff_eq!(predictions["b"], 3.0, epsilon = 1e-6);
    }

    #[test]
    fn test_rejects_unchained_layers() {
        let result = NeuralModel::from_matrices(
            vec![rows(&[&[1.0, 0.0], &[0.0, 1.0]]), rows(&[&[1.0, 1.0, 1.0]])],
            &["tanh", "softmax"],
            classes(&["a"]),
        );
        assert!(matches!(result, Err(PipelineError::ShapeMismatch(_))));
    }

    #[test]
    fn test_rejects_output_class_mismatch() {
        let result = NeuralModel::from_matrices(
            vec![rows(&[&[1.0, 0.0], &[0.0, 1.0]])],
            &["softmax"],
            classes(&["a", "b", "c"]),
        );
        assert!(matches!(result, Err(PipelineError::ShapeMismatch(_))));
    }

    #[test]
    fn test_rejects_parallel_list_mismatch() {
        let result = NeuralModel::from_matrices(
            vec![rows(&[&[1.0]])],
            &["tanh", "softmax"],
            classes(&["a"]),
        );
        assert!(matches!(result, Err(PipelineError::ShapeMismatch(_))));
    }

    #[test]
    fn test_rejects_empty_layer() {
        assert!(Layer::new(vec![], Activation::Tanh).is_err());
        assert!(Layer::new(rows(&[&[1.0], &[1.0, 2.0]]), Activation::Tanh).is_err());
    }
}
