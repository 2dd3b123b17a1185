//! Scoring models: feature vector → per-class scores.
//!
//! - [`LinearModel`]: one weight vector and bias per class
//! - [`NeuralModel`]: stacked dense layers with named activations
//!
//! Both produce a [`PredictionMap`]. Top-K selection ranks by descending
//! score; equal scores are ordered by ascending class name.

pub mod linear;
pub mod neural;

pub use linear::LinearModel;
pub use neural::{Layer, NeuralModel};

use crate::core::{PipelineError, PipelineResult, VectorData};
use std::collections::{BTreeMap, HashSet};

/// Class name → score.
pub type PredictionMap = BTreeMap<String, f64>;

/// Resource name of [`Model::Linear`].
pub const LINEAR: &str = "LINEAR";
/// Resource name of [`Model::Neural`].
pub const NEURAL: &str = "NEURAL";

/// The scoring function of a pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum Model {
    Linear(LinearModel),
    Neural(NeuralModel),
}

impl Model {
    /// Resource name of the model kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Model::Linear(_) => LINEAR,
            Model::Neural(_) => NEURAL,
        }
    }

    pub fn classes(&self) -> &[String] {
        match self {
            Model::Linear(model) => model.classes(),
            Model::Neural(model) => model.classes(),
        }
    }

    /// Dimension of the feature vector the model consumes.
    pub fn input_dimension(&self) -> usize {
        match self {
            Model::Linear(model) => model.input_dimension(),
            Model::Neural(model) => model.input_dimension(),
        }
    }

    /// Raw per-class scores.
    ///
    /// # Panics
    /// If `input` does not have [`Self::input_dimension`] entries.
    pub fn predict(&self, input: &VectorData) -> PredictionMap {
        match self {
            Model::Linear(model) => model.predict(input),
            Model::Neural(model) => model.predict(input),
        }
    }

    /// All classes, ranked.
    pub fn get_top_predictions(&self, input: &VectorData) -> PredictionMap {
        self.get_top_count_predictions(input, None)
    }

    /// The `top_count` best classes, or all of them for `None`.
    pub fn get_top_count_predictions(
        &self,
        input: &VectorData,
        top_count: Option<usize>,
    ) -> PredictionMap {
        match self {
            Model::Linear(model) => model.get_top_count_predictions(input, top_count),
            Model::Neural(model) => model.get_top_count_predictions(input, top_count),
        }
    }
}

impl From<LinearModel> for Model {
    fn from(model: LinearModel) -> Self {
        Model::Linear(model)
    }
}

impl From<NeuralModel> for Model {
    fn from(model: NeuralModel) -> Self {
        Model::Neural(model)
    }
}

/// Entries sorted by descending score, ties by ascending class name.
pub fn rank(predictions: &PredictionMap) -> Vec<(String, f64)> {
    let mut ranked: Vec<(String, f64)> = predictions
        .iter()
        .map(|(class, &score)| (class.clone(), score))
        .collect();
    // Stable sort over name-ordered entries keeps ties by name
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked
}

/// Keep the `top_count` highest-scoring entries, or all for `None`.
pub fn top_count_predictions(
    predictions: &PredictionMap,
    top_count: Option<usize>,
) -> PredictionMap {
    let ranked = rank(predictions);
    let keep = top_count.unwrap_or(ranked.len());
    ranked.into_iter().take(keep).collect()
}

/// Softmax over the scores of a prediction map.
pub fn softmax(predictions: &PredictionMap) -> PredictionMap {
    let max = predictions
        .values()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<(&String, f64)> = predictions
        .iter()
        .map(|(class, &score)| (class, (score - max).exp()))
        .collect();
    let sum: f64 = exps.iter().map(|(_, e)| e).sum();
    exps.into_iter()
        .map(|(class, e)| (class.clone(), e / sum))
        .collect()
}

/// Class names must be non-empty, unique, and not blank.
pub(crate) fn validate_classes(classes: &[String]) -> PipelineResult<()> {
    if classes.is_empty() {
        return Err(PipelineError::InvalidField {
            field: "classes".to_string(),
            reason: "no classes".to_string(),
        });
    }
    let mut seen = HashSet::with_capacity(classes.len());
    for class in classes {
        if class.is_empty() {
            return Err(PipelineError::InvalidField {
                field: "classes".to_string(),
                reason: "empty class name".to_string(),
            });
        }
        if !seen.insert(class.as_str()) {
            return Err(PipelineError::InvalidField {
                field: "classes".to_string(),
                reason: format!("duplicate class {class:?}"),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn predictions(entries: &[(&str, f64)]) -> PredictionMap {
        entries
            .iter()
            .map(|(class, score)| (class.to_string(), *score))
            .collect()
    }

    #[test]
    fn test_rank_descending() {
        let ranked = rank(&predictions(&[("a", 0.1), ("b", 0.7), ("c", 0.2)]));
        let classes: Vec<&str> = ranked.iter().map(|(c, _)| c.as_str()).collect();
        assert_eq!(classes, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_rank_ties_by_name() {
        let ranked = rank(&predictions(&[("zeta", 0.5), ("alpha", 0.5), ("mid", 0.9)]));
        let classes: Vec<&str> = ranked.iter().map(|(c, _)| c.as_str()).collect();
        assert_eq!(classes, vec!["mid", "alpha", "zeta"]);
    }

    #[test]
    fn test_top_count() {
        let all = predictions(&[("a", 0.1), ("b", 0.7), ("c", 0.2)]);
        let top = top_count_predictions(&all, Some(2));
        assert_eq!(top.len(), 2);
        assert!(top.contains_key("b"));
        assert!(top.contains_key("c"));

        assert_eq!(top_count_predictions(&all, None), all);
        assert_eq!(top_count_predictions(&all, Some(10)), all);
        assert!(top_count_predictions(&all, Some(0)).is_empty());
    }

    #[test]
    fn test_softmax() {
        let probabilities = softmax(&predictions(&[("a", 1.0), ("b", 2.0), ("c", 3.0)]));
        let sum: f64 = probabilities.values().sum();
        assert!((sum - 1.0).abs() < 1e-12);
        assert!(probabilities["c"] > probabilities["b"]);
        assert!((probabilities["a"] - 0.090_030_573_170_380_46).abs() < 1e-12);
    }

    #[test]
    fn test_softmax_empty() {
        assert!(softmax(&PredictionMap::new()).is_empty());
    }

    #[test]
    fn test_validate_classes() {
        let ok = vec!["a".to_string(), "b".to_string()];
        assert!(validate_classes(&ok).is_ok());
        assert!(validate_classes(&[]).is_err());
        assert!(validate_classes(&["a".to_string(), String::new()]).is_err());
        assert!(validate_classes(&["a".to_string(), "a".to_string()]).is_err());
    }
}
