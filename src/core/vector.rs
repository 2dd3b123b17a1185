//! Fixed-dimension feature vectors.

use ndarray::Array1;
use std::collections::BTreeMap;

/// Dense `f32` vector whose dimension never changes after construction.
///
/// Binary operations ([`VectorData::dot`]) require both operands to share a
/// dimension. A mismatch means the model and its transformations disagree,
/// which the loader rules out, so it panics rather than returning a value.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorData {
    values: Array1<f32>,
}

impl VectorData {
    /// Build a vector from dense values.
    pub fn new(values: Vec<f32>) -> Self {
        Self {
            values: Array1::from(values),
        }
    }

    pub fn from_array(values: Array1<f32>) -> Self {
        Self { values }
    }

    /// All-zero vector of the given dimension.
    pub fn zeros(dimension: usize) -> Self {
        Self {
            values: Array1::zeros(dimension),
        }
    }

    /// Build a vector of `dimension` entries from sparse `{index: value}` points.
    ///
    /// # Panics
    /// If an index is outside `0..dimension`.
    pub fn from_sparse(dimension: usize, points: &BTreeMap<usize, f32>) -> Self {
        let mut values = Array1::zeros(dimension);
        for (&index, &value) in points {
            assert!(
                index < dimension,
                "sparse index {index} out of range for dimension {dimension}"
            );
            values[index] += value;
        }
        Self { values }
    }

    pub fn dimension(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The underlying values.
    pub fn values(&self) -> &Array1<f32> {
        &self.values
    }

    pub fn to_vec(&self) -> Vec<f32> {
        self.values.to_vec()
    }

    /// Dot product with a vector of the same dimension.
    ///
    /// # Panics
    /// If the dimensions differ.
    pub fn dot(&self, other: &VectorData) -> f32 {
        assert_eq!(
            self.dimension(),
            other.dimension(),
            "dot product of vectors with different dimensions"
        );
        self.values.dot(&other.values)
    }

    /// Euclidean norm.
    pub fn l2_norm(&self) -> f32 {
        self.values.dot(&self.values).sqrt()
    }

    /// Scale to unit Euclidean norm. A zero vector is left unchanged.
    pub fn normalize(&mut self) {
        let norm = self.l2_norm();
        if norm > 0.0 {
            self.values.mapv_inplace(|v| v / norm);
        }
    }

    /// Replace every entry with `v[i]² / Σ v[j]²`.
    ///
    /// The result sums to one unless the vector is all zeros (left unchanged)
    /// or empty.
    pub fn to_distribution(&mut self) {
        let sum_of_squares: f32 = self.values.iter().map(|v| v * v).sum();
        if sum_of_squares > 0.0 {
            self.values.mapv_inplace(|v| v * v / sum_of_squares);
        }
    }

    /// Elementwise `tanh`, in place.
    pub fn tanh(&mut self) {
        self.values.mapv_inplace(f32::tanh);
    }

    /// Softmax, in place. The maximum is subtracted before exponentiating.
    pub fn softmax(&mut self) {
        if self.values.is_empty() {
            return;
        }
        let max = self.values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        self.values.mapv_inplace(|v| (v - max).exp());
        let sum = self.values.sum();
        if sum > 0.0 {
            self.values.mapv_inplace(|v| v / sum);
        }
    }
}

impl From<Vec<f32>> for VectorData {
    fn from(values: Vec<f32>) -> Self {
        Self::new(values)
    }
}
