//! Post-layer activations for neural models.

use super::VectorData;

/// Nonlinearity applied in place to a layer's output.
///
/// Resources name activations with the literal strings `"tanh"` and
/// `"softmax"`; any other name, including an absent one, is [`Activation::Identity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    /// f(x) = x
    #[default]
    Identity,
    /// f(x) = tanh(x), elementwise
    Tanh,
    /// f(x)_i = exp(x_i) / Σ exp(x_j)
    Softmax,
}

impl Activation {
    /// Resolve an activation from its resource name. Matching is case-sensitive.
    pub fn from_name(name: &str) -> Self {
        match name {
            "tanh" => Activation::Tanh,
            "softmax" => Activation::Softmax,
            _ => Activation::Identity,
        }
    }

    /// Name for debugging
    pub fn name(&self) -> &'static str {
        match self {
            Activation::Identity => "identity",
            Activation::Tanh => "tanh",
            Activation::Softmax => "softmax",
        }
    }

    pub fn apply(&self, vector: &mut VectorData) {
        match self {
            Activation::Identity => {}
            Activation::Tanh => vector.tanh(),
            Activation::Softmax => vector.softmax(),
        }
    }
}
