//! Text-to-vector feature transformations.
//!
//! ## Submodules
//!
//! - [`hashed_ngrams`]: character n-gram counts hashed into a fixed number of buckets
//! - [`mapped_tokens`]: multi-word token lookup into category frequencies
//!
//! A [`Transformation`] is a pure `Data → Option<Data>` step. Each kind accepts
//! exactly one [`DataKind`]; the wrong kind yields `None`.

pub mod hashed_ngrams;
pub mod mapped_tokens;

pub use hashed_ngrams::HashedNGrams;
pub use mapped_tokens::{CharCode, MappedTokens, TokenCodec};

use crate::core::{Data, DataKind, PipelineError, PipelineResult};

/// Resource name of [`Transformation::Lowercase`].
pub const TO_LOWER: &str = "TO_LOWER";
/// Resource name of [`Transformation::Normalization`].
pub const NORMALIZE: &str = "NORMALIZE";
/// Alternative name of [`Transformation::Normalization`] used by flatbuffer resources.
pub const NORMALIZATION_ALIAS: &str = "kNormalization";
/// Resource name of [`Transformation::Distribution`].
pub const TO_DISTRIBUTION: &str = "TO_DISTRIBUTION";
/// Resource name of [`Transformation::HashedNGrams`].
pub const HASHED_NGRAMS: &str = "HASHED_NGRAMS";
/// Resource name of [`Transformation::MappedTokens`].
pub const MAPPED_TOKENS: &str = "MAPPED_TOKENS";

/// One step of a pipeline's transformation chain.
#[derive(Debug, Clone, PartialEq)]
pub enum Transformation {
    /// Text → Text, ASCII lowercase
    Lowercase,
    /// Text → Vector of dimension `num_buckets`
    HashedNGrams(HashedNGrams),
    /// Text → Vector of dimension `vector_dimension`
    MappedTokens(MappedTokens),
    /// Vector → Vector, `v[i]² / Σ v[j]²`
    Distribution,
    /// Vector → Vector, unit Euclidean norm
    Normalization,
}

impl Transformation {
    /// Resolve a parameterless transformation from its resource name.
    ///
    /// # Errors
    /// - `UnknownTransformation` for names that are unknown or need parameters
    pub fn from_simple_name(name: &str) -> PipelineResult<Self> {
        match name {
            TO_LOWER => Ok(Transformation::Lowercase),
            NORMALIZE | NORMALIZATION_ALIAS => Ok(Transformation::Normalization),
            TO_DISTRIBUTION => Ok(Transformation::Distribution),
            HASHED_NGRAMS | MAPPED_TOKENS => Err(PipelineError::UnknownTransformation(format!(
                "{name} requires parameters"
            ))),
            other => Err(PipelineError::UnknownTransformation(other.to_string())),
        }
    }

    /// Resource name of this transformation.
    pub fn name(&self) -> &'static str {
        match self {
            Transformation::Lowercase => TO_LOWER,
            Transformation::HashedNGrams(_) => HASHED_NGRAMS,
            Transformation::MappedTokens(_) => MAPPED_TOKENS,
            Transformation::Distribution => TO_DISTRIBUTION,
            Transformation::Normalization => NORMALIZE,
        }
    }

    /// The kind of [`Data`] this step accepts.
    pub fn input_kind(&self) -> DataKind {
        match self {
            Transformation::Lowercase
            | Transformation::HashedNGrams(_)
            | Transformation::MappedTokens(_) => DataKind::Text,
            Transformation::Distribution | Transformation::Normalization => DataKind::Vector,
        }
    }

    /// Dimension of the vector produced from text, for Text → Vector steps.
    pub fn output_dimension(&self) -> Option<usize> {
        match self {
            Transformation::HashedNGrams(hashed) => Some(hashed.num_buckets()),
            Transformation::MappedTokens(mapped) => Some(mapped.vector_dimension()),
            _ => None,
        }
    }

    /// Apply this step. Returns `None` if `data` is not of [`Self::input_kind`].
    pub fn apply(&self, data: Data) -> Option<Data> {
        match (self, data) {
            (Transformation::Lowercase, Data::Text(text)) => {
                Some(Data::Text(text.to_ascii_lowercase()))
            }
            (Transformation::HashedNGrams(hashed), Data::Text(text)) => {
                Some(Data::Vector(hashed.vectorize(&text)))
            }
            (Transformation::MappedTokens(mapped), Data::Text(text)) => {
                Some(Data::Vector(mapped.vectorize(&text)))
            }
            (Transformation::Distribution, Data::Vector(mut vector)) => {
                vector.to_distribution();
                Some(Data::Vector(vector))
            }
            (Transformation::Normalization, Data::Vector(mut vector)) => {
                vector.normalize();
                Some(Data::Vector(vector))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::VectorData;

    #[test]
    fn test_from_simple_name() {
        assert_eq!(
            Transformation::from_simple_name("TO_LOWER").unwrap(),
            Transformation::Lowercase
        );
        assert_eq!(
            Transformation::from_simple_name("NORMALIZE").unwrap(),
            Transformation::Normalization
        );
        assert_eq!(
            Transformation::from_simple_name("kNormalization").unwrap(),
            Transformation::Normalization
        );
        assert_eq!(
            Transformation::from_simple_name("TO_DISTRIBUTION").unwrap(),
            Transformation::Distribution
        );
    }

    #[test]
    fn test_from_simple_name_rejects_unknown() {
        assert!(Transformation::from_simple_name("to_lower").is_err());
        assert!(Transformation::from_simple_name("STEM").is_err());
        assert!(Transformation::from_simple_name("HASHED_NGRAMS").is_err());
    }

    #[test]
    fn test_lowercase() {
        let out = Transformation::Lowercase.apply(Data::from("Hello WORLD Ünïcode"));
        assert_eq!(
            out.as_ref().and_then(Data::as_text),
            Some("hello world Ünïcode")
        );
    }

    #[test]
    fn test_lowercase_rejects_vector() {
        let out = Transformation::Lowercase.apply(Data::from(VectorData::new(vec![1.0])));
        assert!(out.is_none());
    }

    #[test]
    fn test_vector_steps_reject_text() {
        assert!(Transformation::Normalization.apply(Data::from("text")).is_none());
        assert!(Transformation::Distribution.apply(Data::from("text")).is_none());
    }

    #[test]
    fn test_normalization() {
        let out = Transformation::Normalization
            .apply(Data::from(VectorData::new(vec![0.0, 3.0, 4.0])))
            .and_then(Data::into_vector)
            .unwrap();
        assert!((out.l2_norm() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_distribution() {
        let out = Transformation::Distribution
            .apply(Data::from(VectorData::new(vec![2.0, 2.0, 0.0, 4.0])))
            .and_then(Data::into_vector)
            .unwrap();
        let values = out.to_vec();
        assert!((values[0] - 4.0 / 24.0).abs() < 1e-6);
        assert!((values[1] - 4.0 / 24.0).abs() < 1e-6);
        assert_eq!(values[2], 0.0);
        assert!((values[3] - 16.0 / 24.0).abs() < 1e-6);
    }

    #[test]
    fn test_input_kind_and_dimension() {
        let hashed = Transformation::HashedNGrams(HashedNGrams::new(64, vec![2, 3]).unwrap());
        assert_eq!(hashed.input_kind(), DataKind::Text);
        assert_eq!(hashed.output_dimension(), Some(64));
        assert_eq!(Transformation::Normalization.input_kind(), DataKind::Vector);
        assert_eq!(Transformation::Normalization.output_dimension(), None);
        assert_eq!(Transformation::Lowercase.output_dimension(), None);
    }
}
