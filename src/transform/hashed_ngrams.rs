//! Hashed character n-gram vectorizer.
//!
//! Every window of `n` consecutive characters is hashed with CRC-32 and counted
//! in bucket `crc32(window) % num_buckets`, for each requested `n`.

use crate::core::{PipelineError, PipelineResult, VectorData};
use std::collections::BTreeMap;

/// Default bucket count.
pub const DEFAULT_NUM_BUCKETS: usize = 10_000;

/// Default n-gram sizes.
pub const DEFAULT_NGRAM_SIZES: [usize; 6] = [1, 2, 3, 4, 5, 6];

/// Character n-gram counts hashed into `num_buckets` buckets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashedNGrams {
    num_buckets: usize,
    ngram_sizes: Vec<usize>,
}

impl HashedNGrams {
    /// # Errors
    /// - `InvalidField` if `num_buckets` is zero, `ngram_sizes` is empty, or a size is zero
    pub fn new(num_buckets: usize, ngram_sizes: Vec<usize>) -> PipelineResult<Self> {
        if num_buckets == 0 {
            return Err(PipelineError::InvalidField {
                field: "num_buckets".to_string(),
                reason: "must be positive".to_string(),
            });
        }
        if ngram_sizes.is_empty() || ngram_sizes.contains(&0) {
            return Err(PipelineError::InvalidField {
                field: "ngrams_range".to_string(),
                reason: format!("n-gram sizes must be non-empty and positive, got {ngram_sizes:?}"),
            });
        }
        Ok(Self {
            num_buckets,
            ngram_sizes,
        })
    }

    pub fn num_buckets(&self) -> usize {
        self.num_buckets
    }

    pub fn ngram_sizes(&self) -> &[usize] {
        &self.ngram_sizes
    }

    /// Bucket index of a single n-gram.
    pub fn bucket(&self, ngram: &str) -> usize {
        crc32fast::hash(ngram.as_bytes()) as usize % self.num_buckets
    }

    /// Count the hashed n-grams of `text`.
    ///
    /// Whitespace runs are collapsed to one space first, so n-grams may span
    /// a word boundary through that space. Texts shorter than `n` characters
    /// contribute nothing for that size. The result always has dimension
    /// [`Self::num_buckets`].
    pub fn vectorize(&self, text: &str) -> VectorData {
        let joined = text.split_whitespace().collect::<Vec<_>>().join(" ");
        let chars: Vec<char> = joined.chars().collect();

        let mut counts: BTreeMap<usize, f32> = BTreeMap::new();
        let mut ngram = String::new();
        for &n in &self.ngram_sizes {
            for window in chars.windows(n) {
                ngram.clear();
                ngram.extend(window);
                *counts.entry(self.bucket(&ngram)).or_insert(0.0) += 1.0;
            }
        }

        VectorData::from_sparse(self.num_buckets, &counts)
    }
}

impl Default for HashedNGrams {
    fn default() -> Self {
        Self {
            num_buckets: DEFAULT_NUM_BUCKETS,
            ngram_sizes: DEFAULT_NGRAM_SIZES.to_vec(),
        }
    }
}
