//! Multi-word token lookup into category frequencies.
//!
//! Tokens are stored compressed: every character maps to a prefix-free bit
//! code, and a token's key is its concatenated codes packed into bytes. The
//! packed form is what flatbuffer resources carry, so lookups compress the
//! candidate token and compare bytes.
//!
//! ## Key layout
//!
//! ```text
//! [bit count: u16 big-endian][codes packed MSB-first, last byte zero-padded]
//! ```

use crate::core::{PipelineError, PipelineResult, VectorData};
use ndarray::Array1;
use std::collections::HashMap;

/// Longest run of consecutive words tried as one token.
pub const MAX_TOKENS_IN_SEQUENCE: usize = 5;

/// Separator between the words of a multi-word token.
pub const TOKEN_DELIMITER: char = '-';

/// Bit code of a single character: the low `length` bits of `bits`, MSB first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharCode {
    bits: u32,
    length: u8,
}

impl CharCode {
    /// # Errors
    /// - `InvalidField` if `length` is outside `1..=32` or `bits` does not fit in `length` bits
    pub fn new(bits: u32, length: u8) -> PipelineResult<Self> {
        if length == 0 || length > 32 {
            return Err(PipelineError::InvalidField {
                field: "huffman_coding".to_string(),
                reason: format!("code length {length} outside 1..=32"),
            });
        }
        if length < 32 && bits >> length != 0 {
            return Err(PipelineError::InvalidField {
                field: "huffman_coding".to_string(),
                reason: format!("code {bits:#b} does not fit in {length} bits"),
            });
        }
        Ok(Self { bits, length })
    }

    /// Parse a code written as a string of `'0'` and `'1'`.
    pub fn parse(code: &str) -> PipelineResult<Self> {
        let invalid = || PipelineError::InvalidField {
            field: "huffman_coding".to_string(),
            reason: format!("invalid bit string {code:?}"),
        };
        if code.is_empty() || code.len() > 32 {
            return Err(invalid());
        }
        let mut bits = 0u32;
        for c in code.chars() {
            let bit = match c {
                '0' => 0,
                '1' => 1,
                _ => return Err(invalid()),
            };
            bits = (bits << 1) | bit;
        }
        Self::new(bits, code.len() as u8)
    }

    pub fn bits(&self) -> u32 {
        self.bits
    }

    pub fn length(&self) -> u8 {
        self.length
    }

    /// Whether `self` is a prefix of `other` (or equal to it).
    fn is_prefix_of(&self, other: &CharCode) -> bool {
        self.length <= other.length && other.bits >> (other.length - self.length) == self.bits
    }
}

/// Prefix-free character coding used to compress tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenCodec {
    codes: HashMap<char, CharCode>,
}

impl TokenCodec {
    /// # Errors
    /// - `InvalidField` if one code is a prefix of another
    pub fn new(codes: HashMap<char, CharCode>) -> PipelineResult<Self> {
        let entries: Vec<(&char, &CharCode)> = codes.iter().collect();
        for (i, (a_char, a)) in entries.iter().enumerate() {
            for (b_char, b) in &entries[i + 1..] {
                if a.is_prefix_of(b) || b.is_prefix_of(a) {
                    return Err(PipelineError::InvalidField {
                        field: "huffman_coding".to_string(),
                        reason: format!("codes of {a_char:?} and {b_char:?} are not prefix-free"),
                    });
                }
            }
        }
        Ok(Self { codes })
    }

    /// Number of characters with a code.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Compress `token` into its lookup key.
    ///
    /// Returns `None` if a character has no code or the token exceeds
    /// `u16::MAX` bits.
    pub fn encode(&self, token: &str) -> Option<Vec<u8>> {
        let mut packed = Vec::new();
        let mut current = 0u8;
        let mut filled = 0u8;
        let mut bit_count = 0usize;

        for c in token.chars() {
            let code = self.codes.get(&c)?;
            for shift in (0..code.length).rev() {
                current = (current << 1) | ((code.bits >> shift) & 1) as u8;
                filled += 1;
                bit_count += 1;
                if filled == 8 {
                    packed.push(current);
                    current = 0;
                    filled = 0;
                }
            }
        }
        if filled > 0 {
            packed.push(current << (8 - filled));
        }

        let bit_count = u16::try_from(bit_count).ok()?;
        let mut key = Vec::with_capacity(packed.len() + 2);
        key.extend_from_slice(&bit_count.to_be_bytes());
        key.extend(packed);
        Some(key)
    }
}

/// Token → category frequencies over a vector of `vector_dimension` entries.
#[derive(Debug, Clone, PartialEq)]
pub struct MappedTokens {
    vector_dimension: usize,
    codec: TokenCodec,
    token_categories: HashMap<Vec<u8>, Vec<usize>>,
}

impl MappedTokens {
    /// Build from compressed token keys.
    ///
    /// # Errors
    /// - `InvalidField` if `vector_dimension` is zero
    /// - `ShapeMismatch` if a category index is not below `vector_dimension`
    pub fn new(
        vector_dimension: usize,
        codec: TokenCodec,
        token_categories: HashMap<Vec<u8>, Vec<usize>>,
    ) -> PipelineResult<Self> {
        if vector_dimension == 0 {
            return Err(PipelineError::InvalidField {
                field: "vector_dimension".to_string(),
                reason: "must be positive".to_string(),
            });
        }
        if let Some(&index) = token_categories
            .values()
            .flatten()
            .find(|&&index| index >= vector_dimension)
        {
            return Err(PipelineError::ShapeMismatch(format!(
                "category index {index} out of range for vector dimension {vector_dimension}"
            )));
        }
        Ok(Self {
            vector_dimension,
            codec,
            token_categories,
        })
    }

    /// Build from plain-text tokens, compressing each with `codec`.
    ///
    /// # Errors
    /// - `InvalidField` if a token cannot be compressed
    /// - the errors of [`MappedTokens::new`]
    pub fn from_plain_tokens(
        vector_dimension: usize,
        codec: TokenCodec,
        tokens: HashMap<String, Vec<usize>>,
    ) -> PipelineResult<Self> {
        let mut token_categories = HashMap::with_capacity(tokens.len());
        for (token, categories) in tokens {
            let key = codec.encode(&token).ok_or_else(|| PipelineError::InvalidField {
                field: "token_categories".to_string(),
                reason: format!("token {token:?} cannot be encoded"),
            })?;
            token_categories.insert(key, categories);
        }
        Self::new(vector_dimension, codec, token_categories)
    }

    pub fn vector_dimension(&self) -> usize {
        self.vector_dimension
    }

    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    /// Number of known tokens.
    pub fn token_count(&self) -> usize {
        self.token_categories.len()
    }

    /// Count category hits for every known token in `text`.
    ///
    /// For each start word, candidates of 1 to [`MAX_TOKENS_IN_SEQUENCE`]
    /// words joined with [`TOKEN_DELIMITER`] are looked up; each category of
    /// each match adds one to its entry.
    pub fn vectorize(&self, text: &str) -> VectorData {
        let words: Vec<&str> = text.split_whitespace().collect();
        let mut frequencies = Array1::<f32>::zeros(self.vector_dimension);

        for start in 0..words.len() {
            let mut candidate = String::new();
            for (offset, word) in words[start..]
                .iter()
                .take(MAX_TOKENS_IN_SEQUENCE)
                .enumerate()
            {
                if offset > 0 {
                    candidate.push(TOKEN_DELIMITER);
                }
                candidate.push_str(word);

                // Longer candidates contain the same uncodable character
                let Some(key) = self.codec.encode(&candidate) else {
                    break;
                };
                if let Some(categories) = self.token_categories.get(&key) {
                    for &index in categories {
                        frequencies[index] += 1.0;
                    }
                }
            }
        }

        VectorData::from_array(frequencies)
    }
}
