//! Resource fixtures shared by the integration tests.

#![allow(dead_code)]

use flatbuffers::{FlatBufferBuilder, ForwardsUOffset, UnionWIPOffset, Vector, WIPOffset};
use pageclass::loader::flat::schema as fb;
use pageclass::transform::CharCode;
use pageclass::{HashedNGrams, TokenCodec};
use serde_json::{json, Value};
use std::collections::HashMap;

pub const TIMESTAMP: &str = "2024-03-01 10:00:00.000000";

/// Hashing parameters of the category fixture.
pub const NUM_BUCKETS: usize = 16_384;
pub const NGRAM_SIZES: [usize; 5] = [1, 2, 3, 4, 5];

/// Category name and a short text typical for it.
pub const CATEGORY_SEEDS: [(&str, &str); 5] = [
    (
        "crypto-crypto",
        "bitcoin ethereum blockchain crypto wallet token exchange mining defi coin price",
    ),
    (
        "personal finance-banking",
        "bank account savings checking mortgage loan credit card interest rate deposit",
    ),
    (
        "sports-soccer",
        "soccer football match goal league striker premier team score world cup",
    ),
    (
        "travel-hotels",
        "hotel booking room resort stay suite check in travel vacation beach",
    ),
    (
        "technology & computing-software",
        "software app developer code programming release update open source platform",
    ),
];

pub const CRYPTO_TEXT: &str = "Bitcoin and Ethereum prices surge as crypto exchange volumes \
    hit a record while blockchain mining stocks rally";

/// Unit-norm hashed n-gram vector of each category seed, in seed order.
pub fn seed_weights() -> Vec<Vec<f32>> {
    let hashed = HashedNGrams::new(NUM_BUCKETS, NGRAM_SIZES.to_vec()).unwrap();
    CATEGORY_SEEDS
        .iter()
        .map(|(_, seed)| {
            let mut vector = hashed.vectorize(&seed.to_lowercase());
            vector.normalize();
            vector.to_vec()
        })
        .collect()
}

/// Fixed-length 5-bit codes for 'a'..='z' and '-', as bit strings.
pub fn alphabet_coding() -> Vec<(char, String)> {
    ('a'..='z')
        .chain(std::iter::once('-'))
        .enumerate()
        .map(|(i, c)| (c, format!("{i:05b}")))
        .collect()
}

pub fn alphabet_codec() -> TokenCodec {
    let codes = alphabet_coding()
        .into_iter()
        .map(|(c, code)| (c, CharCode::parse(&code).unwrap()))
        .collect();
    TokenCodec::new(codes).unwrap()
}

// ============================================================================
// JSON
// ============================================================================

/// JSON resource: lowercase, hashed n-grams, normalize, linear over the category seeds.
pub fn category_json(locale: &str) -> Value {
    let classes: Vec<&str> = CATEGORY_SEEDS.iter().map(|(class, _)| *class).collect();
    let class_weights: serde_json::Map<String, Value> = CATEGORY_SEEDS
        .iter()
        .zip(seed_weights())
        .map(|((class, _), weights)| (class.to_string(), json!(weights)))
        .collect();

    json!({
        "version": 1,
        "timestamp": TIMESTAMP,
        "locale": locale,
        "transformations": [
            {"transformation_type": "TO_LOWER"},
            {"transformation_type": "HASHED_NGRAMS", "params": {
                "num_buckets": NUM_BUCKETS,
                "ngrams_range": NGRAM_SIZES,
            }},
            {"transformation_type": "NORMALIZE"}
        ],
        "classifier": {
            "classifier_type": "LINEAR",
            "classes": classes,
            "class_weights": class_weights,
            "biases": vec![0.0; CATEGORY_SEEDS.len()],
        }
    })
}

// ============================================================================
// FLATBUFFERS
// ============================================================================

pub fn simple_step<'a>(
    fbb: &mut FlatBufferBuilder<'a>,
    name: &str,
) -> WIPOffset<fb::Transformation<'a>> {
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

pub fn hashed_step<'a>(
    fbb: &mut FlatBufferBuilder<'a>,
    num_buckets: usize,
    sizes: &[usize],
) -> WIPOffset<fb::Transformation<'a>> {
    let sizes: Vec<u32> = sizes.iter().map(|&s| s as u32).collect();
    let range = fbb.create_vector(&sizes);
    let hashed = fb::HashedNGramsTransformation::create(
        fbb,
        &fb::HashedNGramsTransformationArgs {
            num_buckets: num_buckets as u32,
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

/// Mapped-token step using the alphabet coding; tokens are compressed here.
pub fn mapped_step<'a>(
    fbb: &mut FlatBufferBuilder<'a>,
    vector_dimension: u32,
    tokens: &[(&str, &[u32])],
) -> WIPOffset<fb::Transformation<'a>> {
    let mut codes = Vec::new();
    for (c, code) in alphabet_coding() {
        let parsed = CharCode::parse(&code).unwrap();
        codes.push(fb::CharCode::create(
            fbb,
            &fb::CharCodeArgs {
                character: c as u32,
                bits: parsed.bits(),
                length: parsed.length(),
            },
        ));
    }
    let coding = fbb.create_vector(&codes);

    let codec = alphabet_codec();
    let mut mapping = Vec::new();
    for (token, categories) in tokens {
        let key = codec.encode(token).unwrap();
        let token = fbb.create_vector(&key);
        let categories = fbb.create_vector(categories);
        mapping.push(fb::TokenCategories::create(
            fbb,
            &fb::TokenCategoriesArgs {
                token: Some(token),
                categories: Some(categories),
            },
        ));
    }
    let mapping = fbb.create_vector(&mapping);

    let mapped = fb::MappedTokenTransformation::create(
        fbb,
        &fb::MappedTokenTransformationArgs {
            vector_dimension,
            coding: Some(coding),
            mapping: Some(mapping),
        },
    );
    fb::Transformation::create(
        fbb,
        &fb::TransformationArgs {
            transformation_type: fb::TransformationType::MappedTokenTransformation,
            transformation: Some(mapped.as_union_value()),
        },
    )
}

fn class_vector<'a>(
    fbb: &mut FlatBufferBuilder<'a>,
    classes: &[&str],
) -> WIPOffset<Vector<'a, ForwardsUOffset<&'a str>>> {
    let names: Vec<_> = classes.iter().map(|c| fbb.create_string(c)).collect();
    fbb.create_vector(&names)
}

fn weight_vectors<'a>(
    fbb: &mut FlatBufferBuilder<'a>,
    rows: &[Vec<f32>],
) -> WIPOffset<Vector<'a, ForwardsUOffset<fb::WeightVector<'a>>>> {
    let mut offsets = Vec::with_capacity(rows.len());
    for row in rows {
        let values = fbb.create_vector(row);
        offsets.push(fb::WeightVector::create(
            fbb,
            &fb::WeightVectorArgs {
                values: Some(values),
            },
        ));
    }
    fbb.create_vector(&offsets)
}

pub fn linear_classifier(
    fbb: &mut FlatBufferBuilder<'_>,
    classes: &[&str],
    weights: &[Vec<f32>],
    biases: &[f32],
) -> (fb::Classifier, WIPOffset<UnionWIPOffset>) {
    let classes = class_vector(fbb, classes);
    let weights = weight_vectors(fbb, weights);
    let biases = fbb.create_vector(biases);
    let linear = fb::LinearClassifier::create(
        fbb,
        &fb::LinearClassifierArgs {
            classes: Some(classes),
            weights: Some(weights),
            biases: Some(biases),
        },
    );
    (fb::Classifier::LinearClassifier, linear.as_union_value())
}

pub fn neural_classifier(
    fbb: &mut FlatBufferBuilder<'_>,
    classes: &[&str],
    layers: &[(Vec<Vec<f32>>, &str)],
) -> (fb::Classifier, WIPOffset<UnionWIPOffset>) {
    let classes = class_vector(fbb, classes);
    let mut offsets = Vec::with_capacity(layers.len());
    for (rows, activation) in layers {
        let rows = weight_vectors(fbb, rows);
        let activation = fbb.create_string(activation);
        offsets.push(fb::Layer::create(
            fbb,
            &fb::LayerArgs {
                rows: Some(rows),
                activation: Some(activation),
            },
        ));
    }
    let layers = fbb.create_vector(&offsets);
    let neural = fb::NeuralClassifier::create(
        fbb,
        &fb::NeuralClassifierArgs {
            classes: Some(classes),
            layers: Some(layers),
        },
    );
    (fb::Classifier::NeuralClassifier, neural.as_union_value())
}

/// Finish a `Model` root and return the buffer.
pub fn finish_model<'a>(
    mut fbb: FlatBufferBuilder<'a>,
    locale: &str,
    steps: &[WIPOffset<fb::Transformation<'a>>],
    classifier: (fb::Classifier, WIPOffset<UnionWIPOffset>),
) -> Vec<u8> {
    let transformations = fbb.create_vector(steps);
    let timestamp = fbb.create_string(TIMESTAMP);
    let locale = fbb.create_string(locale);
    let root = fb::Model::create(
        &mut fbb,
        &fb::ModelArgs {
            version: 1,
            timestamp: Some(timestamp),
            locale: Some(locale),
            transformations: Some(transformations),
            classifier_type: classifier.0,
            classifier: Some(classifier.1),
        },
    );
    fb::finish_model_buffer(&mut fbb, root);
    fbb.finished_data().to_vec()
}

/// Flatbuffer resource equivalent to [`category_json`].
pub fn category_flatbuffer(locale: &str) -> Vec<u8> {
    let mut fbb = FlatBufferBuilder::new();
    let steps = vec![
        simple_step(&mut fbb, "TO_LOWER"),
        hashed_step(&mut fbb, NUM_BUCKETS, &NGRAM_SIZES),
        simple_step(&mut fbb, "kNormalization"),
    ];
    let classes: Vec<&str> = CATEGORY_SEEDS.iter().map(|(class, _)| *class).collect();
    let biases = vec![0.0; CATEGORY_SEEDS.len()];
    let classifier = linear_classifier(&mut fbb, &classes, &seed_weights(), &biases);
    finish_model(fbb, locale, &steps, classifier)
}

/// Token → category indices for the neural fixture.
pub fn topic_tokens() -> HashMap<&'static str, Vec<u32>> {
    HashMap::from([
        ("bitcoin", vec![0]),
        ("real-estate", vec![1]),
        ("soccer", vec![2]),
        ("world-cup", vec![2]),
    ])
}

/// Flatbuffer resource: lowercase, mapped tokens, one softmax layer.
pub fn topic_flatbuffer(locale: &str) -> Vec<u8> {
    let mut fbb = FlatBufferBuilder::new();
    let tokens = topic_tokens();
    let entries: Vec<(&str, &[u32])> = tokens
        .iter()
        .map(|(token, categories)| (*token, categories.as_slice()))
        .collect();
    let steps = vec![
        simple_step(&mut fbb, "TO_LOWER"),
        mapped_step(&mut fbb, 3, &entries),
    ];
    let rows = vec![
        vec![2.0, 0.0, 0.0],
        vec![0.0, 2.0, 0.0],
        vec![0.0, 0.0, 2.0],
    ];
    let classifier = neural_classifier(
        &mut fbb,
        &["crypto", "real estate", "sports"],
        &[(rows, "softmax")],
    );
    finish_model(fbb, locale, &steps, classifier)
}
