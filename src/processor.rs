//! Entry point for callers that classify text with a reloadable resource.
//!
//! ```text
//! Unloaded ──set_pipeline(ok)──▶ Loaded ──set_pipeline(ok)──▶ Loaded (replaced)
//!     ▲                             │
//!     └──────set_pipeline(err)──────┘
//! ```
//!
//! A failed reload discards the previous pipeline instead of keeping it.

use crate::core::Data;
use crate::loader::load_pipeline;
use crate::model::PredictionMap;
use crate::pipeline::Pipeline;
use crate::Config;
use tracing::{debug, warn};

/// Holds the current pipeline, if any, and classifies text with it.
#[derive(Debug, Clone, Default)]
pub struct TextProcessor {
    config: Config,
    pipeline: Option<Pipeline>,
}

impl TextProcessor {
    /// Create an unloaded processor.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            pipeline: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn is_loaded(&self) -> bool {
        self.pipeline.is_some()
    }

    pub fn pipeline(&self) -> Option<&Pipeline> {
        self.pipeline.as_ref()
    }

    /// Parse `buffer` and replace the current pipeline with it.
    ///
    /// Returns `false` and leaves the processor unloaded if the resource is
    /// rejected.
    pub fn set_pipeline(&mut self, buffer: &[u8]) -> bool {
        self.pipeline = None;

        match load_pipeline(buffer, &self.config.locale) {
            Ok(pipeline) => {
                debug!(
                    version = pipeline.version(),
                    timestamp = pipeline.timestamp(),
                    locale = pipeline.locale(),
                    model = pipeline.model().kind_name(),
                    transformations = pipeline.transformations().len(),
                    "loaded text classification pipeline"
                );
                self.pipeline = Some(pipeline);
                true
            }
            Err(err) => {
                warn!(error = %err, "rejected text classification resource");
                false
            }
        }
    }

    /// Raw model scores for `text`.
    ///
    /// Returns `None` if no pipeline is loaded or the pipeline cannot turn
    /// the text into a vector.
    pub fn apply(&self, text: &str) -> Option<PredictionMap> {
        self.pipeline.as_ref()?.apply(Data::from(text))
    }

    /// The best classes for `text`, at most `config.max_predictions`.
    ///
    /// The map is keyed by class name; use [`rank`](crate::rank) for
    /// descending score order.
    pub fn get_top_predictions(&self, text: &str) -> Option<PredictionMap> {
        self.get_top_count_predictions(text, self.config.max_predictions)
    }

    /// The `top_count` best classes for `text`.
    pub fn get_top_count_predictions(&self, text: &str, top_count: usize) -> Option<PredictionMap> {
        self.pipeline
            .as_ref()?
            .get_top_count_predictions(Data::from(text), Some(top_count))
    }

    /// The best classes for a page's text, at most `config.max_predictions`.
    ///
    /// Returns `None` when nothing could be predicted. Like
    /// [`get_top_predictions`](Self::get_top_predictions), the result is
    /// keyed by class name; [`rank`](crate::rank) orders it by score.
    pub fn classify_page(&self, text: &str) -> Option<PredictionMap> {
        let predictions = self.get_top_predictions(text)?;
        if predictions.is_empty() {
            debug!("no predictions for page text");
            return None;
        }
        Some(predictions)
    }
}
