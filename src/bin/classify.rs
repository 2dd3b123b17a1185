//! Text classification binary.
//!
//! Loads a JSON or flatbuffer pipeline resource and classifies either the
//! positional text or every line of `--input`. Writes one JSON object per
//! text to stdout:
//!
//! ```text
//! {"text": "...", "predictions": [["sports-soccer", 0.91], ...]}
//! ```

use clap::Parser;
use pageclass::{rank, Config, TextProcessor, MAX_PREDICTIONS};
use rayon::prelude::*;
use serde_json::json;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(
    name = "pageclass-classify",
    about = "Classify text with a trained pipeline resource"
)]
struct Args {
    /// Pipeline resource (JSON or flatbuffer)
    #[arg(long)]
    model: PathBuf,

    /// Locale the resource must have been trained for
    #[arg(long, default_value = "en")]
    locale: String,

    /// Number of classes to report per text
    #[arg(long, default_value_t = MAX_PREDICTIONS)]
    top: usize,

    /// File with one text per line, classified in parallel
    #[arg(long)]
    input: Option<PathBuf>,

    /// Log at DEBUG level
    #[arg(long, short)]
    verbose: bool,

    /// Text to classify when no --input is given
    text: Vec<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install logger: {e}");
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let buffer = fs::read(&args.model)
        .map_err(|e| format!("Failed to read {}: {e}", args.model.display()))?;

    let config = Config {
        locale: args.locale,
        max_predictions: args.top,
    };
    let mut processor = TextProcessor::new(config);
    if !processor.set_pipeline(&buffer) {
        return Err(format!("Failed to load pipeline from {}", args.model.display()).into());
    }
    if let Some(pipeline) = processor.pipeline() {
        info!(
            model = pipeline.model().kind_name(),
            classes = pipeline.model().classes().len(),
            version = pipeline.version(),
            "Loaded {}",
            args.model.display()
        );
    }

    let texts: Vec<String> = match &args.input {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {e}", path.display()))?
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect(),
        None if !args.text.is_empty() => vec![args.text.join(" ")],
        None => return Err("Nothing to classify: pass text or --input".into()),
    };
    debug!(texts = texts.len(), "Classifying");

    let lines: Vec<String> = texts
        .par_iter()
        .map(|text| {
            let predictions = processor
                .classify_page(text)
                .map(|p| rank(&p))
                .unwrap_or_default();
            json!({ "text": text, "predictions": predictions }).to_string()
        })
        .collect();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
