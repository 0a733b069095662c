//! Offline corpus builder: batch-generates story records and writes them
//! as a clean JSON corpus for retrieval.
//!
//! Usage: `generate-corpus [COUNT] [OUTPUT]` with `GOOGLE_API_KEY` set.

use anyhow::{bail, Context, Result};
use noir_core::config::NoirConfig;
use noir_core::story::{Difficulty, StoryExample};
use noir_core::traits::{GenerationRequest, TextGenerator};
use noir_story::cleanup;
use noir_story::GeminiClient;
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

const DEFAULT_COUNT: usize = 100;
const TOPICS: &[&str] = &[
    "Modern Crime",
    "Cyberpunk",
    "Medieval",
    "80s Horror",
    "Surreal",
    "Sci-Fi",
];

fn record_prompt(topic: &str, difficulty: Difficulty) -> String {
    format!(
        "Generate a lateral thinking mystery as JSON. The JSON must include:\n\
         - topic: short genre/topic (string)\n\
         - difficulty: one of [\"Rookie\", \"Detective\", \"Sherlock\"]\n\
         - premise: 1-2 sentence mysterious setup\n\
         - solution: 3-5 sentence explanation with a twist\n\n\
         Story genre/topic: {topic}\n\
         Difficulty: {difficulty}\n\n\
         Return ONLY valid JSON."
    )
}

fn main() -> Result<()> {
    noir_core::logging::init();

    let mut args = std::env::args().skip(1);
    let count: usize = match args.next() {
        Some(raw) => raw.parse().context("COUNT must be a positive integer")?,
        None => DEFAULT_COUNT,
    };
    let output = PathBuf::from(
        args.next()
            .unwrap_or_else(|| "data/stories.json".to_string()),
    );

    let api_key = std::env::var("GOOGLE_API_KEY").unwrap_or_default();
    let config = NoirConfig::default();
    let client = GeminiClient::new(
        api_key,
        &config.generation.model,
        &config.embedding.model,
    );
    if !TextGenerator::is_available(&client) {
        bail!("GOOGLE_API_KEY is not set");
    }

    let tiers = Difficulty::all();
    let mut records: Vec<StoryExample> = Vec::with_capacity(count);
    for i in 0..count {
        let topic = TOPICS[i % TOPICS.len()];
        let difficulty = tiers[i % tiers.len()];
        let request = GenerationRequest::new(record_prompt(topic, difficulty))
            .with_temperature(0.7);

        match client.generate(&request) {
            Ok(raw) => match cleanup::parse_record(&raw) {
                Some(record) => {
                    info!(n = i + 1, total = count, topic, "generated record");
                    records.push(record);
                }
                None => warn!(n = i + 1, topic, "discarding malformed record"),
            },
            Err(e) => warn!(n = i + 1, topic, error = %e, "generation failed"),
        }
    }

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(&records)?;
    fs::write(&output, json).with_context(|| format!("writing {}", output.display()))?;

    info!(
        written = records.len(),
        path = %output.display(),
        "corpus written"
    );
    Ok(())
}
