//! RetrievalEngine: orchestrates ensure → embed query → score → format,
//! degrading through the fallback tiers without ever surfacing an error.

use noir_core::config::{NoirConfig, RetrievalConfig};
use noir_core::story::{query_text, Difficulty, StoryExample};
use noir_core::traits::EmbeddingProvider;
use noir_corpus::CorpusStore;
use noir_embeddings::{EmbeddingCache, EnsureReport};
use rand::Rng;
use tracing::{debug, info, warn};

use crate::fallback;
use crate::format;
use crate::ranking;

/// The example retrieval engine.
///
/// Owns the corpus and the embedding cache; the embedding capability is
/// injected per call so callers can run with a live provider, a stub, or
/// none at all.
pub struct RetrievalEngine {
    corpus: CorpusStore,
    cache: EmbeddingCache,
    config: RetrievalConfig,
}

impl RetrievalEngine {
    pub fn new(corpus: CorpusStore, cache: EmbeddingCache, config: RetrievalConfig) -> Self {
        Self {
            corpus,
            cache,
            config,
        }
    }

    /// Build from configuration: load the corpus and open the cache at
    /// their configured paths. Total — degraded inputs yield a degraded
    /// but working engine.
    pub fn from_config(config: &NoirConfig) -> Self {
        let corpus = CorpusStore::load(&config.retrieval.corpus_path);
        let cache = EmbeddingCache::open(&config.embedding.cache_path);
        Self::new(corpus, cache, config.retrieval.clone())
    }

    pub fn corpus(&self) -> &CorpusStore {
        &self.corpus
    }

    pub fn cache(&self) -> &EmbeddingCache {
        &self.cache
    }

    /// Precompute embeddings for the whole corpus (startup / maintenance).
    ///
    /// Idempotent; see [`EmbeddingCache::ensure`]. Call this off the hot
    /// path — one pass is a coarse blocking unit of work.
    pub fn ensure_embeddings(&mut self, provider: &dyn EmbeddingProvider) -> EnsureReport {
        self.cache.ensure(self.corpus.records(), provider)
    }

    /// Maintenance: drop cache entries orphaned by corpus edits.
    pub fn sweep_stale(&mut self) -> usize {
        let live = self.corpus.content_hashes();
        self.cache.sweep(&live)
    }

    /// Retrieve `k` few-shot examples for a query, formatted as labeled
    /// blocks.
    ///
    /// Total over its input domain: always returns a string, possibly
    /// empty, never an error.
    pub fn get_examples(
        &mut self,
        free_text: &str,
        difficulty: Difficulty,
        provider: Option<&dyn EmbeddingProvider>,
        k: usize,
    ) -> String {
        let mut rng = rand::thread_rng();
        self.get_examples_with_rng(free_text, difficulty, provider, k, &mut rng)
    }

    /// Same as [`get_examples`] but with a caller-supplied RNG for the
    /// random fallback tier, so tests can seed it.
    ///
    /// [`get_examples`]: RetrievalEngine::get_examples
    pub fn get_examples_with_rng<R: Rng>(
        &mut self,
        free_text: &str,
        difficulty: Difficulty,
        provider: Option<&dyn EmbeddingProvider>,
        k: usize,
        rng: &mut R,
    ) -> String {
        if self.corpus.is_empty() {
            debug!("corpus empty, returning no examples");
            return String::new();
        }

        let selected = provider
            .filter(|p| p.is_available())
            .and_then(|p| self.semantic_selection(free_text, difficulty, p, k))
            .unwrap_or_else(|| {
                let picked = fallback::sample_indices(self.corpus.len(), k, rng);
                info!(
                    selected = picked.len(),
                    "selected examples via random fallback"
                );
                picked
            });

        let records: Vec<&StoryExample> = selected
            .iter()
            .filter_map(|&i| self.corpus.get(i))
            .collect();
        format::render_blocks(&records)
    }

    /// Semantic tier: ensure the cache, embed the query, score, take the
    /// top k. `None` means the tier produced no usable signal and the
    /// caller should fall back.
    fn semantic_selection(
        &mut self,
        free_text: &str,
        difficulty: Difficulty,
        provider: &dyn EmbeddingProvider,
        k: usize,
    ) -> Option<Vec<usize>> {
        let report = self.cache.ensure(self.corpus.records(), provider);
        debug!(?report, "corpus embeddings ensured");

        let query_vec = match provider.embed(&query_text(free_text, difficulty)) {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, "query embedding failed, degrading to random fallback");
                return None;
            }
        };

        let scored = ranking::score_records(
            self.corpus.records(),
            &self.cache,
            &query_vec,
            difficulty,
            self.config.difficulty_bonus,
        );

        if scored.iter().all(|c| c.score == 0.0) {
            warn!("no similarity signal for any record, degrading to random fallback");
            return None;
        }

        let top: Vec<usize> = scored.iter().take(k).map(|c| c.index).collect();
        info!(
            selected = top.len(),
            k, "selected examples via semantic ranking"
        );
        Some(top)
    }
}
