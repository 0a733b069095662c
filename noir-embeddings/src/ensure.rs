//! The idempotent ensure pass: populate the cache for a batch of records.
//!
//! Separately invokable from the read path (startup or a maintenance job)
//! so latency-sensitive ranking never performs embedding I/O.

use noir_core::story::StoryExample;
use noir_core::traits::EmbeddingProvider;
use tracing::{info, warn};

use crate::cache::EmbeddingCache;

/// Per-batch outcome of an ensure pass.
///
/// One failed record never aborts the batch; it is counted here and scored
/// as similarity 0 during ranking until a later pass succeeds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnsureReport {
    /// Records newly embedded during this pass.
    pub embedded: usize,
    /// Records already present in the cache.
    pub cached: usize,
    /// Records whose embedding call failed and remain un-embedded.
    pub failed: usize,
}

impl EnsureReport {
    /// Whether every record in the batch now has a cached embedding.
    pub fn is_complete(&self) -> bool {
        self.failed == 0
    }
}

impl EmbeddingCache {
    /// Ensure every record has a cached embedding, calling the provider
    /// only for misses.
    ///
    /// Idempotent: a second pass over an unchanged corpus makes zero
    /// provider calls. Individual failures are skipped and reported, never
    /// propagated.
    pub fn ensure(
        &mut self,
        records: &[StoryExample],
        provider: &dyn EmbeddingProvider,
    ) -> EnsureReport {
        let mut report = EnsureReport::default();

        if !provider.is_available() {
            warn!(
                provider = provider.name(),
                "embedding provider unavailable, skipping ensure pass"
            );
            report.failed = records
                .iter()
                .filter(|r| !self.contains(&r.content_hash()))
                .count();
            return report;
        }

        for record in records {
            let hash = record.content_hash();
            if self.contains(&hash) {
                report.cached += 1;
                continue;
            }

            match provider.embed(&record.embedding_text()) {
                Ok(vector) => {
                    self.insert(hash, vector);
                    report.embedded += 1;
                }
                Err(e) => {
                    warn!(
                        topic = %record.topic,
                        provider = provider.name(),
                        error = %e,
                        "embedding failed for record, continuing batch"
                    );
                    report.failed += 1;
                }
            }
        }

        info!(
            embedded = report.embedded,
            cached = report.cached,
            failed = report.failed,
            "ensure pass complete"
        );
        report
    }
}
