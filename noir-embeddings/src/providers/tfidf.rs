//! Local TF-IDF-style provider using the feature-hashing trick.
//!
//! Terms are hashed into signed fixed-dimension buckets and weighted by
//! sublinear term frequency. Far coarser than neural embeddings, but
//! deterministic and always available.

use std::collections::HashMap;

use noir_core::errors::NoirResult;
use noir_core::traits::EmbeddingProvider;

/// Deterministic offline embedding provider.
pub struct TfIdfProvider {
    dimensions: usize,
}

impl TfIdfProvider {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    /// FNV-1a over the term bytes. The low bits pick the bucket, one high
    /// bit picks the sign (classic feature hashing, keeps colliding terms
    /// from always reinforcing each other).
    fn hash_term(term: &str) -> u64 {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in term.as_bytes() {
            h ^= u64::from(*b);
            h = h.wrapping_mul(0x100000001b3);
        }
        h
    }

    fn vector_for(&self, text: &str) -> Vec<f32> {
        let mut counts: HashMap<&str, u32> = HashMap::new();
        for term in text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
        {
            *counts.entry(term).or_default() += 1;
        }

        let mut vec = vec![0.0f32; self.dimensions];
        if counts.is_empty() {
            return vec;
        }

        let mut lowered = String::new();
        for (term, count) in counts {
            lowered.clear();
            lowered.extend(term.chars().flat_map(char::to_lowercase));
            let h = Self::hash_term(&lowered);
            let bucket = (h as usize) % self.dimensions;
            let sign = if h & (1 << 63) == 0 { 1.0 } else { -1.0 };
            // Sublinear term frequency.
            let weight = 1.0 + (count as f32).ln();
            vec[bucket] += sign * weight;
        }

        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
        }
        vec
    }
}

impl EmbeddingProvider for TfIdfProvider {
    fn embed(&self, text: &str) -> NoirResult<Vec<f32>> {
        Ok(self.vector_for(text))
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "tfidf-local"
    }

    fn is_available(&self) -> bool {
        true
    }
}
