//! Random-sampling fallback tier.
//!
//! When no similarity signal is available, the caller still gets *some*
//! few-shot grounding: a uniform random subset of the corpus, without
//! replacement.

use rand::Rng;

/// Pick `min(k, len)` distinct indices from `0..len`, uniformly at random.
///
/// Partial Fisher-Yates: each prefix position swaps with a uniformly
/// chosen remaining position, so every subset (and order) is equally
/// likely. Generic over the RNG so tests can seed it.
pub fn sample_indices<R: Rng>(len: usize, k: usize, rng: &mut R) -> Vec<usize> {
    let k = k.min(len);
    let mut indices: Vec<usize> = (0..len).collect();
    for i in 0..k {
        let j = rng.gen_range(i..len);
        indices.swap(i, j);
    }
    indices.truncate(k);
    indices
}
