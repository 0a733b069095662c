//! # noir-corpus
//!
//! The Corpus Store: loads the fixed collection of example mysteries once
//! at startup and exposes it as an ordered, read-only sequence. Corpus
//! updates happen out-of-band and are picked up on the next process start.

mod store;

pub use store::CorpusStore;
