//! # noir-core
//!
//! Foundation crate for the noir mystery game backend.
//! Defines all types, traits, errors, config, and logging setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod logging;
pub mod story;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::NoirConfig;
pub use errors::{NoirError, NoirResult};
pub use story::{Difficulty, StoryExample};
