//! Temporal module - heterogeneous date shapes and their normalization.

mod temporal_model;
mod temporal_normalizer;

// Re-export the public interface
pub use temporal_model::DateLike;
pub use temporal_normalizer::{end_of_day, normalize, normalized_day};

#[cfg(test)]
mod temporal_normalizer_tests;
