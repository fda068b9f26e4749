//! Similarity detection.

pub mod local_comparison;
pub mod similarity;
