//! Shared model for a sentence matched between a submission and a reference document.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MatchedSection {
    /// Sentence as it appears in the submitted text. This is what gets highlighted.
    pub source_sentence: String,
    pub matched_sentence: String,
    pub similarity: f64,
}

impl MatchedSection {
    pub fn new(source_sentence: impl Into<String>, matched_sentence: impl Into<String>, similarity: f64) -> Self {
        Self { source_sentence: source_sentence.into(), matched_sentence: matched_sentence.into(), similarity }
    }
    pub fn from_sentence(source_sentence: impl Into<String>) -> Self {
        Self { source_sentence: source_sentence.into(), ..Default::default() }
    }
}
