//! Shared request and report models for the analysis endpoints.

use serde::{Deserialize, Serialize};

use crate::matched_section::MatchedSection;

pub const DEFAULT_TITLE: &str = "Untitled";
pub const DEFAULT_AUTHOR: &str = "Anonymous";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmittedFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisRequest {
    pub title: String,
    pub author: String,
    pub text: String,
    pub file: Option<SubmittedFile>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetectionMethod {
    Local,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub compared_doc_id: u64,
    pub title: String,
    pub author: String,
    /// Integer percentage, 0..=100.
    pub similarity_score: u32,
    pub fingerprint_score: u32,
    pub matched_sections: Vec<MatchedSection>,
    pub detection_method: DetectionMethod,
}

impl ComparisonResult {
    pub fn chart_label(&self) -> String {
        match self.detection_method {
            DetectionMethod::Local => format!("Local #{}", self.compared_doc_id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub title: String,
    pub author: String,
    pub content_hash: String,
    pub text: String,
    pub text_length: u64,
    /// Set when the submission is byte-identical to a reference document, which is then left out.
    pub already_in_corpus: Option<u64>,
    /// Sentences most worth searching for elsewhere.
    pub key_phrases: Vec<String>,
    /// Word count of the sequences behind `fingerprint_score`.
    pub fingerprint_k: u32,
    pub comparisons: Vec<ComparisonResult>,
}

impl AnalysisReport {
    pub fn overall_similarity(&self) -> u32 {
        self.comparisons.iter().map(|c| c.similarity_score).max().unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusDocumentInfo {
    pub doc_id: u64,
    pub title: String,
    pub author: String,
    pub content_hash: String,
    pub text_length: u64,
}
