//! Endpoint analyzing a submitted text against the reference corpus.

use common::analysis_report::{AnalysisReport, AnalysisRequest, DEFAULT_AUTHOR, DEFAULT_TITLE};
use tracing::info;

use crate::config::{AnalysisConfig, get_analysis_config};
use crate::corpus::{Corpus, get_corpus};
use crate::detection::local_comparison::find_similar_documents;
use crate::processing::extract_submission_text;
use crate::processing::text_processor::{content_hash, extract_key_phrases};

pub const KEY_PHRASE_COUNT: usize = 5;

pub async fn analyze_submission(request: AnalysisRequest) -> anyhow::Result<AnalysisReport> {
    tokio::task::spawn_blocking(move || build_report(&request, get_corpus(), get_analysis_config())).await?
}

fn or_default(value: &str, default: &str) -> String {
    let value = value.trim();
    if value.is_empty() { default.to_string() } else { value.to_string() }
}

pub fn build_report(request: &AnalysisRequest, corpus: &Corpus, config: &AnalysisConfig) -> anyhow::Result<AnalysisReport> {
    let text = extract_submission_text(request, config.max_upload_bytes)?;
    let content_hash = content_hash(&text);
    info!("Analyzing submission {} ({} chars)", content_hash, text.chars().count());

    let already_in_corpus = corpus.find_by_hash(&content_hash).map(|d| d.doc_id);
    let comparisons = find_similar_documents(&text, &content_hash, corpus, config);
    let key_phrases = extract_key_phrases(&text, KEY_PHRASE_COUNT).into_iter().map(|s| s.to_string()).collect();

    Ok(AnalysisReport {
        title: or_default(&request.title, DEFAULT_TITLE),
        author: or_default(&request.author, DEFAULT_AUTHOR),
        content_hash,
        text_length: text.chars().count() as u64,
        already_in_corpus,
        key_phrases,
        fingerprint_k: u32::try_from(config.fingerprint_k).unwrap_or(u32::MAX),
        comparisons,
        text,
    })
}
