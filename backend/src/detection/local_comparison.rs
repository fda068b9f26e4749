//! Comparison of a submission against the reference corpus.

use common::analysis_report::{ComparisonResult, DetectionMethod};
use tracing::{debug, info};

use crate::config::AnalysisConfig;
use crate::corpus::Corpus;
use crate::detection::similarity::{combined_similarity, find_matched_sections, fingerprint_similarity};

/// Convert a 0..=1 similarity to a truncated integer percentage.
pub fn to_percentage(similarity: f64) -> u32 {
    (similarity.clamp(0.0, 1.0) * 100.0) as u32
}

/// Reference documents similar to `text`, best first. Documents whose content
/// hash equals `content_hash` are the submission itself and are skipped.
pub fn find_similar_documents(text: &str, content_hash: &str, corpus: &Corpus, config: &AnalysisConfig) -> Vec<ComparisonResult> {
    info!("Starting local comparison against {} reference documents", corpus.documents.len());
    let mut matches = Vec::new();

    for other in corpus.documents.iter().filter(|d| d.content_hash != content_hash) {
        let score = combined_similarity(text, &other.content);
        if score <= config.document_threshold {
            debug!("No significant similarity with document {}: {score:.3}", other.doc_id);
            continue;
        }
        debug!("Potential match with document {}: {score:.3}", other.doc_id);
        let matched_sections = find_matched_sections(text, &other.content, config.sentence_threshold);
        let fingerprint = fingerprint_similarity(text, &other.content, config.fingerprint_k);
        matches.push(ComparisonResult {
            compared_doc_id: other.doc_id,
            title: other.title.clone(),
            author: other.author.clone(),
            similarity_score: to_percentage(score),
            fingerprint_score: to_percentage(fingerprint),
            matched_sections,
            detection_method: DetectionMethod::Local,
        });
    }

    matches.sort_by(|a, b| b.similarity_score.cmp(&a.similarity_score).then(a.compared_doc_id.cmp(&b.compared_doc_id)));
    info!("Local comparison completed, {} matches", matches.len());
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::CorpusDocument;
    use crate::processing::text_processor::content_hash;

    fn corpus() -> Corpus {
        Corpus::new(vec![
            CorpusDocument::new(1, "abeilles", "A", "abeilles.txt", "Les abeilles produisent du miel. Elles vivent en colonies.".to_string()),
            CorpusDocument::new(2, "meteo", "B", "meteo.txt", "Demain il fera beau sur la côte.".to_string()),
            CorpusDocument::new(3, "miel", "C", "miel.txt", "Le miel des abeilles est sucré.".to_string()),
        ])
    }

    #[test]
    fn percentages_truncate() {
        assert_eq!(to_percentage(0.759), 75);
        assert_eq!(to_percentage(1.0), 100);
        assert_eq!(to_percentage(-0.2), 0);
    }

    #[test]
    fn results_are_filtered_and_sorted() {
        let text = "Les abeilles produisent du miel. Elles vivent en colonies.";
        let results = find_similar_documents(text, "not-in-corpus", &corpus(), &AnalysisConfig::default());
        let ids: Vec<u64> = results.iter().map(|r| r.compared_doc_id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(results[0].similarity_score, 100);
        assert!(results[0].similarity_score >= results[1].similarity_score);
        assert_eq!(results[0].matched_sections.len(), 2);
        assert_eq!(results[0].chart_label(), "Local #1");
    }

    #[test]
    fn identical_hash_is_skipped() {
        let corpus = corpus();
        let text = corpus.documents[0].content.clone();
        let results = find_similar_documents(&text, &content_hash(&text), &corpus, &AnalysisConfig::default());
        assert!(results.iter().all(|r| r.compared_doc_id != 1));
    }

    #[test]
    fn empty_corpus_has_no_results() {
        assert!(find_similar_documents("du texte", "h", &Corpus::default(), &AnalysisConfig::default()).is_empty());
    }
}
