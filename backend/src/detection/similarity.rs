//! Similarity metrics between two texts.

use std::collections::HashSet;

use common::matched_section::MatchedSection;

use crate::processing::text_processor::{split_into_sentences, tokenize};

pub fn jaccard_similarity<T: Eq + std::hash::Hash>(a: &HashSet<T>, b: &HashSet<T>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}

fn token_set(text: &str) -> HashSet<String> {
    tokenize(text).into_iter().collect()
}

/// Jaccard similarity of the two texts' token sets.
pub fn combined_similarity(text1: &str, text2: &str) -> f64 {
    jaccard_similarity(&token_set(text1), &token_set(text2))
}

/// Hashes of every run of `k` consecutive words.
pub fn fingerprints(text: &str, k: usize) -> HashSet<String> {
    let lowered = text.to_lowercase();
    let words: Vec<&str> = lowered
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|w| !w.is_empty())
        .collect();
    if k == 0 || words.len() < k {
        return HashSet::new();
    }
    words.windows(k).map(|kgram| sha256::digest(kgram.join(" "))).collect()
}

/// Jaccard similarity of word k-gram fingerprints. Zero when either text is shorter than `k` words.
pub fn fingerprint_similarity(text1: &str, text2: &str, k: usize) -> f64 {
    let fp1 = fingerprints(text1, k);
    let fp2 = fingerprints(text2, k);
    if fp1.is_empty() || fp2.is_empty() {
        return 0.0;
    }
    jaccard_similarity(&fp1, &fp2)
}

/// Every pair of sentences whose token similarity is strictly above `threshold`,
/// in source order. A source sentence can match several sentences of `text2`.
pub fn find_matched_sections(text1: &str, text2: &str, threshold: f64) -> Vec<MatchedSection> {
    let sentences2: Vec<(&str, HashSet<String>)> = split_into_sentences(text2)
        .into_iter()
        .map(|s| (s, token_set(s)))
        .collect();

    let mut matched_sections = Vec::new();
    for sent1 in split_into_sentences(text1) {
        let tokens1 = token_set(sent1);
        for (sent2, tokens2) in &sentences2 {
            let similarity = jaccard_similarity(&tokens1, tokens2);
            if similarity > threshold {
                matched_sections.push(MatchedSection::new(sent1, *sent2, similarity));
            }
        }
    }
    matched_sections
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn jaccard_edges() {
        assert_eq!(jaccard_similarity(&set(&["a", "b"]), &set(&["a", "b"])), 1.0);
        assert_eq!(jaccard_similarity(&set(&["a"]), &set(&["b"])), 0.0);
        assert_eq!(jaccard_similarity(&set(&[]), &set(&[])), 0.0);
        assert_eq!(jaccard_similarity(&set(&["a", "b"]), &set(&["b", "c"])), 1.0 / 3.0);
    }

    #[test]
    fn combined_ignores_case_punctuation_and_stopwords() {
        assert_eq!(combined_similarity("Le chat dort.", "chat, DORT"), 1.0);
        assert_eq!(combined_similarity("", ""), 0.0);
    }

    #[test]
    fn fingerprints_need_k_words() {
        assert!(fingerprints("un deux trois", 5).is_empty());
        assert_eq!(fingerprints("un deux trois quatre cinq six", 5).len(), 2);
        assert_eq!(fingerprint_similarity("un deux", "un deux", 5), 0.0);
    }

    #[test]
    fn fingerprint_similarity_of_shared_run() {
        let a = "alpha beta gamma delta epsilon zeta";
        let b = "alpha beta gamma delta epsilon omega";
        // one shared 5-gram out of three distinct ones
        assert_eq!(fingerprint_similarity(a, b, 5), 1.0 / 3.0);
        assert_eq!(fingerprint_similarity(a, a, 5), 1.0);
    }

    #[test]
    fn matched_sections_keep_source_sentences_verbatim() {
        let submission = "Les abeilles produisent du miel. Le ciel est bleu aujourd'hui.";
        let reference = "Les abeilles produisent beaucoup de miel. Rien à voir ici.";
        let sections = find_matched_sections(submission, reference, 0.5);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].source_sentence, "Les abeilles produisent du miel.");
        assert_eq!(sections[0].matched_sentence, "Les abeilles produisent beaucoup de miel.");
        assert!(submission.contains(&sections[0].source_sentence));
        assert_eq!(sections[0].similarity, 0.75);
    }

    #[test]
    fn threshold_is_strict() {
        // {chat, noir} vs {chat, blanc}: 1/3
        let sections = find_matched_sections("Chat noir.", "Chat blanc.", 1.0 / 3.0);
        assert!(sections.is_empty());
    }
}
