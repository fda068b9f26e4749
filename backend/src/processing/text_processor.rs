//! Tokenization, sentence splitting and key phrases.

use super::stopwords::is_stopword;

const ACADEMIC_KEYWORDS: &[&str] = &["définir", "conclusion", "résultat", "méthode"];

/// Lowercase, strip ASCII punctuation, split on whitespace and drop stopwords.
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();
    cleaned
        .split_whitespace()
        .filter(|w| !is_stopword(w))
        .map(|w| w.to_string())
        .collect()
}

fn is_sentence_end(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '…')
}

fn is_closing(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '»' | '”' | '’')
}

/// Split text into sentences. Every returned sentence is a slice of the input,
/// trimmed of surrounding whitespace.
pub fn split_into_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((_, c)) = chars.next() {
        if !is_sentence_end(c) {
            continue;
        }
        while let Some(&(_, next)) = chars.peek() {
            if is_sentence_end(next) || is_closing(next) {
                chars.next();
            } else {
                break;
            }
        }
        match chars.peek() {
            Some(&(pos, next)) if next.is_whitespace() => {
                push_trimmed(&mut sentences, &text[start..pos]);
                start = pos;
            }
            None => {
                push_trimmed(&mut sentences, &text[start..]);
                start = text.len();
            }
            _ => {}
        }
    }
    if start < text.len() {
        push_trimmed(&mut sentences, &text[start..]);
    }
    sentences
}

fn push_trimmed<'a>(sentences: &mut Vec<&'a str>, sentence: &'a str) {
    let sentence = sentence.trim();
    if !sentence.is_empty() {
        sentences.push(sentence);
    }
}

pub fn content_hash(text: &str) -> String {
    sha256::digest(text)
}

/// Pick the sentences most worth searching for: longer sentences first, with a
/// bonus for academic vocabulary.
pub fn extract_key_phrases(text: &str, num_phrases: usize) -> Vec<&str> {
    let mut scored: Vec<(f64, &str)> = split_into_sentences(text)
        .into_iter()
        .map(|sentence| {
            let lowered = sentence.to_lowercase();
            let words: Vec<&str> = lowered
                .split(|c: char| !c.is_alphabetic())
                .filter(|w| !w.is_empty())
                .collect();
            let mut score = words.len() as f64 * 0.5;
            if words.iter().any(|w| ACADEMIC_KEYWORDS.contains(w)) {
                score += 2.0;
            }
            (score, sentence)
        })
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored.into_iter().take(num_phrases).map(|(_, s)| s).collect()
}
