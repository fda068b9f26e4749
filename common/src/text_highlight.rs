//! Utilities for highlighting matched sentences inside displayed text.

use std::collections::BTreeSet;
use std::ops::Range;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::matched_section::MatchedSection;

/// CSS class carried by every highlight marker. Styled by the frontend stylesheet.
pub const HIGHLIGHT_CLASS: &str = "highlight";

const START_TAG: &str = "<span class=\"highlight\">";
const END_TAG: &str = "</span>";

/// Compiled program budget per byte of escaped pattern. Case folding turns each
/// letter into a class, so long sentences outgrow the default limit.
const REGEX_BYTES_PER_PATTERN_BYTE: usize = 256;
const MIN_REGEX_SIZE_LIMIT: usize = 10 * (1 << 20);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightTextSpan {
    pub text: String,
    pub is_highlighted: bool,
    pub index: u64,
}

/// Finds case-insensitive literal occurrences of one sentence.
struct SentenceMatcher<'a> {
    sentence: &'a str,
    regex: Option<Regex>,
}

impl<'a> SentenceMatcher<'a> {
    fn new(sentence: &'a str) -> Self {
        let pattern = regex::escape(sentence);
        let limit = pattern.len().saturating_mul(REGEX_BYTES_PER_PATTERN_BYTE).max(MIN_REGEX_SIZE_LIMIT);
        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .size_limit(limit)
            .dfa_size_limit(limit)
            .build()
            .ok();
        Self { sentence, regex }
    }

    /// Non-overlapping occurrences, left to right, as byte ranges of `haystack`.
    fn find_all(&self, haystack: &str) -> Vec<Range<usize>> {
        match &self.regex {
            Some(re) => re.find_iter(haystack).map(|m| m.range()).collect(),
            None => caseless_find_all(haystack, self.sentence),
        }
    }
}

/// Scan used when the sentence is too large to compile.
fn caseless_find_all(haystack: &str, needle: &str) -> Vec<Range<usize>> {
    let mut found = Vec::new();
    if needle.is_empty() {
        return found;
    }
    let mut start = 0;
    while start < haystack.len() {
        match caseless_prefix_len(&haystack[start..], needle) {
            Some(len) => {
                found.push(start..start + len);
                start += len;
            }
            None => start += haystack[start..].chars().next().map_or(1, char::len_utf8),
        }
    }
    found
}

/// Byte length of the prefix of `haystack` equal to `needle` ignoring case.
fn caseless_prefix_len(haystack: &str, needle: &str) -> Option<usize> {
    let mut hay = haystack.char_indices();
    for n in needle.chars() {
        let (_, h) = hay.next()?;
        if !h.to_lowercase().eq(n.to_lowercase()) {
            return None;
        }
    }
    Some(hay.next().map_or(haystack.len(), |(i, _)| i))
}

/// Wrap every case-insensitive literal occurrence of each section's
/// `source_sentence` in a highlight marker.
///
/// Sections are applied one after another, each pass running over the output
/// of the previous one. A later sentence that happens to match marker text
/// inserted by an earlier pass gets wrapped too.
///
/// A missing text is treated as empty. Empty sentences are skipped.
pub fn highlight_text(source_text: Option<&str>, matched_sections: &[MatchedSection]) -> String {
    let mut highlighted_text = source_text.unwrap_or_default().to_string();

    for section in matched_sections {
        if section.source_sentence.is_empty() {
            continue;
        }
        let occurrences = SentenceMatcher::new(&section.source_sentence).find_all(&highlighted_text);
        if occurrences.is_empty() {
            continue;
        }
        let mut wrapped = String::with_capacity(highlighted_text.len() + occurrences.len() * (START_TAG.len() + END_TAG.len()));
        let mut last = 0;
        for occurrence in occurrences {
            wrapped.push_str(&highlighted_text[last..occurrence.start]);
            wrapped.push_str(START_TAG);
            wrapped.push_str(&highlighted_text[occurrence.clone()]);
            wrapped.push_str(END_TAG);
            last = occurrence.end;
        }
        wrapped.push_str(&highlighted_text[last..]);
        highlighted_text = wrapped;
    }

    highlighted_text
}

/// Plain and highlighted runs of the source text, for rendering as text nodes.
///
/// Runs come from match positions, so markup-like text in the source is
/// never interpreted. Passes follow [`highlight_text`]: a later sentence is
/// only searched between the edges of earlier matches, the way inserted
/// markers would split it. Overlapping or touching matches form one run,
/// highlighted runs are numbered in order, and joining every run gives back
/// the source text.
pub fn highlight_spans(source_text: Option<&str>, matched_sections: &[MatchedSection]) -> Vec<HighlightTextSpan> {
    let text = source_text.unwrap_or_default();
    let mut edges: BTreeSet<usize> = BTreeSet::from([0, text.len()]);
    let mut ranges: Vec<Range<usize>> = Vec::new();

    for section in matched_sections {
        if section.source_sentence.is_empty() {
            continue;
        }
        let matcher = SentenceMatcher::new(&section.source_sentence);
        let segments: Vec<(usize, usize)> = edges.iter().copied().zip(edges.iter().copied().skip(1)).collect();
        let mut found = Vec::new();
        for (start, end) in segments {
            found.extend(matcher.find_all(&text[start..end]).into_iter().map(|r| r.start + start..r.end + start));
        }
        for range in &found {
            edges.insert(range.start);
            edges.insert(range.end);
        }
        ranges.extend(found);
    }

    ranges.sort_by_key(|r| r.start);
    let mut merged: Vec<Range<usize>> = Vec::new();
    for range in ranges {
        match merged.last_mut() {
            Some(last) if range.start <= last.end => last.end = last.end.max(range.end),
            _ => merged.push(range),
        }
    }

    let mut spans = Vec::with_capacity(merged.len() * 2 + 1);
    let mut pos = 0;
    for (index, range) in merged.into_iter().enumerate() {
        if pos < range.start {
            spans.push(HighlightTextSpan { text: text[pos..range.start].to_string(), is_highlighted: false, index: 0 });
        }
        spans.push(HighlightTextSpan { text: text[range.clone()].to_string(), is_highlighted: true, index: index as u64 });
        pos = range.end;
    }
    if pos < text.len() {
        spans.push(HighlightTextSpan { text: text[pos..].to_string(), is_highlighted: false, index: 0 });
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections(sentences: &[&str]) -> Vec<MatchedSection> {
        sentences.iter().map(|s| MatchedSection::from_sentence(*s)).collect()
    }

    fn marked(s: &str) -> String {
        format!("<span class=\"highlight\">{s}</span>")
    }

    #[test]
    fn no_sections_returns_text_unchanged() {
        let text = "Le chat dort. Le chien aboie.";
        assert_eq!(highlight_text(Some(text), &[]), text);
    }

    #[test]
    fn wraps_every_occurrence() {
        let out = highlight_text(Some("abc abc abc"), &sections(&["abc"]));
        assert_eq!(out, format!("{0} {0} {0}", marked("abc")));
        assert_eq!(out.matches(START_TAG).count(), 3);
    }

    #[test]
    fn metacharacters_match_literally() {
        let out = highlight_text(Some("xa.b*cy"), &sections(&["a.b*c"]));
        assert_eq!(out, format!("x{}y", marked("a.b*c")));

        let untouched = highlight_text(Some("aXbYc"), &sections(&["a.b*c"]));
        assert_eq!(untouched, "aXbYc");
    }

    #[test]
    fn only_metacharacters_does_not_fail() {
        let out = highlight_text(Some("what (?) is [*]"), &sections(&["(?)", "[*]"]));
        assert_eq!(out, format!("what {} is {}", marked("(?)"), marked("[*]")));
    }

    #[test]
    fn matching_ignores_case_and_keeps_occurrence_text() {
        let out = highlight_text(Some("hello HELLO Hello"), &sections(&["Hello"]));
        assert_eq!(out, format!("{} {} {}", marked("hello"), marked("HELLO"), marked("Hello")));
    }

    #[test]
    fn passes_run_sequentially() {
        let out = highlight_text(Some("foobar"), &sections(&["foo", "foobar"]));
        assert_eq!(out, format!("{}bar", marked("foo")));
    }

    #[test]
    fn later_pass_can_wrap_marker_text() {
        let out = highlight_text(Some("a highlight"), &sections(&["highlight", "highlight"]));
        // the second pass also matches the class attribute of the first marker
        assert_eq!(
            out,
            format!(
                "a <span class=\"{}\">{}</span>",
                marked("highlight"),
                marked("highlight")
            )
        );
    }

    #[test]
    fn missing_or_empty_text_is_empty() {
        assert_eq!(highlight_text(None, &sections(&["x"])), "");
        assert_eq!(highlight_text(Some(""), &sections(&["x"])), "");
    }

    #[test]
    fn absent_and_empty_sentences_leave_text_alone() {
        assert_eq!(highlight_text(Some("abc"), &sections(&["zzz", ""])), "abc");
    }

    #[test]
    fn replacement_text_is_not_expanded() {
        let out = highlight_text(Some("cost $1 now"), &sections(&["$1"]));
        assert_eq!(out, format!("cost {} now", marked("$1")));
    }

    #[test]
    fn long_sentence_is_still_highlighted() {
        let sentence = "mot répété sans ponctuation ".repeat(8_000);
        let text = format!("Début. {sentence}");
        let out = highlight_text(Some(&text), &sections(&[sentence.as_str()]));
        assert_eq!(out, format!("Début. {}", marked(&sentence)));

        let spans = highlight_spans(Some(&text), &sections(&[sentence.as_str()]));
        assert_eq!(spans.len(), 2);
        assert!(spans[1].is_highlighted);
        assert_eq!(spans[1].text, sentence);
    }

    #[test]
    fn caseless_scan_matches_regex_rules() {
        assert_eq!(caseless_find_all("Été, été, ÉTÉ", "été"), vec![0..5, 7..12, 14..19]);
        assert_eq!(caseless_find_all("aaaa", "aa"), vec![0..2, 2..4]);
        assert!(caseless_find_all("abc", "abcd").is_empty());
    }

    #[test]
    fn spans_of_plain_text() {
        let spans = highlight_spans(Some("nothing here"), &[]);
        assert_eq!(spans, vec![HighlightTextSpan { text: "nothing here".into(), is_highlighted: false, index: 0 }]);
        assert!(highlight_spans(Some(""), &sections(&["x"])).is_empty());
        assert!(highlight_spans(None, &[]).is_empty());
    }

    #[test]
    fn spans_restore_text_and_index_highlights() {
        let source = "One. Two. One.";
        let spans = highlight_spans(Some(source), &sections(&["One."]));

        let joined: String = spans.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(joined, source);

        let highlighted: Vec<_> = spans.iter().filter(|s| s.is_highlighted).collect();
        assert_eq!(highlighted.len(), 2);
        assert_eq!(highlighted[0].index, 0);
        assert_eq!(highlighted[1].index, 1);
    }

    #[test]
    fn spans_follow_sequential_passes() {
        let spans = highlight_spans(Some("foobar"), &sections(&["foo", "foobar"]));
        assert_eq!(spans, vec![
            HighlightTextSpan { text: "foo".into(), is_highlighted: true, index: 0 },
            HighlightTextSpan { text: "bar".into(), is_highlighted: false, index: 0 },
        ]);
    }

    #[test]
    fn repeated_match_stays_one_run() {
        let spans = highlight_spans(Some("a highlight"), &sections(&["highlight", "highlight"]));
        assert_eq!(spans, vec![
            HighlightTextSpan { text: "a ".into(), is_highlighted: false, index: 0 },
            HighlightTextSpan { text: "highlight".into(), is_highlighted: true, index: 0 },
        ]);
    }

    #[test]
    fn closing_tag_in_text_is_kept() {
        let text = "Close it with </span> here. Next one.";
        let spans = highlight_spans(Some(text), &sections(&["Close it with </span> here."]));
        assert_eq!(spans, vec![
            HighlightTextSpan { text: "Close it with </span> here.".into(), is_highlighted: true, index: 0 },
            HighlightTextSpan { text: " Next one.".into(), is_highlighted: false, index: 0 },
        ]);
    }

    #[test]
    fn marker_text_in_source_is_not_a_highlight() {
        let text = "Write <span class=\"highlight\">x</span> now.";
        let spans = highlight_spans(Some(text), &[]);
        assert_eq!(spans.len(), 1);
        assert!(!spans[0].is_highlighted);
        assert_eq!(spans[0].text, text);
    }
}
