//! One compared reference document in the report.

use common::analysis_report::ComparisonResult;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_file_icons::MdFileDownload};

use crate::components::report_components::highlighted_text_viewer::HighlightedTextViewer;
use crate::components::report_components::matches_panel::MatchesPanel;
use crate::components::tooltip::Tooltip;

pub fn score_color(score: u32) -> &'static str {
    match score {
        70.. => "#B91C1C",
        30..70 => "#C2410C",
        _ => "#15803D",
    }
}

pub fn fingerprint_description(fingerprint_k: u32) -> String {
    format!("Word-sequence overlap ({fingerprint_k}-word fingerprints)")
}

#[component]
pub fn ComparisonCard(comparison: ComparisonResult, submitted_text: String, fingerprint_k: u32, index: usize) -> Element {
    let panel_id = format!("matches-{}", comparison.compared_doc_id);
    let animation_delay = format!("{:.1}s", index as f64 * 0.1);
    let color = score_color(comparison.similarity_score);
    rsx! {
        div {
            class: "animate-results",
            style: "
                display:flex;
                flex-direction: column;
                gap: 12px;
                padding: 18px;
                border-radius: 12px;
                background: white;
                border: 1px solid #E5E7EB;
                animation-delay: {animation_delay};
            ",
            div {
                style: "display:flex; flex-direction: row; align-items: center; gap: 14px;",
                div {
                    style: "font-size: 28px; font-weight: 600; color: {color}; min-width: 70px;",
                    "{comparison.similarity_score}%"
                }
                div {
                    style: "display:flex; flex-direction: column; flex-grow: 1;",
                    span { style: "font-size: 18px; font-weight: 500;", "{comparison.title}" }
                    span { style: "font-size: 14px; color: #6B7280;", "{comparison.chart_label()} · {comparison.author}" }
                }
                Tooltip {
                    label: fingerprint_description(fingerprint_k),
                    span { style: "font-size: 14px; color: #374151;", "Fingerprint {comparison.fingerprint_score}%" }
                }
                Tooltip {
                    label: "Download the reference document".to_string(),
                    a {
                        class: "copycheck-icon-button",
                        href: "/_download_corpus_document/{comparison.compared_doc_id}",
                        target: "_blank",
                        Icon { icon: MdFileDownload, style: "width: 20px; height: 20px;" }
                    }
                }
            }
            MatchesPanel {
                panel_id,
                matched_sections: comparison.matched_sections.clone(),
                HighlightedTextViewer {
                    text: submitted_text.clone(),
                    matched_sections: comparison.matched_sections.clone(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_color_bands() {
        assert_eq!(score_color(85), "#B91C1C");
        assert_eq!(score_color(70), "#B91C1C");
        assert_eq!(score_color(45), "#C2410C");
        assert_eq!(score_color(12), "#15803D");
    }

    #[test]
    fn fingerprint_description_uses_configured_k() {
        assert_eq!(fingerprint_description(3), "Word-sequence overlap (3-word fingerprints)");
    }
}
