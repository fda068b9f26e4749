//! Analysis report: summary, chart and one card per compared document.

use common::analysis_report::AnalysisReport;
use dioxus::prelude::*;

use crate::components::report_components::comparison_card::{ComparisonCard, score_color};
use crate::components::report_components::similarity_chart::SimilarityChart;
use crate::components::tooltip::Tooltip;

#[component]
pub fn ReportView(report: ReadSignal<AnalysisReport>) -> Element {
    let report = report.read().clone();
    let overall = report.overall_similarity();
    let overall_color = score_color(overall);
    let short_hash = report.content_hash.chars().take(12).collect::<String>();

    rsx! {
        div {
            id: "x-report",
            style: "display:flex; flex-direction: column; gap: 18px; max-width: 960px;",

            div {
                class: "animate-results",
                style: "
                    display:flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 24px;
                    padding: 18px;
                    border-radius: 12px;
                    background: white;
                    border: 1px solid #E5E7EB;
                ",
                Tooltip {
                    label: "Highest similarity with any reference document".to_string(),
                    div { style: "font-size: 44px; font-weight: 600; color: {overall_color};", "{overall}%" }
                }
                div {
                    style: "display:flex; flex-direction: column; gap: 4px;",
                    span { style: "font-size: 22px; font-weight: 500;", "{report.title}" }
                    span { style: "color:#6B7280;", "by {report.author} · {report.text_length} characters · {short_hash}" }
                    if let Some(doc_id) = report.already_in_corpus {
                        span { style: "color:#C2410C;", "This text is identical to reference document #{doc_id}, which was left out of the comparison." }
                    }
                }
            }

            if report.comparisons.is_empty() {
                div { style: "font-size: 18px; color:#15803D;", "No similar reference document found." }
            } else {
                SimilarityChart { comparisons: report.comparisons.clone() }
            }

            if !report.key_phrases.is_empty() {
                div {
                    style: "display:flex; flex-direction: column; gap: 6px;",
                    span { style: "font-weight: 500;", "Key phrases" }
                    ul {
                        style: "margin: 0; color:#374151;",
                        for (i, phrase) in report.key_phrases.iter().enumerate() {
                            li { key: "{i}", "{phrase}" }
                        }
                    }
                }
            }

            for (index, comparison) in report.comparisons.iter().enumerate() {
                ComparisonCard {
                    key: "{comparison.compared_doc_id}",
                    comparison: comparison.clone(),
                    submitted_text: report.text.clone(),
                    fingerprint_k: report.fingerprint_k,
                    index,
                }
            }
        }
    }
}
