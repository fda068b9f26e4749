//! Horizontal bar chart of similarity scores.

use common::analysis_report::ComparisonResult;
use dioxus::prelude::*;

use super::comparison_card::score_color;

#[component]
pub fn SimilarityChart(comparisons: ReadSignal<Vec<ComparisonResult>>) -> Element {
    let bars = comparisons.read().iter().map(|c| (c.chart_label(), c.similarity_score, score_color(c.similarity_score))).collect::<Vec<_>>();
    rsx! {
        div {
            style: "display:flex; flex-direction: column; gap: 6px; max-width: 760px;",
            for (label, score, color) in bars {
                div {
                    key: "{label}",
                    style: "display:grid; grid-template-columns: 120px 1fr 48px; align-items: center; gap: 8px; font-size: 13px;",
                    span { style: "color:#374151;", "{label}" }
                    div {
                        style: "height: 14px; background: #F3F4F6; border-radius: 7px; overflow: hidden;",
                        div { style: "height: 100%; width: {score}%; background: {color};" }
                    }
                    span { "{score}%" }
                }
            }
        }
    }
}
