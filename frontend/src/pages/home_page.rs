use common::analysis_report::AnalysisReport;
use dioxus::prelude::*;

use crate::components::error_boundary::ComponentErrorBoundary;
use crate::components::report_components::report_view::ReportView;
use crate::components::submission_components::submission_form::SubmissionForm;


/// Submission form, then the report of the last analysis underneath.
#[component]
pub fn HomePage() -> Element {
    let report: Signal<Option<AnalysisReport>> = use_signal(|| None);
    rsx! {
        Title { "CopyCheck - Check a document" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                min-height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
            ",

            MainTitle {}
            SubText {}
            SubmissionForm { report }

            if let Some(current) = report.read().clone() {
                ComponentErrorBoundary {
                    ReportView { report: current }
                }
            }
        }
    }
}


#[component]
fn MainTitle() -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                align-items: center;
                gap: 8px;
                color: #0F172A;
                font-size: 40px;
                font-weight: 500;
                letter-spacing: -0.02em;
            ",
            span { "Check a document with" }
            span { style: "color:#4F46E5;", "CopyCheck" }
        }
    }
}

#[component]
fn SubText() -> Element {
    rsx! {
        div {
            style: "
                color: #111827;
                font-size: 20px;
                line-height: 1.6;
                max-width: 760px;
            ",
            "Paste a text or upload a .txt or .pdf file. It is compared sentence by sentence against the reference documents, and every copied sentence is highlighted."
        }
    }
}
