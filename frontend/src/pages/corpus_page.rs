//! Reference corpus listing.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_file_icons::MdFileDownload};

use crate::api::analysis_api::list_corpus_documents;
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::loading_indicator::LoadingIndicator;
use crate::components::tooltip::Tooltip;


#[component]
pub fn CorpusPage() -> Element {
    let documents = use_resource(move || async move { list_corpus_documents().await });

    let body = match documents.read().clone() {
        None => rsx! { LoadingIndicator { message: "Loading reference documents...".to_string() } },
        Some(Err(e)) => rsx! {
            ComponentErrorDisplay {
                error_txt: e.to_string(),
                a { href: "/corpus", class: "copycheck-button", "Reload" }
            }
        },
        Some(Ok(documents)) if documents.is_empty() => rsx! {
            div { style: "font-size: 18px; color:#6B7280;", "The reference corpus is empty." }
        },
        Some(Ok(documents)) => rsx! {
            table {
                style: "border-collapse: collapse; background: white; font-size: 15px;",
                thead {
                    tr {
                        th { class: "copycheck-cell", "#" }
                        th { class: "copycheck-cell", "Title" }
                        th { class: "copycheck-cell", "Author" }
                        th { class: "copycheck-cell", "Characters" }
                        th { class: "copycheck-cell", "" }
                    }
                }
                tbody {
                    for document in documents {
                        tr {
                            key: "{document.doc_id}",
                            td { class: "copycheck-cell", "{document.doc_id}" }
                            td { class: "copycheck-cell", "{document.title}" }
                            td { class: "copycheck-cell", "{document.author}" }
                            td { class: "copycheck-cell", "{document.text_length}" }
                            td {
                                class: "copycheck-cell",
                                Tooltip {
                                    label: format!("SHA-256 {}", document.content_hash),
                                    a {
                                        class: "copycheck-icon-button",
                                        href: "/_download_corpus_document/{document.doc_id}",
                                        target: "_blank",
                                        Icon { icon: MdFileDownload, style: "width: 20px; height: 20px;" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        Title { "CopyCheck - Reference documents" }
        div {
            style: "display:flex; flex-direction: column; gap: 20px; padding: 36px 40px;",
            h1 { style: "margin: 0; font-weight: 500;", "Reference documents" }
            {body}
        }
    }
}
