//! Read-only preview of the text about to be analyzed.

use common::text_preview::preview_text;
use dioxus::prelude::*;

#[component]
pub fn TextPreviewBox(preview_source: ReadSignal<Option<String>>) -> Element {
    let preview = use_memo(move || preview_text(preview_source.read().as_deref()));
    rsx! {
        div {
            id: "textPreview",
            style: "
                white-space: pre-wrap;
                word-wrap: break-word;
                max-height: 240px;
                overflow-y: auto;
                padding: 12px;
                border: 1px dashed #9CA3AF;
                border-radius: 8px;
                background: #F9FAFB;
                color: #374151;
                font-size: 14px;
            ",
            "{preview}"
        }
    }
}
