//! Submission form: title, author, pasted text or uploaded file, live preview.

use common::analysis_report::{AnalysisReport, AnalysisRequest, SubmittedFile};
use common::text_preview::{UploadKind, pdf_selected_message};
use dioxus::logger::tracing;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_editor_icons::MdAttachFile, md_action_icons::MdFindInPage}};

use crate::api::analysis_api::analyze_submission;
use crate::components::submission_components::text_preview_box::TextPreviewBox;
use crate::components::tooltip::Tooltip;

const INPUT_STYLE: &str = "
    width: 100%;
    box-sizing: border-box;
    border: 1px solid #D1D5DB;
    border-radius: 8px;
    padding: 8px 12px;
    font-size: 15px;
    color: #111827;
";

#[component]
pub fn SubmissionForm(mut report: Signal<Option<AnalysisReport>>) -> Element {
    let mut title = use_signal(String::new);
    let mut author = use_signal(String::new);
    let mut text = use_signal(String::new);
    let mut selected_file: Signal<Option<SubmittedFile>> = use_signal(|| None);
    let mut preview_source: Signal<Option<String>> = use_signal(|| None);
    let mut is_analyzing = use_signal(|| false);

    let on_file_change = move |event: Event<FormData>| async move {
        let Some(file) = event.files().into_iter().next() else {
            selected_file.set(None);
            return;
        };
        let file_name = file.name();
        let mime_type = file.content_type().unwrap_or_default();
        let bytes = match file.read_bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(e) => {
                tracing::error!("Failed to read selected file {file_name}: {e:?}");
                return;
            }
        };
        match UploadKind::from_mime_type(&mime_type) {
            UploadKind::PlainText => preview_source.set(Some(String::from_utf8_lossy(&bytes).into_owned())),
            UploadKind::Pdf => preview_source.set(Some(pdf_selected_message(&file_name))),
            UploadKind::Unsupported => {
                tracing::info!("No preview for {file_name} ({mime_type})");
            }
        }
        selected_file.set(Some(SubmittedFile { file_name, mime_type, bytes }));
    };

    let on_submit = move |event: Event<FormData>| async move {
        event.prevent_default();
        if is_analyzing() {
            return;
        }
        let request = AnalysisRequest {
            title: title.read().clone(),
            author: author.read().clone(),
            text: text.read().clone(),
            file: selected_file.read().clone(),
        };
        is_analyzing.set(true);
        match analyze_submission(request).await {
            Ok(new_report) => {
                tracing::info!("Analysis finished: {} comparisons", new_report.comparisons.len());
                report.set(Some(new_report));
            }
            Err(e) => {
                tracing::error!("Analysis failed: {e:?}");
                let toast_api = dioxus_primitives::toast::consume_toast();
                toast_api.error(
                    "Analysis failed.".to_string(),
                    dioxus_primitives::toast::ToastOptions::new()
                        .description(e.to_string())
                        .duration(std::time::Duration::from_secs(15))
                        .permanent(false),
                );
            }
        }
        is_analyzing.set(false);
    };

    rsx! {
        form {
            id: "x-submission-form",
            style: "
                display:flex;
                flex-direction: column;
                gap: 14px;
                max-width: 760px;
                padding: 22px;
                border-radius: 16px;
                background: white;
                border: 1px solid #E5E7EB;
                box-shadow: 0 6px 16px rgba(0,0,0,0.06);
            ",
            onsubmit: on_submit,

            div {
                style: "display:flex; flex-direction: row; gap: 14px;",
                input {
                    r#type: "text",
                    name: "title",
                    placeholder: "Title",
                    style: INPUT_STYLE,
                    value: "{title}",
                    oninput: move |e| title.set(e.value()),
                }
                input {
                    r#type: "text",
                    name: "author",
                    placeholder: "Author",
                    style: INPUT_STYLE,
                    value: "{author}",
                    oninput: move |e| author.set(e.value()),
                }
            }

            textarea {
                id: "text",
                name: "text",
                rows: "10",
                placeholder: "Paste the text to check",
                style: INPUT_STYLE,
                value: "{text}",
                oninput: move |e| {
                    let value = e.value();
                    preview_source.set(Some(value.clone()));
                    text.set(value);
                },
            }

            div {
                style: "display:flex; flex-direction: row; align-items: center; gap: 10px;",
                Tooltip {
                    label: "Plain text (.txt) or PDF (.pdf). The file is used instead of the pasted text.".to_string(),
                    label {
                        r#for: "file",
                        class: "copycheck-button",
                        Icon { icon: MdAttachFile, style: "width: 18px; height: 18px;" }
                        "Upload a file"
                    }
                }
                input {
                    id: "file",
                    r#type: "file",
                    name: "file",
                    accept: ".txt,.pdf,text/plain,application/pdf",
                    style: "display: none;",
                    onchange: on_file_change,
                }
                if let Some(file) = selected_file.read().as_ref() {
                    span { style: "color: #374151; font-size: 14px;", "{file.file_name}" }
                }
            }

            TextPreviewBox { preview_source }

            button {
                r#type: "submit",
                class: "copycheck-button copycheck-button-primary",
                disabled: is_analyzing(),
                Icon { icon: MdFindInPage, style: "width: 20px; height: 20px;" }
                if is_analyzing() { "Analyzing..." } else { "Check for plagiarism" }
            }
        }
    }
}
