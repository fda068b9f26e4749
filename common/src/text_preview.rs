//! Live preview rules for the submission form.

use serde::{Deserialize, Serialize};

pub const PREVIEW_MAX_CHARS: usize = 1000;
pub const PREVIEW_PLACEHOLDER: &str = "No text entered";
pub const PREVIEW_TRUNCATED_SUFFIX: &str = "... [text truncated]";

/// What the file input should do with a selected file, decided from its declared MIME type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UploadKind {
    PlainText,
    Pdf,
    Unsupported,
}

impl UploadKind {
    pub fn from_mime_type(mime_type: &str) -> Self {
        match mime_type.trim() {
            "text/plain" => UploadKind::PlainText,
            "application/pdf" => UploadKind::Pdf,
            _ => UploadKind::Unsupported,
        }
    }
}

/// Text shown in the preview box. Counts characters, not bytes.
pub fn preview_text(text: Option<&str>) -> String {
    let text = match text {
        Some(text) if !text.is_empty() => text,
        _ => return PREVIEW_PLACEHOLDER.to_string(),
    };
    match text.char_indices().nth(PREVIEW_MAX_CHARS) {
        Some((cut, _)) => format!("{}{PREVIEW_TRUNCATED_SUFFIX}", &text[..cut]),
        None => text.to_string(),
    }
}

pub fn pdf_selected_message(file_name: &str) -> String {
    format!("PDF file selected: {file_name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_missing_show_placeholder() {
        assert_eq!(preview_text(None), PREVIEW_PLACEHOLDER);
        assert_eq!(preview_text(Some("")), PREVIEW_PLACEHOLDER);
    }

    #[test]
    fn short_text_is_shown_as_is() {
        assert_eq!(preview_text(Some("bonjour")), "bonjour");
        let exactly = "a".repeat(PREVIEW_MAX_CHARS);
        assert_eq!(preview_text(Some(&exactly)), exactly);
    }

    #[test]
    fn long_text_is_truncated_on_char_boundary() {
        let long = "é".repeat(PREVIEW_MAX_CHARS + 5);
        let preview = preview_text(Some(&long));
        assert!(preview.ends_with(PREVIEW_TRUNCATED_SUFFIX));
        let body = preview.trim_end_matches(PREVIEW_TRUNCATED_SUFFIX);
        assert_eq!(body.chars().count(), PREVIEW_MAX_CHARS);
    }

    #[test]
    fn mime_dispatch() {
        assert_eq!(UploadKind::from_mime_type("text/plain"), UploadKind::PlainText);
        assert_eq!(UploadKind::from_mime_type("application/pdf"), UploadKind::Pdf);
        assert_eq!(UploadKind::from_mime_type("image/png"), UploadKind::Unsupported);
        assert_eq!(UploadKind::from_mime_type(""), UploadKind::Unsupported);
    }

    #[test]
    fn pdf_message_names_file() {
        assert_eq!(pdf_selected_message("these.pdf"), "PDF file selected: these.pdf");
    }
}
