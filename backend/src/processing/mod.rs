//! Turning a submission into analyzable text.

pub mod pdf_processor;
pub mod stopwords;
pub mod text_processor;

use anyhow::Context;
use common::analysis_report::{AnalysisRequest, SubmittedFile};
use tracing::{error, info};

const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "txt"];

pub fn allowed_file(file_name: &str) -> bool {
    match file_name.rsplit_once('.') {
        Some((_, ext)) => ALLOWED_EXTENSIONS.contains(&ext.to_lowercase().as_str()),
        None => false,
    }
}

pub fn is_pdf_file_name(file_name: &str) -> bool {
    file_name.to_lowercase().ends_with(".pdf")
}

/// Text of an uploaded file. PDFs are detected by extension, anything else must be UTF-8.
pub fn extract_file_text(file: &SubmittedFile) -> anyhow::Result<String> {
    if is_pdf_file_name(&file.file_name) {
        pdf_processor::extract_text_from_pdf(&file.bytes)
    } else {
        String::from_utf8(file.bytes.clone()).context("Uploaded text file is not valid UTF-8")
    }
}

/// Text to analyze for a request: the uploaded file when it is usable,
/// otherwise the form text. Errors only when neither gives any text.
pub fn extract_submission_text(request: &AnalysisRequest, max_upload_bytes: usize) -> anyhow::Result<String> {
    let mut text = String::new();

    if let Some(file) = &request.file {
        if file.bytes.len() > max_upload_bytes {
            anyhow::bail!("Uploaded file is too large: {} bytes (limit {})", file.bytes.len(), max_upload_bytes);
        }
        if !file.file_name.is_empty() && allowed_file(&file.file_name) {
            info!("Processing uploaded file: {}", file.file_name);
            match extract_file_text(file) {
                Ok(file_text) => text = file_text,
                Err(e) => error!("Error processing file {}: {:#}", file.file_name, e),
            }
        } else {
            info!("Ignoring uploaded file with unsupported name: {:?}", file.file_name);
        }
    }

    if text.is_empty() && !request.text.is_empty() {
        info!("Processing text from form");
        text = request.text.clone();
    }

    if text.is_empty() {
        anyhow::bail!("No text to analyze");
    }
    Ok(text)
}
