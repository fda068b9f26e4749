//! Text extraction from PDF bytes.

use std::panic::{AssertUnwindSafe, catch_unwind};

use anyhow::Context;

/// Extract the text of every page, trimmed. A parser panic on malformed input
/// is reported as an error like any other extraction failure.
pub fn extract_text_from_pdf(pdf_bytes: &[u8]) -> anyhow::Result<String> {
    let text = run_parser(|| pdf_extract::extract_text_from_mem(pdf_bytes))
        .context("Failed to read PDF")?
        .context("Failed to read PDF")?;
    Ok(text.trim().to_string())
}

fn run_parser<T>(parse: impl FnOnce() -> T) -> anyhow::Result<T> {
    match catch_unwind(AssertUnwindSafe(parse)) {
        Ok(value) => Ok(value),
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown cause".to_string());
            tracing::warn!("PDF parser panicked: {message}");
            Err(anyhow::anyhow!("PDF parser panicked: {message}"))
        }
    }
}
