//! Client API calls for the analysis endpoints.

use common::analysis_report::{AnalysisReport, AnalysisRequest, CorpusDocumentInfo};
use dioxus::prelude::*;




#[server]
pub async fn analyze_submission(input: AnalysisRequest) -> Result<AnalysisReport, ServerFnError> {
    let x = backend::api::analyze::analyze_submission(input).await;
    x.map_err(|e| ServerFnError::ServerError { message: format!("{e:#}"), code: 500, details: None })
}

#[server]
pub async fn list_corpus_documents() -> Result<Vec<CorpusDocumentInfo>, ServerFnError> {
    let x = backend::api::corpus::list_corpus_documents().await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
