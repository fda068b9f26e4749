//! Endpoint listing the reference corpus.

use common::analysis_report::CorpusDocumentInfo;

use crate::corpus::get_corpus;

pub async fn list_corpus_documents() -> anyhow::Result<Vec<CorpusDocumentInfo>> {
    Ok(get_corpus().documents.iter().map(|d| d.info()).collect())
}
