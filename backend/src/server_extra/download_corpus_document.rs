use axum::{body::Body, extract::Path, http::StatusCode, response::{IntoResponse, Response}};
use tracing::info;

use crate::corpus::{Corpus, get_corpus};

fn corpus_document_response(corpus: &Corpus, doc_id: u64) -> Response {
    let Some(document) = corpus.get(doc_id) else {
        tracing::warn!("download_corpus_document: unknown document {}", doc_id);
        return (StatusCode::NOT_FOUND, Body::from(format!("Document {doc_id} not found"))).into_response();
    };
    let download_name = format!("{}.txt", document.title);
    let headers: [(String, String); 2] = [
        ("Content-Type".to_string(), "text/plain; charset=utf-8".to_string()),
        (
            "Content-Disposition".to_string(),
            format!("attachment; filename=\"{}\"", download_name.replace('"', "")),
        ),
    ];
    (headers, Body::from(document.content.clone())).into_response()
}

pub async fn download_corpus_document(Path(doc_id): Path<u64>) -> Response {
    info!("Downloading corpus document: {}", doc_id);
    corpus_document_response(get_corpus(), doc_id)
}
