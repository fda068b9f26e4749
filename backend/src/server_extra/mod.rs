//! Plain axum routes served next to the server functions.

pub mod download_corpus_document;
