//! Server-side analysis: text extraction, similarity detection and the reference corpus.

pub mod api;
pub mod config;
pub mod corpus;
pub mod detection;
pub mod processing;
pub mod server_extra;
