//! Read-only reference corpus submissions are compared against.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::Context;
use common::analysis_report::{CorpusDocumentInfo, DEFAULT_AUTHOR};
use tracing::{info, warn};

use crate::config::get_analysis_config;
use crate::processing::{allowed_file, is_pdf_file_name, pdf_processor::extract_text_from_pdf, text_processor::content_hash};

#[derive(Debug, Clone, PartialEq)]
pub struct CorpusDocument {
    pub doc_id: u64,
    pub title: String,
    pub author: String,
    pub file_name: String,
    pub content: String,
    pub content_hash: String,
}

impl CorpusDocument {
    pub fn new(doc_id: u64, title: impl Into<String>, author: impl Into<String>, file_name: impl Into<String>, content: String) -> Self {
        let content_hash = content_hash(&content);
        Self { doc_id, title: title.into(), author: author.into(), file_name: file_name.into(), content, content_hash }
    }

    pub fn info(&self) -> CorpusDocumentInfo {
        CorpusDocumentInfo {
            doc_id: self.doc_id,
            title: self.title.clone(),
            author: self.author.clone(),
            content_hash: self.content_hash.clone(),
            text_length: self.content.chars().count() as u64,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Corpus {
    pub documents: Vec<CorpusDocument>,
}

impl Corpus {
    pub fn new(documents: Vec<CorpusDocument>) -> Self {
        Self { documents }
    }

    /// Load every `.txt` and `.pdf` file directly inside `dir`, ordered by file
    /// name, numbered from 1. Files that cannot be read are skipped.
    pub fn load_from_dir(dir: &Path) -> anyhow::Result<Self> {
        let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)
            .with_context(|| format!("Failed to read corpus directory {}", dir.display()))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file())
            .filter(|path| path.file_name().and_then(|n| n.to_str()).is_some_and(allowed_file))
            .collect();
        paths.sort();

        let mut documents = Vec::new();
        for path in paths {
            match read_document_text(&path) {
                Ok(content) if content.trim().is_empty() => {
                    warn!("Skipping empty corpus file {}", path.display());
                }
                Ok(content) => {
                    let doc_id = documents.len() as u64 + 1;
                    let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default().to_string();
                    let title = path.file_stem().and_then(|n| n.to_str()).unwrap_or_default().to_string();
                    documents.push(CorpusDocument::new(doc_id, title, DEFAULT_AUTHOR, file_name, content));
                }
                Err(e) => warn!("Skipping corpus file {}: {:#}", path.display(), e),
            }
        }
        info!("Loaded {} reference documents from {}", documents.len(), dir.display());
        Ok(Self { documents })
    }

    pub fn get(&self, doc_id: u64) -> Option<&CorpusDocument> {
        self.documents.iter().find(|d| d.doc_id == doc_id)
    }

    pub fn find_by_hash(&self, content_hash: &str) -> Option<&CorpusDocument> {
        self.documents.iter().find(|d| d.content_hash == content_hash)
    }
}

fn read_document_text(path: &Path) -> anyhow::Result<String> {
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    if is_pdf_file_name(name) {
        extract_text_from_pdf(&bytes)
    } else {
        String::from_utf8(bytes).context("Corpus text file is not valid UTF-8")
    }
}

static CORPUS: OnceLock<Corpus> = OnceLock::new();

/// The process-wide corpus, loaded on first use from the configured directory.
/// A missing directory gives an empty corpus.
pub fn get_corpus() -> &'static Corpus {
    CORPUS.get_or_init(|| {
        let dir = &get_analysis_config().corpus_dir;
        Corpus::load_from_dir(dir).unwrap_or_else(|e| {
            warn!("Reference corpus unavailable: {:#}", e);
            Corpus::default()
        })
    })
}
