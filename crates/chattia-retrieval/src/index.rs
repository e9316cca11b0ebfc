//! Per-language corpus index: documents, document frequencies, average length.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use chattia_core::error::{ChattiaError, Result};

use crate::tokenizer::tokenize;

/// One corpus line with its tokenized form. Immutable once built; identity
/// is the position in [`CorpusIndex::documents`].
#[derive(Debug, Clone)]
pub struct Document {
    pub text: String,
    pub tokens: Vec<String>,
}

impl Document {
    /// Token count, the `doc_len` used by BM25 length normalization.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Read-only statistics for one language's corpus. Built once at startup;
/// there are no insert/update/delete operations.
#[derive(Debug, Clone)]
pub struct CorpusIndex {
    language: String,
    documents: Vec<Document>,
    doc_freqs: HashMap<String, usize>,
    avgdl: f64,
}

impl CorpusIndex {
    /// Build an index from line-delimited text. Lines that are empty after
    /// trimming are skipped; everything else becomes one document, in order.
    pub fn from_lines<I, S>(language: &str, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let documents: Vec<Document> = lines
            .into_iter()
            .filter_map(|line| {
                let text = line.as_ref().trim();
                if text.is_empty() {
                    return None;
                }
                Some(Document {
                    text: text.to_string(),
                    tokens: tokenize(text),
                })
            })
            .collect();

        let total_tokens: usize = documents.iter().map(Document::len).sum();
        // Divisor of 1 for an empty corpus keeps avgdl at 0.0 instead of NaN.
        let avgdl = total_tokens as f64 / documents.len().max(1) as f64;

        let mut doc_freqs: HashMap<String, usize> = HashMap::new();
        for doc in &documents {
            // Repetition within one document counts once for df.
            let seen: HashSet<&str> = doc.tokens.iter().map(String::as_str).collect();
            for token in seen {
                *doc_freqs.entry(token.to_string()).or_insert(0) += 1;
            }
        }

        tracing::debug!(
            "Indexed {} '{}' documents (avgdl {:.2}, {} distinct terms)",
            documents.len(),
            language,
            avgdl,
            doc_freqs.len()
        );

        Self {
            language: language.to_string(),
            documents,
            doc_freqs,
            avgdl,
        }
    }

    /// Build an index from a corpus file on disk. A missing file is a
    /// `MissingCorpus` error so the registry can skip that language.
    pub fn load(language: &str, path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ChattiaError::MissingCorpus(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| ChattiaError::Corpus(format!("Failed to read {}: {e}", path.display())))?;
        Ok(Self::from_lines(language, content.lines()))
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Documents in original corpus-line order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn doc_count(&self) -> usize {
        self.documents.len()
    }

    /// Number of documents containing `term` at least once (0 if never seen).
    pub fn doc_freq(&self, term: &str) -> usize {
        self.doc_freqs.get(term).copied().unwrap_or(0)
    }

    /// Average document length in tokens (0.0 for an empty corpus).
    pub fn avgdl(&self) -> f64 {
        self.avgdl
    }
}
