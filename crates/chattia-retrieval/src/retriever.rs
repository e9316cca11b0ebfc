//! BM25 retriever: tokenize a query, score every document, rank, truncate.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::Serialize;

use chattia_core::error::Result;

use crate::index::CorpusIndex;
use crate::scorer;
use crate::tokenizer::tokenize;

/// One search hit: a corpus snippet and its BM25 score for the query.
#[derive(Debug, Clone, Serialize)]
pub struct RetrievedDocument {
    pub text: String,
    pub score: f64,
}

/// A BM25 retriever over one language's corpus. Immutable after
/// construction, so `search` is safe to call from any number of threads.
#[derive(Debug, Clone)]
pub struct BM25Retriever {
    index: CorpusIndex,
    k1: f64,
    b: f64,
}

impl BM25Retriever {
    pub const DEFAULT_K1: f64 = 1.5;
    pub const DEFAULT_B: f64 = 0.75;

    /// Wrap an already-built index with the given BM25 parameters.
    pub fn new(index: CorpusIndex, k1: f64, b: f64) -> Self {
        Self { index, k1, b }
    }

    /// Wrap an index with the default parameters (k1 = 1.5, b = 0.75).
    pub fn with_defaults(index: CorpusIndex) -> Self {
        Self::new(index, Self::DEFAULT_K1, Self::DEFAULT_B)
    }

    /// Build a retriever straight from a corpus file.
    pub fn load(language: &str, path: &Path, k1: f64, b: f64) -> Result<Self> {
        Ok(Self::new(CorpusIndex::load(language, path)?, k1, b))
    }

    pub fn language(&self) -> &str {
        self.index.language()
    }

    pub fn index(&self) -> &CorpusIndex {
        &self.index
    }

    /// Rank the corpus against `query` and return up to `top_k` hits with
    /// strictly positive scores, best first. Ties keep corpus order. An
    /// empty query (after tokenization) or `top_k` of 0 returns nothing.
    pub fn search(&self, query: &str, top_k: usize) -> Vec<RetrievedDocument> {
        let query_tokens = tokenize(query);
        if query_tokens.is_empty() {
            return Vec::new();
        }
        // Each query term contributes once per document, however often it
        // repeats in the query.
        let distinct_terms: HashSet<&str> = query_tokens.iter().map(String::as_str).collect();

        let mut results: Vec<RetrievedDocument> = Vec::new();
        for doc in self.index.documents() {
            let doc_len = doc.len();
            let mut term_freqs: HashMap<&str, usize> = HashMap::new();
            for token in &doc.tokens {
                *term_freqs.entry(token.as_str()).or_insert(0) += 1;
            }

            let mut score = 0.0;
            for term in &distinct_terms {
                let tf = term_freqs.get(term).copied().unwrap_or(0);
                let idf = scorer::idf(self.index.doc_count(), self.index.doc_freq(term));
                score += scorer::term_score(idf, tf, doc_len, self.index.avgdl(), self.k1, self.b);
            }

            if score > 0.0 {
                results.push(RetrievedDocument {
                    text: doc.text.clone(),
                    score,
                });
            }
        }

        // Stable sort: equal scores keep corpus order for tie-breaking.
        results.sort_by(|a, b| b.score.total_cmp(&a.score));
        results.truncate(top_k);
        results
    }
}
