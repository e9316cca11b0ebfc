//! # Chattia Retrieval
//!
//! Tiny lexical retrieval engine — no vector DB, no embeddings, no stemming.
//! Ranks a static corpus of one-line snippets against a free-text query
//! with plain BM25, so the responder can ground its replies.
//!
//! ## Design
//! - **Static corpora** — one UTF-8 file per language, one document per line
//! - **BM25 scoring** — relevance ranking without embeddings
//! - **Immutable after load** — all I/O at construction, searches are
//!   pure reads and safe to run concurrently without locks
//!
//! ## How it works
//! ```text
//! User: "¿Cómo funciona la búsqueda?"
//!   ↓
//! registry.get("es").search(query, 3)
//!   ↓ tokenize → BM25 over every document → stable sort → top 3
//! Top snippets from the project notes
//!   ↓
//! Injected into the responder as grounding context
//! ```

pub mod index;
pub mod registry;
pub mod retriever;
pub mod scorer;
pub mod tokenizer;

pub use index::CorpusIndex;
pub use registry::RetrieverRegistry;
pub use retriever::{BM25Retriever, RetrievedDocument};
