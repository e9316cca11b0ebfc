//! Language-keyed retriever registry with fallback lookup.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chattia_core::config::RetrievalConfig;
use chattia_core::error::ChattiaError;

use crate::retriever::BM25Retriever;

/// One retriever per available language, built once at startup. Languages
/// whose corpus file is missing are skipped, not fatal.
#[derive(Debug, Clone)]
pub struct RetrieverRegistry {
    retrievers: HashMap<String, BM25Retriever>,
    default_language: String,
}

impl RetrieverRegistry {
    /// Build retrievers for every language in `config.languages`, reading
    /// `{code}_docs.txt` from `config.corpus_dir`.
    pub fn build(config: &RetrievalConfig) -> Self {
        Self::build_from_dir(
            Path::new(&config.corpus_dir),
            &config.languages,
            &config.default_language,
            config.k1,
            config.b,
        )
    }

    /// Build retrievers from an explicit corpus directory.
    pub fn build_from_dir(
        corpus_dir: &Path,
        languages: &[String],
        default_language: &str,
        k1: f64,
        b: f64,
    ) -> Self {
        let mut retrievers = HashMap::new();
        for code in languages {
            let path = corpus_file(corpus_dir, code);
            match BM25Retriever::load(code, &path, k1, b) {
                Ok(retriever) => {
                    tracing::info!(
                        "📚 Loaded '{}' corpus: {} documents",
                        code,
                        retriever.index().doc_count()
                    );
                    retrievers.insert(code.clone(), retriever);
                }
                Err(ChattiaError::MissingCorpus(path)) => {
                    tracing::warn!("Skipping language '{}': no corpus at {}", code, path);
                }
                Err(e) => {
                    tracing::warn!("Skipping language '{}': {}", code, e);
                }
            }
        }
        Self {
            retrievers,
            default_language: default_language.to_string(),
        }
    }

    /// Look up a retriever by language code, falling back to the default
    /// language. Returns `None` only when the default is unavailable too.
    pub fn get(&self, language: &str) -> Option<&BM25Retriever> {
        self.retrievers
            .get(language)
            .or_else(|| self.retrievers.get(&self.default_language))
    }

    /// Language codes with a loaded retriever, sorted for stable output.
    pub fn languages(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.retrievers.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    pub fn is_empty(&self) -> bool {
        self.retrievers.is_empty()
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }
}

/// Corpus file naming convention: `{code}_docs.txt`.
pub fn corpus_file(corpus_dir: &Path, language: &str) -> PathBuf {
    corpus_dir.join(format!("{language}_docs.txt"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_corpus_dir(name: &str, files: &[(&str, &str)]) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("chattia-registry-{name}"));
        std::fs::create_dir_all(&dir).unwrap();
        for (code, content) in files {
            std::fs::write(corpus_file(&dir, code), content).unwrap();
        }
        dir
    }

    fn build(dir: &Path, languages: &[&str]) -> RetrieverRegistry {
        let languages: Vec<String> = languages.iter().map(|s| s.to_string()).collect();
        RetrieverRegistry::build_from_dir(dir, &languages, "en", 1.5, 0.75)
    }

    #[test]
    fn test_missing_corpus_is_skipped_silently() {
        let dir = temp_corpus_dir("skip", &[("en", "hello world\n")]);
        let registry = build(&dir, &["en", "fr"]);
        assert_eq!(registry.languages(), vec!["en"]);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_unknown_language_falls_back_to_default() {
        let dir = temp_corpus_dir("fallback", &[("en", "hello world\n"), ("es", "hola mundo\n")]);
        let registry = build(&dir, &["en", "es"]);
        let retriever = registry.get("de").unwrap();
        assert_eq!(retriever.language(), "en");
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_known_language_is_preferred_over_default() {
        let dir = temp_corpus_dir("prefer", &[("en", "hello world\n"), ("es", "hola mundo\n")]);
        let registry = build(&dir, &["en", "es"]);
        assert_eq!(registry.get("es").unwrap().language(), "es");
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_empty_registry_when_all_corpora_missing() {
        let dir = temp_corpus_dir("empty", &[]);
        let registry = build(&dir, &["en", "es"]);
        assert!(registry.is_empty());
        assert!(registry.get("en").is_none());
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_blank_corpus_builds_zero_document_index() {
        let dir = temp_corpus_dir("blank", &[("en", "\n\n   \n")]);
        let registry = build(&dir, &["en"]);
        let retriever = registry.get("en").unwrap();
        assert_eq!(retriever.index().doc_count(), 0);
        // Searching an empty index must not divide by zero or panic.
        assert!(retriever.search("anything", 3).is_empty());
        std::fs::remove_dir_all(&dir).ok();
    }
}
