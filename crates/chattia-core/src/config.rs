//! Chattia configuration system.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ChattiaError, Result};

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChattiaConfig {
    #[serde(default)]
    pub retrieval: RetrievalConfig,
    #[serde(default)]
    pub gateway: GatewayConfig,
}

impl Default for ChattiaConfig {
    fn default() -> Self {
        Self {
            retrieval: RetrievalConfig::default(),
            gateway: GatewayConfig::default(),
        }
    }
}

impl ChattiaConfig {
    /// Load config from `CHATTIA_CONFIG` or the default path (~/.chattia/config.toml).
    /// A missing file yields the defaults, not an error.
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load config from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ChattiaError::Config(format!("Failed to read config: {e}")))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| ChattiaError::Config(format!("Failed to parse config: {e}")))?;
        Ok(config)
    }

    /// Save config to a specific path.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| ChattiaError::Config(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the config path: `CHATTIA_CONFIG` env var, or ~/.chattia/config.toml.
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("CHATTIA_CONFIG") {
            return PathBuf::from(path);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".chattia")
            .join("config.toml")
    }
}

/// Retrieval engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// Directory holding one `{code}_docs.txt` corpus file per language.
    #[serde(default = "default_corpus_dir")]
    pub corpus_dir: String,
    /// Language codes to build retrievers for at startup.
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
    /// Fallback language when a requested code has no retriever.
    #[serde(default = "default_language")]
    pub default_language: String,
    /// BM25 term-frequency saturation parameter.
    #[serde(default = "default_k1")]
    pub k1: f64,
    /// BM25 length-normalization strength.
    #[serde(default = "default_b")]
    pub b: f64,
    /// Number of snippets returned per query.
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

fn default_corpus_dir() -> String { "corpora".into() }
fn default_languages() -> Vec<String> { vec!["en".into(), "es".into()] }
fn default_language() -> String { "en".into() }
fn default_k1() -> f64 { 1.5 }
fn default_b() -> f64 { 0.75 }
fn default_top_k() -> usize { 3 }

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            corpus_dir: default_corpus_dir(),
            languages: default_languages(),
            default_language: default_language(),
            k1: default_k1(),
            b: default_b(),
            top_k: default_top_k(),
        }
    }
}

/// HTTP gateway configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory where synthesized and uploaded audio clips are stored.
    #[serde(default = "default_audio_dir")]
    pub audio_dir: String,
}

fn default_host() -> String { "0.0.0.0".into() }
fn default_port() -> u16 { 8000 }
fn default_audio_dir() -> String { "static/audio".into() }

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            audio_dir: default_audio_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ChattiaConfig::default();
        assert_eq!(config.retrieval.default_language, "en");
        assert_eq!(config.retrieval.languages, vec!["en", "es"]);
        assert!((config.retrieval.k1 - 1.5).abs() < 1e-9);
        assert!((config.retrieval.b - 0.75).abs() < 1e-9);
        assert_eq!(config.retrieval.top_k, 3);
        assert_eq!(config.gateway.port, 8000);
    }

    #[test]
    fn test_config_from_toml() {
        let toml_str = r#"
            [retrieval]
            corpus_dir = "/data/corpora"
            languages = ["en"]
            k1 = 1.2

            [gateway]
            port = 9000
        "#;

        let config: ChattiaConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.retrieval.corpus_dir, "/data/corpora");
        assert_eq!(config.retrieval.languages, vec!["en"]);
        assert!((config.retrieval.k1 - 1.2).abs() < 1e-9);
        // Untouched fields keep their defaults
        assert!((config.retrieval.b - 0.75).abs() < 1e-9);
        assert_eq!(config.gateway.port, 9000);
        assert_eq!(config.gateway.host, "0.0.0.0");
    }

    #[test]
    fn test_config_missing_fields_use_defaults() {
        let config: ChattiaConfig = toml::from_str("").unwrap();
        assert_eq!(config.retrieval.default_language, "en");
        assert_eq!(config.gateway.audio_dir, "static/audio");
    }

    #[test]
    fn test_config_round_trip() {
        let dir = std::env::temp_dir().join("chattia-config-test");
        let path = dir.join("config.toml");

        let mut config = ChattiaConfig::default();
        config.retrieval.top_k = 5;
        config.gateway.port = 8123;
        config.save(&path).unwrap();

        let loaded = ChattiaConfig::load_from(&path).unwrap();
        assert_eq!(loaded.retrieval.top_k, 5);
        assert_eq!(loaded.gateway.port, 8123);

        std::fs::remove_dir_all(&dir).ok();
    }
}
