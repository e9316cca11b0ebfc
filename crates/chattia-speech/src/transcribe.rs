//! Speech-to-text collaborator with graceful degradation.

use std::path::Path;

use serde::Serialize;

/// Result of a transcription attempt. `provider` is "unavailable" when no
/// recognition engine could run; the gateway returns this shape as-is so
/// the voice UI stays responsive without heavy ML dependencies.
#[derive(Debug, Clone, Serialize)]
pub struct Transcription {
    pub text: String,
    pub language: String,
    pub confidence: f64,
    pub message: String,
    pub provider: String,
}

impl Transcription {
    fn unavailable(language: &str, message: &str) -> Self {
        Self {
            text: String::new(),
            language: language.to_string(),
            confidence: 0.0,
            message: message.to_string(),
            provider: "unavailable".to_string(),
        }
    }
}

/// Attempt to transcribe the provided audio clip.
///
/// No recognition engine ships with the demo, so the result always reports
/// itself unavailable — with a distinct message when the clip itself is
/// missing. This degradation is the contract, not an error.
pub fn transcribe_audio(audio: &Path, language: &str) -> Transcription {
    if !audio.exists() {
        tracing::warn!("Transcription requested for missing clip: {}", audio.display());
        return Transcription::unavailable(
            language,
            "The audio clip could not be found on the server.",
        );
    }

    Transcription::unavailable(
        language,
        "Speech recognition is not installed on this demo server.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_clip_reports_not_found() {
        let result = transcribe_audio(Path::new("/nonexistent/clip.webm"), "en");
        assert_eq!(result.provider, "unavailable");
        assert_eq!(result.confidence, 0.0);
        assert!(result.text.is_empty());
        assert!(result.message.contains("could not be found"));
    }

    #[test]
    fn test_existing_clip_reports_engine_unavailable() {
        let dir = std::env::temp_dir().join("chattia-stt-test");
        std::fs::create_dir_all(&dir).unwrap();
        let clip = dir.join("clip.webm");
        std::fs::write(&clip, b"fake audio").unwrap();

        let result = transcribe_audio(&clip, "es");
        assert_eq!(result.provider, "unavailable");
        assert_eq!(result.language, "es");
        assert!(result.message.contains("not installed"));

        std::fs::remove_dir_all(&dir).ok();
    }
}
