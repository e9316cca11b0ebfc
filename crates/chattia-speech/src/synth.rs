//! Placeholder text-to-speech: a sine tone in a hand-assembled WAV container.

use std::f64::consts::PI;
use std::io::Write;
use std::path::{Path, PathBuf};

use byteorder::{LittleEndian, WriteBytesExt};
use sha2::{Digest, Sha256};

use chattia_core::error::{ChattiaError, Result};

const SAMPLE_RATE: u32 = 16_000;
const AMPLITUDE: f64 = 16_000.0;

/// Spoken text stands in for nothing here, so blank input still gets a clip.
const PLACEHOLDER_TEXT: &str = "Chattia response";

/// Write a placeholder audio clip for `text` and return its path.
///
/// Mono 16-bit PCM at 16 kHz: a pure tone (440 Hz for English, 392 Hz
/// otherwise) under a raised-cosine envelope, with the duration scaled to
/// the text length and capped at four seconds. The filename is derived
/// from a hash of the inputs so identical requests reuse the same file.
pub fn synthesize_speech(text: &str, language: &str, output_dir: &Path) -> Result<PathBuf> {
    let sanitized = {
        let trimmed = text.trim();
        if trimmed.is_empty() { PLACEHOLDER_TEXT } else { trimmed }
    };

    std::fs::create_dir_all(output_dir)
        .map_err(|e| ChattiaError::Speech(format!("Failed to create audio dir: {e}")))?;

    let duration_seconds = (1.5 + sanitized.chars().count() as f64 / 48.0).min(4.0);
    let total_frames = (SAMPLE_RATE as f64 * duration_seconds) as usize;
    let frequency: f64 = if language == "en" { 440.0 } else { 392.0 };

    let filename = clip_filename(sanitized, language, total_frames);
    let file_path = output_dir.join(&filename);

    let mut pcm: Vec<u8> = Vec::with_capacity(total_frames * 2);
    for index in 0..total_frames {
        let progress = index as f64 / total_frames as f64;
        let envelope = 0.5 * (1.0 - (2.0 * PI * progress).cos());
        let sample = AMPLITUDE * envelope * (2.0 * PI * frequency * index as f64 / SAMPLE_RATE as f64).sin();
        pcm.write_i16::<LittleEndian>(sample as i16)
            .map_err(|e| ChattiaError::Speech(format!("Failed to encode audio: {e}")))?;
    }

    let wav = wrap_riff(&pcm)?;
    std::fs::write(&file_path, wav)
        .map_err(|e| ChattiaError::Speech(format!("Failed to write {}: {e}", file_path.display())))?;

    tracing::debug!("🔊 Synthesized {:.1}s placeholder clip: {}", duration_seconds, filename);
    Ok(file_path)
}

/// Deterministic clip name: same text, language, and length reuse the file.
fn clip_filename(text: &str, language: &str, total_frames: usize) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hasher.update([0]);
    hasher.update(language.as_bytes());
    hasher.update([0]);
    hasher.update(total_frames.to_le_bytes());
    let digest = hasher.finalize();
    let hex: String = digest[..5].iter().map(|b| format!("{b:02x}")).collect();
    format!("tts-{hex}.wav")
}

/// Assemble the 44-byte RIFF/WAVE header around raw mono 16-bit PCM frames.
fn wrap_riff(pcm: &[u8]) -> Result<Vec<u8>> {
    let mut wav: Vec<u8> = Vec::with_capacity(44 + pcm.len());
    let write = |e: std::io::Error| ChattiaError::Speech(format!("Failed to encode WAV header: {e}"));

    wav.write_all(b"RIFF").map_err(write)?;
    wav.write_u32::<LittleEndian>(36 + pcm.len() as u32).map_err(write)?;
    wav.write_all(b"WAVE").map_err(write)?;

    wav.write_all(b"fmt ").map_err(write)?;
    wav.write_u32::<LittleEndian>(16).map_err(write)?; // PCM fmt chunk size
    wav.write_u16::<LittleEndian>(1).map_err(write)?; // PCM format
    wav.write_u16::<LittleEndian>(1).map_err(write)?; // mono
    wav.write_u32::<LittleEndian>(SAMPLE_RATE).map_err(write)?;
    wav.write_u32::<LittleEndian>(SAMPLE_RATE * 2).map_err(write)?; // byte rate
    wav.write_u16::<LittleEndian>(2).map_err(write)?; // block align
    wav.write_u16::<LittleEndian>(16).map_err(write)?; // bits per sample

    wav.write_all(b"data").map_err(write)?;
    wav.write_u32::<LittleEndian>(pcm.len() as u32).map_err(write)?;
    wav.write_all(pcm).map_err(write)?;
    Ok(wav)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_audio_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("chattia-synth-{name}"));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_writes_valid_wav_container() {
        let dir = temp_audio_dir("container");
        let path = synthesize_speech("Hello from the test", "en", &dir).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WAVE");
        assert_eq!(&bytes[36..40], b"data");
        // Header + one i16 frame per sample
        let expected_frames = (16_000.0 * (1.5 + 19.0 / 48.0)) as usize;
        assert_eq!(bytes.len(), 44 + expected_frames * 2);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_duration_caps_at_four_seconds() {
        let dir = temp_audio_dir("cap");
        let long_text = "x".repeat(500);
        let path = synthesize_speech(&long_text, "en", &dir).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(bytes.len(), 44 + 4 * 16_000 * 2);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_identical_inputs_reuse_the_same_filename() {
        let dir = temp_audio_dir("dedup");
        let first = synthesize_speech("same words", "en", &dir).unwrap();
        let second = synthesize_speech("same words", "en", &dir).unwrap();
        assert_eq!(first, second);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_language_changes_the_clip() {
        let dir = temp_audio_dir("lang");
        let en = synthesize_speech("same words", "en", &dir).unwrap();
        let es = synthesize_speech("same words", "es", &dir).unwrap();
        assert_ne!(en, es);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_blank_text_uses_placeholder_phrase() {
        let dir = temp_audio_dir("blank");
        let blank = synthesize_speech("   ", "en", &dir).unwrap();
        let explicit = synthesize_speech(PLACEHOLDER_TEXT, "en", &dir).unwrap();
        assert_eq!(blank, explicit);
        std::fs::remove_dir_all(&dir).ok();
    }
}
