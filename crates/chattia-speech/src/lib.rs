//! # Chattia Speech
//!
//! Voice collaborators for the gateway. No ML engines ship with the demo:
//! synthesis writes a short placeholder sine-wave WAV so the UI has
//! something to play back, and transcription reports itself unavailable
//! instead of erroring. Both are the seams where real TTS/STT would plug in.

pub mod synth;
pub mod transcribe;

pub use synth::synthesize_speech;
pub use transcribe::{Transcription, transcribe_audio};
