//! # Chattia Gateway
//!
//! HTTP surface for the voice chat demo: `/chat` for grounded text replies
//! with placeholder audio, `/voice` for transcription uploads, `/audio` for
//! clip playback, and `/health`.

pub mod routes;
pub mod server;

pub use server::{AppState, build_router, start_server};
