//! API route handlers for the gateway.

use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde::Deserialize;
use std::sync::Arc;

use super::server::AppState;

type ApiError = (StatusCode, Json<serde_json::Value>);

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub language: Option<String>,
}

/// Chat endpoint: retrieve snippets, compose a grounded reply, synthesize
/// placeholder audio for it.
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let message = payload.message.trim().to_string();
    let language = payload
        .language
        .unwrap_or_else(|| "en".to_string())
        .to_lowercase();

    if message.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"error": "Message is required."})),
        ));
    }

    let documents = state
        .registry
        .get(&language)
        .map(|retriever| retriever.search(&message, state.config.retrieval.top_k))
        .unwrap_or_default();

    let generation = state.responder.generate(&message, &documents, &language).await;

    let audio_path = chattia_speech::synthesize_speech(&generation.text, &language, &state.audio_dir)
        .map_err(|e| {
            tracing::error!("Audio synthesis failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": "Audio synthesis failed."})),
            )
        })?;
    let audio_name = audio_path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    Ok(Json(serde_json::json!({
        "reply": generation.text,
        "language": language,
        "sources": documents,
        "audio_url": format!("/audio/{audio_name}"),
        "used_fallback": generation.used_fallback,
    })))
}

/// Voice endpoint: accept an uploaded clip, run the transcriber, clean up.
pub async fn voice(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<chattia_speech::Transcription>, ApiError> {
    let mut audio_bytes: Option<Vec<u8>> = None;
    let mut language = "en".to_string();

    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("audio") => {
                let bytes = field.bytes().await.map_err(|e| {
                    (
                        StatusCode::BAD_REQUEST,
                        Json(serde_json::json!({"message": format!("Failed to read audio upload: {e}")})),
                    )
                })?;
                audio_bytes = Some(bytes.to_vec());
            }
            Some("language") => {
                if let Ok(value) = field.text().await {
                    language = value.to_lowercase();
                }
            }
            _ => {}
        }
    }

    let Some(bytes) = audio_bytes else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"message": "Audio file not provided."})),
        ));
    };

    let temp_path = state
        .audio_dir
        .join(format!("voice-{}.webm", uuid::Uuid::new_v4().simple()));
    tokio::fs::write(&temp_path, &bytes).await.map_err(|e| {
        tracing::error!("Failed to store voice upload: {e}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({"message": "Failed to store the audio clip."})),
        )
    })?;

    let result = chattia_speech::transcribe_audio(&temp_path, &language);

    // Cleanup is best effort
    if let Err(e) = tokio::fs::remove_file(&temp_path).await {
        tracing::debug!("Temporary audio file could not be removed: {e}");
    }

    Ok(Json(result))
}

/// Serve a previously synthesized clip.
pub async fn audio(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Result<impl IntoResponse, StatusCode> {
    if !is_safe_filename(&filename) {
        return Err(StatusCode::NOT_FOUND);
    }
    let path = state.audio_dir.join(&filename);
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|_| StatusCode::NOT_FOUND)?;
    Ok(([(header::CONTENT_TYPE, "audio/wav")], bytes))
}

/// Health check endpoint.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Only bare filenames may reach the audio directory.
fn is_safe_filename(name: &str) -> bool {
    !name.is_empty() && !name.contains('/') && !name.contains('\\') && !name.contains("..")
}
