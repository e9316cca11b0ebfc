//! # Chattia Responder
//!
//! Composes the chat reply from retrieved snippets. The shipped
//! implementation is a deterministic rule-based composer — it stands in for
//! a real language model while keeping the demo dependency-free, and the
//! `Responder` trait is the seam where a model-backed implementation
//! would plug in.

use async_trait::async_trait;
use serde::Serialize;

use chattia_retrieval::RetrievedDocument;

/// A generated reply plus whether the responder fell back to a
/// non-grounded answer.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationResult {
    pub text: String,
    pub used_fallback: bool,
}

impl GenerationResult {
    fn grounded(text: String) -> Self {
        Self { text, used_fallback: false }
    }

    fn fallback(text: String) -> Self {
        Self { text, used_fallback: true }
    }
}

/// Text-generation collaborator: turn a user message and ranked snippets
/// into a reply in the requested language.
#[async_trait]
pub trait Responder: Send + Sync {
    async fn generate(
        &self,
        message: &str,
        snippets: &[RetrievedDocument],
        language: &str,
    ) -> GenerationResult;
}

/// Deterministic bilingual reply composer.
#[derive(Debug, Default, Clone)]
pub struct RuleResponder;

impl RuleResponder {
    pub fn new() -> Self {
        Self
    }

    /// Unknown languages normalize to English.
    fn normalize(language: &str) -> &str {
        match language {
            "es" => "es",
            _ => "en",
        }
    }

    fn greeting(lang: &str) -> &'static str {
        match lang {
            "es" => "¡Hola! Soy Chattia, tu asistente de voz. ¿En qué puedo ayudarte hoy?",
            _ => "Hello! I'm Chattia, your voice assistant. How can I help you today?",
        }
    }

    fn follow_up(lang: &str) -> &'static str {
        match lang {
            "es" => "¿Te gustaría profundizar en algún punto?",
            _ => "Would you like to dive deeper into any topic?",
        }
    }

    fn nothing_found(lang: &str) -> String {
        let body = match lang {
            "es" => {
                "No encontré un fragmento coincidente en las notas del proyecto, \
                 pero aún quiero ayudarte. Si necesitas más detalle, ¡haz otra pregunta!"
            }
            _ => {
                "I could not find a matching snippet in the project notes, but I'm \
                 still happy to help. If you need more detail, just ask another question!"
            }
        };
        body.to_string()
    }
}

const GREETING_KEYWORDS: [&str; 4] = ["hello", "hola", "buenos", "hi"];

#[async_trait]
impl Responder for RuleResponder {
    async fn generate(
        &self,
        message: &str,
        snippets: &[RetrievedDocument],
        language: &str,
    ) -> GenerationResult {
        let lang = Self::normalize(language);
        let normalized = message.trim().to_lowercase();

        if normalized.is_empty() {
            return GenerationResult::fallback(Self::greeting(lang).to_string());
        }

        if GREETING_KEYWORDS.iter().any(|kw| normalized.contains(kw)) {
            return GenerationResult::grounded(Self::greeting(lang).to_string());
        }

        if snippets.is_empty() {
            return GenerationResult::fallback(Self::nothing_found(lang));
        }

        let intro = match lang {
            "es" => "Esto es lo que encontré para ti:",
            _ => "Here is what I found for you:",
        };
        let bullets: Vec<String> = snippets.iter().map(|doc| format!("• {}", doc.text)).collect();
        let text = format!("{intro}\n{}\n\n{}", bullets.join("\n"), Self::follow_up(lang));
        GenerationResult::grounded(text)
    }
}
