//! Word tokenizer shared by indexing and querying.

use regex::Regex;
use std::sync::LazyLock;

/// Runs of word characters or apostrophes. `\w` is Unicode-aware, so
/// accented Spanish letters count as word characters.
static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w']+").expect("token pattern is valid"));

/// Split `text` into lower-cased word tokens. Punctuation and whitespace
/// only separate tokens and are never emitted. No stemming, no stop words.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}
