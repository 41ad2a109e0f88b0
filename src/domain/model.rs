use serde::{Deserialize, Serialize};

/// A single request to translate one piece of UI text.
///
/// `context` disambiguates identical source text used in different places
/// (a button label vs. a heading). Absence of context is a distinct, valid
/// key component and is not the same as an empty string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
    pub context: Option<String>,
}

impl TranslationRequest {
    pub fn new(text: impl Into<String>, target_lang: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source_lang: "en".to_string(),
            target_lang: target_lang.into(),
            context: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Key for the in-flight registry. Uses a unit separator and a
    /// presence marker so that `None` and `Some("")` never collide.
    pub fn dedupe_key(&self) -> String {
        let ctx = match &self.context {
            Some(c) => format!("1{}", c),
            None => "0".to_string(),
        };
        format!("{}\u{1f}{}\u{1f}{}", self.text, self.target_lang, ctx)
    }
}

/// One row of the persistent translation cache.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CacheEntry {
    pub id: i64,
    pub source_text: String,
    pub source_lang: String,
    pub target_lang: String,
    pub context: Option<String>,
    pub translated_text: String,
    pub provider: String,
    pub hit_count: i64,
    pub created_at: i64,
    pub last_accessed: i64,
}

/// Which tier produced the displayed text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Origin {
    /// Source text passed through unchanged (same language, empty input,
    /// disabled fallback, or remote failure).
    Source,
    /// Exact-match hit in the persistent cache.
    Cache,
    /// Static phrase table.
    Phrase,
    /// Fresh remote translation; carries the provider tag.
    Remote(String),
}

/// The outcome of a resolution. Never an error: translation is a
/// best-effort enhancement, the UI always gets something to display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Resolution {
    pub text: String,
    pub origin: Origin,
}

impl Resolution {
    pub fn source(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            origin: Origin::Source,
        }
    }
}
