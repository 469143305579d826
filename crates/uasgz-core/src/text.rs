//! # Localized Short Text
//!
//! The language-tagged short text representation used throughout the
//! ED-318 model (`TextShortType`). A field carrying several entries
//! represents the same semantic string in different languages. Entry
//! order is insertion order and carries no precedence; lookups go by
//! language tag.

use serde::{Deserialize, Serialize};

/// A single (language tag, text) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    /// Language tag, e.g. `en-GB` or `de-CH`.
    pub lang: String,
    /// The text in that language.
    pub text: String,
}

impl LocalizedText {
    /// Tag `text` with the language `lang`.
    pub fn new(lang: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            text: text.into(),
        }
    }

    /// Look up the entry for `lang` in a list of localized texts.
    pub fn for_lang<'a>(texts: &'a [LocalizedText], lang: &str) -> Option<&'a LocalizedText> {
        texts.iter().find(|t| t.lang == lang)
    }
}
