// Text normalization: raw essay text in, comparable tokens out.
//
// The pipeline is: lowercase, delete ASCII punctuation, split on whitespace,
// drop stop words. The ASCII information separators (U+001C..U+001F) count
// as whitespace alongside `char::is_whitespace`. Punctuation is deleted rather than replaced with a space,
// so "well-known" becomes the single token "wellknown" and "don't" becomes
// "dont". Changing that would shift similarity scores for hyphen-heavy text.

use std::ops::Deref;

use serde::Serialize;
use tracing::debug;

use super::stop_words::StopWordSet;
use crate::error::CoreError;

/// An ordered sequence of normalized tokens.
///
/// Every token is lowercase, non-empty, free of ASCII punctuation and not a
/// stop word of the set that produced it. Order follows the source text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TokenSequence(Vec<String>);

impl TokenSequence {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }

    /// Number of times `token` appears, compared exactly.
    pub fn count_of(&self, token: &str) -> usize {
        self.0.iter().filter(|t| t.as_str() == token).count()
    }
}

impl Deref for TokenSequence {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.0
    }
}

/// Turns raw text into a [`TokenSequence`] against a fixed stop word set.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer<'a> {
    stop_words: &'a StopWordSet,
}

impl Default for Normalizer<'static> {
    fn default() -> Self {
        Self::new(StopWordSet::builtin())
    }
}

impl<'a> Normalizer<'a> {
    pub fn new(stop_words: &'a StopWordSet) -> Self {
        Self { stop_words }
    }

    /// Normalize a piece of text. Empty or whitespace-only text yields an
    /// empty sequence.
    pub fn normalize(&self, text: &str) -> TokenSequence {
        let cleaned: String = text
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_ascii_punctuation())
            .collect();

        let tokens: Vec<String> = cleaned
            .split(is_separator)
            .filter(|word| !word.is_empty() && !self.stop_words.contains(word))
            .map(str::to_string)
            .collect();

        debug!(
            input_chars = text.chars().count(),
            tokens = tokens.len(),
            "Normalized text"
        );

        TokenSequence(tokens)
    }

    /// Normalize bytes of unknown provenance.
    ///
    /// Fails with [`CoreError::InvalidInput`] if the bytes are not UTF-8 text;
    /// callers that want the empty-sequence fallback use `unwrap_or_default()`.
    pub fn normalize_bytes(&self, bytes: &[u8]) -> Result<TokenSequence, CoreError> {
        let text = std::str::from_utf8(bytes).map_err(|e| {
            CoreError::InvalidInput(format!("input must be UTF-8 text ({e})"))
        })?;
        Ok(self.normalize(text))
    }
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Normalize with the builtin stop word list.
pub fn normalize(text: &str) -> TokenSequence {
    Normalizer::default().normalize(text)
}

/// Normalize raw bytes with the builtin stop word list.
pub fn normalize_bytes(bytes: &[u8]) -> Result<TokenSequence, CoreError> {
    Normalizer::default().normalize_bytes(bytes)
}
