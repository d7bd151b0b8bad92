// Single-word search across both essays.
//
// Both texts are normalized again from raw, so the query only matches tokens
// that survive normalization. A stop word query ("the") is never found even
// when it appears literally in the essays.

use serde::Serialize;
use tracing::debug;

use crate::error::CoreError;
use crate::text::Normalizer;

/// Occurrence counts of one query word in each essay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub essay_a: usize,
    pub essay_b: usize,
}

impl Normalizer<'_> {
    /// Count how often `query` appears in the normalized form of each text.
    ///
    /// The query is trimmed and lowercased but otherwise used as-is. Fails with
    /// [`CoreError::InvalidQuery`] when it is empty after trimming; callers
    /// wanting the (0, 0) fallback use `unwrap_or_default()`.
    pub fn locate(&self, query: &str, text_a: &str, text_b: &str) -> Result<WordCount, CoreError> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Err(CoreError::InvalidQuery);
        }

        let count = WordCount {
            essay_a: self.normalize(text_a).count_of(&needle),
            essay_b: self.normalize(text_b).count_of(&needle),
        };

        debug!(
            query = %needle,
            essay_a = count.essay_a,
            essay_b = count.essay_b,
            "Located word"
        );

        Ok(count)
    }
}

/// Locate a word using the builtin stop word list.
pub fn locate(query: &str, text_a: &str, text_b: &str) -> Result<WordCount, CoreError> {
    Normalizer::default().locate(query, text_a, text_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOX: &str = "The quick brown fox";
    const DOG: &str = "The quick brown dog";

    #[test]
    fn test_counts_each_side() {
        let count = locate("brown", FOX, DOG).unwrap();
        assert_eq!(count, WordCount { essay_a: 1, essay_b: 1 });
        assert_eq!(
            locate("fox", FOX, DOG).unwrap(),
            WordCount { essay_a: 1, essay_b: 0 }
        );
    }

    #[test]
    fn test_stop_word_never_found() {
        assert_eq!(locate("the", FOX, DOG).unwrap(), WordCount::default());
    }

    #[test]
    fn test_query_is_trimmed_and_lowercased() {
        let count = locate("  BROWN \n", FOX, DOG).unwrap();
        assert_eq!(count, WordCount { essay_a: 1, essay_b: 1 });
    }

    #[test]
    fn test_duplicates_counted() {
        let count = locate("fox", "fox, fox! FOX?", "no foxes").unwrap();
        assert_eq!(count, WordCount { essay_a: 3, essay_b: 0 });
    }

    #[test]
    fn test_empty_query_rejected() {
        assert_eq!(locate("", FOX, DOG), Err(CoreError::InvalidQuery));
        assert_eq!(locate("   ", FOX, DOG), Err(CoreError::InvalidQuery));
        assert_eq!(locate(" ", FOX, DOG).unwrap_or_default(), WordCount::default());
    }
}
