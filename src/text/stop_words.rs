// Stop word sets: the function words excluded before comparison.
//
// Both sets are built once on first use and never mutated afterwards, so they
// are handed out as `&'static` references and shared freely.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use stop_words::{get, LANGUAGE};

/// The default English list used by the essay checker.
const BUILTIN_WORDS: &[&str] = &[
    // articles
    "a", "an", "the",
    // be-verbs
    "is", "are", "was", "were", "be", "been", "being", "am",
    // prepositions
    "in", "on", "at", "to", "for", "of", "with", "by", "from", "about", "as", "into", "through",
    "during", "before", "after", "above", "below", "between", "under",
    // adverbs and quantifiers
    "again", "further", "then", "once", "here", "there", "when", "where", "why", "how", "all",
    "both", "each", "few", "more", "most", "other", "some", "such", "no", "nor", "not", "only",
    "own", "same", "so", "than", "too", "very", "just", "now",
    // conjunctions
    "and", "but", "or", "if", "because", "until", "while",
    // determiners and pronouns
    "this", "that", "these", "those", "i", "you", "he", "she", "it", "we", "they", "what",
    "which", "who", "whom", "whose",
    // auxiliaries and modals
    "has", "have", "had", "do", "does", "did", "can", "will", "should", "would", "could", "may",
    "might", "must",
];

static BUILTIN: LazyLock<StopWordSet> =
    LazyLock::new(|| StopWordSet::from_words(BUILTIN_WORDS.iter().copied()));

static EXTENDED: LazyLock<StopWordSet> = LazyLock::new(|| {
    let words: Vec<String> = get(LANGUAGE::English);
    StopWordSet::from_words(words.iter().map(String::as_str))
});

/// A read-only set of lowercase stop words.
#[derive(Debug, Clone, Default)]
pub struct StopWordSet {
    words: HashSet<String>,
}

impl StopWordSet {
    /// Build a set from arbitrary words.
    ///
    /// Entries are lowercased and stripped of ASCII punctuation so they match
    /// tokens exactly as the normalizer produces them ("don't" is stored as
    /// "dont"). Entries that end up empty are dropped.
    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        let words = words
            .into_iter()
            .map(|w| {
                w.to_lowercase()
                    .chars()
                    .filter(|c| !c.is_ascii_punctuation())
                    .collect::<String>()
            })
            .map(|w| w.trim().to_string())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// The builtin English list.
    pub fn builtin() -> &'static StopWordSet {
        &BUILTIN
    }

    /// The larger English list from the `stop-words` crate.
    pub fn extended() -> &'static StopWordSet {
        &EXTENDED
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

/// Which stop word list to filter with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StopWordList {
    #[default]
    Builtin,
    Extended,
}

impl StopWordList {
    pub fn set(self) -> &'static StopWordSet {
        match self {
            StopWordList::Builtin => StopWordSet::builtin(),
            StopWordList::Extended => StopWordSet::extended(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StopWordList::Builtin => "builtin",
            StopWordList::Extended => "extended",
        }
    }
}

impl fmt::Display for StopWordList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StopWordList {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "builtin" => Ok(StopWordList::Builtin),
            "extended" => Ok(StopWordList::Extended),
            other => Err(format!(
                "unknown stop word list '{other}' (expected 'builtin' or 'extended')"
            )),
        }
    }
}
