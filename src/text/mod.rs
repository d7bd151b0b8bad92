// Text processing: stop word sets and normalization into tokens.

pub mod normalize;
pub mod stop_words;

pub use normalize::{normalize, Normalizer, TokenSequence};
pub use stop_words::{StopWordList, StopWordSet};
