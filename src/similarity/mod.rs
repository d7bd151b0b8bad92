// Similarity: Jaccard vocabulary overlap and single-word search.

pub mod jaccard;
pub mod locate;

pub use jaccard::{compare, SimilarityResult};
pub use locate::{locate, WordCount};
