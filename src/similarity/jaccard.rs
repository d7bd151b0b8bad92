// Jaccard similarity for vocabulary overlap scoring.
//
// Each token sequence collapses to a set of distinct words. The score is
//
//   100 * |A ∩ B| / |A ∪ B|
//
// which gives 0.0 for disjoint vocabularies and 100.0 for identical ones.
// Word frequency and word order are ignored: two essays using the same words
// in different amounts or a different order score the same.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;

use crate::output::report::{classify, SimilarityLevel};

/// The outcome of comparing two token sequences.
///
/// The sets are owned copies, ordered by code point, so callers can display
/// them directly without sorting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityResult {
    /// Jaccard similarity as a percentage (0.0 to 100.0)
    pub percentage: f64,
    /// Words present in both sequences
    pub intersection: BTreeSet<String>,
    /// Words present in either sequence
    pub union: BTreeSet<String>,
}

impl SimilarityResult {
    /// The "no similarity" result: 0% with empty sets.
    pub fn empty() -> Self {
        Self {
            percentage: 0.0,
            intersection: BTreeSet::new(),
            union: BTreeSet::new(),
        }
    }

    pub fn common_count(&self) -> usize {
        self.intersection.len()
    }

    pub fn union_count(&self) -> usize {
        self.union.len()
    }

    pub fn level(&self) -> SimilarityLevel {
        classify(self.percentage)
    }
}

impl Default for SimilarityResult {
    fn default() -> Self {
        Self::empty()
    }
}

/// Compare two token sequences by the Jaccard similarity of their vocabularies.
///
/// When both sides are empty the union is empty and the score is exactly 0.0.
pub fn compare(tokens_a: &[String], tokens_b: &[String]) -> SimilarityResult {
    let set_a: BTreeSet<&str> = tokens_a.iter().map(String::as_str).collect();
    let set_b: BTreeSet<&str> = tokens_b.iter().map(String::as_str).collect();

    let intersection: BTreeSet<String> = set_a
        .intersection(&set_b)
        .map(|w| (*w).to_string())
        .collect();
    let union: BTreeSet<String> = set_a.union(&set_b).map(|w| (*w).to_string()).collect();

    let percentage = if union.is_empty() {
        0.0
    } else {
        100.0 * intersection.len() as f64 / union.len() as f64
    };

    debug!(
        common = intersection.len(),
        total = union.len(),
        percentage,
        "Computed Jaccard similarity"
    );

    SimilarityResult {
        percentage,
        intersection,
        union,
    }
}
