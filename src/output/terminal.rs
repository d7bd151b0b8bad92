// Colored terminal output for each stage of the analysis.
//
// This module handles all terminal-specific formatting. The report file
// layout lives in `report.rs` and stays uncolored.

use colored::Colorize;

use super::report::{column_lines, SimilarityLevel};
use crate::similarity::{SimilarityResult, WordCount};

/// Print a title with a dotted underline of matching length.
pub fn display_heading(title: &str) {
    println!("{}", title.bold());
    println!("{}", ".".repeat(title.chars().count()).dimmed());
}

pub fn display_banner() {
    println!();
    display_heading("PLAGIARISM DETECTOR");
    println!("\nComparing essays...");
}

/// Show how many meaningful (non stop word) tokens each essay produced.
pub fn display_token_counts(essay_a: usize, essay_b: usize) {
    println!("Essay 1: {essay_a} meaningful words found");
    println!("Essay 2: {essay_b} meaningful words found\n");
}

pub fn display_search_results(query: &str, count: WordCount) {
    println!("\nSearch Results for '{}':", query.bold());
    println!("Essay 1: {} occurrence(s)", count.essay_a);
    println!("Essay 2: {} occurrence(s)", count.essay_b);
}

/// Show the shared vocabulary as sorted columns.
pub fn display_common_words(result: &SimilarityResult) {
    println!("\nTotal common words found: {}", result.common_count());

    if result.intersection.is_empty() {
        println!("No common words found between the essays.");
        return;
    }

    println!("\nCommon words (sorted alphabetically):");
    for line in column_lines(&result.intersection) {
        println!("  {}", line.cyan());
    }
}

/// Show the Jaccard arithmetic behind the percentage.
pub fn display_calculation(result: &SimilarityResult) {
    let common = result.common_count();
    let total = result.union_count();

    println!("\nJaccard Similarity Calculation:");
    println!("Intersection (common unique words): {common}");
    println!("Union (all unique words): {total}");
    println!("Formula: ({common} / {total}) × 100");
    println!();
    println!(
        "{}",
        format!("Similarity Percentage: {:.2}%", result.percentage).bold()
    );
    println!("{}", ".".repeat(30).dimmed());
}

pub fn display_interpretation(result: &SimilarityResult) {
    let level = result.level();

    println!("\nInterpretation:");
    println!(
        "{} ({:.2}%)",
        colorize_level(level, &format!("{level} SIMILARITY detected")),
        result.percentage
    );
    for line in level.interpretation() {
        println!("{line}");
    }
}

/// Colorize text according to a similarity level.
fn colorize_level(level: SimilarityLevel, text: &str) -> colored::ColoredString {
    match level {
        SimilarityLevel::High => text.red().bold(),
        SimilarityLevel::Moderate => text.yellow(),
        SimilarityLevel::Low => text.green(),
    }
}
