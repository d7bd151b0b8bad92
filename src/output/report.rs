// Similarity report: classification, column layout and the report file.
//
// `classify` and `format_report` are pure. `save_report` is the only function
// here that touches the filesystem.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::error::ReportError;
use crate::similarity::SimilarityResult;

/// Minimum width of each word column. Longer words are not truncated.
pub const COLUMN_WIDTH: usize = 12;

/// Number of word columns per line.
pub const WORDS_PER_LINE: usize = 5;

/// File name of the persisted report inside the reports directory.
pub const REPORT_FILE_NAME: &str = "similarity_report.txt";

pub const REPORT_TITLE: &str = "PLAGIARISM DETECTION REPORT";

/// How worrying a similarity percentage is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SimilarityLevel {
    Low,
    Moderate,
    High,
}

impl SimilarityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SimilarityLevel::Low => "LOW",
            SimilarityLevel::Moderate => "MODERATE",
            SimilarityLevel::High => "HIGH",
        }
    }

    /// Human-readable explanation shown under the verdict.
    pub fn interpretation(&self) -> &'static [&'static str] {
        match self {
            SimilarityLevel::High => &[
                "The essays show significant content overlap.",
                "This may indicate potential plagiarism or similar source material.",
            ],
            SimilarityLevel::Moderate => &["The essays share some common themes or vocabulary."],
            SimilarityLevel::Low => &["The essays appear to be largely original and distinct."],
        }
    }
}

impl fmt::Display for SimilarityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify a similarity percentage. Thresholds are inclusive at the bottom:
/// exactly 50.0 is High and exactly 25.0 is Moderate.
pub fn classify(percentage: f64) -> SimilarityLevel {
    match percentage {
        p if p >= 50.0 => SimilarityLevel::High,
        p if p >= 25.0 => SimilarityLevel::Moderate,
        // NaN fails both comparisons and lands here
        _ => SimilarityLevel::Low,
    }
}

/// Lay words out in fixed-width columns, sorted by code point and deduplicated.
///
/// Each word is left-justified to [`COLUMN_WIDTH`] and columns are joined by
/// two spaces, [`WORDS_PER_LINE`] words per line.
pub fn column_lines<I, S>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    layout_columns(&sorted_unique(words))
}

fn sorted_unique<I, S>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut sorted: Vec<String> = words.into_iter().map(|w| w.as_ref().to_string()).collect();
    sorted.sort();
    sorted.dedup();
    sorted
}

fn layout_columns(sorted: &[String]) -> Vec<String> {
    sorted
        .chunks(WORDS_PER_LINE)
        .map(|chunk| {
            chunk
                .iter()
                .map(|word| format!("{word:<width$}", width = COLUMN_WIDTH))
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect()
}

/// A rendered, line-oriented similarity report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedReport {
    lines: Vec<String>,
}

impl FormattedReport {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Render a report straight from a comparison result.
    pub fn from_result(result: &SimilarityResult) -> Self {
        format_report(&result.intersection, result.percentage)
    }
}

impl fmt::Display for FormattedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Render the common words and percentage into the report layout.
pub fn format_report<I, S>(common_words: I, percentage: f64) -> FormattedReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let sorted = sorted_unique(common_words);

    let rule = ".".repeat(REPORT_TITLE.len());
    let mut lines = vec![
        rule.clone(),
        REPORT_TITLE.to_string(),
        rule,
        String::new(),
        format!("Similarity Percentage: {percentage:.2}%"),
        String::new(),
        format!("Total Common Words: {}", sorted.len()),
        String::new(),
        "Common Words Found:".to_string(),
        ".".repeat("Common Words Found:".len()),
    ];
    lines.extend(layout_columns(&sorted));
    lines.push(String::new());
    lines.push(String::new());

    FormattedReport { lines }
}

/// Write the report to `<reports_dir>/similarity_report.txt`, creating the
/// directory if needed. Returns the path written.
pub fn save_report(reports_dir: &Path, report: &FormattedReport) -> Result<PathBuf, ReportError> {
    if !reports_dir.exists() {
        fs::create_dir_all(reports_dir).map_err(|source| ReportError::CreateDir {
            path: reports_dir.to_path_buf(),
            source,
        })?;
        info!(dir = %reports_dir.display(), "Created reports directory");
    }

    let path = reports_dir.join(REPORT_FILE_NAME);
    fs::write(&path, report.to_string()).map_err(|source| ReportError::Write {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), "Saved similarity report");
    Ok(path)
}
