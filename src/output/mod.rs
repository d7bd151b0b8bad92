// Output formatting: terminal display and report generation.

pub mod report;
pub mod terminal;

pub use report::{classify, format_report, save_report, FormattedReport, SimilarityLevel};
