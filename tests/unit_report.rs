// Unit tests for report rendering, classification and the filesystem glue
// (report saving and essay loading).

use std::fs;

use plagiarism_detector::error::{EssayError, ReportError};
use plagiarism_detector::essays::{load_essays, read_essay, save_essays, EssayPaths};
use plagiarism_detector::output::report::{
    column_lines, COLUMN_WIDTH, REPORT_FILE_NAME, WORDS_PER_LINE,
};
use plagiarism_detector::output::{classify, format_report, save_report, SimilarityLevel};
use plagiarism_detector::similarity::compare;
use plagiarism_detector::text::normalize;

// ============================================================
// classify
// ============================================================

#[test]
fn classify_thresholds_are_inclusive() {
    let cases = [
        (0.0, SimilarityLevel::Low),
        (24.999, SimilarityLevel::Low),
        (25.0, SimilarityLevel::Moderate),
        (49.999, SimilarityLevel::Moderate),
        (50.0, SimilarityLevel::High),
        (100.0, SimilarityLevel::High),
    ];
    for (percentage, expected) in cases {
        assert_eq!(classify(percentage), expected, "{percentage}% should be {expected}");
    }
}

#[test]
fn level_display_and_ordering() {
    assert_eq!(SimilarityLevel::High.to_string(), "HIGH");
    assert_eq!(SimilarityLevel::Moderate.to_string(), "MODERATE");
    assert_eq!(SimilarityLevel::Low.to_string(), "LOW");
    assert!(SimilarityLevel::High > SimilarityLevel::Moderate);
    assert!(SimilarityLevel::Moderate > SimilarityLevel::Low);
}

#[test]
fn level_serializes_uppercase() {
    assert_eq!(
        serde_json::to_string(&SimilarityLevel::Moderate).unwrap(),
        "\"MODERATE\""
    );
}

#[test]
fn every_level_has_an_interpretation() {
    for level in [SimilarityLevel::Low, SimilarityLevel::Moderate, SimilarityLevel::High] {
        assert!(!level.interpretation().is_empty());
    }
}

// ============================================================
// format_report / column_lines
// ============================================================

#[test]
fn report_contains_percentage_and_sorted_words() {
    let text = format_report(["quick", "brown"], 50.0).to_string();
    assert!(text.contains("50.00%"));
    let brown = text.find("brown").unwrap();
    let quick = text.find("quick").unwrap();
    assert!(brown < quick, "words must be sorted alphabetically");
}

#[test]
fn report_header_and_counts() {
    let report = format_report(["b", "a", "c"], 33.333333);
    let lines = report.lines();
    assert_eq!(lines[1], "PLAGIARISM DETECTION REPORT");
    assert!(lines.contains(&"Similarity Percentage: 33.33%".to_string()));
    assert!(lines.contains(&"Total Common Words: 3".to_string()));
    assert!(lines.contains(&"Common Words Found:".to_string()));
}

#[test]
fn report_is_deterministic_regardless_of_input_order() {
    let a = format_report(["zeta", "alpha", "mu"], 10.0);
    let b = format_report(["mu", "zeta", "alpha"], 10.0);
    assert_eq!(a, b);
}

#[test]
fn columns_sort_by_code_point() {
    // Uppercase sorts before lowercase, digits before both
    let lines = column_lines(["b", "B", "1"]);
    assert_eq!(
        lines,
        vec![format!("{:<12}  {:<12}  {:<12}", "1", "B", "b")]
    );
}

#[test]
fn columns_fill_rows_of_five() {
    let words: Vec<String> = (0..12).map(|i| format!("w{i:02}")).collect();
    let lines = column_lines(&words);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].split_whitespace().count(), WORDS_PER_LINE);
    assert_eq!(lines[2].split_whitespace().count(), 2);
    // Full field width plus two-space separators
    assert_eq!(lines[0].len(), WORDS_PER_LINE * COLUMN_WIDTH + (WORDS_PER_LINE - 1) * 2);
}

// ============================================================
// save_report
// ============================================================

#[test]
fn save_report_creates_directory_and_file() {
    let tmp = tempfile::tempdir().unwrap();
    let reports_dir = tmp.path().join("reports");

    let result = compare(&normalize("The quick brown fox"), &normalize("The quick brown dog"));
    let report = format_report(&result.intersection, result.percentage);
    let path = save_report(&reports_dir, &report).unwrap();

    assert_eq!(path, reports_dir.join(REPORT_FILE_NAME));
    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, report.to_string());
    assert!(written.contains("Total Common Words: 2"));
}

#[test]
fn save_report_overwrites_previous_report() {
    let tmp = tempfile::tempdir().unwrap();
    save_report(tmp.path(), &format_report(["old"], 10.0)).unwrap();
    let path = save_report(tmp.path(), &format_report(["new"], 90.0)).unwrap();
    let written = fs::read_to_string(path).unwrap();
    assert!(written.contains("new"));
    assert!(!written.contains("old"));
}

#[test]
fn save_report_fails_when_dir_is_a_file() {
    let tmp = tempfile::tempdir().unwrap();
    let blocker = tmp.path().join("reports");
    fs::write(&blocker, "not a directory").unwrap();

    let err = save_report(&blocker, &format_report(["x"], 1.0)).unwrap_err();
    assert!(matches!(err, ReportError::Write { .. }));
}

// ============================================================
// essays
// ============================================================

#[test]
fn read_essay_missing_file() {
    let tmp = tempfile::tempdir().unwrap();
    let err = read_essay(&tmp.path().join("essay1.txt")).unwrap_err();
    assert!(matches!(err, EssayError::NotFound(_)));
}

#[test]
fn read_essay_directory_is_not_a_file() {
    let tmp = tempfile::tempdir().unwrap();
    let err = read_essay(tmp.path()).unwrap_err();
    assert!(matches!(err, EssayError::NotAFile(_)));
}

#[test]
fn read_essay_invalid_utf8() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("essay1.txt");
    fs::write(&path, b"caf\xe9").unwrap();
    assert!(matches!(read_essay(&path), Err(EssayError::InvalidEncoding(_))));
}

#[test]
fn read_essay_whitespace_only_is_empty_string() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("essay1.txt");
    fs::write(&path, "  \n\t\n").unwrap();
    assert_eq!(read_essay(&path).unwrap(), "");
}

#[test]
fn save_then_load_essays() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("essays");

    let paths = save_essays(&dir, "The quick brown fox", "The quick brown dog").unwrap();
    assert_eq!(paths, EssayPaths::in_dir(&dir));

    let (a, b) = load_essays(&paths).unwrap();
    assert_eq!(a, "The quick brown fox");
    assert_eq!(b, "The quick brown dog");
}

#[test]
fn load_essays_reports_second_missing_file() {
    let tmp = tempfile::tempdir().unwrap();
    let paths = EssayPaths::in_dir(tmp.path());
    fs::write(&paths.essay_a, "present").unwrap();

    match load_essays(&paths).unwrap_err() {
        EssayError::NotFound(path) => assert_eq!(path, paths.essay_b),
        other => panic!("expected NotFound, got {other:?}"),
    }
}
