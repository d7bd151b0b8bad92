// Error kinds surfaced by the library.
//
// Core errors never carry I/O state: the text pipeline is pure, so the only
// failures are malformed inputs. Essay and report errors keep the offending
// path so the binary can tell the user what to fix.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from the normalization / comparison core.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Input arrived in a shape the core can't use (e.g. bytes that are not UTF-8)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Search term was empty or whitespace-only
    #[error("please provide a valid word to search")]
    InvalidQuery,
}

/// Errors from loading or saving essay files.
#[derive(Debug, Error)]
pub enum EssayError {
    #[error("file '{}' does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("'{}' is not a file", .0.display())]
    NotAFile(PathBuf),

    #[error("permission denied to read '{}'", .0.display())]
    PermissionDenied(PathBuf),

    #[error("file '{}' is not valid UTF-8 text", .0.display())]
    InvalidEncoding(PathBuf),

    #[error("error accessing '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from persisting the similarity report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("could not create directory '{}': {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write report to '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
