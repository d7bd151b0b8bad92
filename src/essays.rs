// Essay input: loading the two essays from disk or from pasted text.
//
// Every filesystem failure is mapped to a specific `EssayError` variant so
// the binary can print a targeted hint instead of a generic I/O message.

use std::fs;
use std::io::{self, BufRead, ErrorKind};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::EssayError;

pub const ESSAY_A_FILE: &str = "essay1.txt";
pub const ESSAY_B_FILE: &str = "essay2.txt";

/// Line that terminates a pasted essay (compared trimmed, case-insensitive).
pub const PASTE_SENTINEL: &str = "END";

/// Locations of the two essays being compared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EssayPaths {
    pub essay_a: PathBuf,
    pub essay_b: PathBuf,
}

impl EssayPaths {
    /// The conventional `essay1.txt` / `essay2.txt` pair inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            essay_a: dir.join(ESSAY_A_FILE),
            essay_b: dir.join(ESSAY_B_FILE),
        }
    }
}

fn io_error(path: &Path, source: io::Error) -> EssayError {
    match source.kind() {
        ErrorKind::NotFound => EssayError::NotFound(path.to_path_buf()),
        ErrorKind::PermissionDenied => EssayError::PermissionDenied(path.to_path_buf()),
        _ => EssayError::Io {
            path: path.to_path_buf(),
            source,
        },
    }
}

/// Read one essay file as UTF-8 text.
///
/// A file containing only whitespace is not an error: it yields an empty
/// string and a warning, and simply contributes no tokens.
pub fn read_essay(path: &Path) -> Result<String, EssayError> {
    let metadata = fs::metadata(path).map_err(|e| io_error(path, e))?;
    if !metadata.is_file() {
        return Err(EssayError::NotAFile(path.to_path_buf()));
    }

    let bytes = fs::read(path).map_err(|e| io_error(path, e))?;
    let content =
        String::from_utf8(bytes).map_err(|_| EssayError::InvalidEncoding(path.to_path_buf()))?;

    if content.trim().is_empty() {
        warn!(path = %path.display(), "Essay file is empty");
        return Ok(String::new());
    }

    info!(path = %path.display(), bytes = content.len(), "Loaded essay");
    Ok(content)
}

/// Read both essays, failing on the first one that can't be loaded.
pub fn load_essays(paths: &EssayPaths) -> Result<(String, String), EssayError> {
    let essay_a = read_essay(&paths.essay_a)?;
    let essay_b = read_essay(&paths.essay_b)?;
    Ok((essay_a, essay_b))
}

/// Collect pasted lines until a line reading `END` (any case, surrounding
/// whitespace ignored). Lines are joined with `\n`.
///
/// Returns `Ok(None)` if input ends before the sentinel is seen.
pub fn read_pasted<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut lines = Vec::new();
    let mut buf = String::new();

    loop {
        buf.clear();
        if reader.read_line(&mut buf)? == 0 {
            return Ok(None);
        }

        let line = buf.trim_end_matches(['\n', '\r']);
        if line.trim().eq_ignore_ascii_case(PASTE_SENTINEL) {
            break;
        }
        lines.push(line.to_string());
    }

    Ok(Some(lines.join("\n")))
}

/// Save pasted essays as `essay1.txt` / `essay2.txt` in `dir`, creating the
/// directory if needed.
pub fn save_essays(dir: &Path, essay_a: &str, essay_b: &str) -> Result<EssayPaths, EssayError> {
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| io_error(dir, e))?;
        info!(dir = %dir.display(), "Created essays directory");
    }

    let paths = EssayPaths::in_dir(dir);
    fs::write(&paths.essay_a, essay_a).map_err(|e| io_error(&paths.essay_a, e))?;
    fs::write(&paths.essay_b, essay_b).map_err(|e| io_error(&paths.essay_b, e))?;

    info!(
        essay_a = %paths.essay_a.display(),
        essay_b = %paths.essay_b.display(),
        "Saved pasted essays"
    );
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_pasted_stops_at_sentinel() {
        let mut input = Cursor::new("first line\nsecond line\n  end  \nignored\n");
        let text = read_pasted(&mut input).unwrap();
        assert_eq!(text.as_deref(), Some("first line\nsecond line"));

        // The rest of the stream is still available for the next essay
        let mut rest = String::new();
        input.read_line(&mut rest).unwrap();
        assert_eq!(rest, "ignored\n");
    }

    #[test]
    fn test_read_pasted_handles_crlf() {
        let mut input = Cursor::new("alpha\r\nEND\r\n");
        assert_eq!(read_pasted(&mut input).unwrap().as_deref(), Some("alpha"));
    }

    #[test]
    fn test_read_pasted_eof_without_sentinel() {
        let mut input = Cursor::new("never finished\n");
        assert_eq!(read_pasted(&mut input).unwrap(), None);
    }

    #[test]
    fn test_read_pasted_empty_essay() {
        let mut input = Cursor::new("END\n");
        assert_eq!(read_pasted(&mut input).unwrap().as_deref(), Some(""));
    }

    #[test]
    fn test_paths_in_dir() {
        let paths = EssayPaths::in_dir(Path::new("essays"));
        assert_eq!(paths.essay_a, Path::new("essays").join("essay1.txt"));
        assert_eq!(paths.essay_b, Path::new("essays").join("essay2.txt"));
    }
}
