use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::essays::EssayPaths;
use crate::text::StopWordList;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Every value
/// has a default, and command-line flags take precedence over all of them.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding essay1.txt and essay2.txt (PLAGIARISM_ESSAYS_DIR)
    pub essays_dir: PathBuf,
    /// Directory the similarity report is written to (PLAGIARISM_REPORTS_DIR)
    pub reports_dir: PathBuf,
    /// Stop word list used for normalization (PLAGIARISM_STOP_WORDS)
    pub stop_words: StopWordList,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            essays_dir: PathBuf::from("essays"),
            reports_dir: PathBuf::from("reports"),
            stop_words: StopWordList::Builtin,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let defaults = Self::default();

        let stop_words = match env::var("PLAGIARISM_STOP_WORDS") {
            Ok(value) => value
                .parse::<StopWordList>()
                .map_err(anyhow::Error::msg)
                .context("invalid PLAGIARISM_STOP_WORDS")?,
            Err(_) => defaults.stop_words,
        };

        Ok(Self {
            essays_dir: env::var("PLAGIARISM_ESSAYS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.essays_dir),
            reports_dir: env::var("PLAGIARISM_REPORTS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.reports_dir),
            stop_words,
        })
    }

    /// The conventional essay pair inside the configured essays directory.
    pub fn essay_paths(&self) -> EssayPaths {
        EssayPaths::in_dir(&self.essays_dir)
    }
}
