use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocspellError {
    #[error("dictionary {language} not installed (available: {})", .available.join(", "))]
    LanguageNotInstalled {
        language: String,
        available: Vec<String>,
    },

    #[error("dictionary {language} not installed, run `docspell dict download {language}` first")]
    DictionaryNotDownloaded { language: String },

    #[error("Failed to read word list {path}: {source}")]
    WordSource {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Unknown suggestion mode: {0}")]
    UnknownSuggestionMode(String),
}
