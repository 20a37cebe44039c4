use crate::checker::suggestions::SuggestionMode;
use crate::error::DocspellError;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

const FALLBACK_LANGUAGE: &str = "en_US";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_language")]
    pub language: String,

    /// Plain wordlist used instead of an installed language dictionary
    #[serde(default)]
    pub dictionary: Option<PathBuf>,

    #[serde(default)]
    pub personal_dictionary: Option<PathBuf>,

    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,

    #[serde(default)]
    pub suggestion_mode: SuggestionMode,

    #[serde(default = "default_true")]
    pub run_together: bool,

    /// Suppress the statistics summary
    #[serde(default = "default_true")]
    pub quiet: bool,

    /// Extra words accepted for every run, on top of the built-in ones
    #[serde(default)]
    pub default_words: Vec<String>,
}

fn default_language() -> String {
    language_from_env(std::env::var("LANG").ok().as_deref())
}

fn default_max_suggestions() -> usize {
    5
}

fn default_true() -> bool {
    true
}

/// `en_US.UTF-8` becomes `en_US`; unset, empty, `C` and `POSIX` fall back to `en_US`.
pub fn language_from_env(lang: Option<&str>) -> String {
    let language = lang
        .and_then(|value| value.split('.').next())
        .map(str::trim)
        .unwrap_or("");

    match language {
        "" | "C" | "POSIX" => FALLBACK_LANGUAGE.to_string(),
        other => other.to_string(),
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: default_language(),
            dictionary: None,
            personal_dictionary: None,
            max_suggestions: default_max_suggestions(),
            suggestion_mode: SuggestionMode::default(),
            run_together: true,
            quiet: true,
            default_words: Vec::new(),
        }
    }
}

/// Where words for the personal wordlist come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    Inline(Vec<String>),
    File(PathBuf),
    Stdin,
}

impl WordSource {
    /// No value reads stdin; a value containing a comma is an inline list;
    /// anything else is a file path.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            None | Some("-") => WordSource::Stdin,
            Some(list) if list.contains(',') => WordSource::Inline(
                list.split(',')
                    .map(str::trim)
                    .filter(|w| !w.is_empty())
                    .map(String::from)
                    .collect(),
            ),
            Some(path) => WordSource::File(PathBuf::from(path)),
        }
    }

    pub fn read_words(&self) -> Result<Vec<String>> {
        match self {
            WordSource::Inline(words) => Ok(words.clone()),
            WordSource::File(path) => {
                let content = fs::read_to_string(path).map_err(|source| {
                    DocspellError::WordSource {
                        source,
                        path: path.clone(),
                    }
                })?;
                Ok(split_words(&content))
            }
            WordSource::Stdin => {
                let mut content = String::new();
                io::stdin()
                    .read_to_string(&mut content)
                    .context("Failed to read words from stdin")?;
                Ok(split_words(&content))
            }
        }
    }
}

fn split_words(content: &str) -> Vec<String> {
    content.split_whitespace().map(String::from).collect()
}

/// Overrides taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub language: Option<String>,
    pub dictionary: Option<PathBuf>,
    pub personal_dictionary: Option<PathBuf>,
    pub max_suggestions: Option<usize>,
    pub suggestion_mode: Option<SuggestionMode>,
    pub quiet: Option<bool>,
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(overrides: Overrides) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global_config = Self::from_file(&global_path)?;
                config = config.merge(global_config);
            }
        }

        let local_path = PathBuf::from(".docspell.toml");
        if local_path.exists() {
            let local_config = Self::from_file(&local_path)?;
            config = config.merge(local_config);
        }

        config = config.apply(overrides);

        if config.personal_dictionary.is_none() {
            config.personal_dictionary = Self::default_personal_dict_path();
        }

        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: Self) -> Self {
        // Merge logic: other's values override self's if they differ from defaults
        if other.language != default_language() {
            self.language = other.language;
        }
        if other.dictionary.is_some() {
            self.dictionary = other.dictionary;
        }
        if other.personal_dictionary.is_some() {
            self.personal_dictionary = other.personal_dictionary;
        }
        if other.max_suggestions != default_max_suggestions() {
            self.max_suggestions = other.max_suggestions;
        }
        if other.suggestion_mode != SuggestionMode::default() {
            self.suggestion_mode = other.suggestion_mode;
        }
        self.run_together = other.run_together;
        self.quiet = other.quiet;
        for word in other.default_words {
            if !self.default_words.contains(&word) {
                self.default_words.push(word);
            }
        }
        self
    }

    fn apply(mut self, overrides: Overrides) -> Self {
        if let Some(language) = overrides.language {
            self.language = language;
        }
        if let Some(dictionary) = overrides.dictionary {
            self.dictionary = Some(dictionary);
        }
        if let Some(path) = overrides.personal_dictionary {
            self.personal_dictionary = Some(path);
        }
        if let Some(max) = overrides.max_suggestions {
            self.max_suggestions = max;
        }
        if let Some(mode) = overrides.suggestion_mode {
            self.suggestion_mode = mode;
        }
        if let Some(quiet) = overrides.quiet {
            self.quiet = quiet;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "docspell").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    pub fn default_personal_dict_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "docspell").map(|dirs| dirs.config_dir().join("personal.txt"))
    }

    pub fn data_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "docspell").map(|dirs| dirs.data_dir().to_path_buf())
    }
}
