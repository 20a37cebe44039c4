use super::dictionary::Dictionary;
use super::suggestions::{self, SuggestionMode};
use crate::Config;
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// Shortest piece accepted when splitting a run-together word.
const RUN_TOGETHER_MIN: usize = 3;
/// Most pieces a run-together word may be split into.
const RUN_TOGETHER_LIMIT: usize = 8;

/// The spelling engine the checker talks to.
///
/// `check` and `suggest` only read; everything that changes the known words
/// takes `&mut self`, so a primed session can hand out shared references.
pub trait Speller {
    /// True when `word` is spelled correctly. Case-insensitive.
    fn check(&self, word: &str) -> bool;

    /// Corrections for `word`, best first.
    fn suggest(&self, word: &str) -> Vec<String>;

    /// Accept `word` for the rest of this run.
    fn add_to_session(&mut self, word: &str);

    /// Accept `word` now and queue it for the personal wordlist.
    fn add_to_personal(&mut self, word: &str);

    /// Write queued personal words to durable storage.
    fn save_personal_wordlists(&mut self) -> Result<()>;

    fn set_suggestion_mode(&mut self, mode: SuggestionMode);

    /// Accept words made of several known words run together.
    fn set_run_together(&mut self, enabled: bool);
}

/// [`Speller`] backed by an FST dictionary plus session and personal word sets.
pub struct FstSpeller {
    dictionary: Dictionary,
    session_words: HashSet<String>,
    personal_words: HashSet<String>,
    pending_personal: Vec<String>,
    personal_path: Option<PathBuf>,
    mode: SuggestionMode,
    run_together: bool,
    max_suggestions: usize,
}

impl FstSpeller {
    pub fn new(config: &Config) -> Result<Self> {
        let dictionary = match &config.dictionary {
            Some(path) => Dictionary::load_wordlist(path)?,
            None => Dictionary::load(&config.language)?,
        };
        tracing::debug!(
            language = %config.language,
            words = dictionary.len(),
            "loaded main dictionary"
        );

        let mut speller = Self::with_dictionary(dictionary);
        speller.max_suggestions = config.max_suggestions;
        speller.set_suggestion_mode(config.suggestion_mode);
        speller.set_run_together(config.run_together);

        if let Some(path) = &config.personal_dictionary {
            speller.load_personal(path.clone())?;
        }

        Ok(speller)
    }

    pub fn with_dictionary(dictionary: Dictionary) -> Self {
        Self {
            dictionary,
            session_words: HashSet::new(),
            personal_words: HashSet::new(),
            pending_personal: Vec::new(),
            personal_path: None,
            mode: SuggestionMode::default(),
            run_together: false,
            max_suggestions: 10,
        }
    }

    /// Read the personal wordlist at `path` and append future personal words to it.
    pub fn load_personal(&mut self, path: PathBuf) -> Result<()> {
        if path.exists() {
            let content =
                fs::read_to_string(&path).context("Failed to read personal dictionary")?;
            for line in content.lines() {
                let word = line.trim();
                if !word.is_empty() && !word.starts_with('#') {
                    self.personal_words.insert(word.to_lowercase());
                }
            }
        }
        self.personal_path = Some(path);
        Ok(())
    }

    pub fn session_words(&self) -> &HashSet<String> {
        &self.session_words
    }

    fn knows(&self, word: &str) -> bool {
        self.dictionary.contains(word)
            || self.session_words.contains(word)
            || self.personal_words.contains(word)
    }

    /// True when `word` splits into known pieces of at least `RUN_TOGETHER_MIN`
    /// letters, no more than `RUN_TOGETHER_LIMIT` of them.
    fn splits_into_known(&self, word: &str) -> bool {
        let chars: Vec<char> = word.chars().collect();
        let len = chars.len();
        if len < RUN_TOGETHER_MIN * 2 {
            return false;
        }

        // fewest[i]: fewest pieces covering chars[..i]
        let mut fewest: Vec<Option<usize>> = vec![None; len + 1];
        fewest[0] = Some(0);

        for end in RUN_TOGETHER_MIN..=len {
            for start in 0..=end - RUN_TOGETHER_MIN {
                let Some(pieces) = fewest[start] else {
                    continue;
                };
                let piece: String = chars[start..end].iter().collect();
                if self.knows(&piece) {
                    let candidate = pieces + 1;
                    if fewest[end].map_or(true, |best| candidate < best) {
                        fewest[end] = Some(candidate);
                    }
                }
            }
        }

        matches!(fewest[len], Some(pieces) if (2..=RUN_TOGETHER_LIMIT).contains(&pieces))
    }
}

impl Speller for FstSpeller {
    fn check(&self, word: &str) -> bool {
        let word_lower = word.to_lowercase();
        if self.knows(&word_lower) {
            return true;
        }
        self.run_together && self.splits_into_known(&word_lower)
    }

    fn suggest(&self, word: &str) -> Vec<String> {
        let word_lower = word.to_lowercase();
        let suggestions =
            suggestions::generate(&word_lower, &self.dictionary, self.mode, self.max_suggestions);

        suggestions
            .into_iter()
            .map(|suggestion| match_case(word, &suggestion))
            .collect()
    }

    fn add_to_session(&mut self, word: &str) {
        let word = word.trim();
        if !word.is_empty() {
            self.session_words.insert(word.to_lowercase());
        }
    }

    fn add_to_personal(&mut self, word: &str) {
        let word = word.trim().to_lowercase();
        if !word.is_empty() && self.personal_words.insert(word.clone()) {
            self.pending_personal.push(word);
        }
    }

    fn save_personal_wordlists(&mut self) -> Result<()> {
        if self.pending_personal.is_empty() {
            return Ok(());
        }
        let Some(path) = &self.personal_path else {
            anyhow::bail!("No personal dictionary configured");
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .context("Failed to create personal dictionary directory")?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open personal dictionary: {}", path.display()))?;

        for word in &self.pending_personal {
            writeln!(file, "{}", word).context("Failed to write personal dictionary")?;
        }
        tracing::info!(
            words = self.pending_personal.len(),
            path = %path.display(),
            "saved personal wordlist"
        );
        self.pending_personal.clear();

        Ok(())
    }

    fn set_suggestion_mode(&mut self, mode: SuggestionMode) {
        self.mode = mode;
    }

    fn set_run_together(&mut self, enabled: bool) {
        self.run_together = enabled;
    }
}

/// Give `suggestion` the capitalisation pattern of `word`.
fn match_case(word: &str, suggestion: &str) -> String {
    let mut letters = word.chars().filter(|c| c.is_alphabetic());
    let first_upper = letters.next().is_some_and(|c| c.is_uppercase());
    let rest_upper = word.chars().filter(|c| c.is_alphabetic()).count() > 1
        && word.chars().filter(|c| c.is_alphabetic()).all(|c| c.is_uppercase());

    if rest_upper {
        suggestion.to_uppercase()
    } else if first_upper {
        let mut chars = suggestion.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    } else {
        suggestion.to_string()
    }
}
