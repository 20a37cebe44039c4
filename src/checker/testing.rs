use super::speller::Speller;
use super::suggestions::SuggestionMode;
use anyhow::Result;
use std::cell::Cell;
use std::collections::{HashMap, HashSet};

/// Speller with a fixed vocabulary and canned suggestions.
#[derive(Debug, Default)]
pub struct FixedSpeller {
    pub known: HashSet<String>,
    pub session: HashSet<String>,
    pub personal: Vec<String>,
    pub saved: Vec<String>,
    pub suggestions: HashMap<String, Vec<String>>,
    pub mode: SuggestionMode,
    pub run_together: bool,
    checks: Cell<usize>,
}

impl FixedSpeller {
    pub fn new(known: &[&str]) -> Self {
        Self {
            known: known.iter().map(|w| w.to_lowercase()).collect(),
            ..Default::default()
        }
    }

    pub fn with_suggestions(mut self, word: &str, suggestions: &[&str]) -> Self {
        self.suggestions.insert(
            word.to_string(),
            suggestions.iter().map(|s| s.to_string()).collect(),
        );
        self
    }

    pub fn checks(&self) -> usize {
        self.checks.get()
    }
}

impl Speller for FixedSpeller {
    fn check(&self, word: &str) -> bool {
        self.checks.set(self.checks.get() + 1);
        let word = word.to_lowercase();
        self.known.contains(&word) || self.session.contains(&word)
    }

    fn suggest(&self, word: &str) -> Vec<String> {
        self.suggestions.get(word).cloned().unwrap_or_default()
    }

    fn add_to_session(&mut self, word: &str) {
        self.session.insert(word.to_lowercase());
    }

    fn add_to_personal(&mut self, word: &str) {
        self.known.insert(word.to_lowercase());
        self.personal.push(word.to_string());
    }

    fn save_personal_wordlists(&mut self) -> Result<()> {
        self.saved.append(&mut self.personal);
        Ok(())
    }

    fn set_suggestion_mode(&mut self, mode: SuggestionMode) {
        self.mode = mode;
    }

    fn set_run_together(&mut self, enabled: bool) {
        self.run_together = enabled;
    }
}
