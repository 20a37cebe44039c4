use crate::checker::dictionary::Dictionary;
use crate::error::DocspellError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How hard to search for suggestions, from cheapest to most thorough.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuggestionMode {
    Ultra,
    Fast,
    #[default]
    Normal,
    Slow,
    BadSpellers,
}

impl FromStr for SuggestionMode {
    type Err = DocspellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ultra" => Ok(SuggestionMode::Ultra),
            "fast" => Ok(SuggestionMode::Fast),
            "normal" => Ok(SuggestionMode::Normal),
            "slow" => Ok(SuggestionMode::Slow),
            "bad-spellers" => Ok(SuggestionMode::BadSpellers),
            _ => Err(DocspellError::UnknownSuggestionMode(s.to_string())),
        }
    }
}

impl fmt::Display for SuggestionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuggestionMode::Ultra => write!(f, "ultra"),
            SuggestionMode::Fast => write!(f, "fast"),
            SuggestionMode::Normal => write!(f, "normal"),
            SuggestionMode::Slow => write!(f, "slow"),
            SuggestionMode::BadSpellers => write!(f, "bad-spellers"),
        }
    }
}

/// Generate spelling suggestions for a lower-cased `word`, closest first.
pub fn generate(
    word: &str,
    dictionary: &Dictionary,
    mode: SuggestionMode,
    max_suggestions: usize,
) -> Vec<String> {
    let mut candidates: Vec<(usize, String)> = Vec::new();
    let mut consider = |candidate: String, limit: usize| {
        if candidate == word || candidates.iter().any(|(_, c)| *c == candidate) {
            return;
        }
        let distance = edit_distance(word, &candidate);
        if distance <= limit {
            candidates.push((distance, candidate));
        }
    };

    // 1. Single edits that land on a dictionary word
    for transform in generate_transformations(word) {
        if dictionary.contains(&transform) {
            consider(transform, 1);
        }
    }

    // 2. Same three-letter prefix
    if let Some(prefix) = prefix(word, 3).filter(|_| mode >= SuggestionMode::Fast) {
        for candidate in dictionary.words_with_prefix(prefix) {
            consider(candidate, 2);
        }
    }

    // 3. Same two-letter prefix, looser distance
    if let Some(prefix) = prefix(word, 2).filter(|_| mode >= SuggestionMode::Normal) {
        for candidate in dictionary.words_with_prefix(prefix) {
            consider(candidate, 3);
        }
    }

    // 4. Whole dictionary, filtered by length
    if mode >= SuggestionMode::Slow {
        let limit = if mode == SuggestionMode::BadSpellers { 3 } else { 2 };
        for candidate in dictionary.words_near_length(word.len(), limit) {
            consider(candidate, limit);
        }
    }

    candidates.sort_by(|(da, a), (db, b)| da.cmp(db).then_with(|| a.cmp(b)));
    candidates
        .into_iter()
        .take(max_suggestions)
        .map(|(_, candidate)| candidate)
        .collect()
}

/// The first `len` characters of `word`, if it has that many.
fn prefix(word: &str, len: usize) -> Option<&str> {
    match word.char_indices().nth(len) {
        Some((end, _)) => Some(&word[..end]),
        None if word.chars().count() == len => Some(word),
        None => None,
    }
}

/// Edit distance between two strings, counting an adjacent transposition as
/// a single edit (optimal string alignment).
fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let (a_len, b_len) = (a_chars.len(), b_chars.len());

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    let mut matrix = vec![vec![0; b_len + 1]; a_len + 1];

    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, item) in matrix[0].iter_mut().enumerate() {
        *item = j;
    }

    for i in 1..=a_len {
        for j in 1..=b_len {
            let cost = if a_chars[i - 1] == b_chars[j - 1] { 0 } else { 1 };

            let mut best = std::cmp::min(
                std::cmp::min(
                    matrix[i - 1][j] + 1, // deletion
                    matrix[i][j - 1] + 1, // insertion
                ),
                matrix[i - 1][j - 1] + cost, // substitution
            );

            if i > 1
                && j > 1
                && a_chars[i - 1] == b_chars[j - 2]
                && a_chars[i - 2] == b_chars[j - 1]
            {
                best = best.min(matrix[i - 2][j - 2] + 1); // transposition
            }

            matrix[i][j] = best;
        }
    }

    matrix[a_len][b_len]
}

/// Every string one deletion, transposition, substitution or insertion away.
fn generate_transformations(word: &str) -> Vec<String> {
    let mut transformations = Vec::new();
    let chars: Vec<char> = word.chars().collect();

    for i in 0..chars.len() {
        let mut new_word = chars.clone();
        new_word.remove(i);
        transformations.push(new_word.iter().collect());
    }

    for i in 0..chars.len().saturating_sub(1) {
        let mut new_word = chars.clone();
        new_word.swap(i, i + 1);
        transformations.push(new_word.iter().collect());
    }

    for i in 0..chars.len() {
        for letter in 'a'..='z' {
            if chars[i] != letter {
                let mut new_word = chars.clone();
                new_word[i] = letter;
                transformations.push(new_word.iter().collect());
            }
        }
    }

    for i in 0..=chars.len() {
        for letter in 'a'..='z' {
            let mut new_word = chars.clone();
            new_word.insert(i, letter);
            transformations.push(new_word.iter().collect());
        }
    }

    transformations
}
