pub mod dictionary;
pub mod session;
pub mod speller;
pub mod suggestions;
pub mod tokenizer;

#[cfg(test)]
pub(crate) mod testing;

use crate::tree::{Comment, DocTree};
use crate::MisspellingRecord;
use speller::Speller;

/// A speller that has learned the documentation tree's vocabulary.
///
/// The only way to get one is [`Session::prime`], so nothing can be checked
/// against a half-built session dictionary. Once primed the speller is only
/// read.
pub struct Session<S> {
    speller: S,
    names: usize,
}

impl<S: Speller> Session<S> {
    /// Register every identifier in `tree` (plus the default and `extra_words`)
    /// with the speller's session dictionary.
    pub fn prime(mut speller: S, tree: &DocTree, extra_words: &[String]) -> Self {
        let names = session::build_session_dictionary(&mut speller, tree, extra_words);
        tracing::debug!(names, "primed session dictionary");

        Self { speller, names }
    }

    pub fn speller(&self) -> &S {
        &self.speller
    }

    /// Number of identifiers the session learned from the tree.
    pub fn names(&self) -> usize {
        self.names
    }

    /// The misspelled words in `comment`, in the order they appear.
    pub fn find_misspelled(&self, comment: &Comment) -> Vec<MisspellingRecord> {
        if comment.is_empty() {
            return Vec::new();
        }

        tokenizer::words(comment.text())
            .filter(|word| !self.speller.check(word.text))
            .map(|word| MisspellingRecord {
                word: word.text.to_string(),
                offset: word.offset,
            })
            .collect()
    }
}
