use super::speller::Speller;
use crate::tree::DocTree;

/// Words common in code documentation that general dictionaries tend to miss.
pub const DEFAULT_WORDS: &[&str] = &["http", "https", "newb", "sudo", "validator"];

/// Register `name` with the session dictionary, one piece per `_`-separated part.
pub fn add_name<S: Speller + ?Sized>(speller: &mut S, name: &str) {
    for part in name.split('_').filter(|part| !part.is_empty()) {
        speller.add_to_session(part);
    }
}

/// Teach the speller every identifier in the tree, plus the default words and
/// any `extra_words`. Returns the number of names registered.
pub fn build_session_dictionary<S: Speller + ?Sized>(
    speller: &mut S,
    tree: &DocTree,
    extra_words: &[String],
) -> usize {
    for word in DEFAULT_WORDS {
        speller.add_to_session(word);
    }
    for word in extra_words {
        add_name(speller, word);
    }

    let mut names = 0;
    for node in tree.nodes() {
        for identifier in node.identifiers() {
            add_name(speller, identifier);
            names += 1;
        }
    }

    names
}
