use crate::error::DocspellError;
use anyhow::{Context, Result};
use fst::{Automaton, IntoStreamer, Set, SetBuilder, Streamer};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read};
use std::path::{Path, PathBuf};

/// Languages `docspell dict download` knows how to fetch.
pub const DOWNLOADABLE_LANGUAGES: &[&str] = &["en_US", "en_GB"];

pub struct Dictionary {
    set: Set<Vec<u8>>,
}

impl Dictionary {
    /// Load the installed dictionary for `language`.
    ///
    /// Fails with [`DocspellError::DictionaryNotDownloaded`] for a language
    /// that can be downloaded but has not been, and with
    /// [`DocspellError::LanguageNotInstalled`] for any other missing language.
    pub fn load(language: &str) -> Result<Self> {
        let dict_path = Self::get_dictionary_path(language)?;

        if dict_path.exists() {
            return Self::load_from_path(&dict_path);
        }

        if DOWNLOADABLE_LANGUAGES.contains(&language) {
            return Err(DocspellError::DictionaryNotDownloaded {
                language: language.to_string(),
            }
            .into());
        }

        Err(DocspellError::LanguageNotInstalled {
            language: language.to_string(),
            available: available_languages()?,
        }
        .into())
    }

    /// Load a compiled FST dictionary from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open dictionary: {}", path.display()))?;

        let reader = BufReader::new(file);
        let set = Set::new(reader.bytes().collect::<Result<Vec<_>, _>>()?)
            .context("Failed to parse dictionary")?;

        Ok(Self { set })
    }

    /// Build an in-memory dictionary from a plain wordlist file, one word per line.
    pub fn load_wordlist(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read wordlist: {}", path.display()))?;

        Self::from_words(content.lines())
    }

    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = normalize(words);
        words.sort();
        words.dedup();

        let set = Set::from_iter(words).context("Failed to build dictionary")?;
        Ok(Self { set })
    }

    /// Check if word exists in dictionary
    pub fn contains(&self, word: &str) -> bool {
        self.set.contains(word.as_bytes())
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Get all words with a given prefix
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut results = Vec::new();
        let mut stream = self
            .set
            .search(fst::automaton::Str::new(prefix).starts_with())
            .into_stream();

        while let Some(key) = stream.next() {
            if let Ok(word) = String::from_utf8(key.to_vec()) {
                results.push(word);
            }
        }

        results
    }

    /// Visit every word whose length is within `slack` of `len`.
    ///
    /// Streams the whole set; only the slow suggestion modes use it.
    pub fn words_near_length(&self, len: usize, slack: usize) -> Vec<String> {
        let mut words = Vec::new();
        let mut stream = self.set.stream();

        while let Some(key) = stream.next() {
            if key.len().abs_diff(len) > slack {
                continue;
            }
            if let Ok(word) = String::from_utf8(key.to_vec()) {
                words.push(word);
            }
        }

        words
    }

    /// Build dictionary from word list
    pub fn build_from_words(words: &[String], output_path: &Path) -> Result<()> {
        let mut sorted_words = normalize(words);
        sorted_words.sort();
        sorted_words.dedup();

        let file = File::create(output_path)
            .with_context(|| format!("Failed to create dictionary: {}", output_path.display()))?;

        let writer = BufWriter::new(file);
        let mut builder = SetBuilder::new(writer).context("Failed to create FST builder")?;

        for word in sorted_words {
            builder
                .insert(word.as_bytes())
                .context("Failed to insert word into dictionary")?;
        }

        builder.finish().context("Failed to finalize dictionary")?;

        Ok(())
    }

    pub fn get_dictionary_path(language: &str) -> Result<PathBuf> {
        let data_dir = crate::config::Config::data_dir().context("Failed to get data directory")?;

        fs::create_dir_all(&data_dir).context("Failed to create data directory")?;

        Ok(data_dir.join(format!("{}.dict", language)))
    }
}

/// Languages accepted by `--spell-language`: the installed dictionaries.
pub fn available_languages() -> Result<Vec<String>> {
    let mut languages = Vec::new();

    if let Some(data_dir) = crate::config::Config::data_dir() {
        if data_dir.exists() {
            for entry in fs::read_dir(&data_dir)? {
                let path = entry?.path();
                if path.extension().and_then(|s| s.to_str()) == Some("dict") {
                    if let Some(language) = path.file_stem().and_then(|s| s.to_str()) {
                        languages.push(language.to_string());
                    }
                }
            }
        }
    }

    languages.sort();
    languages.dedup();
    Ok(languages)
}

fn normalize<I, S>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|word| word.as_ref().trim().to_lowercase())
        .filter(|word| !word.is_empty() && !word.starts_with('#'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_build_and_load_dictionary() {
        let dir = tempdir().unwrap();
        let dict_path = dir.path().join("test.dict");

        let words = vec!["hello".to_string(), "World".to_string(), "test".to_string()];

        Dictionary::build_from_words(&words, &dict_path).unwrap();

        let dict = Dictionary::load_from_path(&dict_path).unwrap();
        assert!(dict.contains("hello"));
        assert!(dict.contains("world"));
        assert!(!dict.contains("notfound"));
        assert_eq!(dict.len(), 3);
    }

    #[test]
    fn test_wordlist_skips_blank_lines_and_comments() {
        let dir = tempdir().unwrap();
        let list = dir.path().join("words.txt");
        fs::write(&list, "# project words\nalpha\n\n  Beta \nalpha\n").unwrap();

        let dict = Dictionary::load_wordlist(&list).unwrap();
        assert_eq!(dict.len(), 2);
        assert!(dict.contains("beta"));
    }

    #[test]
    fn test_prefix_and_length_queries() {
        let dict = Dictionary::from_words(["accident", "accidentally", "acid", "bat"]).unwrap();

        assert_eq!(
            dict.words_with_prefix("acc"),
            vec!["accident".to_string(), "accidentally".to_string()]
        );
        assert_eq!(dict.words_near_length(4, 0), vec!["acid".to_string()]);
    }
}
