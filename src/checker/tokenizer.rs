use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WORD: Regex = Regex::new(r"[A-Za-z]+").unwrap();
}

/// A candidate word and its offset within the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word<'t> {
    pub text: &'t str,
    pub offset: usize,
}

/// Lazy scan over the runs of ASCII letters in a text.
///
/// Offsets are counted in characters. A word at the very start of the text
/// has offset 0; any later word reports the number of characters before it
/// plus one. The report formatter searches a window around the offset, so
/// the extra character is absorbed there.
///
/// A clone resumes from the same point as the scan it was taken from.
#[derive(Debug, Clone)]
pub struct Words<'t> {
    text: &'t str,
    // byte position where the next search starts
    byte: usize,
    // characters in text[..byte]
    chars: usize,
}

/// Scan `text` for candidate words, left to right.
pub fn words(text: &str) -> Words<'_> {
    Words {
        text,
        byte: 0,
        chars: 0,
    }
}

impl<'t> Iterator for Words<'t> {
    type Item = Word<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let found = WORD.find_at(self.text, self.byte)?;

        let preceding = self.chars + self.text[self.byte..found.start()].chars().count();
        // matches are ASCII, so their byte length is their character count
        self.byte = found.end();
        self.chars = preceding + found.len();

        let offset = if preceding == 0 { 0 } else { preceding + 1 };

        Some(Word {
            text: found.as_str(),
            offset,
        })
    }
}

impl<'t> Words<'t> {
    /// Start the scan over from the beginning of the text.
    pub fn restart(&self) -> Words<'t> {
        words(self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(text: &str) -> Vec<(&str, usize)> {
        words(text).map(|w| (w.text, w.offset)).collect()
    }

    #[test]
    fn test_alphabetic_runs() {
        assert_eq!(
            scan("snake_case, x86 and CamelCase!"),
            vec![
                ("snake", 0),
                ("case", 7),
                ("x", 13),
                ("and", 17),
                ("CamelCase", 21)
            ]
        );
    }

    #[test]
    fn test_first_word_after_leading_space() {
        assert_eq!(scan(" hello"), vec![("hello", 2)]);
        assert_eq!(scan("hello"), vec![("hello", 0)]);
    }

    #[test]
    fn test_offsets_count_characters_not_bytes() {
        assert_eq!(scan("héllo wörld"), vec![("h", 0), ("llo", 3), ("w", 7), ("rld", 9)]);
    }

    #[test]
    fn test_no_words() {
        assert!(scan("").is_empty());
        assert!(scan("123 _ !?").is_empty());
    }

    #[test]
    fn test_restartable() {
        let mut scan = words("one two");
        assert_eq!(scan.next().map(|w| w.text), Some("one"));

        let again: Vec<_> = scan.restart().map(|w| w.text).collect();
        assert_eq!(again, vec!["one", "two"]);
        assert_eq!(scan.next().map(|w| w.text), Some("two"));
    }

    #[test]
    fn test_clone_resumes_mid_scan() {
        let mut scan = words("alpha, beta gamma");
        assert_eq!(scan.next().map(|w| w.text), Some("alpha"));

        let copy = scan.clone();
        let rest: Vec<_> = scan.map(|w| (w.text, w.offset)).collect();
        let copied: Vec<_> = copy.map(|w| (w.text, w.offset)).collect();

        assert_eq!(rest, vec![("beta", 8), ("gamma", 13)]);
        assert_eq!(copied, rest);
    }
}
