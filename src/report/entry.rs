use crate::checker::speller::Speller;
use crate::tree::Documented;
use crate::MisspellingRecord;
use colored::Colorize;
use serde::Serialize;

/// Characters of context shown on each side of a misspelled word.
pub const CONTEXT_CHARS: usize = 10;

/// One misspelled word with its context and suggestions, ready to print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Misspelling {
    pub word: String,
    pub offset: usize,
    pub before: String,
    pub after: String,
    pub suggestions: Vec<String>,
}

impl Misspelling {
    /// The printed block for this word, trailing blank line included.
    pub fn block(&self, colored: bool) -> String {
        let highlight = if colored {
            self.word.red().bold().to_string()
        } else {
            self.word.clone()
        };

        format!(
            "\"{}{}{}\"\n\n\"{}\" suggestions:\n\t{}\n\n",
            self.before,
            highlight,
            self.after,
            self.word,
            self.suggestions.join(", ")
        )
    }
}

/// Every misspelling found in one documented item's comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub name: Option<String>,
    pub location: String,
    pub misspellings: Vec<Misspelling>,
}

impl ReportEntry {
    /// Build the entry for `documented`, or `None` when nothing is misspelled.
    pub fn new<S: Speller>(
        speller: &S,
        documented: &Documented<'_>,
        records: &[MisspellingRecord],
        max_suggestions: usize,
    ) -> Option<Self> {
        if records.is_empty() {
            return None;
        }

        let text = documented.comment.text();
        let misspellings = records
            .iter()
            .map(|record| {
                let (before, after) = context(text, &record.word, record.offset);
                let mut suggestions = speller.suggest(&record.word);
                suggestions.truncate(max_suggestions);

                Misspelling {
                    word: record.word.clone(),
                    offset: record.offset,
                    before,
                    after,
                    suggestions,
                }
            })
            .collect();

        Some(Self {
            name: documented.name.clone(),
            location: documented.location.to_string(),
            misspellings,
        })
    }

    pub fn header(&self) -> String {
        match &self.name {
            Some(name) => format!("{} in {}:", name, self.location),
            None => format!("In {}:", self.location),
        }
    }
}

/// Text on either side of `word`, which sits near `offset` in `text`.
///
/// The window starts `CONTEXT_CHARS` before `offset`, and the word is taken
/// at its rightmost occurrence starting within `CONTEXT_CHARS` of that. Both
/// sides are marked with `...` when cut short. When the word cannot be found
/// in the window both sides are empty.
pub fn context(text: &str, word: &str, offset: usize) -> (String, String) {
    let chars: Vec<char> = text.chars().collect();
    let word_chars: Vec<char> = word.chars().collect();
    let prefix = offset.saturating_sub(CONTEXT_CHARS);

    let found = (0..=CONTEXT_CHARS).rev().map(|skip| prefix + skip).find(|&start| {
        chars
            .get(start..start + word_chars.len())
            .is_some_and(|candidate| candidate == word_chars.as_slice())
    });

    let Some(start) = found else {
        return (String::new(), String::new());
    };

    let word_end = start + word_chars.len();
    let after_end = (word_end + CONTEXT_CHARS).min(chars.len());

    let mut before = String::new();
    if prefix > 0 {
        before.push_str("...");
    }
    before.extend(&chars[prefix..start]);

    let mut after: String = chars[word_end..after_end].iter().collect();
    if after_end - word_end == CONTEXT_CHARS {
        after.push_str("...");
    }

    (before, after)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::testing::FixedSpeller;
    use crate::checker::tokenizer::words;
    use crate::tree::Comment;

    fn offset_of(text: &str, word: &str) -> usize {
        words(text).find(|w| w.text == word).unwrap().offset
    }

    #[test]
    fn test_context_in_middle_of_sentence() {
        let text = "This method validates acidentally wrong input";
        let (before, after) = context(text, "acidentally", offset_of(text, "acidentally"));

        assert_eq!(before, "...alidates ");
        assert_eq!(after, " wrong inp...");
    }

    #[test]
    fn test_context_at_start_and_end() {
        let (before, after) = context("teh end", "teh", 0);
        assert_eq!(before, "");
        assert_eq!(after, " end");

        let text = "short tpyo";
        let (before, after) = context(text, "tpyo", offset_of(text, "tpyo"));
        assert_eq!(before, "short ");
        assert_eq!(after, "");
    }

    #[test]
    fn test_context_spans_lines() {
        let text = "first line\nsecnd line of text here";
        let (before, after) = context(text, "secnd", offset_of(text, "secnd"));
        assert_eq!(before, "...rst line\n");
        assert_eq!(after, " line of t...");
    }

    #[test]
    fn test_context_for_repeated_word() {
        let text = "teh cat saw teh dog";
        let first = context(text, "teh", offset_of(text, "teh"));
        assert_eq!(first, (String::new(), " cat saw t...".to_string()));

        let second = context(text, "teh", 13);
        assert_eq!(second, ("... cat saw ".to_string(), " dog".to_string()));
    }

    #[test]
    fn test_context_when_word_is_missing() {
        assert_eq!(context("nothing here", "absent", 3), (String::new(), String::new()));
        assert_eq!(context("", "absent", 40), (String::new(), String::new()));
    }

    #[test]
    fn test_header() {
        let mut entry = ReportEntry {
            name: Some("Foo#bar".to_string()),
            location: "lib/foo.rb".to_string(),
            misspellings: Vec::new(),
        };
        assert_eq!(entry.header(), "Foo#bar in lib/foo.rb:");

        entry.name = None;
        assert_eq!(entry.header(), "In lib/foo.rb:");
    }

    #[test]
    fn test_block_format() {
        let misspelling = Misspelling {
            word: "tpyo".to_string(),
            offset: 6,
            before: "a ".to_string(),
            after: " here".to_string(),
            suggestions: vec!["typo".to_string(), "tyro".to_string()],
        };

        assert_eq!(
            misspelling.block(false),
            "\"a tpyo here\"\n\n\"tpyo\" suggestions:\n\ttypo, tyro\n\n"
        );
    }

    #[test]
    fn test_block_highlights_word() {
        colored::control::set_override(true);
        let misspelling = Misspelling {
            word: "tpyo".to_string(),
            offset: 0,
            before: String::new(),
            after: String::new(),
            suggestions: Vec::new(),
        };

        let block = misspelling.block(true);
        assert!(block.starts_with("\"\u{1b}["));
        assert!(block.contains("tpyo"));
        assert!(block.contains("\"tpyo\" suggestions:\n\t\n"));
    }

    #[test]
    fn test_entry_limits_suggestions() {
        let speller = FixedSpeller::new(&[]).with_suggestions(
            "tpyo",
            &["typo", "tyro", "top", "toy", "tape", "type", "tip"],
        );
        let comment = Comment::new("a tpyo");
        let documented = Documented {
            name: None,
            comment: &comment,
            location: "README.md",
        };
        let records = vec![MisspellingRecord {
            word: "tpyo".to_string(),
            offset: 3,
        }];

        let entry = ReportEntry::new(&speller, &documented, &records, 5).unwrap();
        assert_eq!(entry.misspellings[0].suggestions.len(), 5);
        assert_eq!(entry.misspellings[0].before, "a ");

        assert!(ReportEntry::new(&speller, &documented, &[], 5).is_none());
    }
}
