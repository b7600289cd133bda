//! Word membership seam consumed by verification.

use rustc_hash::FxHashSet;

/// Yes/no word membership.
pub trait Dictionary {
    fn contains(&self, word: &str) -> bool;
}

impl<F> Dictionary for F
where
    F: Fn(&str) -> bool,
{
    fn contains(&self, word: &str) -> bool {
        self(word)
    }
}

/// An in-memory word list; lookups are case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: FxHashSet<String>,
}

impl WordList {
    /// Reads one word per line, skipping blank lines and `#` comments.
    pub fn parse(text: &str) -> Self {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter
                .into_iter()
                .map(|word| word.as_ref().to_uppercase())
                .collect(),
        }
    }
}

impl Dictionary for WordList {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_list_is_case_insensitive() {
        let words: WordList = ["cab", "Quiz"].into_iter().collect();
        assert!(words.contains("CAB"));
        assert!(words.contains("quiz"));
        assert!(!words.contains("ABC"));
    }

    #[test]
    fn test_parse_skips_blanks_and_comments() {
        let words = WordList::parse("# test words\ncab\n\n  bad  \n");
        assert_eq!(words.len(), 2);
        assert!(words.contains("BAD"));
    }

    #[test]
    fn test_closures_are_dictionaries() {
        let only_cab = |word: &str| word == "CAB";
        assert!(Dictionary::contains(&only_cab, "CAB"));
        assert!(!Dictionary::contains(&only_cab, "BAC"));
    }
}
