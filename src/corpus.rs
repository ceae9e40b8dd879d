use std::fs;
use std::path::Path;

use regex::Regex;

use crate::error::Result;

/// Pattern for a maximal run of word characters.
const WORD_PATTERN: &str = r"\w+";

/// Split text into lowercase tokens: every maximal run of word characters
/// becomes one token, everything else is discarded.
pub fn tokenize(text: &str) -> Vec<String> {
    let pattern = Regex::new(WORD_PATTERN).expect("word pattern is valid");
    pattern
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Read a corpus file and tokenize its contents.
pub fn read_corpus<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)?;
    Ok(tokenize(&text))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::error::SpellError;

    #[test]
    fn test_tokenize_case_and_punctuation() {
        let tokens = tokenize("This is a test. 123; A TEST this is.");
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for token in &tokens {
            *counts.entry(token.as_str()).or_insert(0) += 1;
        }
        let expected: HashMap<&str, usize> =
            [("this", 2), ("is", 2), ("a", 2), ("test", 2), ("123", 1)]
                .into_iter()
                .collect();
        assert_eq!(counts, expected);
    }

    #[test]
    fn test_tokenize_preserves_order() {
        assert_eq!(tokenize("This is a TEST."), ["this", "is", "a", "test"]);
    }

    #[test]
    fn test_tokenize_no_words() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("... ;; !!").is_empty());
    }

    #[test]
    fn test_read_corpus_missing_file() {
        let err = read_corpus("no/such/corpus.txt").unwrap_err();
        assert!(matches!(err, SpellError::Io(_)));
    }
}
