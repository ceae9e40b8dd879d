use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::corpus;
use crate::error::{Result, SpellError};

/// Word-frequency model built once from a tokenized corpus.
///
/// Immutable after construction, so a shared reference can be used from any
/// number of threads without locking.
#[derive(Debug, Clone)]
pub struct FrequencyModel {
    counts: HashMap<String, u64>,
    total: u64, // sum of all counts, cached for probability()
}

impl FrequencyModel {
    /// Build the model from a token stream. Fails if the stream is empty,
    /// since no probability is defined over an empty corpus.
    pub fn from_tokens<I>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut counts: HashMap<String, u64> = HashMap::new();
        let mut total = 0u64;
        for token in tokens {
            *counts.entry(token).or_insert(0) += 1;
            total += 1;
        }
        if total == 0 {
            return Err(SpellError::EmptyCorpus);
        }
        Ok(FrequencyModel { counts, total })
    }

    /// Tokenize raw text and build the model from it.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::from_tokens(corpus::tokenize(text))
    }

    /// Read a corpus file, tokenize it and build the model.
    pub fn from_corpus_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_tokens(corpus::read_corpus(path)?)
    }

    /// Raw occurrence count, 0 for words not in the vocabulary.
    pub fn count(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// count(word) / N. Zero for unknown words.
    pub fn probability(&self, word: &str) -> f64 {
        self.count(word) as f64 / self.total as f64
    }

    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    /// The deduplicated subset of `candidates` present in the vocabulary.
    ///
    /// Unknown candidates are dropped as the stream is consumed, so lazy
    /// candidate sequences are never materialized in full.
    pub fn known<I>(&self, candidates: I) -> HashSet<String>
    where
        I: IntoIterator<Item = String>,
    {
        candidates
            .into_iter()
            .filter(|candidate| self.contains(candidate))
            .collect()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total token count N.
    pub fn total_tokens(&self) -> u64 {
        self.total
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(word, &count)| (word.as_str(), count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(text: &str) -> FrequencyModel {
        FrequencyModel::from_text(text).unwrap()
    }

    #[test]
    fn test_counts_and_total() {
        let m = model("the cat and the hat");
        assert_eq!(m.count("the"), 2);
        assert_eq!(m.count("cat"), 1);
        assert_eq!(m.count("dog"), 0);
        assert_eq!(m.total_tokens(), 5);
        assert_eq!(m.len(), 4);
    }

    #[test]
    fn test_probability() {
        let m = model("a a a b");
        assert!((m.probability("a") - 0.75).abs() < 1e-12);
        assert!((m.probability("b") - 0.25).abs() < 1e-12);
        assert_eq!(m.probability("c"), 0.0);
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let m = model("one two two three three three");
        let sum: f64 = m.iter().map(|(word, _)| m.probability(word)).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_known_filters_and_dedupes() {
        let m = model("alpha beta");
        let candidates = vec![
            "alpha".to_string(),
            "alpha".to_string(),
            "gamma".to_string(),
            "beta".to_string(),
        ];
        let known = m.known(candidates);
        assert_eq!(known.len(), 2);
        assert!(known.contains("alpha"));
        assert!(known.contains("beta"));
    }

    #[test]
    fn test_empty_corpus_rejected() {
        assert!(matches!(
            FrequencyModel::from_text("... !!"),
            Err(SpellError::EmptyCorpus)
        ));
        assert!(matches!(
            FrequencyModel::from_tokens(Vec::new()),
            Err(SpellError::EmptyCorpus)
        ));
    }

    #[test]
    fn test_case_folded_vocabulary() {
        let m = model("Word WORD word");
        assert_eq!(m.count("word"), 3);
        assert!(!m.contains("Word"));
    }
}
