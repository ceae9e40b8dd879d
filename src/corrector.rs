use std::collections::HashSet;
use std::iter;
use std::path::Path;

use rayon::prelude::*;

use crate::edits;
use crate::error::Result;
use crate::frequency::FrequencyModel;

/// One candidate-generation strategy. All tiers produce owned strings, so
/// the cheap ones hand out their sets and the combinatorial ones stay lazy
/// behind the same signature.
type Tier = fn(&str) -> Box<dyn Iterator<Item = String>>;

/// Generation tiers in priority order. The corrector walks this table and
/// stops at the first tier with a known candidate; the fallback (the input
/// itself) lives in `correct`, not here.
///
/// The numbering gap is historical: there is no edits4, and edits5 really
/// does come after edits2.
const TIERS: [Tier; 7] = [
    |word| Box::new(iter::once(word.to_string())),
    |word| Box::new(edits::duplicate_letter(word).into_iter()),
    |word| Box::new(edits::swap_similar_letters(word).into_iter()),
    |word| Box::new(edits::edits3(word)),
    |word| Box::new(edits::edits1(word).into_iter()),
    |word| Box::new(edits::edits2(word)),
    |word| Box::new(edits::edits5(word)),
];

/// Probabilistic spelling corrector over an injected [`FrequencyModel`].
///
/// `correct` is a pure function of the word and the model, so one instance
/// can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct Corrector {
    model: FrequencyModel,
}

impl Corrector {
    pub fn new(model: FrequencyModel) -> Self {
        Corrector { model }
    }

    pub fn from_corpus_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Corrector::new(FrequencyModel::from_corpus_file(path)?))
    }

    pub fn model(&self) -> &FrequencyModel {
        &self.model
    }

    /// Most probable correction for `word`. Words with no known candidate in
    /// any tier come back unchanged.
    pub fn correct(&self, word: &str) -> String {
        for tier in TIERS {
            let known = self.model.known(tier(word));
            if let Some(best) = self.most_probable(known) {
                return best;
            }
        }
        word.to_string()
    }

    /// Correct a batch of words in parallel. The model is read-only, so no
    /// synchronization is involved.
    pub fn correct_batch(&self, words: &[String]) -> Vec<String> {
        words.par_iter().map(|word| self.correct(word)).collect()
    }

    // Highest-probability candidate; ties go to the lexicographically
    // smallest word so the result never depends on hash iteration order.
    fn most_probable(&self, candidates: HashSet<String>) -> Option<String> {
        candidates.into_iter().max_by(|a, b| {
            self.model
                .probability(a)
                .total_cmp(&self.model.probability(b))
                .then_with(|| b.cmp(a))
        })
    }
}
