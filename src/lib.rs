//! Probabilistic spelling correction from corpus word frequencies.
//!
//! Build a [`FrequencyModel`] from a text corpus, wrap it in a [`Corrector`]
//! and ask for the most likely intended word. Candidates are generated in
//! fixed priority tiers (letter duplication, confusable-letter swaps, then
//! the classic one- and two-edit neighborhoods) and ranked by corpus
//! frequency within the first tier that hits the vocabulary.

pub mod corpus;
pub mod corrector;
pub mod edits;
pub mod error;
pub mod evaluate;
pub mod frequency;

pub use corrector::Corrector;
pub use error::{Result, SpellError};
pub use evaluate::{EvalReport, TestCase, evaluate, parse_test_set, read_test_set};
pub use frequency::FrequencyModel;
