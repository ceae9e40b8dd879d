//! Batch evaluation against `correct: wrong1 wrong2 ...` test sets.

use std::fmt;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use rayon::prelude::*;

use crate::corrector::Corrector;
use crate::error::{Result, SpellError};

/// One (expected, misspelled) pair from a test set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub expected: String,
    pub typo: String,
}

/// Parse test-set text: one expected word per line, colon, then its
/// misspellings separated by whitespace. Blank lines are skipped.
pub fn parse_test_set(text: &str) -> Result<Vec<TestCase>> {
    let mut cases = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let (expected, typos) = line.split_once(':').ok_or_else(|| {
            SpellError::MalformedTestSet {
                line: line.to_string(),
            }
        })?;
        let expected = expected.trim();
        for typo in typos.split_whitespace() {
            cases.push(TestCase {
                expected: expected.to_string(),
                typo: typo.to_string(),
            });
        }
    }
    Ok(cases)
}

pub fn read_test_set<P: AsRef<Path>>(path: P) -> Result<Vec<TestCase>> {
    parse_test_set(&fs::read_to_string(path)?)
}

/// Outcome of running a corrector over a test set.
#[derive(Debug, Clone)]
pub struct EvalReport {
    pub total: usize,
    pub correct: usize,
    /// Misses whose expected word is not in the vocabulary at all.
    pub unknown: usize,
    pub elapsed: Duration,
}

impl EvalReport {
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total as f64
    }

    pub fn unknown_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.unknown as f64 / self.total as f64
    }

    pub fn words_per_second(&self) -> f64 {
        self.total as f64 / self.elapsed.as_secs_f64()
    }
}

impl fmt::Display for EvalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.0}% of {} correct ({:.0}% unknown) at {:.0} words per second",
            self.accuracy() * 100.0,
            self.total,
            self.unknown_rate() * 100.0,
            self.words_per_second()
        )
    }
}

/// Run `correct` on every case and tally the results.
pub fn evaluate(corrector: &Corrector, cases: &[TestCase]) -> EvalReport {
    let start = Instant::now();
    let (correct, unknown) = cases
        .par_iter()
        .map(|case| {
            let got = corrector.correct(&case.typo);
            if got == case.expected {
                (1, 0)
            } else if !corrector.model().contains(&case.expected) {
                (0, 1)
            } else {
                (0, 0)
            }
        })
        .reduce(|| (0, 0), |a, b| (a.0 + b.0, a.1 + b.1));
    EvalReport {
        total: cases.len(),
        correct,
        unknown,
        elapsed: start.elapsed(),
    }
}
