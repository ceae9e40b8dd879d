//! Candidate generators: pure functions from a word to mutated variants.
//!
//! None of these consult the vocabulary; filtering candidates down to known
//! words is the corrector's job. The composed generators (`edits2`, `edits3`,
//! `edits5`) return lazy iterators because their output can be combinatorially
//! large and is usually short-circuited away by an earlier tier.

use std::collections::HashSet;

const LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";

/// Letter pairs that are commonly mistaken for one another. Symmetric, and
/// intentionally limited to exactly these five pairs.
const CONFUSABLE_PAIRS: [(char, char); 5] =
    [('c', 's'), ('a', 'e'), ('t', 'd'), ('b', 'p'), ('n', 'm')];

fn confusable(c: char) -> Option<char> {
    CONFUSABLE_PAIRS.iter().find_map(|&(x, y)| {
        if c == x {
            Some(y)
        } else if c == y {
            Some(x)
        } else {
            None
        }
    })
}

fn splice(head: &[char], mid: &[char], tail: &[char]) -> String {
    let mut out = String::with_capacity(head.len() + mid.len() + tail.len() + 3);
    out.extend(head);
    out.extend(mid);
    out.extend(tail);
    out
}

/// Every variant of `word` with one of its letters doubled.
pub fn duplicate_letter(word: &str) -> HashSet<String> {
    let chars: Vec<char> = word.chars().collect();
    (0..chars.len())
        .map(|i| splice(&chars[..=i], &[chars[i]], &chars[i + 1..]))
        .collect()
}

/// Every variant of `word` with one letter replaced by its confusable
/// partner. Positions whose letter has no partner contribute nothing.
pub fn swap_similar_letters(word: &str) -> HashSet<String> {
    let chars: Vec<char> = word.chars().collect();
    (0..chars.len())
        .filter_map(|i| {
            confusable(chars[i]).map(|swap| splice(&chars[..i], &[swap], &chars[i + 1..]))
        })
        .collect()
}

/// The classic single-edit neighborhood: all deletes, adjacent transposes,
/// substitutions and insertions over the lowercase alphabet.
pub fn edits1(word: &str) -> HashSet<String> {
    let chars: Vec<char> = word.chars().collect();
    let n = chars.len();
    let mut out = HashSet::new();

    for i in 0..n {
        // delete
        out.insert(splice(&chars[..i], &[], &chars[i + 1..]));
        // transpose with the next letter
        if i + 1 < n {
            out.insert(splice(&chars[..i], &[chars[i + 1], chars[i]], &chars[i + 2..]));
        }
        // substitute
        for c in LETTERS.chars() {
            out.insert(splice(&chars[..i], &[c], &chars[i + 1..]));
        }
    }
    // insert, at every position including both ends
    for i in 0..=n {
        for c in LETTERS.chars() {
            out.insert(splice(&chars[..i], &[c], &chars[i..]));
        }
    }
    out
}

/// Everything two classic edits away. Lazy and non-deduplicated; consumers
/// filter through the vocabulary rather than materializing the sequence.
pub fn edits2(word: &str) -> impl Iterator<Item = String> + use<> {
    edits1(word).into_iter().flat_map(|e| edits1(&e))
}

/// One classic edit applied to every letter-duplicated variant.
pub fn edits3(word: &str) -> impl Iterator<Item = String> + use<> {
    duplicate_letter(word).into_iter().flat_map(|e| edits1(&e))
}

/// A confusable-letter swap applied to every letter-duplicated variant.
pub fn edits5(word: &str) -> impl Iterator<Item = String> + use<> {
    duplicate_letter(word)
        .into_iter()
        .flat_map(|e| swap_similar_letters(&e))
}
