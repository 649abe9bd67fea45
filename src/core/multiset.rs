//! Letter multiset arithmetic
//!
//! The unscrambler decides whether a word can be spelled from a pool of
//! letters by comparing letter counts, so duplicate letters are honored.

use rustc_hash::FxHashMap;

/// A multiset of letters: each letter mapped to its occurrence count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterCounts {
    counts: FxHashMap<char, usize>,
    total: usize,
}

impl LetterCounts {
    /// Count the letters of a word
    ///
    /// # Examples
    /// ```
    /// use wordle_lexicon::core::LetterCounts;
    ///
    /// let counts = LetterCounts::of("speed");
    /// assert_eq!(counts.count('e'), 2);
    /// assert_eq!(counts.count('z'), 0);
    /// assert_eq!(counts.total(), 5);
    /// ```
    #[must_use]
    pub fn of(word: &str) -> Self {
        let mut counts = FxHashMap::default();
        let mut total = 0;
        for letter in word.chars() {
            *counts.entry(letter).or_insert(0) += 1;
            total += 1;
        }
        Self { counts, total }
    }

    /// Occurrences of a single letter
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total number of letters, duplicates included
    #[inline]
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Check whether this multiset contains `other` (sub-multiset test)
    ///
    /// Every letter of `other` must appear here at least as many times.
    ///
    /// # Examples
    /// ```
    /// use wordle_lexicon::core::LetterCounts;
    ///
    /// let pool = LetterCounts::of("arcenxx");
    /// assert!(pool.covers(&LetterCounts::of("crane")));
    /// assert!(!pool.covers(&LetterCounts::of("cranes")));
    /// ```
    #[must_use]
    pub fn covers(&self, other: &Self) -> bool {
        if other.total > self.total {
            return false;
        }
        other
            .counts
            .iter()
            .all(|(&letter, &needed)| self.count(letter) >= needed)
    }
}
