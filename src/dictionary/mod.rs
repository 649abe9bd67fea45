//! Dictionary queries over a lazily-loaded lexicon
//!
//! A Dictionary owns a name, an alphabet, an optional fixed word length,
//! and a lexicon source. The lexicon loads once, on the first query, and
//! the outcome (words or failure) is cached for the life of the
//! instance. Queries never mutate lexicon state, and every word they
//! return is drawn from the loaded lexicon.
//!
//! A dictionary with a fixed word length additionally supports slot-based
//! constraint queries via [`Dictionary::find_options`].

mod ngram;

use std::fmt;
use std::sync::{Arc, OnceLock};

use regex::Regex;

use crate::constraint::{CompiledPattern, PatternError};
use crate::core::{Alphabet, LetterCounts};
use crate::lexicon::{LexiconError, LexiconSource};

/// A word set over an alphabet, with filtering and analysis queries
///
/// Construct a standard dictionary with [`Dictionary::new`] (arbitrary
/// word lengths) or a fixed-length one with [`Dictionary::fixed_length`]
/// (required for constraint queries).
pub struct Dictionary {
    name: String,
    alphabet: Alphabet,
    word_length: Option<usize>,
    source: Box<dyn LexiconSource>,
    lexicon: OnceLock<Result<Vec<String>, LexiconError>>,
}

/// Error type for dictionary queries
///
/// Distinguishes an unusable dictionary (`Lexicon`) and a malformed query
/// (`Pattern`, `Unsized`, `SequenceLengthTooLarge`) from the normal empty
/// result, which is simply `Ok(vec![])`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    /// The backing lexicon could not be loaded
    Lexicon(LexiconError),
    /// The constraint pattern was malformed
    Pattern(PatternError),
    /// A constraint query was issued against a dictionary with no fixed length
    Unsized { name: String },
    /// The alphabet's sequence universe for this length overflows usize
    SequenceLengthTooLarge {
        alphabet_size: usize,
        sequence_length: usize,
    },
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lexicon(e) => write!(f, "{e}"),
            Self::Pattern(e) => write!(f, "{e}"),
            Self::Unsized { name } => {
                write!(f, "Dictionary '{name}' has no fixed word length for constraint queries")
            }
            Self::SequenceLengthTooLarge {
                alphabet_size,
                sequence_length,
            } => write!(
                f,
                "An alphabet of {alphabet_size} letters has too many sequences of length {sequence_length} to enumerate"
            ),
        }
    }
}

impl std::error::Error for DictionaryError {}

impl From<LexiconError> for DictionaryError {
    fn from(e: LexiconError) -> Self {
        Self::Lexicon(e)
    }
}

impl From<PatternError> for DictionaryError {
    fn from(e: PatternError) -> Self {
        Self::Pattern(e)
    }
}

/// Derives a fixed-length lexicon from a shared root dictionary
///
/// Loading goes through the root, so there is no failure mode beyond the
/// root's own.
struct ResizedSource {
    root: Arc<Dictionary>,
    word_length: usize,
}

impl LexiconSource for ResizedSource {
    fn load(&self) -> Result<Vec<String>, LexiconError> {
        let words = match self.root.load_cell() {
            Ok(words) => words,
            Err(e) => return Err(e.clone()),
        };
        Ok(words
            .iter()
            .filter(|word| word.chars().count() == self.word_length)
            .cloned()
            .collect())
    }
}

impl Dictionary {
    /// Create a standard dictionary: arbitrary word lengths
    pub fn new(
        name: impl Into<String>,
        alphabet: Alphabet,
        source: impl LexiconSource + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            alphabet,
            word_length: None,
            source: Box::new(source),
            lexicon: OnceLock::new(),
        }
    }

    /// Create a fixed-length dictionary: every word exactly `word_length` letters
    ///
    /// Words of any other length are dropped during load. Fixed length is
    /// what makes slot-based constraint queries well-defined.
    pub fn fixed_length(
        name: impl Into<String>,
        alphabet: Alphabet,
        word_length: usize,
        source: impl LexiconSource + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            alphabet,
            word_length: Some(word_length),
            source: Box::new(source),
            lexicon: OnceLock::new(),
        }
    }

    /// Derive a fixed-length dictionary from a shared root
    ///
    /// The new dictionary's lexicon is the root's words of exactly
    /// `word_length` letters, loaded lazily through the root. Its name
    /// composes the root's name and the length.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use wordle_lexicon::core::Alphabet;
    /// use wordle_lexicon::dictionary::Dictionary;
    /// use wordle_lexicon::lexicon::MemorySource;
    ///
    /// let root = Arc::new(Dictionary::new(
    ///     "demo",
    ///     Alphabet::english(),
    ///     MemorySource::new(["cat", "crane", "chase"]),
    /// ));
    /// let sized = Dictionary::resized(&root, 5);
    ///
    /// assert_eq!(sized.name(), "demo-5");
    /// assert_eq!(sized.words().unwrap(), ["crane", "chase"]);
    /// ```
    #[must_use]
    pub fn resized(root: &Arc<Self>, word_length: usize) -> Self {
        Self {
            name: format!("{}-{}", root.name, word_length),
            alphabet: root.alphabet.clone(),
            word_length: Some(word_length),
            source: Box::new(ResizedSource {
                root: Arc::clone(root),
                word_length,
            }),
            lexicon: OnceLock::new(),
        }
    }

    /// The dictionary's name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The dictionary's alphabet
    #[must_use]
    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Fixed word length, if this dictionary has one
    #[must_use]
    pub const fn word_length(&self) -> Option<usize> {
        self.word_length
    }

    /// Load-once access to the normalized lexicon, caching words or failure
    fn load_cell(&self) -> &Result<Vec<String>, LexiconError> {
        self.lexicon
            .get_or_init(|| self.source.load().map(|raw| self.normalize(raw)))
    }

    /// Trim, lowercase, and drop entries that do not fit this dictionary
    fn normalize(&self, raw: Vec<String>) -> Vec<String> {
        raw.into_iter()
            .map(|line| line.trim().to_lowercase())
            .filter(|word| !word.is_empty() && self.alphabet.spells(word))
            .filter(|word| {
                self.word_length
                    .is_none_or(|length| word.chars().count() == length)
            })
            .collect()
    }

    fn lexicon(&self) -> Result<&[String], DictionaryError> {
        match self.load_cell() {
            Ok(words) => Ok(words),
            Err(e) => Err(DictionaryError::Lexicon(e.clone())),
        }
    }

    fn retain(&self, keep: impl Fn(&str) -> bool) -> Result<Vec<&str>, DictionaryError> {
        Ok(self
            .lexicon()?
            .iter()
            .map(String::as_str)
            .filter(|word| keep(word))
            .collect())
    }

    /// The full loaded lexicon, in load order
    ///
    /// Triggers the lazy load on first call.
    ///
    /// # Errors
    /// Returns `DictionaryError::Lexicon` when the backing source is
    /// unreadable; the failure is cached and re-surfaced on every query.
    pub fn words(&self) -> Result<&[String], DictionaryError> {
        self.lexicon()
    }

    /// Words containing the given substring
    ///
    /// # Errors
    /// Returns `DictionaryError::Lexicon` when the lexicon cannot load.
    pub fn words_that_contain(&self, fragment: &str) -> Result<Vec<&str>, DictionaryError> {
        self.retain(|word| word.contains(fragment))
    }

    /// Words not containing the given substring
    ///
    /// # Errors
    /// Returns `DictionaryError::Lexicon` when the lexicon cannot load.
    pub fn words_that_do_not_contain(&self, fragment: &str) -> Result<Vec<&str>, DictionaryError> {
        self.retain(|word| !word.contains(fragment))
    }

    /// Words containing every one of the given substrings
    ///
    /// Substrings are tested independently; overlapping occurrences count.
    ///
    /// # Errors
    /// Returns `DictionaryError::Lexicon` when the lexicon cannot load.
    pub fn words_that_contain_all(
        &self,
        fragments: &[&str],
    ) -> Result<Vec<&str>, DictionaryError> {
        self.retain(|word| fragments.iter().all(|fragment| word.contains(fragment)))
    }

    /// Words containing at least one of the given substrings
    ///
    /// # Errors
    /// Returns `DictionaryError::Lexicon` when the lexicon cannot load.
    pub fn words_that_contain_any(
        &self,
        fragments: &[&str],
    ) -> Result<Vec<&str>, DictionaryError> {
        self.retain(|word| fragments.iter().any(|fragment| word.contains(fragment)))
    }

    /// Words containing none of the given substrings
    ///
    /// # Errors
    /// Returns `DictionaryError::Lexicon` when the lexicon cannot load.
    pub fn words_that_contain_none(
        &self,
        fragments: &[&str],
    ) -> Result<Vec<&str>, DictionaryError> {
        self.retain(|word| !fragments.iter().any(|fragment| word.contains(fragment)))
    }

    /// Words starting with the given prefix
    ///
    /// # Errors
    /// Returns `DictionaryError::Lexicon` when the lexicon cannot load.
    pub fn words_that_start_with(&self, prefix: &str) -> Result<Vec<&str>, DictionaryError> {
        self.retain(|word| word.starts_with(prefix))
    }

    /// Words not starting with the given prefix
    ///
    /// # Errors
    /// Returns `DictionaryError::Lexicon` when the lexicon cannot load.
    pub fn words_that_do_not_start_with(
        &self,
        prefix: &str,
    ) -> Result<Vec<&str>, DictionaryError> {
        self.retain(|word| !word.starts_with(prefix))
    }

    /// Words starting with at least one of the given prefixes
    ///
    /// # Errors
    /// Returns `DictionaryError::Lexicon` when the lexicon cannot load.
    pub fn words_that_start_with_any(
        &self,
        prefixes: &[&str],
    ) -> Result<Vec<&str>, DictionaryError> {
        self.retain(|word| prefixes.iter().any(|prefix| word.starts_with(prefix)))
    }

    /// Words ending with the given suffix
    ///
    /// # Errors
    /// Returns `DictionaryError::Lexicon` when the lexicon cannot load.
    pub fn words_that_end_with(&self, suffix: &str) -> Result<Vec<&str>, DictionaryError> {
        self.retain(|word| word.ends_with(suffix))
    }

    /// Words not ending with the given suffix
    ///
    /// # Errors
    /// Returns `DictionaryError::Lexicon` when the lexicon cannot load.
    pub fn words_that_do_not_end_with(&self, suffix: &str) -> Result<Vec<&str>, DictionaryError> {
        self.retain(|word| !word.ends_with(suffix))
    }

    /// Words ending with at least one of the given suffixes
    ///
    /// # Errors
    /// Returns `DictionaryError::Lexicon` when the lexicon cannot load.
    pub fn words_that_end_with_any(
        &self,
        suffixes: &[&str],
    ) -> Result<Vec<&str>, DictionaryError> {
        self.retain(|word| suffixes.iter().any(|suffix| word.ends_with(suffix)))
    }

    /// Words matching the given regex
    ///
    /// This is the mechanism underlying constraint queries.
    ///
    /// # Errors
    /// Returns `DictionaryError::Lexicon` when the lexicon cannot load.
    pub fn words_that_match(&self, pattern: &Regex) -> Result<Vec<&str>, DictionaryError> {
        self.retain(|word| pattern.is_match(word))
    }

    /// Words not matching the given regex
    ///
    /// # Errors
    /// Returns `DictionaryError::Lexicon` when the lexicon cannot load.
    pub fn words_that_do_not_match(&self, pattern: &Regex) -> Result<Vec<&str>, DictionaryError> {
        self.retain(|word| !pattern.is_match(word))
    }

    /// Every contiguous length-n sequence appearing in any word
    ///
    /// Deduplicated and sorted. A length of zero yields an empty set.
    ///
    /// # Errors
    /// Returns `DictionaryError::Lexicon` when the lexicon cannot load.
    pub fn sequences_of_length(&self, n: usize) -> Result<Vec<String>, DictionaryError> {
        let observed = ngram::observed(self.lexicon()?, n, ngram::Placement::Anywhere);
        let mut sequences: Vec<String> = observed.into_iter().collect();
        sequences.sort_unstable();
        Ok(sequences)
    }

    /// Length-n sequences over the alphabet that appear in no word
    ///
    /// # Errors
    /// Returns `DictionaryError::Lexicon` when the lexicon cannot load, or
    /// `SequenceLengthTooLarge` when the A^n universe overflows usize.
    pub fn illegal_sequences_of_length(&self, n: usize) -> Result<Vec<String>, DictionaryError> {
        self.illegal_sequences(n, ngram::Placement::Anywhere)
    }

    /// Length-n sequences over the alphabet that start no word
    ///
    /// # Errors
    /// Returns `DictionaryError::Lexicon` when the lexicon cannot load, or
    /// `SequenceLengthTooLarge` when the A^n universe overflows usize.
    pub fn illegal_starting_sequences_of_length(
        &self,
        n: usize,
    ) -> Result<Vec<String>, DictionaryError> {
        self.illegal_sequences(n, ngram::Placement::Start)
    }

    /// Length-n sequences over the alphabet that end no word
    ///
    /// # Errors
    /// Returns `DictionaryError::Lexicon` when the lexicon cannot load, or
    /// `SequenceLengthTooLarge` when the A^n universe overflows usize.
    pub fn illegal_ending_sequences_of_length(
        &self,
        n: usize,
    ) -> Result<Vec<String>, DictionaryError> {
        self.illegal_sequences(n, ngram::Placement::End)
    }

    fn illegal_sequences(
        &self,
        n: usize,
        placement: ngram::Placement,
    ) -> Result<Vec<String>, DictionaryError> {
        let words = self.lexicon()?;
        if n == 0 {
            return Ok(Vec::new());
        }
        let total = ngram::universe_size(self.alphabet.len(), n).ok_or(
            DictionaryError::SequenceLengthTooLarge {
                alphabet_size: self.alphabet.len(),
                sequence_length: n,
            },
        )?;

        let observed = ngram::observed(words, n, placement);
        Ok(ngram::complement(&self.alphabet, total, n, &observed))
    }

    /// Words spellable by rearranging the given letters
    ///
    /// With `partial` false, a word must use every letter exactly (a true
    /// anagram); with `partial` true, any sub-multiset of the letters
    /// qualifies.
    ///
    /// # Errors
    /// Returns `DictionaryError::Lexicon` when the lexicon cannot load.
    ///
    /// # Examples
    /// ```
    /// use wordle_lexicon::core::Alphabet;
    /// use wordle_lexicon::dictionary::Dictionary;
    /// use wordle_lexicon::lexicon::MemorySource;
    ///
    /// let dictionary = Dictionary::new(
    ///     "demo",
    ///     Alphabet::english(),
    ///     MemorySource::new(["crane", "chase"]),
    /// );
    ///
    /// assert_eq!(dictionary.unscramble_sequence("arcen", false).unwrap(), ["crane"]);
    /// assert_eq!(dictionary.unscramble_sequence("arcenxx", true).unwrap(), ["crane"]);
    /// ```
    pub fn unscramble_sequence(
        &self,
        letters: &str,
        partial: bool,
    ) -> Result<Vec<&str>, DictionaryError> {
        let pool = LetterCounts::of(&letters.trim().to_lowercase());
        self.retain(|word| {
            let counts = LetterCounts::of(word);
            if partial {
                pool.covers(&counts)
            } else {
                pool == counts
            }
        })
    }

    /// Words surviving a guess/feedback constraint pattern
    ///
    /// Compiles the pattern against this dictionary's word length and
    /// alphabet, then filters the lexicon. A well-formed pattern with no
    /// surviving words is a normal empty result, not an error.
    ///
    /// # Errors
    /// - `DictionaryError::Unsized` when this dictionary has no fixed
    ///   word length.
    /// - `DictionaryError::Pattern` when the pattern is malformed;
    ///   rejected before any lexicon scan.
    /// - `DictionaryError::Lexicon` when the lexicon cannot load.
    ///
    /// # Examples
    /// ```
    /// use wordle_lexicon::core::Alphabet;
    /// use wordle_lexicon::dictionary::Dictionary;
    /// use wordle_lexicon::lexicon::MemorySource;
    ///
    /// let dictionary = Dictionary::fixed_length(
    ///     "demo",
    ///     Alphabet::english(),
    ///     5,
    ///     MemorySource::new(["crane", "chase", "chant"]),
    /// );
    ///
    /// let options = dictionary.find_options("c h a ? ?").unwrap();
    /// assert_eq!(options, ["chase", "chant"]);
    /// ```
    pub fn find_options(&self, pattern: &str) -> Result<Vec<&str>, DictionaryError> {
        let word_length = self.word_length.ok_or_else(|| DictionaryError::Unsized {
            name: self.name.clone(),
        })?;
        let compiled = CompiledPattern::compile(pattern, word_length, &self.alphabet)?;
        self.retain(|word| compiled.matches(word))
    }
}
