//! Word-Constraint Dictionary Engine
//!
//! A lexicon loader plus a constraint-pattern compiler: turns a
//! Wordle-style guess/feedback string into a filter over a word list, and
//! answers anagram and n-gram-legality queries along the way.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_lexicon::core::Alphabet;
//! use wordle_lexicon::dictionary::Dictionary;
//! use wordle_lexicon::lexicon::MemorySource;
//!
//! let dictionary = Dictionary::fixed_length(
//!     "demo",
//!     Alphabet::english(),
//!     5,
//!     MemorySource::new(["crane", "chase", "chant"]),
//! );
//!
//! // Slot 1 is 'c', slot 2 is 'h', slot 3 is 'a'; the rest are open
//! let options = dictionary.find_options("c h a ? ?").unwrap();
//! assert_eq!(options, ["chase", "chant"]);
//!
//! // Exact anagrams of the given letters
//! let words = dictionary.unscramble_sequence("arcen", false).unwrap();
//! assert_eq!(words, ["crane"]);
//! ```

// Core domain types
pub mod core;

// Constraint pattern compilation
pub mod constraint;

// Dictionary queries
pub mod dictionary;

// Lexicon sources
pub mod lexicon;

// Embedded word lists
pub mod wordlists;
