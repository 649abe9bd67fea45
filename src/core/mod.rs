//! Core domain types for the dictionary engine
//!
//! This module contains the fundamental domain types with zero I/O.
//! All types here are pure, testable, and have clear mathematical properties.

mod alphabet;
mod multiset;

pub use alphabet::{Alphabet, AlphabetError};
pub use multiset::LetterCounts;

pub(crate) use alphabet::class_of;
