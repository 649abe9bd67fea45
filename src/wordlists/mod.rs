//! Embedded word lists and the named dictionaries built from them
//!
//! The guess list is the full set of accepted five-letter words; the
//! solution list is the named subset eligible as puzzle answers.

mod embedded;

pub use embedded::{GUESSES, GUESSES_COUNT, SOLUTIONS, SOLUTIONS_COUNT};

use crate::core::Alphabet;
use crate::dictionary::Dictionary;
use crate::lexicon::MemorySource;

/// Word length shared by the embedded Wordle lists
pub const WORDLE_WORD_LENGTH: usize = 5;

/// The guess dictionary: every accepted five-letter word
///
/// # Examples
/// ```
/// use wordle_lexicon::wordlists::original_guess_dictionary;
///
/// let dictionary = original_guess_dictionary();
/// assert_eq!(dictionary.name(), "wordle-guesses");
/// assert!(dictionary.words().unwrap().iter().any(|w| w == "crane"));
/// ```
#[must_use]
pub fn original_guess_dictionary() -> Dictionary {
    Dictionary::fixed_length(
        "wordle-guesses",
        Alphabet::english(),
        WORDLE_WORD_LENGTH,
        MemorySource::new(GUESSES.iter().copied()),
    )
}

/// The solution dictionary: the subset of guesses eligible as answers
#[must_use]
pub fn original_solution_dictionary() -> Dictionary {
    Dictionary::fixed_length(
        "wordle-solutions",
        Alphabet::english(),
        WORDLE_WORD_LENGTH,
        MemorySource::new(SOLUTIONS.iter().copied()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guesses_count_matches_const() {
        assert_eq!(GUESSES.len(), GUESSES_COUNT);
    }

    #[test]
    fn solutions_count_matches_const() {
        assert_eq!(SOLUTIONS.len(), SOLUTIONS_COUNT);
    }

    #[test]
    fn solutions_are_valid_words() {
        for &word in SOLUTIONS {
            assert_eq!(word.len(), WORDLE_WORD_LENGTH, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn solutions_subset_of_guesses() {
        let guess_set: std::collections::HashSet<_> = GUESSES.iter().collect();

        for &solution in SOLUTIONS {
            assert!(
                guess_set.contains(&solution),
                "Solution '{solution}' not in guess list"
            );
        }
    }

    #[test]
    fn guess_dictionary_loads_every_entry() {
        let dictionary = original_guess_dictionary();
        // Every embedded entry already conforms, so none are dropped
        assert_eq!(dictionary.words().unwrap().len(), GUESSES_COUNT);
        assert_eq!(dictionary.word_length(), Some(WORDLE_WORD_LENGTH));
    }

    #[test]
    fn solution_dictionary_loads_every_entry() {
        let dictionary = original_solution_dictionary();
        assert_eq!(dictionary.words().unwrap().len(), SOLUTIONS_COUNT);
    }

    #[test]
    fn solution_dictionary_answers_constraint_queries() {
        let dictionary = original_solution_dictionary();
        let options = dictionary.find_options("c r a n e").unwrap();
        assert!(options.contains(&"crane"));
    }
}
