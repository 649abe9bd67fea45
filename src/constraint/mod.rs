//! Constraint pattern compilation
//!
//! Turns a guess/feedback pattern string into a matcher over fixed-length
//! words. A pattern is a whitespace-separated token per slot, optionally
//! trailed by a global exclusion token:
//!
//! - a literal alphabet letter: confirmed at that position,
//! - `?`: unconstrained, beyond eliminating absent letters,
//! - `!<letters>`: the letters occur in the word but not at this slot,
//! - `[<letters>]` (trailing, optional): the letters occur nowhere.
//!
//! `"c ? a ? !t [rsh]"` for a 5-letter puzzle: position 1 is `c`,
//! position 3 is `a`, position 5 is not `t` (but `t` occurs elsewhere),
//! and `r`, `s`, `h` occur nowhere in the solution.
//!
//! Compilation produces one anchored regex built from per-slot character
//! classes, plus the set of letters the word must contain somewhere. A
//! contradictory pattern (say, a literal that is also an absent letter)
//! compiles to a matcher that matches nothing; only malformed input is an
//! error.

use std::fmt;

use regex::Regex;
use rustc_hash::FxHashSet;

use crate::core::{Alphabet, class_of};

/// Error type for malformed patterns
///
/// Raised before any lexicon scan, so a format problem is always
/// distinguishable from an empty result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    WrongTokenCount { expected: usize, found: usize },
    InvalidToken { token: String, position: usize },
    InvalidAbsentToken { token: String },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongTokenCount { expected, found } => {
                write!(f, "Pattern must have exactly {expected} slot tokens, found {found}")
            }
            Self::InvalidToken { token, position } => {
                write!(
                    f,
                    "Slot {position} token '{token}' is not a letter, '?', or '!' followed by letters"
                )
            }
            Self::InvalidAbsentToken { token } => {
                write!(
                    f,
                    "Absent-letter token '{token}' must be one or more alphabet letters in brackets"
                )
            }
        }
    }
}

impl std::error::Error for PatternError {}

/// One parsed positional token
enum Slot {
    Literal(char),
    Any,
    Excluding(Vec<char>),
}

/// A compiled constraint pattern
///
/// Holds the anchored slot regex and the letters required to occur
/// somewhere in the word. An unsatisfiable pattern carries no regex and
/// matches nothing.
#[derive(Debug)]
pub struct CompiledPattern {
    regex: Option<Regex>,
    required: Vec<char>,
}

impl CompiledPattern {
    /// Compile a pattern string against a word length and alphabet
    ///
    /// # Errors
    /// Returns `PatternError` when the token count differs from
    /// `word_length` or a token matches none of the recognized shapes.
    ///
    /// # Panics
    /// Does not panic in practice: generated slot classes always form a
    /// valid expression.
    ///
    /// # Examples
    /// ```
    /// use wordle_lexicon::constraint::CompiledPattern;
    /// use wordle_lexicon::core::Alphabet;
    ///
    /// let alphabet = Alphabet::english();
    /// let pattern = CompiledPattern::compile("c ? a ? !t [rsh]", 5, &alphabet).unwrap();
    ///
    /// assert!(pattern.matches("coati"));
    /// assert!(!pattern.matches("coast")); // 's' is absent
    /// assert!(!pattern.matches("chant")); // 't' may not sit in slot 5
    /// assert!(!pattern.matches("claim")); // no 't' anywhere
    /// ```
    pub fn compile(
        pattern: &str,
        word_length: usize,
        alphabet: &Alphabet,
    ) -> Result<Self, PatternError> {
        let mut tokens: Vec<&str> = pattern.split_whitespace().collect();
        let absent = take_absent_letters(&mut tokens, alphabet)?;

        if tokens.len() != word_length {
            return Err(PatternError::WrongTokenCount {
                expected: word_length,
                found: tokens.len(),
            });
        }

        let slots = parse_slots(&tokens, alphabet)?;

        // Letters named by any '!' token must occur somewhere in the word
        let mut required: Vec<char> = Vec::new();
        for slot in &slots {
            if let Slot::Excluding(letters) = slot {
                for &letter in letters {
                    if !required.contains(&letter) {
                        required.push(letter);
                    }
                }
            }
        }

        let Some(source) = render_regex(&slots, alphabet, &absent) else {
            // Some slot has no letter options left; a legitimate
            // "no possible words" outcome, not a format error
            return Ok(Self {
                regex: None,
                required,
            });
        };

        let regex = Regex::new(&source).expect("slot classes form a valid expression");
        Ok(Self {
            regex: Some(regex),
            required,
        })
    }

    /// Check a word against the compiled pattern
    ///
    /// True when the word matches every slot constraint and contains every
    /// required (unplaced) letter at least once. The occurrence check is
    /// existential, not an exact multiplicity count.
    #[must_use]
    pub fn matches(&self, word: &str) -> bool {
        let Some(regex) = &self.regex else {
            return false;
        };
        regex.is_match(word) && self.required.iter().all(|&letter| word.contains(letter))
    }

    /// Letters the word must contain somewhere, in first-appearance order
    #[must_use]
    pub fn required_letters(&self) -> &[char] {
        &self.required
    }

    /// False when some slot was left with no letter options
    #[must_use]
    pub const fn is_satisfiable(&self) -> bool {
        self.regex.is_some()
    }
}

/// Pop and parse the trailing `[...]` token, if present
fn take_absent_letters(
    tokens: &mut Vec<&str>,
    alphabet: &Alphabet,
) -> Result<FxHashSet<char>, PatternError> {
    let mut absent = FxHashSet::default();

    let Some(&last) = tokens.last() else {
        return Ok(absent);
    };
    if !last.starts_with('[') {
        return Ok(absent);
    }

    let invalid = || PatternError::InvalidAbsentToken {
        token: last.to_string(),
    };

    // Brackets are ASCII, so the byte slice below stays on char boundaries
    if !last.ends_with(']') || last.len() < 3 {
        return Err(invalid());
    }
    let inner = &last[1..last.len() - 1];
    if !alphabet.spells(inner) {
        return Err(invalid());
    }

    absent.extend(inner.chars());
    tokens.pop();
    Ok(absent)
}

fn parse_slots(tokens: &[&str], alphabet: &Alphabet) -> Result<Vec<Slot>, PatternError> {
    let mut slots = Vec::with_capacity(tokens.len());

    for (index, &token) in tokens.iter().enumerate() {
        let invalid = || PatternError::InvalidToken {
            token: token.to_string(),
            position: index + 1,
        };

        let slot = if token == "?" {
            Slot::Any
        } else if let Some(rest) = token.strip_prefix('!') {
            if rest.is_empty() || !alphabet.spells(rest) {
                return Err(invalid());
            }
            Slot::Excluding(rest.chars().collect())
        } else {
            let mut chars = token.chars();
            match (chars.next(), chars.next()) {
                (Some(letter), None) if alphabet.contains(letter) => Slot::Literal(letter),
                _ => return Err(invalid()),
            }
        };

        slots.push(slot);
    }

    Ok(slots)
}

/// Concatenate per-slot character classes into one anchored expression
///
/// Returns None when any slot's option set is empty.
fn render_regex(slots: &[Slot], alphabet: &Alphabet, absent: &FxHashSet<char>) -> Option<String> {
    let mut source = String::from("^");

    for slot in slots {
        let options: Vec<char> = match slot {
            Slot::Literal(letter) => [*letter]
                .into_iter()
                .filter(|c| !absent.contains(c))
                .collect(),
            Slot::Any => alphabet
                .letters()
                .iter()
                .copied()
                .filter(|c| !absent.contains(c))
                .collect(),
            Slot::Excluding(excluded) => alphabet
                .letters()
                .iter()
                .copied()
                .filter(|c| !absent.contains(c) && !excluded.contains(c))
                .collect(),
        };

        if options.is_empty() {
            return None;
        }
        if options.len() == alphabet.len() {
            source.push_str(&alphabet.charset_token());
        } else {
            source.push_str(&class_of(options));
        }
    }

    source.push('$');
    Some(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english() -> Alphabet {
        Alphabet::english()
    }

    #[test]
    fn literal_slots_pin_positions() {
        let pattern = CompiledPattern::compile("c h a ? ?", 5, &english()).unwrap();

        assert!(pattern.matches("chase"));
        assert!(pattern.matches("chant"));
        assert!(!pattern.matches("crane")); // Slot 2 is not 'h'
    }

    #[test]
    fn pattern_of_all_literals_matches_its_own_word() {
        let pattern = CompiledPattern::compile("c r a n e", 5, &english()).unwrap();
        assert!(pattern.matches("crane"));
        assert!(!pattern.matches("crane "));
        assert!(!pattern.matches("cranes"));
    }

    #[test]
    fn absent_letters_eliminate_everywhere() {
        let pattern = CompiledPattern::compile("? ? ? ? ? [xyz]", 5, &english()).unwrap();

        assert!(pattern.matches("crane"));
        assert!(!pattern.matches("puzzy")); // Contains 'z' and 'y'
        assert!(!pattern.matches("toxic")); // Contains 'x'
    }

    #[test]
    fn unplaced_letters_are_required_elsewhere() {
        let pattern = CompiledPattern::compile("? ? ? ? !t", 5, &english()).unwrap();

        assert_eq!(pattern.required_letters(), &['t']);
        assert!(pattern.matches("table")); // 't' present, not in slot 5
        assert!(!pattern.matches("crane")); // No 't' at all
        assert!(!pattern.matches("chant")); // 't' sits in the excluded slot
    }

    #[test]
    fn unplaced_letters_union_across_slots() {
        let pattern = CompiledPattern::compile("!a ? !sa ? ?", 5, &english()).unwrap();
        assert_eq!(pattern.required_letters(), &['a', 's']);
    }

    #[test]
    fn combined_pattern_with_every_token_kind() {
        let pattern = CompiledPattern::compile("c ? a ? !t [rsh]", 5, &english()).unwrap();

        assert!(pattern.matches("coati"));
        // 'coast' has 's' (absent), 'chant' has 't' in slot 5
        assert!(!pattern.matches("coast"));
        assert!(!pattern.matches("chant"));
    }

    #[test]
    fn wrong_token_count_is_a_format_error() {
        let result = CompiledPattern::compile("c h a ?", 5, &english());
        assert_eq!(
            result.unwrap_err(),
            PatternError::WrongTokenCount {
                expected: 5,
                found: 4
            }
        );

        let result = CompiledPattern::compile("c h a ? ? ?", 5, &english());
        assert_eq!(
            result.unwrap_err(),
            PatternError::WrongTokenCount {
                expected: 5,
                found: 6
            }
        );
    }

    #[test]
    fn empty_pattern_reports_zero_tokens() {
        let result = CompiledPattern::compile("", 5, &english());
        assert_eq!(
            result.unwrap_err(),
            PatternError::WrongTokenCount {
                expected: 5,
                found: 0
            }
        );
    }

    #[test]
    fn absent_token_alone_is_not_a_slot() {
        let result = CompiledPattern::compile("[abc]", 5, &english());
        assert_eq!(
            result.unwrap_err(),
            PatternError::WrongTokenCount {
                expected: 5,
                found: 0
            }
        );
    }

    #[test]
    fn unrecognized_tokens_are_rejected_with_position() {
        let result = CompiledPattern::compile("c h 7 ? ?", 5, &english());
        assert_eq!(
            result.unwrap_err(),
            PatternError::InvalidToken {
                token: "7".to_string(),
                position: 3
            }
        );

        let result = CompiledPattern::compile("ch ? ? ? ?", 5, &english());
        assert_eq!(
            result.unwrap_err(),
            PatternError::InvalidToken {
                token: "ch".to_string(),
                position: 1
            }
        );
    }

    #[test]
    fn bare_bang_is_rejected() {
        let result = CompiledPattern::compile("! ? ? ? ?", 5, &english());
        assert!(matches!(
            result,
            Err(PatternError::InvalidToken { position: 1, .. })
        ));
    }

    #[test]
    fn malformed_absent_token_is_rejected() {
        for token in ["[", "[]", "[abc", "[a1c]"] {
            let input = format!("c h a ? {token}");
            // A bad trailing bracket token never silently becomes a slot
            let result = CompiledPattern::compile(&input, 5, &english());
            assert!(
                matches!(result, Err(PatternError::InvalidAbsentToken { .. })),
                "expected InvalidAbsentToken for {token}"
            );
        }
    }

    #[test]
    fn contradictory_literal_is_unsatisfiable_not_an_error() {
        let pattern = CompiledPattern::compile("c ? ? ? ? [c]", 5, &english()).unwrap();

        assert!(!pattern.is_satisfiable());
        assert!(!pattern.matches("crane"));
        assert!(!pattern.matches("slate"));
    }

    #[test]
    fn absent_set_covering_the_alphabet_is_unsatisfiable() {
        let alphabet = Alphabet::new("ab".chars()).unwrap();
        let pattern = CompiledPattern::compile("? ? [ab]", 2, &alphabet).unwrap();

        assert!(!pattern.is_satisfiable());
        assert!(!pattern.matches("ab"));
    }

    #[test]
    fn compilation_is_deterministic() {
        let first = CompiledPattern::compile("c ? a !n ? [xz]", 5, &english()).unwrap();
        let second = CompiledPattern::compile("c ? a !n ? [xz]", 5, &english()).unwrap();

        for word in ["crane", "chase", "cabin", "carny", "clang"] {
            assert_eq!(first.matches(word), second.matches(word));
        }
    }

    #[test]
    fn custom_alphabet_patterns() {
        let dna = Alphabet::new("acgt".chars()).unwrap();
        let pattern = CompiledPattern::compile("a ? ? [t]", 3, &dna).unwrap();

        assert!(pattern.matches("acg"));
        assert!(!pattern.matches("act")); // 't' absent
        assert!(!pattern.matches("gca")); // Slot 1 not 'a'
    }
}
