//! N-gram legality tables
//!
//! A sequence is "legal" when it appears somewhere in the lexicon. The
//! illegal side is the complement against the alphabet's full Cartesian
//! product of length n, which for alphabet size A means enumerating A^n
//! candidates. Enumeration is parallelized since this is the one query
//! whose cost grows exponentially.

use rayon::prelude::*;
use rustc_hash::FxHashSet;

use crate::core::Alphabet;

/// Where an observed n-gram must have appeared
#[derive(Clone, Copy)]
pub(crate) enum Placement {
    Anywhere,
    Start,
    End,
}

/// Collect every n-gram observed in the word list at the given placement
pub(crate) fn observed(words: &[String], n: usize, placement: Placement) -> FxHashSet<String> {
    let mut seen = FxHashSet::default();
    if n == 0 {
        return seen;
    }

    for word in words {
        let chars: Vec<char> = word.chars().collect();
        if chars.len() < n {
            continue;
        }
        match placement {
            Placement::Anywhere => {
                for window in chars.windows(n) {
                    seen.insert(window.iter().collect());
                }
            }
            Placement::Start => {
                seen.insert(chars[..n].iter().collect());
            }
            Placement::End => {
                seen.insert(chars[chars.len() - n..].iter().collect());
            }
        }
    }

    seen
}

/// Size of the alphabet's length-n sequence universe, if it fits in usize
pub(crate) fn universe_size(alphabet_size: usize, n: usize) -> Option<usize> {
    u32::try_from(n)
        .ok()
        .and_then(|exp| alphabet_size.checked_pow(exp))
}

/// Every length-n sequence over the alphabet that is NOT in `observed`
///
/// Candidates are enumerated in parallel and returned sorted.
pub(crate) fn complement(
    alphabet: &Alphabet,
    total: usize,
    n: usize,
    observed: &FxHashSet<String>,
) -> Vec<String> {
    let letters = alphabet.letters();

    let mut missing: Vec<String> = (0..total)
        .into_par_iter()
        .map(|index| sequence_at(letters, n, index))
        .filter(|sequence| !observed.contains(sequence))
        .collect();

    missing.sort_unstable();
    missing
}

/// Decode a universe index into its sequence, most-significant slot first
fn sequence_at(letters: &[char], n: usize, mut index: usize) -> String {
    let base = letters.len();
    let mut slots = vec![letters[0]; n];
    for slot in slots.iter_mut().rev() {
        *slot = letters[index % base];
        index /= base;
    }
    slots.into_iter().collect()
}
