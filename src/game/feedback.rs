//! Peg feedback scoring.
//!
//! `evaluate_guess` implements the classic Mastermind response: the number
//! of exact position matches plus the number of additional color matches
//! bounded by per-color multiplicities.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game::code::Code;

/// A `(exact, partial)` peg response.
///
/// Invariant: `exact + partial <= code_length`, and `exact == code_length`
/// exactly when guess and code are identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Feedback(pub usize, pub usize);

impl Feedback {
    /// Exact position matches (black pegs).
    pub fn exact(&self) -> usize {
        self.0
    }

    /// Color-only matches (white pegs).
    pub fn partial(&self) -> usize {
        self.1
    }

    /// True when this response means the guess equals the secret.
    pub fn is_solved(&self, code_length: usize) -> bool {
        self.0 == code_length
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} black, {} white", self.0, self.1)
    }
}

/// Scores `guess` against `code`.
///
/// `exact` counts positions where the two codes agree. `partial` is the
/// per-color overlap `sum(min(count_in_guess, count_in_code))` minus the
/// exact matches, so pegs are never counted twice.
///
/// Pure and deterministic. The result happens to be symmetric in its two
/// operands, but callers should keep the `(guess, code)` order anyway.
pub fn evaluate_guess(guess: &Code, code: &Code) -> Feedback {
    let exact = guess
        .pegs()
        .iter()
        .zip(code.pegs())
        .filter(|(g, c)| g == c)
        .count();

    let mut guess_counts = [0usize; 256];
    let mut code_counts = [0usize; 256];
    for &peg in guess.pegs() {
        guess_counts[peg as usize] += 1;
    }
    for &peg in code.pegs() {
        code_counts[peg as usize] += 1;
    }

    let color_matches: usize = guess_counts
        .iter()
        .zip(code_counts.iter())
        .map(|(g, c)| g.min(c))
        .sum();

    Feedback(exact, color_matches - exact)
}
