//! The game-rule object: holds the secret code and the guess history.
//!
//! The search tree never sees this type; it only meets honest feedback
//! values. The replay harness and the CLI driver play against it.

use rand::Rng;

use crate::game::code::Code;
use crate::game::feedback::{evaluate_guess, Feedback};
use crate::game::parameters::GameParameters;

#[derive(Debug, Clone)]
pub struct Mastermind {
    params: GameParameters,
    secret: Code,
    history: Vec<(Code, Feedback)>,
}

impl Mastermind {
    /// Starts a game with a known secret.
    pub fn with_secret(params: GameParameters, secret: Code) -> Self {
        Mastermind {
            params,
            secret,
            history: Vec::new(),
        }
    }

    /// Starts a game with a uniformly random secret.
    pub fn random(params: GameParameters, rng: &mut impl Rng) -> Self {
        let secret = Code::random(&params, rng);
        Mastermind::with_secret(params, secret)
    }

    pub fn params(&self) -> &GameParameters {
        &self.params
    }

    /// The secret code. Exposed for recording and tests; the search tree
    /// never reads it.
    pub fn secret(&self) -> &Code {
        &self.secret
    }

    /// Guesses made so far, with the feedback each received.
    pub fn history(&self) -> &[(Code, Feedback)] {
        &self.history
    }

    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    /// Scores a guess against the secret and records it in the history.
    pub fn play_guess(&mut self, guess: Code) -> Feedback {
        let feedback = evaluate_guess(&guess, &self.secret);
        self.history.push((guess, feedback));
        feedback
    }

    /// True once a recorded guess matched the secret exactly.
    pub fn is_solved(&self) -> bool {
        self.history
            .last()
            .is_some_and(|(_, feedback)| feedback.is_solved(self.params.code_length))
    }
}
