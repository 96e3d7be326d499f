//! Random playout from a guess node.
//!
//! A playout draws a secret uniformly from the node's candidate set and
//! plays random consistent guesses until it is found, returning the number
//! of moves used. Lower is better; the reward feeds UCB1 through its
//! negated mean term.

use rand::Rng;

use crate::game::candidates::filter_candidates;
use crate::game::feedback::evaluate_guess;
use crate::mcts::node::NodeId;
use crate::mcts::tree::SearchTree;
use crate::{MastermindError, Result};

/// Runs one playout starting at `id`, which must be a guess node.
///
/// The count starts at the node's own depth: the committed guess is the
/// first move evaluated. A terminal node therefore returns exactly its
/// depth, since its single candidate is both the drawn secret and the
/// committed guess.
///
/// Fails with [`MastermindError::InvalidSimulate`] on a feedback node;
/// feedback nodes are never played out directly.
pub fn simulate(tree: &SearchTree, id: NodeId, rng: &mut impl Rng) -> Result<usize> {
    let node = tree.node(id);
    let mut guess = node
        .guess()
        .cloned()
        .ok_or(MastermindError::InvalidSimulate(id))?;

    let code_length = tree.params().code_length;
    let mut pool = node.candidates.clone();
    if pool.is_empty() {
        return Err(MastermindError::EmptyCandidateSet(id));
    }

    let secret = pool[rng.random_range(0..pool.len())].clone();
    let mut moves = node.moves;

    loop {
        let feedback = evaluate_guess(&guess, &secret);
        if feedback.is_solved(code_length) {
            return Ok(moves);
        }

        pool = filter_candidates(&pool, &guess, feedback);
        if pool.is_empty() {
            return Err(MastermindError::EmptyCandidateSet(id));
        }

        moves += 1;
        guess = pool[rng.random_range(0..pool.len())].clone();
    }
}
