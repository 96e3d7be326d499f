//! Game-replay harness: plays a trained tree against a real secret.
//!
//! Play time exploits rather than explores: at each feedback node the
//! committed guess is the child with the highest visit count, not the
//! highest UCB1 score. Branches the training budget never reached are
//! re-trained on demand, so a cache miss is an expected condition here,
//! never a crash.

use rand::Rng;

use crate::game::mastermind::Mastermind;
use crate::mcts::node::{NodeId, NodeKind};
use crate::mcts::search::run_search;
use crate::mcts::tree::SearchTree;
use crate::{MastermindError, Result};

/// Plays `game` to completion using the trained tree, starting at the
/// root. Returns the number of guesses used.
///
/// The candidate set shrinks strictly along the descent, so the loop is
/// bounded by the universe size for an honest game object.
pub fn play_game(
    tree: &mut SearchTree,
    game: &mut Mastermind,
    retrain_iterations: usize,
    rng: &mut impl Rng,
) -> Result<usize> {
    let code_length = tree.params().code_length;
    let mut current = SearchTree::ROOT;

    loop {
        // Unexplored branch: train it before committing to a guess.
        if !has_visited_children(tree, current) {
            log::debug!(
                "retraining unexplored branch at node {current} ({} candidates left)",
                tree.node(current).candidates.len()
            );
            run_search(tree, current, retrain_iterations, rng)?;
        }

        let best = most_visited_child(tree, current)
            .ok_or(MastermindError::EmptyCandidateSet(current))?;
        let guess = match &tree.node(best).kind {
            NodeKind::Guess { guess } => guess.clone(),
            // Feedback nodes only ever hold guess children.
            NodeKind::Feedback { .. } => unreachable!("feedback child under a feedback node"),
        };

        let feedback = game.play_guess(guess.clone());
        log::trace!("guess {} -> {}", guess, feedback);
        if feedback.is_solved(code_length) {
            return Ok(game.attempts());
        }

        if tree.node(best).children.is_empty() {
            tree.expand_guess_node(best)?;
        }
        current = tree
            .feedback_child(best, feedback)
            .ok_or(MastermindError::EmptyCandidateSet(best))?;
    }
}

/// True when at least one child has been visited by a search iteration.
fn has_visited_children(tree: &SearchTree, id: NodeId) -> bool {
    tree.node(id)
        .children
        .iter()
        .any(|&child| tree.node(child).visit_count > 0)
}

/// Child with the highest visit count, first maximum on ties.
pub fn most_visited_child(tree: &SearchTree, parent: NodeId) -> Option<NodeId> {
    let children = &tree.node(parent).children;
    let mut best: Option<NodeId> = None;
    let mut best_visits = 0;

    for &child in children {
        let visits = tree.node(child).visit_count;
        if best.is_none() || visits > best_visits {
            best = Some(child);
            best_visits = visits;
        }
    }
    best
}
