//! Selection and backpropagation policies.
//!
//! The two node kinds descend differently:
//! - Feedback nodes pick the guess child with the maximal UCB1 score
//!   (greedy, first-max on ties).
//! - Guess nodes sample a feedback child with probability equal to its
//!   empirical frequency, modeling nature's non-adversarial randomness.

use rand::Rng;

use crate::mcts::node::{NodeId, NodeKind};
use crate::mcts::tree::SearchTree;

/// Descends from `from` until a node with no children is reached and
/// returns it. Feedback nodes expand eagerly, so the stop is always an
/// unexpanded or terminal guess node (or `from` itself when childless).
pub fn select(tree: &SearchTree, from: NodeId, rng: &mut impl Rng) -> NodeId {
    let mut current = from;
    loop {
        let node = tree.node(current);
        if node.children.is_empty() {
            return current;
        }
        current = match node.kind {
            NodeKind::Feedback { .. } => best_guess_child(tree, current),
            NodeKind::Guess { .. } => sample_feedback_child(tree, current, rng),
        };
    }
}

/// Guess child with the maximal UCB1 score; ties keep the first maximum.
/// Unvisited children score infinity, so each sibling is tried once before
/// any is revisited.
pub fn best_guess_child(tree: &SearchTree, parent: NodeId) -> NodeId {
    let parent_visits = tree.node(parent).visit_count;
    let children = &tree.node(parent).children;

    let mut best = children[0];
    let mut best_score = f64::NEG_INFINITY;
    for &child in children {
        let score = tree.node(child).ucb1(parent_visits);
        if score > best_score {
            best_score = score;
            best = child;
        }
    }
    best
}

/// Samples a feedback child categorically by frequency: draw a uniform
/// value in [0,1) and walk the cumulative-frequency table. The last child
/// absorbs any floating-point rounding left at the end of the walk.
pub fn sample_feedback_child(tree: &SearchTree, parent: NodeId, rng: &mut impl Rng) -> NodeId {
    let children = &tree.node(parent).children;
    let draw: f64 = rng.random();

    let mut cumulative = 0.0;
    for &child in children {
        cumulative += tree.node(child).frequency();
        if draw < cumulative {
            return child;
        }
    }
    children[children.len() - 1]
}

/// Walks from `from` up through the parent links to the root, applying the
/// same reward at every level. Guess nodes accumulate the move total,
/// feedback nodes only count the visit.
pub fn backpropagate(tree: &mut SearchTree, from: NodeId, n_moves: usize) {
    let mut current = Some(from);
    while let Some(id) = current {
        tree.node_mut(id).update(n_moves);
        current = tree.node(id).parent;
    }
}
