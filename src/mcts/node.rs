//! Node structures for the Mastermind search tree.
//!
//! The tree alternates between two node kinds:
//! - Guess nodes: the player has committed to trying a guess.
//! - Feedback nodes: nature (the hidden secret) has answered with a peg
//!   response, weighted by how many remaining candidates produce it.
//!
//! Nodes live in an arena owned by [`SearchTree`](crate::mcts::tree::SearchTree)
//! and refer to each other through stable indices, so backpropagation can
//! walk parent links without ownership cycles.

use crate::game::code::Code;
use crate::game::feedback::Feedback;

/// Stable index of a node inside the tree arena.
pub type NodeId = usize;

/// Which role a node plays in the two-level tree.
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// The player tries `guess` next. Candidates are inherited unchanged
    /// from the parent; only the feedback received filters them.
    Guess { guess: Code },
    /// Nature answered `feedback` after the parent's guess. `feedback` is
    /// `None` only at the tree root, where no guess has been made yet.
    /// `frequency` is the empirical probability of entering this branch.
    Feedback {
        feedback: Option<Feedback>,
        frequency: f64,
    },
}

/// A node in the search tree.
#[derive(Debug, Clone)]
pub struct Node {
    /// Kind of this node (Guess or Feedback).
    pub kind: NodeKind,

    /// Parent index, `None` at the root. Used only for backpropagation.
    pub parent: Option<NodeId>,

    /// Child indices. Guess nodes hold feedback children, feedback nodes
    /// hold guess children.
    pub children: Vec<NodeId>,

    /// Number of times a reward has been backpropagated through this node.
    pub visit_count: usize,

    /// Sum of simulated game lengths. Accumulated by guess nodes only.
    pub total_moves: usize,

    /// Depth in moves. Guess nodes increment it, feedback nodes keep it.
    pub moves: usize,

    /// `(guess, feedback)` pairs on the path from the root to this node.
    pub history: Vec<(Code, Feedback)>,

    /// Codes still consistent with every feedback in `history`.
    pub candidates: Vec<Code>,
}

impl Node {
    pub fn is_guess(&self) -> bool {
        matches!(self.kind, NodeKind::Guess { .. })
    }

    pub fn is_feedback(&self) -> bool {
        matches!(self.kind, NodeKind::Feedback { .. })
    }

    /// The committed guess, for guess nodes.
    pub fn guess(&self) -> Option<&Code> {
        match &self.kind {
            NodeKind::Guess { guess } => Some(guess),
            NodeKind::Feedback { .. } => None,
        }
    }

    /// Empirical branch probability, for feedback nodes. This is the
    /// feedback node's whole selection score: siblings are sampled in
    /// proportion to it.
    pub fn frequency(&self) -> f64 {
        match &self.kind {
            NodeKind::Feedback { frequency, .. } => *frequency,
            NodeKind::Guess { .. } => 0.0,
        }
    }

    /// Average simulated game length through this node.
    pub fn average_moves(&self) -> f64 {
        if self.visit_count == 0 {
            0.0
        } else {
            self.total_moves as f64 / self.visit_count as f64
        }
    }

    /// A guess node whose candidate set is a singleton has determined the
    /// secret; it must never be expanded.
    pub fn is_terminal(&self) -> bool {
        self.is_guess() && self.candidates.len() == 1
    }

    /// UCB1 selection score for a guess node.
    ///
    /// Unvisited nodes return positive infinity so every sibling is tried
    /// once before any is revisited (and so the mean never divides by
    /// zero). The mean-moves term is negated: fewer guesses to solve is
    /// better, and callers take the max over siblings.
    pub fn ucb1(&self, parent_visits: usize) -> f64 {
        if self.visit_count == 0 {
            return f64::INFINITY;
        }
        let visits = self.visit_count as f64;
        let exploitation = self.total_moves as f64 / visits;
        let exploration = (2.0 * (parent_visits as f64).ln() / visits).sqrt();
        -exploitation + exploration
    }

    /// Registers one backpropagated reward. Guess nodes accumulate the
    /// simulated game length; feedback nodes only count the visit.
    pub fn update(&mut self, n_moves: usize) {
        self.visit_count += 1;
        if self.is_guess() {
            self.total_moves += n_moves;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guess_node(candidates: Vec<Code>) -> Node {
        Node {
            kind: NodeKind::Guess {
                guess: Code(vec![1, 1]),
            },
            parent: None,
            children: Vec::new(),
            visit_count: 0,
            total_moves: 0,
            moves: 1,
            history: Vec::new(),
            candidates,
        }
    }

    #[test]
    fn test_unvisited_score_is_infinite() {
        let node = guess_node(vec![Code(vec![1, 1]), Code(vec![2, 2])]);
        assert_eq!(node.ucb1(10), f64::INFINITY);
    }

    #[test]
    fn test_ucb1_prefers_shorter_games() {
        let mut fast = guess_node(vec![Code(vec![1, 1]), Code(vec![2, 2])]);
        let mut slow = guess_node(vec![Code(vec![1, 1]), Code(vec![2, 2])]);

        // Same visit counts, different average game lengths.
        fast.update(2);
        fast.update(2);
        slow.update(5);
        slow.update(5);

        assert!(fast.ucb1(4) > slow.ucb1(4));
    }

    #[test]
    fn test_ucb1_exploration_bonus_decays_with_visits() {
        let mut seldom = guess_node(vec![Code(vec![1, 1]), Code(vec![2, 2])]);
        let mut often = guess_node(vec![Code(vec![1, 1]), Code(vec![2, 2])]);

        seldom.update(3);
        for _ in 0..10 {
            often.update(3);
        }

        // Equal means, so the less-visited node must score higher.
        assert!(seldom.ucb1(11) > often.ucb1(11));
    }

    #[test]
    fn test_update_accumulates_on_guess_nodes() {
        let mut node = guess_node(vec![Code(vec![1, 1]), Code(vec![2, 2])]);
        node.update(4);
        node.update(6);

        assert_eq!(node.visit_count, 2);
        assert_eq!(node.total_moves, 10);
        assert!((node.average_moves() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_feedback_update_counts_visits_only() {
        let mut node = Node {
            kind: NodeKind::Feedback {
                feedback: Some(Feedback(1, 0)),
                frequency: 0.25,
            },
            parent: Some(0),
            children: Vec::new(),
            visit_count: 0,
            total_moves: 0,
            moves: 1,
            history: Vec::new(),
            candidates: vec![Code(vec![1, 2])],
        };

        node.update(7);
        assert_eq!(node.visit_count, 1);
        assert_eq!(node.total_moves, 0);
        assert!((node.frequency() - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_terminal_detection() {
        let singleton = guess_node(vec![Code(vec![3, 3])]);
        assert!(singleton.is_terminal());

        let open = guess_node(vec![Code(vec![1, 1]), Code(vec![2, 2])]);
        assert!(!open.is_terminal());
    }
}
