//! Arena-backed search tree for the two-level Mastermind search.
//!
//! The tree alternates guess nodes and feedback nodes. Guess nodes expand
//! lazily when the selection reaches them: the candidate set is partitioned
//! by the feedback each candidate would return against the committed guess,
//! one feedback child per distinct response. Feedback nodes expand eagerly
//! at construction: one guess child per remaining candidate.
//!
//! The whole session lives in one `SearchTree` owned by the caller; there
//! is no process-wide tree. Nodes are appended to the arena and never
//! removed, so `NodeId` indices stay valid for the tree's lifetime.

use std::collections::BTreeMap;

use crate::game::code::{all_codes, Code};
use crate::game::feedback::{evaluate_guess, Feedback};
use crate::game::parameters::GameParameters;
use crate::mcts::node::{Node, NodeId, NodeKind};
use crate::{MastermindError, Result};

pub struct SearchTree {
    params: GameParameters,
    nodes: Vec<Node>,
}

impl SearchTree {
    /// Index of the root feedback node: no guess committed, no feedback
    /// received, candidate set = the full universe.
    pub const ROOT: NodeId = 0;

    /// Builds a fresh tree over the full candidate universe. The root is a
    /// feedback node and, like every feedback node, immediately grows one
    /// guess child per candidate.
    pub fn new(params: GameParameters) -> Self {
        let root = Node {
            kind: NodeKind::Feedback {
                feedback: None,
                frequency: 1.0,
            },
            parent: None,
            children: Vec::new(),
            visit_count: 0,
            total_moves: 0,
            moves: 0,
            history: Vec::new(),
            candidates: all_codes(&params),
        };

        let mut tree = SearchTree {
            params,
            nodes: vec![root],
        };
        tree.add_guess_children(Self::ROOT);
        tree
    }

    pub fn params(&self) -> &GameParameters {
        &self.params
    }

    /// Number of nodes currently in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id]
    }

    /// Expands a guess node into its feedback children, partitioning the
    /// candidate set by the response each candidate would give.
    ///
    /// Frequencies are `|partition| / |candidate_set|`, so they sum to 1
    /// across the new children. Partitions are created in feedback order,
    /// which keeps child layout deterministic.
    ///
    /// Fails with [`MastermindError::InvalidExpansion`] on a feedback node
    /// or a terminal guess node, and with
    /// [`MastermindError::EmptyCandidateSet`] if there is nothing left to
    /// partition.
    pub fn expand_guess_node(&mut self, id: NodeId) -> Result<()> {
        let node = &self.nodes[id];
        let guess = match &node.kind {
            NodeKind::Guess { guess } => guess.clone(),
            NodeKind::Feedback { .. } => return Err(MastermindError::InvalidExpansion(id)),
        };
        if node.is_terminal() {
            return Err(MastermindError::InvalidExpansion(id));
        }
        if node.candidates.is_empty() {
            return Err(MastermindError::EmptyCandidateSet(id));
        }

        let total = node.candidates.len() as f64;
        let mut partitions: BTreeMap<Feedback, Vec<Code>> = BTreeMap::new();
        for code in &node.candidates {
            partitions
                .entry(evaluate_guess(&guess, code))
                .or_default()
                .push(code.clone());
        }

        for (feedback, bucket) in partitions {
            let frequency = bucket.len() as f64 / total;
            self.add_feedback_child(id, feedback, bucket, frequency);
        }
        Ok(())
    }

    /// Looks up the feedback child of a guess node matching a response.
    pub fn feedback_child(&self, guess_node: NodeId, feedback: Feedback) -> Option<NodeId> {
        self.nodes[guess_node]
            .children
            .iter()
            .copied()
            .find(|&child| match self.nodes[child].kind {
                NodeKind::Feedback {
                    feedback: Some(observed),
                    ..
                } => observed == feedback,
                _ => false,
            })
    }

    /// Appends a feedback node under a guess node, then eagerly grows its
    /// guess children. Depth does not increment here; only guesses cost a
    /// move.
    fn add_feedback_child(
        &mut self,
        parent: NodeId,
        feedback: Feedback,
        candidates: Vec<Code>,
        frequency: f64,
    ) -> NodeId {
        let (moves, mut history, guess) = {
            let parent_node = &self.nodes[parent];
            (
                parent_node.moves,
                parent_node.history.clone(),
                parent_node.guess().cloned(),
            )
        };
        if let Some(guess) = guess {
            history.push((guess, feedback));
        }

        let id = self.nodes.len();
        self.nodes.push(Node {
            kind: NodeKind::Feedback {
                feedback: Some(feedback),
                frequency,
            },
            parent: Some(parent),
            children: Vec::new(),
            visit_count: 0,
            total_moves: 0,
            moves,
            history,
            candidates,
        });
        self.nodes[parent].children.push(id);

        self.add_guess_children(id);
        id
    }

    /// Eager expansion of a feedback node: one guess child per remaining
    /// candidate, each inheriting the candidate set unchanged (the guess
    /// itself filters nothing; only the feedback received does).
    fn add_guess_children(&mut self, parent: NodeId) {
        let (moves, history, candidates) = {
            let parent_node = &self.nodes[parent];
            (
                parent_node.moves + 1,
                parent_node.history.clone(),
                parent_node.candidates.clone(),
            )
        };

        for guess in &candidates {
            let id = self.nodes.len();
            self.nodes.push(Node {
                kind: NodeKind::Guess {
                    guess: guess.clone(),
                },
                parent: Some(parent),
                children: Vec::new(),
                visit_count: 0,
                total_moves: 0,
                moves,
                history: history.clone(),
                candidates: candidates.clone(),
            });
            self.nodes[parent].children.push(id);
        }
    }
}
