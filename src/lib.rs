//! # Mastermind MCTS Solver Library
//!
//! A Mastermind code-breaking solver built on a Monte Carlo Tree Search
//! variant for games with stochastic, information-revealing feedback.
//!
//! ## Features
//!
//! - **Game Model**: peg feedback scoring, candidate-set filtering and the
//!   game-rule object holding the secret code
//! - **Search Engine**: two-level tree (guess nodes and feedback nodes),
//!   UCB1 selection, frequency-weighted chance sampling, random playouts
//! - **Replay Harness**: plays a trained tree against fresh secrets,
//!   re-training unexplored branches on demand
//! - **Recording**: CSV export and summary statistics for evaluation runs
//!
//! ## Usage
//!
//! ```rust
//! use mastermind::{
//!     game::parameters::GameParameters,
//!     mcts::{search::run_search, tree::SearchTree},
//! };
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut tree = SearchTree::new(GameParameters::new(2, 3));
//! let mut rng = StdRng::seed_from_u64(42);
//! run_search(&mut tree, SearchTree::ROOT, 50, &mut rng).unwrap();
//! ```

// ============================================================================
// PUBLIC API MODULES
// ============================================================================

/// Core game model: codes, feedback, candidates, the game-rule object
pub mod game;

/// Monte Carlo Tree Search engine
pub mod mcts;

/// Trial recording and summary statistics
pub mod recording;

/// Logging setup for the CLI driver
pub mod logging;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use game::code::Code;
pub use game::feedback::{evaluate_guess, Feedback};
pub use game::mastermind::Mastermind;
pub use game::parameters::GameParameters;
pub use mcts::node::NodeId;
pub use mcts::replay::play_game;
pub use mcts::search::run_search;
pub use mcts::tree::SearchTree;

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Main error type for the Mastermind solver library.
///
/// The tree errors are invariant violations, not expected runtime
/// conditions: a corrupted tree produces meaningless search results, so
/// they surface immediately instead of being recovered.
#[derive(Debug, thiserror::Error)]
pub enum MastermindError {
    #[error("cannot expand node {0}: terminal guess node or not a guess node")]
    InvalidExpansion(NodeId),

    #[error("cannot run a playout from node {0}: not a guess node")]
    InvalidSimulate(NodeId),

    #[error("candidate set at node {0} is empty: contradictory feedback history")]
    EmptyCandidateSet(NodeId),

    #[error("invalid board parameters: code_length={code_length}, num_colors={num_colors}")]
    InvalidParameters { code_length: usize, num_colors: u8 },

    #[error("report error: {0}")]
    Report(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, MastermindError>;

// ============================================================================
// LIBRARY VERSION INFO
// ============================================================================

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
