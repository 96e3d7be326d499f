//! Board parameters shared by every component.
//!
//! The candidate universe has `num_colors^code_length` members, and the
//! search enumerates and partitions it repeatedly, so callers should keep
//! this product in the tens of thousands at most for interactive use.

use serde::{Deserialize, Serialize};

/// Mastermind board configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameParameters {
    /// Number of pegs in a code.
    /// Default: 4
    pub code_length: usize,

    /// Number of peg colors, numbered `1..=num_colors`.
    /// Default: 6
    pub num_colors: u8,
}

impl Default for GameParameters {
    fn default() -> Self {
        GameParameters {
            code_length: 4,
            num_colors: 6,
        }
    }
}

impl GameParameters {
    pub fn new(code_length: usize, num_colors: u8) -> Self {
        GameParameters {
            code_length,
            num_colors,
        }
    }

    /// Size of the full candidate universe.
    pub fn universe_size(&self) -> usize {
        (self.num_colors as usize).pow(self.code_length as u32)
    }

    /// Both dimensions must be strictly positive.
    pub fn is_valid(&self) -> bool {
        self.code_length > 0 && self.num_colors > 0
    }
}
