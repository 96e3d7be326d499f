pub mod node;
pub mod replay;
pub mod search;
pub mod selection;
pub mod simulation;
pub mod tree;
