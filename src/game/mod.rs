pub mod candidates;
pub mod code;
pub mod feedback;
pub mod mastermind;
pub mod parameters;
