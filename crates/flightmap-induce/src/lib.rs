//! Callsign to flight designator rule induction.

pub mod engine;
pub mod prefix;
pub mod vote;

pub use engine::{Induction, InductionStats, group_by_airline, induce};
pub use prefix::constant_prefix;
pub use vote::{Vote, majority_vote};
