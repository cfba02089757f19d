//! Reference driver: agent-vs-agent games, self-play episodes that record
//! training examples, and rolling game statistics.

pub mod episode;
pub mod metrics;
pub mod runner;
