mod agent;
mod greedy;
mod random;
pub mod state_encoding;

pub use agent::{uniform_probs, Agent};
pub use greedy::GreedyAgent;
pub use random::RandomAgent;
