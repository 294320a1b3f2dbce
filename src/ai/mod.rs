//! Move policies: the agent interface, board feature encoding, the
//! model-backed oracle, and a random baseline.

mod agent;
pub mod encoding;
mod oracle;
mod random;

pub use agent::Agent;
pub use oracle::OracleAgent;
pub use random::RandomAgent;
