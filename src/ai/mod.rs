//! Computer players: the `Agent` trait, the exhaustive alpha-beta engine,
//! and a uniform-random baseline.

mod agent;
mod alphabeta;
mod random;

pub use agent::Agent;
pub use alphabeta::{best_move, max_value, min_value, AlphaBetaAgent};
pub use random::RandomAgent;
