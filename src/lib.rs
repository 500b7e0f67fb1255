//! Inventory ordering for a single bakery product as a discretised Markov
//! decision process.
//!
//! Daily sales are bucketed into demand states, an empirical transition matrix
//! is estimated over those states, and value iteration picks the order
//! quantity that minimises expected discounted ordering, holding and shortage
//! cost in each state.

pub mod error;
pub mod io;
pub mod logging;
pub mod model;
pub mod simulation;
pub mod strategy;

pub use error::{MdpError, Result};
pub use model::mdp::MdpModel;
pub use simulation::config::{ModelConfig, SolverSettings};
pub use strategy::value_iteration::{solve, Solution};
