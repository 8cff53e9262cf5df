mod error;
pub mod heuristics;
mod listeners;
mod plan;
pub mod problems;
pub mod search_engines;
mod search_node;
mod search_problem;
mod search_space;
mod solution;
mod solver_config;
mod validate;
mod verbosity;

pub use error::SearchError;
pub use heuristics::{Heuristic, HeuristicName, HeuristicValue};
pub use listeners::{ExpansionListener, NodeListener, NodeListeners, SearchEvent, SharedListener};
pub use plan::Plan;
pub use search_node::{NodeId, SearchNode, NO_NODE};
pub use search_problem::SearchProblem;
pub use search_space::SearchSpace;
pub use solution::Solution;
pub use solver_config::{ConfigError, SolverConfig};
pub use validate::{validate, ValidationError};
pub use verbosity::Verbosity;
