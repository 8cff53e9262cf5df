mod astar;
mod best_first;
mod bfs;
mod dfs;
mod frontier;
mod frontier_search;
mod greedy;
mod idastar;
mod search_engine;
mod search_statistics;
mod termination_condition;
mod uniform_cost;

pub use astar::{AStarEvaluation, AStarSearch};
pub use best_first::{BestFirstSearch, EvaluationFunction};
pub use bfs::BreadthFirstSearch;
pub use dfs::DepthFirstSearch;
pub use frontier::{FifoFrontier, Frontier, LifoFrontier, PriorityFrontier};
pub use greedy::{GreedyEvaluation, GreedySearch};
pub use idastar::IterativeDeepeningAStar;
pub use search_engine::{SearchEngine, SearchEngineName, SearchResult};
pub use search_statistics::SearchStatistics;
pub use termination_condition::{SearchLimits, TerminationCondition};
pub use uniform_cost::{PathCost, UniformCostSearch};
