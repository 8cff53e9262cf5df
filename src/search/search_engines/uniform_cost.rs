//! Uniform cost search

use crate::search::{
    search_engines::{BestFirstSearch, EvaluationFunction},
    HeuristicValue, SearchError, SearchNode, SearchProblem,
};

/// `f(n) = g(n)`, the path cost from the root.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathCost;

impl<P: SearchProblem> EvaluationFunction<P> for PathCost {
    fn evaluate(
        &mut self,
        node: &SearchNode<P::State, P::Action>,
        _problem: &P,
    ) -> Result<HeuristicValue, SearchError> {
        Ok(node.get_path_cost())
    }
}

/// Uniform cost search, the same as A* with a zero heuristic.
pub type UniformCostSearch<P> = BestFirstSearch<P, PathCost>;

impl<P: SearchProblem> BestFirstSearch<P, PathCost> {
    pub fn new() -> Self {
        Self::with_evaluation(PathCost)
    }
}

impl<P: SearchProblem> Default for BestFirstSearch<P, PathCost> {
    fn default() -> Self {
        Self::new()
    }
}
