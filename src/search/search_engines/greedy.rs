//! Greedy best-first search

use crate::search::{
    search_engines::{BestFirstSearch, EvaluationFunction},
    Heuristic, HeuristicValue, SearchError, SearchNode, SearchProblem,
};

/// `f(n) = h(n)`, the path cost so far is ignored.
#[derive(Debug)]
pub struct GreedyEvaluation<H> {
    heuristic: H,
}

impl<H> GreedyEvaluation<H> {
    pub fn new(heuristic: H) -> Self {
        Self { heuristic }
    }
}

impl<P: SearchProblem, H: Heuristic<P>> EvaluationFunction<P> for GreedyEvaluation<H> {
    fn evaluate(
        &mut self,
        node: &SearchNode<P::State, P::Action>,
        problem: &P,
    ) -> Result<HeuristicValue, SearchError> {
        self.heuristic.evaluate(node.get_state(), problem)
    }

    fn evaluate_batch(
        &mut self,
        nodes: &[SearchNode<P::State, P::Action>],
        problem: &P,
    ) -> Result<Vec<HeuristicValue>, SearchError> {
        let states: Vec<P::State> = nodes.iter().map(|node| node.get_state().clone()).collect();
        self.heuristic.evaluate_batch(&states, problem)
    }
}

/// Greedy best-first search. Usually fast, but the solutions it finds are
/// not guaranteed to be optimal.
pub type GreedySearch<P, H> = BestFirstSearch<P, GreedyEvaluation<H>>;

impl<P: SearchProblem, H: Heuristic<P>> BestFirstSearch<P, GreedyEvaluation<H>> {
    pub fn new(heuristic: H) -> Self {
        Self::with_evaluation(GreedyEvaluation::new(heuristic))
    }
}
