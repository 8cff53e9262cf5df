//! A* search

use crate::search::{
    search_engines::{BestFirstSearch, EvaluationFunction},
    Heuristic, HeuristicValue, SearchError, SearchNode, SearchProblem,
};

/// `f(n) = g(n) + h(n)`, the path cost so far plus the heuristic estimate of
/// the remaining cost.
#[derive(Debug)]
pub struct AStarEvaluation<H> {
    heuristic: H,
}

impl<H> AStarEvaluation<H> {
    pub fn new(heuristic: H) -> Self {
        Self { heuristic }
    }
}

impl<P: SearchProblem, H: Heuristic<P>> EvaluationFunction<P> for AStarEvaluation<H> {
    fn evaluate(
        &mut self,
        node: &SearchNode<P::State, P::Action>,
        problem: &P,
    ) -> Result<HeuristicValue, SearchError> {
        let h = self.heuristic.evaluate(node.get_state(), problem)?;
        Ok(node.get_path_cost() + h)
    }

    fn evaluate_batch(
        &mut self,
        nodes: &[SearchNode<P::State, P::Action>],
        problem: &P,
    ) -> Result<Vec<HeuristicValue>, SearchError> {
        let states: Vec<P::State> = nodes.iter().map(|node| node.get_state().clone()).collect();
        let h_values = self.heuristic.evaluate_batch(&states, problem)?;
        Ok(nodes
            .iter()
            .zip(h_values)
            .map(|(node, h)| node.get_path_cost() + h)
            .collect())
    }
}

/// A* finds optimal solutions when its heuristic never overestimates. With
/// graph search the heuristic also has to be consistent.
pub type AStarSearch<P, H> = BestFirstSearch<P, AStarEvaluation<H>>;

impl<P: SearchProblem, H: Heuristic<P>> BestFirstSearch<P, AStarEvaluation<H>> {
    pub fn new(heuristic: H) -> Self {
        Self::with_evaluation(AStarEvaluation::new(heuristic))
    }
}
