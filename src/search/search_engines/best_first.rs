//! Best-first search, parameterised by the function that orders its
//! frontier.

use crate::search::{
    search_engines::{
        frontier_search::frontier_search, PriorityFrontier, SearchEngine, SearchLimits,
        SearchResult,
    },
    HeuristicValue, NodeListeners, SearchError, SearchNode, SearchProblem,
};
use std::fmt::Debug;

/// Scores a node for a best-first search. Nodes with lower values are
/// expanded first.
pub trait EvaluationFunction<P: SearchProblem>: Debug {
    fn evaluate(
        &mut self,
        node: &SearchNode<P::State, P::Action>,
        problem: &P,
    ) -> Result<HeuristicValue, SearchError>;

    /// Score the children of one expansion together. Evaluations backed by a
    /// [`crate::search::Heuristic`] override this to hand the whole batch to
    /// [`crate::search::Heuristic::evaluate_batch`].
    fn evaluate_batch(
        &mut self,
        nodes: &[SearchNode<P::State, P::Action>],
        problem: &P,
    ) -> Result<Vec<HeuristicValue>, SearchError> {
        nodes
            .iter()
            .map(|node| self.evaluate(node, problem))
            .collect()
    }
}

/// Always expands the frontier node with the lowest evaluation, ties go to
/// the node generated first. Runs as a graph search unless told otherwise.
#[derive(Debug)]
pub struct BestFirstSearch<P: SearchProblem, E> {
    evaluation: E,
    is_graph_search: bool,
    limits: SearchLimits,
    listeners: NodeListeners<P::State, P::Action>,
}

impl<P: SearchProblem, E: EvaluationFunction<P>> BestFirstSearch<P, E> {
    pub fn with_evaluation(evaluation: E) -> Self {
        Self {
            evaluation,
            is_graph_search: true,
            limits: SearchLimits::unlimited(),
            listeners: NodeListeners::new(),
        }
    }

    pub fn with_graph_search(self, is_graph_search: bool) -> Self {
        Self {
            is_graph_search,
            ..self
        }
    }

    pub fn with_limits(self, limits: SearchLimits) -> Self {
        Self { limits, ..self }
    }

    pub fn is_graph_search(&self) -> bool {
        self.is_graph_search
    }

}

impl<P: SearchProblem, E: EvaluationFunction<P>> SearchEngine<P> for BestFirstSearch<P, E> {
    fn find_solution(
        &mut self,
        problem: &P,
    ) -> Result<SearchResult<P::State, P::Action>, SearchError> {
        let evaluation = &mut self.evaluation;
        frontier_search(
            problem,
            PriorityFrontier::new(),
            |nodes, problem| evaluation.evaluate_batch(nodes, problem),
            self.is_graph_search,
            self.limits,
            &self.listeners,
        )
    }

    fn listeners_mut(&mut self) -> &mut NodeListeners<P::State, P::Action> {
        &mut self.listeners
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::search_engines::{BreadthFirstSearch, UniformCostSearch};
    use ordered_float::OrderedFloat;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Step {
        Increment,
        Double,
    }

    /// Walk from `start` to `target` on `0..=100`. Doubling covers more
    /// ground but costs three times as much as incrementing.
    #[derive(Debug)]
    struct NumberLine {
        start: u32,
        target: u32,
    }

    impl SearchProblem for NumberLine {
        type State = u32;
        type Action = Step;

        fn initial_state(&self) -> &u32 {
            &self.start
        }

        fn actions(&self, state: &u32) -> Vec<Step> {
            let mut actions = vec![];
            if *state < 100 {
                actions.push(Step::Increment);
            }
            if *state * 2 <= 100 {
                actions.push(Step::Double);
            }
            actions
        }

        fn action_result(&self, state: &u32, action: &Step) -> Result<u32, SearchError> {
            Ok(match action {
                Step::Increment => state + 1,
                Step::Double => state * 2,
            })
        }

        fn action_cost(&self, _state: &u32, action: &Step, _result: &u32) -> HeuristicValue {
            match action {
                Step::Increment => OrderedFloat(1.),
                Step::Double => OrderedFloat(3.),
            }
        }

        fn is_goal(&self, state: &u32) -> Result<bool, SearchError> {
            Ok(*state == self.target)
        }
    }

    #[derive(Debug)]
    struct Depth;

    impl EvaluationFunction<NumberLine> for Depth {
        fn evaluate(
            &mut self,
            node: &SearchNode<u32, Step>,
            _problem: &NumberLine,
        ) -> Result<HeuristicValue, SearchError> {
            Ok(OrderedFloat(node.get_depth() as f64))
        }
    }

    #[test]
    fn uniform_cost_accounts_for_step_costs() {
        let problem = NumberLine {
            start: 1,
            target: 8,
        };
        let mut engine: UniformCostSearch<NumberLine> = UniformCostSearch::new();
        let solution = engine
            .find_solution(&problem)
            .unwrap()
            .into_solution()
            .unwrap();
        assert_eq!(solution.get_path_cost(), OrderedFloat(6.));
        assert_eq!(
            solution.action_sequence().steps(),
            &[Step::Increment, Step::Increment, Step::Increment, Step::Double]
        );
    }

    #[test]
    fn breadth_first_minimises_depth() {
        let problem = NumberLine {
            start: 1,
            target: 8,
        };
        let mut engine: BreadthFirstSearch<NumberLine> = BreadthFirstSearch::new();
        let solution = engine
            .find_solution(&problem)
            .unwrap()
            .into_solution()
            .unwrap();
        assert_eq!(solution.get_depth(), 3);
    }

    #[test]
    fn custom_evaluation_function() {
        let problem = NumberLine {
            start: 3,
            target: 12,
        };
        let mut engine = BestFirstSearch::with_evaluation(Depth);
        assert!(engine.is_graph_search());
        let solution = engine
            .find_solution(&problem)
            .unwrap()
            .into_solution()
            .unwrap();
        // 3 -> 6 -> 12
        assert_eq!(solution.get_depth(), 2);
        assert_eq!(solution.get_path_cost(), OrderedFloat(6.));
    }

    #[test]
    fn goal_predicate_without_goal_state() {
        let problem = NumberLine {
            start: 5,
            target: 5,
        };
        assert_eq!(problem.goal_state(), None);
        let mut engine: UniformCostSearch<NumberLine> = UniformCostSearch::new();
        let solution = engine
            .find_solution(&problem)
            .unwrap()
            .into_solution()
            .unwrap();
        assert_eq!(solution.get_depth(), 0);
    }
}
