//! Iterative deepening A* search

use crate::search::{
    search_engines::{
        SearchEngine, SearchLimits, SearchResult, SearchStatistics, TerminationCondition,
    },
    Heuristic, HeuristicValue, NodeId, NodeListeners, SearchError, SearchEvent, SearchNode,
    SearchProblem, SearchSpace, Solution,
};

/// Outcome of one depth-first pass under a fixed bound.
enum BoundedSearch<S, A> {
    /// The last node of the path is a goal
    Found,
    /// Nothing found, the smallest f-value that exceeded the bound. Infinite
    /// if no node exceeded it.
    NextBound(HeuristicValue),
    /// A search limit was hit
    Terminated(SearchResult<S, A>),
}

/// IDA* runs depth-first passes, each bounded by an f-value limit that grows
/// to the smallest f-value that exceeded the previous one. Only the current
/// path is kept in memory, so it always runs as a tree search, pruning only
/// children whose state already occurs on the path.
#[derive(Debug)]
pub struct IterativeDeepeningAStar<P: SearchProblem, H> {
    heuristic: H,
    limits: SearchLimits,
    listeners: NodeListeners<P::State, P::Action>,
}

impl<P: SearchProblem, H: Heuristic<P>> IterativeDeepeningAStar<P, H> {
    pub fn new(heuristic: H) -> Self {
        Self {
            heuristic,
            limits: SearchLimits::unlimited(),
            listeners: NodeListeners::new(),
        }
    }

    pub fn with_limits(self, limits: SearchLimits) -> Self {
        Self { limits, ..self }
    }

    fn bounded_search(
        &mut self,
        path: &mut Vec<SearchNode<P::State, P::Action>>,
        bound: HeuristicValue,
        problem: &P,
        statistics: &mut SearchStatistics,
        termination_condition: &mut TerminationCondition,
    ) -> Result<BoundedSearch<P::State, P::Action>, SearchError> {
        let node_index = path.len() - 1;
        let node = &path[node_index];
        let f = node.get_path_cost() + self.heuristic.evaluate(node.get_state(), problem)?;
        if f > bound {
            return Ok(BoundedSearch::NextBound(f));
        }
        if problem.is_goal(node.get_state())? {
            return Ok(BoundedSearch::Found);
        }
        if let Some(result) =
            termination_condition.should_terminate(statistics.get_expanded_nodes())
        {
            return Ok(BoundedSearch::Terminated(result));
        }

        self.listeners.notify(SearchEvent::Expand, Some(node));
        let children = node.expand(NodeId::new(node_index), problem)?;
        statistics.increment_expanded_nodes();
        statistics.increment_generated_nodes(children.len());

        let mut next_bound = HeuristicValue::from(f64::INFINITY);
        for child in children {
            if path.iter().any(|node| node.get_state() == child.get_state()) {
                statistics.increment_pruned_nodes();
                continue;
            }

            path.push(child);
            match self.bounded_search(path, bound, problem, statistics, termination_condition)? {
                BoundedSearch::Found => return Ok(BoundedSearch::Found),
                BoundedSearch::Terminated(result) => return Ok(BoundedSearch::Terminated(result)),
                BoundedSearch::NextBound(f) => next_bound = next_bound.min(f),
            }
            path.pop();
        }

        Ok(BoundedSearch::NextBound(next_bound))
    }
}

impl<P: SearchProblem, H: Heuristic<P>> SearchEngine<P> for IterativeDeepeningAStar<P, H> {
    fn find_solution(
        &mut self,
        problem: &P,
    ) -> Result<SearchResult<P::State, P::Action>, SearchError> {
        let mut statistics = SearchStatistics::new();
        let mut termination_condition = TerminationCondition::new(self.limits);

        let root = SearchNode::new_without_parent(problem.initial_state().clone());
        let mut bound = self.heuristic.evaluate(root.get_state(), problem)?;
        let mut path = vec![root];

        loop {
            statistics.register_iteration(bound);
            let outcome = self.bounded_search(
                &mut path,
                bound,
                problem,
                &mut statistics,
                &mut termination_condition,
            )?;
            match outcome {
                BoundedSearch::Found => {
                    let goal_id = NodeId::new(path.len() - 1);
                    self.listeners.notify(SearchEvent::Found, path.last());
                    statistics.finalise_search();
                    termination_condition.finalise();
                    let search_space = SearchSpace::from_path(path);
                    return Ok(SearchResult::Success(Solution::new(search_space, goal_id)));
                }
                BoundedSearch::NextBound(next_bound) if next_bound.into_inner().is_finite() => {
                    bound = next_bound
                }
                BoundedSearch::NextBound(_) => {
                    self.listeners.notify(SearchEvent::Fail, None);
                    statistics.finalise_search();
                    termination_condition.finalise();
                    return Ok(SearchResult::NoSolution);
                }
                BoundedSearch::Terminated(result) => {
                    statistics.finalise_search();
                    termination_condition.finalise();
                    return Ok(result);
                }
            }
        }
    }

    fn listeners_mut(&mut self) -> &mut NodeListeners<P::State, P::Action> {
        &mut self.listeners
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{
        heuristics::{ManhattanDistance, MisplacedTiles, ZeroHeuristic},
        problems::{Move, Puzzle, SlidingTiles},
        search_engines::AStarSearch,
        ExpansionListener, SharedListener,
    };
    use crate::test_utils::*;
    use ordered_float::OrderedFloat;
    use std::{cell::RefCell, rc::Rc};

    #[test]
    fn finds_two_move_solution() {
        let problem = sliding_tiles(&[1, 2, 3, 4, 5, 6, 0, 7, 8]);
        let mut engine = IterativeDeepeningAStar::new(MisplacedTiles::new());
        let solution = engine
            .find_solution(&problem)
            .unwrap()
            .into_solution()
            .unwrap();
        assert_eq!(solution.get_path_cost(), OrderedFloat(2.));
        assert_eq!(solution.action_sequence().steps(), &[Move::Right, Move::Right]);
        assert_eq!(solution.path().len(), 3);
    }

    #[test]
    fn matches_astar_cost() {
        // the hardest puzzle takes too long without duplicate detection
        for (tiles, cost) in &EIGHT_PUZZLES[..4] {
            let problem = sliding_tiles(tiles);
            let mut idastar = IterativeDeepeningAStar::new(ManhattanDistance::new());
            let mut astar = AStarSearch::new(ManhattanDistance::new());

            let idastar_solution = idastar
                .find_solution(&problem)
                .unwrap()
                .into_solution()
                .unwrap();
            let astar_solution = astar
                .find_solution(&problem)
                .unwrap()
                .into_solution()
                .unwrap();
            assert_eq!(idastar_solution.get_path_cost(), OrderedFloat(*cost as f64));
            assert_eq!(
                idastar_solution.get_path_cost(),
                astar_solution.get_path_cost()
            );
            assert_eq!(idastar_solution.get_state(), &Puzzle::solved(3).unwrap());
        }
    }

    #[test]
    fn solution_replays_to_goal() {
        let (tiles, _) = EIGHT_PUZZLES[2];
        let problem = sliding_tiles(tiles);
        let mut engine = IterativeDeepeningAStar::new(ManhattanDistance::new());
        let solution = engine
            .find_solution(&problem)
            .unwrap()
            .into_solution()
            .unwrap();

        let mut state = problem.initial_state().clone();
        for action in solution.action_sequence() {
            state = problem.action_result(&state, &action).unwrap();
        }
        assert_eq!(&state, solution.get_state());
    }

    #[test]
    fn reports_expansions_and_goal() {
        let problem = sliding_tiles(&[1, 2, 3, 4, 5, 6, 0, 7, 8]);
        let counter = Rc::new(RefCell::new(ExpansionListener::new()));
        let found = Rc::new(RefCell::new(None));
        let found_state = found.clone();
        let listener: SharedListener<Puzzle, Move> = Rc::new(RefCell::new(
            move |event: SearchEvent, node: Option<&SearchNode<Puzzle, Move>>| {
                if event == SearchEvent::Found {
                    *found_state.borrow_mut() = node.map(|node| node.get_state().clone());
                }
            },
        ));
        let mut engine: IterativeDeepeningAStar<SlidingTiles, _> =
            IterativeDeepeningAStar::new(ManhattanDistance::new());
        engine.add_listener(counter.clone());
        engine.add_listener(listener);
        engine.find_solution(&problem).unwrap();

        // the root and its right child, the first bound is already exact
        assert_eq!(counter.borrow().get_count(), 2);
        assert_eq!(*found.borrow(), Some(Puzzle::solved(3).unwrap()));
    }

    #[test]
    fn unsolvable_puzzle_has_no_solution() {
        let problem = sliding_tiles(UNSOLVABLE_FOUR_PUZZLE);
        let failed = Rc::new(RefCell::new(false));
        let failed_flag = failed.clone();
        let mut engine: IterativeDeepeningAStar<SlidingTiles, _> =
            IterativeDeepeningAStar::new(ManhattanDistance::new());
        engine.add_listener(Rc::new(RefCell::new(
            move |event: SearchEvent, _: Option<&SearchNode<Puzzle, Move>>| {
                if event == SearchEvent::Fail {
                    *failed_flag.borrow_mut() = true;
                }
            },
        )));

        assert!(matches!(
            engine.find_solution(&problem).unwrap(),
            SearchResult::NoSolution
        ));
        assert!(*failed.borrow());
    }

    #[test]
    fn missing_goal_is_an_error() {
        let problem = SlidingTiles::without_goal(Puzzle::solved(3).unwrap());
        let mut engine = IterativeDeepeningAStar::new(ZeroHeuristic::new());
        assert_eq!(
            engine.find_solution(&problem).unwrap_err(),
            SearchError::MissingGoalState
        );
    }

    #[test]
    fn expansion_limit_stops_search() {
        let (tiles, _) = EIGHT_PUZZLES[4];
        let problem = sliding_tiles(tiles);
        let mut engine = IterativeDeepeningAStar::new(ManhattanDistance::new())
            .with_limits(SearchLimits::unlimited().with_expansion_limit(50));
        assert!(matches!(
            engine.find_solution(&problem).unwrap(),
            SearchResult::ExpansionLimitExceeded
        ));
    }
}
