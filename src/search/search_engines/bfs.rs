//! Breadth first search

use crate::search::{
    search_engines::{
        frontier_search::frontier_search, FifoFrontier, SearchEngine, SearchLimits, SearchResult,
    },
    HeuristicValue, NodeListeners, SearchError, SearchProblem,
};

/// Expands nodes in the order they were generated. Finds the shallowest
/// goal, which is optimal when every action costs the same.
#[derive(Debug)]
pub struct BreadthFirstSearch<P: SearchProblem> {
    is_graph_search: bool,
    limits: SearchLimits,
    listeners: NodeListeners<P::State, P::Action>,
}

impl<P: SearchProblem> BreadthFirstSearch<P> {
    pub fn new() -> Self {
        Self {
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
}

impl<P: SearchProblem> Default for BreadthFirstSearch<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: SearchProblem> SearchEngine<P> for BreadthFirstSearch<P> {
    fn find_solution(
        &mut self,
        problem: &P,
    ) -> Result<SearchResult<P::State, P::Action>, SearchError> {
        frontier_search(
            problem,
            FifoFrontier::new(),
            |nodes, _| Ok(vec![HeuristicValue::from(0.); nodes.len()]),
            self.is_graph_search,
            self.limits,
            &self.listeners,
        )
    }

    fn listeners_mut(&mut self) -> &mut NodeListeners<P::State, P::Action> {
        &mut self.listeners
    }
}
