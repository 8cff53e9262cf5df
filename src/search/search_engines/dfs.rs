//! Depth first search

use crate::search::{
    search_engines::{
        frontier_search::frontier_search, LifoFrontier, SearchEngine, SearchLimits, SearchResult,
    },
    HeuristicValue, NodeListeners, SearchError, SearchProblem,
};

/// Always expands the most recently generated node. Complete on finite
/// state spaces only as a graph search, and the solutions it finds are
/// rarely short.
#[derive(Debug)]
pub struct DepthFirstSearch<P: SearchProblem> {
    is_graph_search: bool,
    limits: SearchLimits,
    listeners: NodeListeners<P::State, P::Action>,
}

impl<P: SearchProblem> DepthFirstSearch<P> {
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

impl<P: SearchProblem> Default for DepthFirstSearch<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: SearchProblem> SearchEngine<P> for DepthFirstSearch<P> {
    fn find_solution(
        &mut self,
        problem: &P,
    ) -> Result<SearchResult<P::State, P::Action>, SearchError> {
        frontier_search(
            problem,
            LifoFrontier::new(),
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
