use crate::search::{
    search_engines::{
        AStarSearch, BreadthFirstSearch, DepthFirstSearch, GreedySearch, IterativeDeepeningAStar,
        SearchLimits, UniformCostSearch,
    },
    Heuristic, NodeListeners, SearchError, SearchProblem, SharedListener, Solution,
};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum SearchResult<S, A> {
    /// The search reached a goal node
    Success(Solution<S, A>),
    /// The frontier ran out of nodes, no goal is reachable
    NoSolution,
    /// The search ran out of time
    TimeLimitExceeded,
    /// The search expanded as many nodes as it was allowed to
    ExpansionLimitExceeded,
    /// The search ran out of memory
    MemoryLimitExceeded,
}

impl<S, A> SearchResult<S, A> {
    pub fn is_success(&self) -> bool {
        matches!(self, SearchResult::Success(_))
    }

    /// The solution, or [`None`] if the search did not reach a goal.
    pub fn into_solution(self) -> Option<Solution<S, A>> {
        match self {
            SearchResult::Success(solution) => Some(solution),
            _ => None,
        }
    }
}

/// A search engine looks for a path from a problem's initial state to a goal
/// state. Engines can be reused, every call to
/// [`SearchEngine::find_solution`] starts a fresh search.
pub trait SearchEngine<P: SearchProblem> {
    /// Search for a goal node. Errors returned by the problem, such as a
    /// missing goal, abort the search and are propagated as they are.
    fn find_solution(
        &mut self,
        problem: &P,
    ) -> Result<SearchResult<P::State, P::Action>, SearchError>;

    fn listeners_mut(&mut self) -> &mut NodeListeners<P::State, P::Action>;

    fn add_listener(&mut self, listener: SharedListener<P::State, P::Action>) {
        self.listeners_mut().add(listener);
    }

    /// Returns whether the listener was registered.
    fn remove_listener(&mut self, listener: &SharedListener<P::State, P::Action>) -> bool {
        self.listeners_mut().remove(listener)
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum SearchEngineName {
    /// A* search, optimal with an admissible heuristic
    #[value(name = "astar")]
    #[serde(rename = "astar")]
    AStar,
    /// Greedy best-first search on the heuristic alone
    Greedy,
    /// Uniform cost search, ignores the heuristic
    Ucs,
    /// Breadth-first search, ignores the heuristic
    Bfs,
    /// Depth-first search, ignores the heuristic
    Dfs,
    /// Iterative deepening A*, always a tree search
    #[value(name = "idastar")]
    #[serde(rename = "idastar")]
    IdaStar,
}

impl SearchEngineName {
    pub fn create<P>(
        &self,
        heuristic: Box<dyn Heuristic<P>>,
        is_graph_search: bool,
        limits: SearchLimits,
    ) -> Box<dyn SearchEngine<P>>
    where
        P: SearchProblem + 'static,
    {
        match self {
            SearchEngineName::AStar => Box::new(
                AStarSearch::new(heuristic)
                    .with_graph_search(is_graph_search)
                    .with_limits(limits),
            ),
            SearchEngineName::Greedy => Box::new(
                GreedySearch::new(heuristic)
                    .with_graph_search(is_graph_search)
                    .with_limits(limits),
            ),
            SearchEngineName::Ucs => Box::new(
                UniformCostSearch::new()
                    .with_graph_search(is_graph_search)
                    .with_limits(limits),
            ),
            SearchEngineName::Bfs => Box::new(
                BreadthFirstSearch::new()
                    .with_graph_search(is_graph_search)
                    .with_limits(limits),
            ),
            SearchEngineName::Dfs => Box::new(
                DepthFirstSearch::new()
                    .with_graph_search(is_graph_search)
                    .with_limits(limits),
            ),
            SearchEngineName::IdaStar => {
                Box::new(IterativeDeepeningAStar::new(heuristic).with_limits(limits))
            }
        }
    }
}
