use thiserror::Error;

/// Errors that abort a search. Running out of nodes to expand is not one of
/// them, see [`crate::search::search_engines::SearchResult::NoSolution`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// A goal dependent operation (goal test, heuristic) was called on a
    /// problem that has no goal state.
    #[error("goal state is not defined, a goal state is required for this problem")]
    MissingGoalState,
    /// An action was applied in a state where it is not legal.
    #[error("action {action} is not applicable in state {state}")]
    InvalidAction { action: String, state: String },
    /// A state does not have the shape of the states of the problem it was
    /// passed to.
    #[error("state has size {found} but the problem's states have size {expected}")]
    StateSizeMismatch { expected: usize, found: usize },
}
