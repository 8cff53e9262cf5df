//! The formal definition of a problem that can be solved by the search
//! engines in [`crate::search::search_engines`].

use crate::search::{HeuristicValue, SearchError};
use std::fmt::Debug;
use std::hash::Hash;

/// A [`SearchProblem`] defines an implicit state space: where the search
/// starts, which actions are legal in a state, where they lead and what they
/// cost.
///
/// States need value equality and hashing. Graph search keeps a set of
/// explored states and IDA* compares states along its current path, so a
/// state type whose `Eq`/`Hash` are not structural will make graph search
/// behave like tree search.
pub trait SearchProblem {
    type State: Clone + Eq + Hash + Debug;
    type Action: Clone + Debug;

    fn initial_state(&self) -> &Self::State;

    /// The designated goal state, if the problem has one.
    fn goal_state(&self) -> Option<&Self::State> {
        None
    }

    /// The legal actions in `state`. No actions means `state` is a dead end.
    /// The order of the returned actions is the order in which children are
    /// generated, which in turn decides how ties in the frontier are broken.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Apply `action` in `state`. Fails with [`SearchError::InvalidAction`]
    /// if `action` is not one of [`SearchProblem::actions`] for `state`.
    fn action_result(
        &self,
        state: &Self::State,
        action: &Self::Action,
    ) -> Result<Self::State, SearchError>;

    /// The non-negative cost of going from `state` to `result` via `action`.
    fn action_cost(
        &self,
        state: &Self::State,
        action: &Self::Action,
        result: &Self::State,
    ) -> HeuristicValue;

    /// Whether `state` is a goal. By default this compares with
    /// [`SearchProblem::goal_state`] and fails if there is none, problems
    /// with a goal predicate should override it.
    fn is_goal(&self, state: &Self::State) -> Result<bool, SearchError> {
        self.goal_state()
            .map(|goal| goal == state)
            .ok_or(SearchError::MissingGoalState)
    }
}
