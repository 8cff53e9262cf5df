//! The loop shared by every engine that keeps an explicit frontier.

use crate::search::{
    search_engines::{
        Frontier, SearchLimits, SearchResult, SearchStatistics, TerminationCondition,
    },
    HeuristicValue, NodeListeners, SearchError, SearchEvent, SearchNode, SearchProblem,
    SearchSpace, Solution,
};
use std::{collections::HashSet, slice};

/// Search `problem` by repeatedly popping a node from `frontier`, checking
/// whether it is a goal and otherwise pushing its children with the
/// priorities `evaluate` gives them. `evaluate` receives all children of one
/// expansion at once and returns one priority per child.
///
/// In graph search mode a state is expanded at most once: children whose
/// state was already expanded are never added, and frontier entries whose
/// state got expanded after they were added are skipped when popped.
pub(super) fn frontier_search<P, F, E>(
    problem: &P,
    mut frontier: F,
    mut evaluate: E,
    is_graph_search: bool,
    limits: SearchLimits,
    listeners: &NodeListeners<P::State, P::Action>,
) -> Result<SearchResult<P::State, P::Action>, SearchError>
where
    P: SearchProblem,
    F: Frontier,
    E: FnMut(&[SearchNode<P::State, P::Action>], &P) -> Result<Vec<HeuristicValue>, SearchError>,
{
    let mut statistics = SearchStatistics::new();
    let mut termination_condition = TerminationCondition::new(limits);
    let mut search_space = SearchSpace::new(problem.initial_state().clone());
    let mut explored: HashSet<P::State> = HashSet::new();

    let root_id = search_space.get_root_id();
    let root_priorities = evaluate(slice::from_ref(search_space.get_node(root_id)), problem)?;
    for priority in root_priorities {
        frontier.push(root_id, priority);
    }

    while let Some(node_id) = frontier.pop() {
        if let Some(result) =
            termination_condition.should_terminate(statistics.get_expanded_nodes())
        {
            statistics.finalise_search();
            termination_condition.finalise();
            return Ok(result);
        }

        let node = search_space.get_node(node_id);
        if is_graph_search && explored.contains(node.get_state()) {
            statistics.increment_stale_nodes();
            continue;
        }

        if problem.is_goal(node.get_state())? {
            listeners.notify(SearchEvent::Found, Some(node));
            statistics.finalise_search();
            termination_condition.finalise();
            return Ok(SearchResult::Success(Solution::new(search_space, node_id)));
        }

        if is_graph_search {
            explored.insert(node.get_state().clone());
        }

        let children = node.expand(node_id, problem)?;
        statistics.increment_expanded_nodes();
        statistics.increment_generated_nodes(children.len());

        let children: Vec<_> = children
            .into_iter()
            .filter(|child| {
                let is_explored = is_graph_search && explored.contains(child.get_state());
                if is_explored {
                    statistics.increment_pruned_nodes();
                }
                !is_explored
            })
            .collect();
        let priorities = evaluate(&children, problem)?;
        for (child, priority) in children.into_iter().zip(priorities) {
            let child_id = search_space.insert(child);
            frontier.push(child_id, priority);
        }
        statistics.register_frontier_size(frontier.len());

        listeners.notify(SearchEvent::Expand, Some(search_space.get_node(node_id)));
    }

    listeners.notify(SearchEvent::Fail, None);
    statistics.finalise_search();
    termination_condition.finalise();
    Ok(SearchResult::NoSolution)
}
