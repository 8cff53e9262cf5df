use crate::search::{HeuristicValue, NodeId, Plan, SearchNode, SearchSpace};

/// The goal node a search found, together with the search space it lives
/// in so the full path back to the root can be recovered.
#[derive(Debug)]
pub struct Solution<S, A> {
    search_space: SearchSpace<S, A>,
    goal_id: NodeId,
}

impl<S, A> Solution<S, A> {
    pub fn new(search_space: SearchSpace<S, A>, goal_id: NodeId) -> Self {
        Self {
            search_space,
            goal_id,
        }
    }

    pub fn goal_node(&self) -> &SearchNode<S, A> {
        self.search_space.get_node(self.goal_id)
    }

    pub fn get_state(&self) -> &S {
        self.goal_node().get_state()
    }

    pub fn get_path_cost(&self) -> HeuristicValue {
        self.goal_node().get_path_cost()
    }

    pub fn get_depth(&self) -> usize {
        self.goal_node().get_depth()
    }

    /// The nodes from the root to the goal, both included.
    pub fn path(&self) -> Vec<&SearchNode<S, A>> {
        self.search_space.path(self.goal_id)
    }

    pub fn get_search_space(&self) -> &SearchSpace<S, A> {
        &self.search_space
    }
}

impl<S, A: Clone> Solution<S, A> {
    pub fn action_sequence(&self) -> Plan<A> {
        self.search_space.action_sequence(self.goal_id)
    }
}
