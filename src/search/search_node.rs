use crate::search::{HeuristicValue, SearchError, SearchProblem};

/// Index of a [`SearchNode`] inside the [`crate::search::SearchSpace`] that
/// owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    #[inline(always)]
    pub fn id(&self) -> usize {
        self.0
    }
}

/// Parent id of the root node.
pub const NO_NODE: NodeId = NodeId(usize::MAX);

/// A [`SearchNode`] is a node in the search tree. It holds the state it
/// represents, the node it was generated from and the action that led here,
/// together with the accumulated path cost and the depth of the node.
///
/// Nodes are never modified once created, expanding a node always generates
/// new child nodes.
#[derive(Debug, Clone)]
pub struct SearchNode<S, A> {
    /// The state this node represents
    state: S,
    /// Parent node, [`NO_NODE`] for the root
    parent_id: NodeId,
    /// Action applied in the parent state to reach this node
    action: Option<A>,
    /// Cost of the path from the root to this node
    path_cost: HeuristicValue,
    /// Number of actions between the root and this node
    depth: usize,
}

impl<S, A> SearchNode<S, A> {
    /// Create a new search node with no parent. This should only be used for
    /// the root node of the search tree. For non-root nodes see
    /// [`SearchNode::new_with_parent`].
    pub fn new_without_parent(state: S) -> Self {
        Self {
            state,
            parent_id: NO_NODE,
            action: None,
            path_cost: HeuristicValue::from(0.),
            depth: 0,
        }
    }

    /// Create a new search node as the child of `parent`, which lives at
    /// `parent_id`.
    pub fn new_with_parent(
        state: S,
        parent_id: NodeId,
        parent: &Self,
        action: A,
        step_cost: HeuristicValue,
    ) -> Self {
        debug_assert!(step_cost >= HeuristicValue::from(0.));
        Self {
            state,
            parent_id,
            action: Some(action),
            path_cost: parent.path_cost + step_cost,
            depth: parent.depth + 1,
        }
    }

    /// Generate one child per legal action in this node's state. The
    /// children point back to `node_id`, which must be the id of this node.
    pub fn expand<P>(&self, node_id: NodeId, problem: &P) -> Result<Vec<Self>, SearchError>
    where
        P: SearchProblem<State = S, Action = A>,
    {
        problem
            .actions(&self.state)
            .into_iter()
            .map(|action| {
                let next_state = problem.action_result(&self.state, &action)?;
                let step_cost = problem.action_cost(&self.state, &action, &next_state);
                Ok(Self::new_with_parent(
                    next_state, node_id, self, action, step_cost,
                ))
            })
            .collect()
    }

    pub fn get_state(&self) -> &S {
        &self.state
    }

    pub fn get_parent_id(&self) -> NodeId {
        self.parent_id
    }

    pub fn is_root(&self) -> bool {
        self.parent_id == NO_NODE
    }

    pub fn get_action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    pub fn get_path_cost(&self) -> HeuristicValue {
        self.path_cost
    }

    pub fn get_depth(&self) -> usize {
        self.depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::problems::{Move, Puzzle, SlidingTiles};

    #[test]
    fn root_node_has_no_parent() {
        let node: SearchNode<Puzzle, Move> =
            SearchNode::new_without_parent(Puzzle::solved(3).unwrap());
        assert!(node.is_root());
        assert_eq!(node.get_depth(), 0);
        assert_eq!(node.get_path_cost(), HeuristicValue::from(0.));
        assert!(node.get_action().is_none());
    }

    #[test]
    fn expand_generates_one_child_per_action() {
        let problem = SlidingTiles::new(
            Puzzle::from_tiles(&[1, 2, 3, 4, 0, 5, 6, 7, 8]).unwrap(),
            Puzzle::solved(3).unwrap(),
        )
        .unwrap();
        let root = SearchNode::new_without_parent(problem.initial_state().clone());
        let children = root.expand(NodeId::new(0), &problem).unwrap();

        assert_eq!(children.len(), 4);
        for child in &children {
            assert_eq!(child.get_parent_id(), NodeId::new(0));
            assert_eq!(child.get_depth(), 1);
            assert_eq!(child.get_path_cost(), HeuristicValue::from(1.));
            let action = child.get_action().unwrap();
            assert_eq!(
                child.get_state(),
                &problem.action_result(root.get_state(), action).unwrap()
            );
        }
    }

    #[test]
    fn path_cost_accumulates_along_the_chain() {
        let problem = SlidingTiles::new(
            Puzzle::from_tiles(&[0, 1, 2, 3, 4, 5, 6, 7, 8]).unwrap(),
            Puzzle::solved(3).unwrap(),
        )
        .unwrap();
        let root = SearchNode::new_without_parent(problem.initial_state().clone());
        let child = root.expand(NodeId::new(0), &problem).unwrap().remove(0);
        let grandchild = child.expand(NodeId::new(1), &problem).unwrap().remove(0);

        assert_eq!(grandchild.get_depth(), 2);
        assert_eq!(grandchild.get_path_cost(), HeuristicValue::from(2.));
        assert_eq!(grandchild.get_parent_id(), NodeId::new(1));
    }
}
