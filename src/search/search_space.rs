use crate::search::{NodeId, Plan, SearchNode, NO_NODE};
use segvec::{Linear, SegVec};
use std::fmt::{self, Debug};

/// A [`SearchSpace`] owns all search nodes generated during a search. Nodes
/// refer to their parents by [`NodeId`], which is simply the position of the
/// parent in the space. Nodes are only ever appended, so ids stay valid for
/// the lifetime of the space and parent links can never form a cycle.
pub struct SearchSpace<S, A> {
    nodes: SegVec<SearchNode<S, A>, Linear>,
}

impl<S, A> SearchSpace<S, A> {
    /// Create a search space containing only the root node for
    /// `initial_state`.
    pub fn new(initial_state: S) -> Self {
        let mut nodes = SegVec::new();
        nodes.push(SearchNode::new_without_parent(initial_state));
        Self { nodes }
    }

    /// Create a search space from a root-to-node path, where every node's
    /// parent is the node right before it.
    pub fn from_path(path: Vec<SearchNode<S, A>>) -> Self {
        let mut nodes = SegVec::new();
        for (index, node) in path.into_iter().enumerate() {
            if index == 0 {
                debug_assert!(node.is_root(), "Path must start at the root");
            } else {
                debug_assert_eq!(
                    node.get_parent_id(),
                    NodeId::new(index - 1),
                    "Path nodes must point to their predecessor"
                );
            }
            nodes.push(node);
        }
        assert!(nodes.len() > 0, "Path must contain at least the root node");
        Self { nodes }
    }

    pub fn insert(&mut self, node: SearchNode<S, A>) -> NodeId {
        let node_id = NodeId::new(self.nodes.len());
        self.nodes.push(node);
        node_id
    }

    /// The nodes from the root to `node_id`, both included.
    pub fn path(&self, node_id: NodeId) -> Vec<&SearchNode<S, A>> {
        let mut path = vec![];
        let mut current_id = node_id;
        while current_id != NO_NODE {
            let node = self.get_node(current_id);
            path.push(node);
            current_id = node.get_parent_id();
        }
        path.reverse();
        path
    }

    #[inline(always)]
    pub fn get_root_id(&self) -> NodeId {
        NodeId::new(0)
    }

    #[inline(always)]
    pub fn get_node(&self, node_id: NodeId) -> &SearchNode<S, A> {
        self.nodes.get(node_id.id()).expect("Invalid node id")
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }
}

impl<S, A: Clone> SearchSpace<S, A> {
    /// The actions leading from the root to `node_id`.
    pub fn action_sequence(&self, node_id: NodeId) -> Plan<A> {
        let mut steps = vec![];
        let mut current_node = self.get_node(node_id);
        while let Some(action) = current_node.get_action() {
            steps.push(action.clone());
            current_node = self.get_node(current_node.get_parent_id());
        }
        steps.reverse();
        Plan::new(steps)
    }
}

impl<S, A> Debug for SearchSpace<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchSpace")
            .field("len", &self.nodes.len())
            .finish()
    }
}
