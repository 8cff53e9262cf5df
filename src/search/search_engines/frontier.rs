use crate::search::{HeuristicValue, NodeId};
use priority_queue::PriorityQueue;
use std::{cmp::Reverse, collections::VecDeque, fmt::Debug};

/// The set of generated but not yet expanded nodes. The order nodes are
/// popped in is what distinguishes one search strategy from another.
pub trait Frontier: Debug {
    fn push(&mut self, node_id: NodeId, priority: HeuristicValue);

    fn pop(&mut self) -> Option<NodeId>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Pops the node with the lowest priority first. Ties go to the node pushed
/// first, node ids grow with insertion order.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    queue: PriorityQueue<NodeId, Reverse<(HeuristicValue, NodeId)>>,
}

impl PriorityFrontier {
    pub fn new() -> Self {
        Self {
            queue: PriorityQueue::new(),
        }
    }
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, node_id: NodeId, priority: HeuristicValue) {
        self.queue.push(node_id, Reverse((priority, node_id)));
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop().map(|(node_id, _)| node_id)
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// First in, first out. Priorities are ignored.
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<NodeId>,
}

impl FifoFrontier {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }
}

impl Frontier for FifoFrontier {
    fn push(&mut self, node_id: NodeId, _priority: HeuristicValue) {
        self.queue.push_back(node_id);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Last in, first out. Priorities are ignored.
#[derive(Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<NodeId>,
}

impl LifoFrontier {
    pub fn new() -> Self {
        Self { stack: vec![] }
    }
}

impl Frontier for LifoFrontier {
    fn push(&mut self, node_id: NodeId, _priority: HeuristicValue) {
        self.stack.push(node_id);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}
