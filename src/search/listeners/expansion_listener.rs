use crate::search::{NodeListener, SearchEvent, SearchNode};

/// Counts the nodes expanded by the search it listens to.
#[derive(Debug, Clone, Default)]
pub struct ExpansionListener {
    count: usize,
}

impl ExpansionListener {
    pub fn new() -> Self {
        Self { count: 0 }
    }

    pub fn get_count(&self) -> usize {
        self.count
    }
}

impl<S, A> NodeListener<S, A> for ExpansionListener {
    fn update(&mut self, event: SearchEvent, _node: Option<&SearchNode<S, A>>) {
        if event == SearchEvent::Expand {
            self.count += 1;
        }
    }
}
