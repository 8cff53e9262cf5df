use crate::search::SearchNode;
use std::cell::RefCell;
use std::fmt::{self, Debug};
use std::rc::Rc;

/// Events a search engine reports to its listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchEvent {
    /// A node was expanded
    Expand,
    /// A goal node was found, the search is about to return it
    Found,
    /// The search ran out of nodes without finding a goal
    Fail,
}

/// An observer of search progress. Listeners are called synchronously on the
/// searching thread, in the order the engine processes nodes. The node is
/// absent for [`SearchEvent::Fail`].
pub trait NodeListener<S, A> {
    fn update(&mut self, event: SearchEvent, node: Option<&SearchNode<S, A>>);
}

impl<S, A, F> NodeListener<S, A> for F
where
    F: FnMut(SearchEvent, Option<&SearchNode<S, A>>),
{
    fn update(&mut self, event: SearchEvent, node: Option<&SearchNode<S, A>>) {
        self(event, node)
    }
}

pub type SharedListener<S, A> = Rc<RefCell<dyn NodeListener<S, A>>>;

/// The listeners registered with a search engine. The engine only calls
/// them, the caller keeps its own handle to read whatever they collect.
pub struct NodeListeners<S, A> {
    listeners: Vec<SharedListener<S, A>>,
}

impl<S, A> NodeListeners<S, A> {
    pub fn new() -> Self {
        Self { listeners: vec![] }
    }

    pub fn add(&mut self, listener: SharedListener<S, A>) {
        self.listeners.push(listener);
    }

    /// Remove `listener`, compared by identity. Returns whether it was
    /// registered.
    pub fn remove(&mut self, listener: &SharedListener<S, A>) -> bool {
        let before = self.listeners.len();
        self.listeners
            .retain(|registered| !Rc::ptr_eq(registered, listener));
        self.listeners.len() != before
    }

    pub fn notify(&self, event: SearchEvent, node: Option<&SearchNode<S, A>>) {
        for listener in &self.listeners {
            listener.borrow_mut().update(event, node);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<S, A> Default for NodeListeners<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A> Debug for NodeListeners<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeListeners")
            .field("len", &self.listeners.len())
            .finish()
    }
}
