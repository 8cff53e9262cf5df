mod expansion_listener;
mod node_listener;

pub use expansion_listener::ExpansionListener;
pub use node_listener::{NodeListener, NodeListeners, SearchEvent, SharedListener};
