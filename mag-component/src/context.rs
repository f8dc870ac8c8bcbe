use magdom::{Document, NodeId};

use crate::component::ComponentId;
use crate::focus::FocusState;

/// An event that bubbled out of a component towards its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Propagated {
    pub from: ComponentId,
    pub to: ComponentId,
    pub event: &'static str,
}

/// Shared state every component operation runs against.
///
/// Holds the node tree, the focus state and the queue of propagated events
/// waiting for the application to route them.
#[derive(Debug, Default)]
pub struct Context {
    pub dom: Document,
    focus: FocusState,
    propagated: Vec<Propagated>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus_state(&self) -> &FocusState {
        &self.focus
    }

    pub fn focused(&self) -> Option<ComponentId> {
        self.focus.focused()
    }

    pub fn is_focused(&self, id: ComponentId) -> bool {
        self.focus.is_focused(id)
    }

    /// Move focus to a component. Returns true if focus changed.
    pub fn focus_component(&mut self, id: ComponentId, node: NodeId) -> bool {
        self.focus.focus(&mut self.dom, id, node)
    }

    pub fn blur(&mut self) -> bool {
        self.focus.blur(&mut self.dom)
    }

    pub(crate) fn push_propagated(&mut self, event: Propagated) {
        log::trace!("[propagate] {} from {} to {}", event.event, event.from, event.to);
        self.propagated.push(event);
    }

    /// Drain events that bubbled out of components since the last call.
    pub fn take_propagated(&mut self) -> Vec<Propagated> {
        std::mem::take(&mut self.propagated)
    }
}
