//! Identity, root node and focus plumbing shared by all components.

use std::sync::atomic::{AtomicUsize, Ordering};

use magdom::NodeId;

use crate::context::{Context, Propagated};

/// Unique identifier for a component instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentId(usize);

impl ComponentId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for ComponentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__component_{}", self.0)
    }
}

/// Result of offering an input event to a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// The component handled the event.
    Consumed,
    /// The component did not handle the event.
    Ignored,
}

impl EventResult {
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}

/// State every component carries: identity, root node and event policy.
#[derive(Debug)]
pub struct ComponentBase {
    id: ComponentId,
    name: &'static str,
    node: NodeId,
    focusable: bool,
    propagate: bool,
    parent: Option<ComponentId>,
}

impl ComponentBase {
    /// Create the root node (`div.component.<class_name>`) for a component.
    pub fn new(cx: &mut Context, name: &'static str, class_name: &str) -> Self {
        let node = cx
            .dom
            .create_element_with_class("div", &format!("component {class_name}"));
        let id = ComponentId::new();
        log::trace!("[component] created {name} {id} at {node}");
        Self {
            id,
            name,
            node,
            focusable: true,
            propagate: false,
            parent: None,
        }
    }

    pub fn with_focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    pub fn with_propagate(mut self, propagate: bool) -> Self {
        self.propagate = propagate;
        self
    }

    pub fn id(&self) -> ComponentId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn focusable(&self) -> bool {
        self.focusable
    }

    pub fn propagates(&self) -> bool {
        self.propagate
    }

    pub fn parent(&self) -> Option<ComponentId> {
        self.parent
    }

    pub fn set_parent(&mut self, parent: Option<ComponentId>) {
        self.parent = parent;
    }

    /// Take focus. Non-focusable components refuse.
    /// Returns true if focus changed.
    pub fn focus(&self, cx: &mut Context) -> bool {
        if !self.focusable {
            return false;
        }
        cx.focus_component(self.id, self.node)
    }

    pub fn is_focused(&self, cx: &Context) -> bool {
        cx.is_focused(self.id)
    }

    /// Release focus if this component holds it.
    pub fn blur(&self, cx: &mut Context) -> bool {
        if self.is_focused(cx) {
            cx.blur()
        } else {
            false
        }
    }

    /// Queue `event` for the parent component when propagation is enabled.
    pub fn propagate(&self, cx: &mut Context, event: &'static str) {
        if let (true, Some(parent)) = (self.propagate, self.parent) {
            cx.push_propagated(Propagated {
                from: self.id,
                to: parent,
                event,
            });
        }
    }
}
