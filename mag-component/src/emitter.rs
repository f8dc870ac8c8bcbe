//! Typed per-instance event registries.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// An event that can be routed by kind.
pub trait EventKind {
    type Kind: Copy + Eq + Hash + fmt::Debug;

    fn kind(&self) -> Self::Kind;
}

type Listener<E> = Box<dyn FnMut(&E)>;

/// Callback registry owned by a single component.
///
/// Listeners are invoked in registration order.
pub struct Emitter<E: EventKind> {
    listeners: HashMap<E::Kind, Vec<Listener<E>>>,
}

impl<E: EventKind> Default for Emitter<E> {
    fn default() -> Self {
        Self {
            listeners: HashMap::new(),
        }
    }
}

impl<E: EventKind> fmt::Debug for Emitter<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: HashMap<_, _> = self.listeners.iter().map(|(k, v)| (*k, v.len())).collect();
        f.debug_struct("Emitter").field("listeners", &counts).finish()
    }
}

impl<E: EventKind> Emitter<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_listener(&mut self, kind: E::Kind, listener: impl FnMut(&E) + 'static) {
        self.listeners.entry(kind).or_default().push(Box::new(listener));
    }

    /// Deliver an event. Returns true if at least one listener ran.
    pub fn emit(&mut self, event: &E) -> bool {
        let kind = event.kind();
        match self.listeners.get_mut(&kind) {
            Some(listeners) if !listeners.is_empty() => {
                log::trace!("[emit] {:?} to {} listener(s)", kind, listeners.len());
                for listener in listeners.iter_mut() {
                    listener(event);
                }
                true
            }
            _ => false,
        }
    }
}
