use magdom::{Document, NodeId};

use crate::component::ComponentId;

/// Class carried by the node of the focused component.
pub const FOCUS_CLASS: &str = "focus";

/// Tracks which component is currently focused.
///
/// Exactly one component can hold focus. Moving focus moves the
/// [`FOCUS_CLASS`] class from the old component node to the new one.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<(ComponentId, NodeId)>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused component.
    pub fn focused(&self) -> Option<ComponentId> {
        self.focused.map(|(id, _)| id)
    }

    pub fn is_focused(&self, id: ComponentId) -> bool {
        self.focused() == Some(id)
    }

    /// Focus a component.
    /// Returns true if focus changed.
    pub fn focus(&mut self, dom: &mut Document, id: ComponentId, node: NodeId) -> bool {
        if self.is_focused(id) {
            return false;
        }
        if let Some((old, old_node)) = self.focused.take() {
            // the old node may already be gone
            let _ = dom.remove_class(old_node, FOCUS_CLASS);
            log::debug!("[focus] blur {old}");
        }
        // components hand in their own root node
        let _ = dom.add_class(node, FOCUS_CLASS);
        self.focused = Some((id, node));
        log::debug!("[focus] focus {id}");
        true
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self, dom: &mut Document) -> bool {
        match self.focused.take() {
            Some((id, node)) => {
                // may already be gone
                let _ = dom.remove_class(node, FOCUS_CLASS);
                log::debug!("[focus] blur {id}");
                true
            }
            None => false,
        }
    }
}
