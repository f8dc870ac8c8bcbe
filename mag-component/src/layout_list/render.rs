//! Row rendering for the layout list.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use magdom::NodeId;
use serde_json::Value;

use crate::component::ComponentId;
use crate::context::Context;
use crate::error::ComponentError;
use crate::layout::{Layout, LayoutConfig, LayoutEventKind};
use crate::list::{ItemRef, RenderItem, EMPTY_ITEM};

use super::descriptor::{ClickHandler, Descriptor};

/// Rows whose nested layout reported a click, waiting to be dispatched.
pub(super) type Relay = Rc<RefCell<VecDeque<NodeId>>>;

/// Render state of a ready row.
#[derive(Debug)]
pub(super) struct RowState {
    pub layout: Layout,
    pub value: Value,
}

/// Renders descriptors into row slots and keeps the per-row side table.
///
/// A row is ready exactly when it has an entry in `rows`.
#[derive(Debug)]
pub(super) struct RowRenderer {
    pub owner: ComponentId,
    pub fixed_data: bool,
    pub rows: HashMap<NodeId, RowState>,
    pub handlers: HashMap<usize, ClickHandler>,
    pub relay: Relay,
}

impl RowRenderer {
    pub fn new(owner: ComponentId, fixed_data: bool) -> Self {
        Self {
            owner,
            fixed_data,
            rows: HashMap::new(),
            handlers: HashMap::new(),
            relay: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    /// Refresh text and class of plain-text children without touching the
    /// tree structure.
    fn refresh(cx: &mut Context, layout: &Layout, data: &Descriptor) -> Result<(), ComponentError> {
        let nodes = cx.dom.children(layout.node()).to_vec();
        for (i, item) in data.items.iter().enumerate() {
            let Some((text, class_name)) = item.plain_text() else {
                continue;
            };
            let Some(&node) = nodes.get(i) else {
                log::warn!(
                    "[render_item] {} has no child {} to refresh, skipping",
                    layout.id(),
                    i
                );
                break;
            };
            cx.dom.set_text(node, text)?;
            cx.dom.set_class_name(node, class_name)?;
        }
        Ok(())
    }

    /// Replace the row content with a freshly built layout.
    fn rebuild(&mut self, cx: &mut Context, item: ItemRef, data: &Descriptor) -> Result<Layout, ComponentError> {
        cx.dom.clear_children(item.node)?;
        if let Some(old) = self.rows.remove(&item.node) {
            old.layout.destroy(cx)?;
        }

        let mut config = LayoutConfig::new(data.items.clone()).focusable(false);
        if let Some(class_name) = &data.class_name {
            config = config.class_name(class_name.clone());
        }
        let mut layout = Layout::new(cx, config)?;

        cx.dom.append_child(item.node, layout.node())?;
        layout.set_parent(self.owner, item.node);

        let relay = Rc::clone(&self.relay);
        let row = item.node;
        layout.add_listener(LayoutEventKind::Click, move |_| {
            relay.borrow_mut().push_back(row);
        });

        Ok(layout)
    }
}

impl RenderItem<Descriptor> for RowRenderer {
    fn render_item(&mut self, cx: &mut Context, item: ItemRef, data: &Descriptor) -> Result<(), ComponentError> {
        let value = data.value_or_default();

        if self.fixed_data && self.rows.contains_key(&item.node) {
            let state = self
                .rows
                .get_mut(&item.node)
                .ok_or(ComponentError::MissingRow(item.node))?;
            Self::refresh(cx, &state.layout, data)?;
            state.value = value;
            log::trace!("[render_item] refreshed row {} index {}", item.node, item.index);
        } else {
            let layout = self.rebuild(cx, item, data)?;
            self.rows.insert(item.node, RowState { layout, value });
            log::trace!("[render_item] rebuilt row {} index {}", item.node, item.index);
        }

        match &data.click {
            Some(handler) => {
                self.handlers.insert(item.index, handler.clone());
            }
            None => {
                self.handlers.remove(&item.index);
            }
        }
        Ok(())
    }

    fn clear_item(&mut self, cx: &mut Context, node: NodeId) -> Result<(), ComponentError> {
        cx.dom.clear_children(node)?;
        if let Some(old) = self.rows.remove(&node) {
            old.layout.destroy(cx)?;
        }
        cx.dom.set_text(node, EMPTY_ITEM)?;
        Ok(())
    }
}
