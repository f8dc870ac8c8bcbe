//! List component state.

use magdom::NodeId;

use crate::component::{ComponentBase, ComponentId};
use crate::context::Context;
use crate::emitter::Emitter;
use crate::error::ComponentError;
use crate::focus::FOCUS_CLASS;

use super::events::{Direction, ListEvent, ListEventKind};
use super::render::{ItemRef, RenderItem};
use super::{ListKind, ListOptions, NAME};

/// One row slot of the body.
#[derive(Debug, Clone, Copy)]
pub(super) struct Slot {
    pub node: NodeId,
    /// Data index currently shown, `None` for an empty slot.
    pub index: Option<usize>,
}

/// A windowed list component.
///
/// `List<D>` owns `size` row slots and scrolls them over its data:
/// - Windowed rendering (only the visible range is rendered)
/// - One focused row, marked with the `focus` class
/// - Remote navigation (previous/next, pages, ends, optional cycling)
///
/// Rendering is delegated to a [`RenderItem`] passed to every operation
/// that may re-render rows.
#[derive(Debug)]
pub struct List<D> {
    pub(super) base: ComponentBase,
    pub(super) body: NodeId,
    pub(super) slots: Vec<Slot>,
    pub(super) data: Vec<D>,
    pub(super) cycle: bool,
    pub(super) kind: ListKind,
    pub(super) view_index: Option<usize>,
    pub(super) focused: Option<ItemRef>,
    pub(super) emitter: Emitter<ListEvent>,
}

impl<D> List<D> {
    /// Build the list structure.
    ///
    /// When `body` is given the row slots are created inside it and the caller
    /// is responsible for attaching it; otherwise a `div.body` is created and
    /// appended to the list root.
    pub fn new(
        cx: &mut Context,
        options: &ListOptions,
        body: Option<NodeId>,
    ) -> Result<Self, ComponentError> {
        let class_name = match &options.class_name {
            Some(extra) => format!("list {} {extra}", options.kind.class_name()),
            None => format!("list {}", options.kind.class_name()),
        };
        let base = ComponentBase::new(cx, NAME, &class_name)
            .with_focusable(options.focusable)
            .with_propagate(options.propagate);

        let body = match body {
            Some(body) => body,
            None => {
                let body = cx.dom.create_element_with_class("div", "body");
                cx.dom.append_child(base.node(), body)?;
                body
            }
        };

        let size = options.size.max(1);
        let mut slots = Vec::with_capacity(size);
        for _ in 0..size {
            let node = cx.dom.create_element_with_class("div", "item");
            cx.dom.append_child(body, node)?;
            slots.push(Slot { node, index: None });
        }

        Ok(Self {
            base,
            body,
            slots,
            data: Vec::new(),
            cycle: options.cycle,
            kind: options.kind,
            view_index: None,
            focused: None,
            emitter: Emitter::new(),
        })
    }

    pub fn id(&self) -> ComponentId {
        self.base.id()
    }

    pub fn node(&self) -> NodeId {
        self.base.node()
    }

    /// Container holding the row slots.
    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Number of row slots.
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    pub fn kind(&self) -> ListKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Data index of the first visible slot.
    pub fn view_index(&self) -> Option<usize> {
        self.view_index
    }

    /// Row slot nodes in display order, empty slots included.
    pub fn slot_nodes(&self) -> Vec<NodeId> {
        self.slots.iter().map(|s| s.node).collect()
    }

    /// Show the window starting at data index `index`.
    /// Returns false if that window is already shown.
    pub fn render_view(
        &mut self,
        cx: &mut Context,
        index: usize,
        renderer: &mut dyn RenderItem<D>,
    ) -> Result<bool, ComponentError> {
        if self.view_index == Some(index) {
            return Ok(false);
        }
        let prev = self.view_index.replace(index);

        for (i, slot) in self.slots.iter_mut().enumerate() {
            let data_index = index + i;
            match self.data.get(data_index) {
                Some(data) => {
                    slot.index = Some(data_index);
                    renderer.render_item(
                        cx,
                        ItemRef {
                            node: slot.node,
                            index: data_index,
                        },
                        data,
                    )?;
                }
                None => {
                    slot.index = None;
                    renderer.clear_item(cx, slot.node)?;
                }
            }
        }

        log::debug!("[render_view] {} view {:?} -> {}", self.base.id(), prev, index);
        self.emitter.emit(&ListEvent::MoveView { prev, curr: index });
        Ok(true)
    }

    pub(super) fn slot_item(&self, node: NodeId) -> Option<ItemRef> {
        self.slots
            .iter()
            .find(|s| s.node == node)
            .and_then(|s| s.index.map(|index| ItemRef { node, index }))
    }

    /// Mark a row as focused, moving the `focus` class.
    ///
    /// A row keeping its node but showing another entry after a scroll counts
    /// as a focus change.
    pub(super) fn move_focus(&mut self, cx: &mut Context, node: NodeId) -> Result<bool, ComponentError> {
        let Some(curr) = self.slot_item(node) else {
            return Ok(false);
        };
        if self.focused == Some(curr) {
            return Ok(false);
        }

        let prev = self.clear_focus(cx)?;
        if let Some(item) = prev {
            self.emitter.emit(&ListEvent::BlurItem { item });
        }

        cx.dom.add_class(node, FOCUS_CLASS)?;
        self.focused = Some(curr);
        log::debug!("[focus_item] {} row {} index {}", self.base.id(), node, curr.index);
        self.emitter.emit(&ListEvent::FocusItem { prev, curr });
        self.base.propagate(cx, ListEventKind::FocusItem.name());
        Ok(true)
    }

    /// Drop the focused row without emitting anything.
    pub(super) fn clear_focus(&mut self, cx: &mut Context) -> Result<Option<ItemRef>, ComponentError> {
        let Some(prev) = self.focused.take() else {
            return Ok(None);
        };
        cx.dom.remove_class(prev.node, FOCUS_CLASS)?;
        Ok(Some(prev))
    }

    /// Window start that makes `index` visible with the least scrolling.
    pub(super) fn view_for(&self, index: usize) -> usize {
        let size = self.slots.len();
        match self.view_index {
            Some(view) if index < view => index,
            Some(view) if index >= view + size => index + 1 - size,
            Some(view) => view,
            None => (index + 1).saturating_sub(size),
        }
    }

    /// Next index when stepping from `current`, or `None` at a non-cycling end.
    pub(super) fn step(&mut self, direction: Direction, current: usize) -> Option<usize> {
        let len = self.data.len();
        let target = match direction {
            Direction::Forward if current + 1 < len => Some(current + 1),
            Direction::Forward if self.cycle => Some(0),
            Direction::Backward if current > 0 => Some(current - 1),
            Direction::Backward if self.cycle => Some(len - 1),
            _ => None,
        };
        if target.is_none() {
            log::debug!("[step] {} overflow {:?}", self.base.id(), direction);
            self.emitter.emit(&ListEvent::Overflow { direction });
        }
        target
    }
}
