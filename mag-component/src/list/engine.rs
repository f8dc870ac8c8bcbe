use magdom::{Key, NodeId};

use crate::component::{ComponentBase, EventResult};
use crate::context::Context;
use crate::emitter::EventKind;
use crate::error::ComponentError;

use super::events::{Direction, ListEvent, ListEventKind};
use super::render::{ItemRef, RenderItem};
use super::state::List;

/// What a list offers to components built on top of it.
///
/// Components that specialise row rendering hold an engine and pass
/// themselves in as the [`RenderItem`].
pub trait ListEngine<D> {
    fn base(&self) -> &ComponentBase;

    fn base_mut(&mut self) -> &mut ComponentBase;

    /// Container the row slots live in.
    fn body(&self) -> NodeId;

    /// Load data and focus `focus_index` (clamped to the data).
    fn init(
        &mut self,
        cx: &mut Context,
        data: Vec<D>,
        focus_index: usize,
        renderer: &mut dyn RenderItem<D>,
    ) -> Result<(), ComponentError>;

    /// Replace the data set and re-render every slot.
    fn set_data(
        &mut self,
        cx: &mut Context,
        data: Vec<D>,
        focus_index: usize,
        renderer: &mut dyn RenderItem<D>,
    ) -> Result<(), ComponentError>;

    fn data(&self) -> &[D];

    /// Rows currently showing data, in display order.
    fn items(&self) -> Vec<ItemRef>;

    /// The row for a slot node, if it shows data.
    fn item(&self, node: NodeId) -> Option<ItemRef>;

    fn focused_item(&self) -> Option<ItemRef>;

    /// Focus the list component itself.
    fn focus(&mut self, cx: &mut Context) -> bool;

    /// Make a visible row the focused row. Returns true if it changed.
    fn focus_item(&mut self, cx: &mut Context, node: NodeId) -> Result<bool, ComponentError>;

    /// Scroll `index` into view and focus its row.
    fn focus_index(
        &mut self,
        cx: &mut Context,
        index: usize,
        renderer: &mut dyn RenderItem<D>,
    ) -> Result<bool, ComponentError>;

    fn handle_key(
        &mut self,
        cx: &mut Context,
        key: Key,
        renderer: &mut dyn RenderItem<D>,
    ) -> Result<EventResult, ComponentError>;

    fn add_listener(&mut self, kind: ListEventKind, listener: Box<dyn FnMut(&ListEvent)>);

    /// Deliver an event to listeners and propagate it when enabled.
    fn emit(&mut self, cx: &mut Context, event: ListEvent);
}

impl<D> ListEngine<D> for List<D> {
    fn base(&self) -> &ComponentBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ComponentBase {
        &mut self.base
    }

    fn body(&self) -> NodeId {
        self.body
    }

    fn init(
        &mut self,
        cx: &mut Context,
        data: Vec<D>,
        focus_index: usize,
        renderer: &mut dyn RenderItem<D>,
    ) -> Result<(), ComponentError> {
        log::debug!("[init] {} with {} entries", self.base.id(), data.len());
        self.clear_focus(cx)?;
        self.set_data(cx, data, focus_index, renderer)
    }

    fn set_data(
        &mut self,
        cx: &mut Context,
        data: Vec<D>,
        focus_index: usize,
        renderer: &mut dyn RenderItem<D>,
    ) -> Result<(), ComponentError> {
        self.data = data;
        self.view_index = None;

        if self.data.is_empty() {
            self.clear_focus(cx)?;
            self.render_view(cx, 0, renderer)?;
            return Ok(());
        }

        let index = focus_index.min(self.data.len() - 1);
        self.focus_index(cx, index, renderer)?;
        Ok(())
    }

    fn data(&self) -> &[D] {
        &self.data
    }

    fn items(&self) -> Vec<ItemRef> {
        self.slots
            .iter()
            .filter_map(|s| s.index.map(|index| ItemRef { node: s.node, index }))
            .collect()
    }

    fn item(&self, node: NodeId) -> Option<ItemRef> {
        self.slot_item(node)
    }

    fn focused_item(&self) -> Option<ItemRef> {
        self.focused.and_then(|item| self.slot_item(item.node))
    }

    fn focus(&mut self, cx: &mut Context) -> bool {
        self.base.focus(cx)
    }

    fn focus_item(&mut self, cx: &mut Context, node: NodeId) -> Result<bool, ComponentError> {
        self.move_focus(cx, node)
    }

    fn focus_index(
        &mut self,
        cx: &mut Context,
        index: usize,
        renderer: &mut dyn RenderItem<D>,
    ) -> Result<bool, ComponentError> {
        if index >= self.data.len() {
            return Ok(false);
        }
        let view = self.view_for(index);
        self.render_view(cx, view, renderer)?;
        let node = self.slots[index - view].node;
        self.move_focus(cx, node)
    }

    fn handle_key(
        &mut self,
        cx: &mut Context,
        key: Key,
        renderer: &mut dyn RenderItem<D>,
    ) -> Result<EventResult, ComponentError> {
        let len = self.data.len();
        if len == 0 {
            return Ok(EventResult::Ignored);
        }

        let current = self.focused_item().map_or(0, |item| item.index);
        let size = self.slots.len();
        let view = self.view_index.unwrap_or(0);
        let (prev_key, next_key) = self.kind.navigation_keys();

        let target = if key == next_key {
            self.step(Direction::Forward, current)
        } else if key == prev_key {
            self.step(Direction::Backward, current)
        } else {
            match key {
                Key::PageDown => {
                    let last = (view + size - 1).min(len - 1);
                    Some(if current < last {
                        last
                    } else {
                        (current + size).min(len - 1)
                    })
                }
                Key::PageUp => Some(if current > view {
                    view
                } else {
                    current.saturating_sub(size)
                }),
                Key::Home => Some(0),
                Key::End => Some(len - 1),
                Key::Ok => {
                    if let Some(item) = self.focused_item() {
                        self.emit(cx, ListEvent::ClickItem { item, inner: false });
                    }
                    return Ok(EventResult::Consumed);
                }
                _ => return Ok(EventResult::Ignored),
            }
        };

        if let Some(target) = target {
            self.focus_index(cx, target, renderer)?;
        }
        Ok(EventResult::Consumed)
    }

    fn add_listener(&mut self, kind: ListEventKind, listener: Box<dyn FnMut(&ListEvent)>) {
        self.emitter.add_listener(kind, listener);
    }

    fn emit(&mut self, cx: &mut Context, event: ListEvent) {
        self.emitter.emit(&event);
        self.base.propagate(cx, event.kind().name());
    }
}
