//! Click relay and focus delegation for the layout list.

use magdom::{Key, NodeId};

use crate::component::EventResult;
use crate::context::Context;
use crate::error::ComponentError;
use crate::layout::Layout;
use crate::list::{ListEngine, ListEvent};

use super::descriptor::Descriptor;
use super::LayoutList;

impl<E: ListEngine<Descriptor>> LayoutList<E> {
    /// Click a row from the outside (pointer on the row itself).
    pub fn click_item(&mut self, cx: &mut Context, row: NodeId) -> Result<(), ComponentError> {
        if self.list.item(row).is_none() {
            return Err(ComponentError::MissingRow(row));
        }
        self.list.focus_item(cx, row)?;
        self.dispatch_item_click(cx, row, false)
    }

    /// Click inside a row's nested layout, optionally on one of its child
    /// widgets. The layout reports the click back through its listener.
    pub fn click_inner(
        &mut self,
        cx: &mut Context,
        row: NodeId,
        child: Option<usize>,
    ) -> Result<(), ComponentError> {
        self.with_row_layout(cx, row, |layout, cx| layout.click(cx, child))
    }

    /// Run `f` against a ready row's nested layout. Clicks the layout reports
    /// are dispatched before this returns.
    pub fn with_row_layout<R>(
        &mut self,
        cx: &mut Context,
        row: NodeId,
        f: impl FnOnce(&mut Layout, &mut Context) -> R,
    ) -> Result<R, ComponentError> {
        let state = self
            .renderer
            .rows
            .get_mut(&row)
            .ok_or(ComponentError::MissingRow(row))?;
        let result = f(&mut state.layout, cx);
        self.flush_relay(cx)?;
        Ok(result)
    }

    /// Route a remote key.
    ///
    /// While a child widget of the focused row holds focus, keys go to that
    /// row's layout and `Back` returns focus to the list. Otherwise `Ok`
    /// clicks the focused row and everything else drives the list.
    pub fn handle_key(&mut self, cx: &mut Context, key: Key) -> Result<EventResult, ComponentError> {
        if let Some(item) = self.list.focused_item()
            && let Some(state) = self.renderer.rows.get_mut(&item.node)
            && state.layout.contains_focus(cx)
        {
            if key == Key::Back {
                self.list.focus(cx);
                return Ok(EventResult::Consumed);
            }
            let result = state.layout.handle_key(cx, key);
            self.flush_relay(cx)?;
            return Ok(result);
        }

        if key == Key::Ok {
            return match self.list.focused_item() {
                Some(item) => {
                    self.dispatch_item_click(cx, item.node, false)?;
                    Ok(EventResult::Consumed)
                }
                None => Ok(EventResult::Ignored),
            };
        }

        self.list.handle_key(cx, key, &mut self.renderer)
    }

    /// Dispatch clicks relayed by nested layouts, in arrival order.
    fn flush_relay(&mut self, cx: &mut Context) -> Result<(), ComponentError> {
        loop {
            let next = self.renderer.relay.borrow_mut().pop_front();
            let Some(row) = next else {
                return Ok(());
            };
            self.dispatch_item_click(cx, row, true)?;
        }
    }

    /// Focus delegation for a clicked row, then the row callback, then
    /// external listeners.
    fn dispatch_item_click(&mut self, cx: &mut Context, row: NodeId, inner: bool) -> Result<(), ComponentError> {
        let Some(item) = self.list.item(row) else {
            log::debug!("[click_item] {row} no longer shows data, dropped");
            return Ok(());
        };
        log::debug!("[click_item] row {} index {} inner={}", row, item.index, inner);

        // independent checks, not if/else: an inner click never cascades in
        if let Some(state) = self.renderer.rows.get(&row)
            && !state.layout.children().is_empty()
            && !inner
        {
            state.layout.focus_current(cx);
        }

        if inner {
            self.list.focus(cx);
            self.list.focus_item(cx, row)?;
        }

        if let Some(handler) = self.renderer.handlers.get(&item.index).cloned() {
            handler.call(&self.row_ref(item));
        }

        self.list.emit(cx, ListEvent::ClickItem { item, inner });
        Ok(())
    }
}
