use std::fmt::Display;

use magdom::NodeId;

use crate::context::Context;
use crate::error::ComponentError;

/// Content shown in a slot that has no data behind it.
pub const EMPTY_ITEM: &str = "\u{a0}";

/// A row slot together with the data index it currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemRef {
    pub node: NodeId,
    pub index: usize,
}

/// Fills row slots with content.
pub trait RenderItem<D> {
    /// Render `data` into the row.
    fn render_item(&mut self, cx: &mut Context, item: ItemRef, data: &D) -> Result<(), ComponentError>;

    /// Empty a row slot that no longer has data behind it.
    fn clear_item(&mut self, cx: &mut Context, node: NodeId) -> Result<(), ComponentError> {
        cx.dom.set_text(node, EMPTY_ITEM)?;
        Ok(())
    }
}

/// Renders each entry's `Display` output as the row text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl<D: Display> RenderItem<D> for TextRenderer {
    fn render_item(&mut self, cx: &mut Context, item: ItemRef, data: &D) -> Result<(), ComponentError> {
        cx.dom.set_text(item.node, &data.to_string())?;
        Ok(())
    }
}
