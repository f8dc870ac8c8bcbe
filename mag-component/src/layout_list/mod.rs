//! Layout list: a list whose rows are nested layouts.
//!
//! ```
//! use mag_component::{Context, Descriptor, LayoutItem, LayoutList, LayoutListConfig};
//!
//! let mut cx = Context::new();
//! let list = LayoutList::new(
//!     &mut cx,
//!     LayoutListConfig::new()
//!         .size(7)
//!         .no_data("No channels")
//!         .data(vec![
//!             Descriptor::new(vec![LayoutItem::class("star"), LayoutItem::text("Some text")])
//!                 .on_click(|row| println!("clicked row {}", row.index)),
//!             Descriptor::new(["Hello world"]),
//!         ]),
//! )
//! .unwrap();
//! assert!(cx.dom.has_class(list.no_data_node(), "hidden"));
//! ```

mod config;
mod descriptor;
mod events;
mod render;

pub use config::{LayoutListConfig, NoData};
pub use descriptor::{ClickHandler, Descriptor, RowRef};

use magdom::NodeId;
use serde_json::Value;

use crate::component::ComponentId;
use crate::context::Context;
use crate::error::ComponentError;
use crate::layout::Layout;
use crate::list::{ItemRef, List, ListEngine, ListEvent, ListEventKind};

use render::RowRenderer;

pub const NAME: &str = "mag-component-layout-list";

const HIDDEN_CLASS: &str = "hidden";

/// List of rows, each rendered as a nested [`Layout`] of sub-items.
///
/// Clicking a row moves focus into its layout; clicking inside a layout
/// moves focus back out to the list and selects the row. Rows may carry a
/// click callback. An optional placeholder is shown while the data set is
/// empty.
#[derive(Debug)]
pub struct LayoutList<E: ListEngine<Descriptor> = List<Descriptor>> {
    list: E,
    renderer: RowRenderer,
    no_data: NodeId,
}

impl LayoutList<List<Descriptor>> {
    /// Build a layout list over the default [`List`] engine and initialise
    /// it with `config`.
    pub fn new(cx: &mut Context, config: LayoutListConfig) -> Result<Self, ComponentError> {
        let body = cx.dom.create_element_with_class("div", "body");
        let no_data = cx.dom.create_element_with_class("div", "noData hidden");
        let list = List::new(cx, &config.list_options(), Some(body))?;
        Self::assemble(cx, list, no_data, config)
    }
}

impl<E: ListEngine<Descriptor>> LayoutList<E> {
    /// Build a layout list over a custom engine whose body is not attached yet.
    pub fn with_engine(cx: &mut Context, list: E, config: LayoutListConfig) -> Result<Self, ComponentError> {
        let no_data = cx.dom.create_element_with_class("div", "noData hidden");
        Self::assemble(cx, list, no_data, config)
    }

    fn assemble(
        cx: &mut Context,
        list: E,
        no_data: NodeId,
        config: LayoutListConfig,
    ) -> Result<Self, ComponentError> {
        let root = list.base().node();
        cx.dom.append_child(root, list.body())?;
        cx.dom.append_child(root, no_data)?;

        let renderer = RowRenderer::new(list.base().id(), config.fixed_data);
        let mut this = Self {
            list,
            renderer,
            no_data,
        };
        this.init(cx, config)?;
        Ok(this)
    }

    /// Load data and configure the placeholder.
    pub fn init(&mut self, cx: &mut Context, config: LayoutListConfig) -> Result<(), ComponentError> {
        let has_data = !config.data.is_empty();
        let in_rows = self.focus_in_rows(cx);
        self.list
            .init(cx, config.data, config.focus_index, &mut self.renderer)?;
        self.restore_focus(cx, in_rows);

        if let Some(no_data) = config.no_data.filter(NoData::is_set) {
            self.set_no_data(cx, no_data)?;
        }
        self.toggle_no_data(cx, has_data)
    }

    fn set_no_data(&mut self, cx: &mut Context, no_data: NoData) -> Result<(), ComponentError> {
        if cfg!(debug_assertions)
            && let NoData::Node(node) = &no_data
            && !cx.dom.contains(*node)
        {
            return Err(ComponentError::InvalidConfig {
                module: NAME,
                field: "noData",
                expected: "string or element",
            });
        }

        cx.dom.clear_children(self.no_data)?;
        match no_data {
            NoData::Node(node) if cx.dom.contains(node) => {
                cx.dom.append_child(self.no_data, node)?;
            }
            NoData::Node(node) => {
                log::warn!("[init] {NAME}: noData node {node} does not exist, ignored");
            }
            NoData::Text(text) => {
                let wrap = cx.dom.create_element("div");
                cx.dom.set_text(wrap, &text)?;
                cx.dom.append_child(self.no_data, wrap)?;
            }
        }
        Ok(())
    }

    fn toggle_no_data(&self, cx: &mut Context, has_data: bool) -> Result<(), ComponentError> {
        cx.dom.toggle_class(self.no_data, HIDDEN_CLASS, has_data)?;
        Ok(())
    }

    /// Replace the data set and update the placeholder.
    pub fn set_data(
        &mut self,
        cx: &mut Context,
        data: Vec<Descriptor>,
        focus_index: usize,
    ) -> Result<(), ComponentError> {
        let has_data = !data.is_empty();
        let in_rows = self.focus_in_rows(cx);
        self.list.set_data(cx, data, focus_index, &mut self.renderer)?;
        self.restore_focus(cx, in_rows);
        self.toggle_no_data(cx, has_data)
    }

    /// Scroll to a data index and focus its row.
    pub fn focus_index(&mut self, cx: &mut Context, index: usize) -> Result<bool, ComponentError> {
        let in_rows = self.focus_in_rows(cx);
        let changed = self.list.focus_index(cx, index, &mut self.renderer)?;
        self.restore_focus(cx, in_rows);
        Ok(changed)
    }

    /// Whether a widget inside one of the rows holds focus.
    fn focus_in_rows(&self, cx: &Context) -> bool {
        self.renderer
            .rows
            .values()
            .any(|state| state.layout.contains_focus(cx))
    }

    /// Hand focus back to the list when re-rendering destroyed the row
    /// widget that held it.
    fn restore_focus(&mut self, cx: &mut Context, in_rows: bool) {
        if in_rows && cx.focused().is_none() {
            log::debug!("[restore_focus] {} row widget lost focus", self.id());
            self.list.focus(cx);
        }
    }

    pub fn focus(&mut self, cx: &mut Context) -> bool {
        self.list.focus(cx)
    }

    pub fn id(&self) -> ComponentId {
        self.list.base().id()
    }

    /// Record the component events propagate to.
    pub fn set_parent(&mut self, parent: Option<ComponentId>) {
        self.list.base_mut().set_parent(parent);
    }

    pub fn node(&self) -> NodeId {
        self.list.base().node()
    }

    pub fn body(&self) -> NodeId {
        self.list.body()
    }

    /// The no-data placeholder node.
    pub fn no_data_node(&self) -> NodeId {
        self.no_data
    }

    pub fn list(&self) -> &E {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut E {
        &mut self.list
    }

    pub fn fixed_data(&self) -> bool {
        self.renderer.fixed_data
    }

    /// Rows currently showing data.
    pub fn items(&self) -> Vec<ItemRef> {
        self.list.items()
    }

    pub fn focused_item(&self) -> Option<ItemRef> {
        self.list.focused_item()
    }

    /// Whether a row has finished rendering.
    pub fn is_ready(&self, row: NodeId) -> bool {
        self.renderer.rows.contains_key(&row)
    }

    /// Nested layout of a ready row.
    pub fn row_layout(&self, row: NodeId) -> Option<&Layout> {
        self.renderer.rows.get(&row).map(|state| &state.layout)
    }

    /// Value of a ready row, `{}` when its descriptor had none.
    pub fn row_value(&self, row: NodeId) -> Option<&Value> {
        self.renderer.rows.get(&row).map(|state| &state.value)
    }

    /// Whether a click callback is registered for a data index.
    pub fn has_handler(&self, index: usize) -> bool {
        self.renderer.handlers.contains_key(&index)
    }

    pub fn row_ref(&self, item: ItemRef) -> RowRef {
        RowRef {
            node: item.node,
            index: item.index,
            value: self
                .row_value(item.node)
                .cloned()
                .unwrap_or_else(|| Value::Object(Default::default())),
        }
    }

    pub fn add_listener(&mut self, kind: ListEventKind, listener: impl FnMut(&ListEvent) + 'static) {
        self.list.add_listener(kind, Box::new(listener));
    }
}
