//! Layout component: arranges a row of items and keeps its own focus index
//! over the widgets among them.

mod item;

pub use item::{Cell, CellValue, LayoutItem};

use magdom::{Key, NodeId};

use crate::component::{ComponentBase, ComponentId, EventResult};
use crate::context::Context;
use crate::emitter::{Emitter, EventKind};
use crate::error::ComponentError;
use crate::list::ListKind;
use crate::widget::SharedWidget;

pub const NAME: &str = "mag-component-layout";

/// Layout construction options.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    pub data: Vec<LayoutItem>,
    pub class_name: Option<String>,
    pub focusable: bool,
    pub kind: ListKind,
    pub focus_index: usize,
    pub propagate: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            class_name: None,
            focusable: true,
            kind: ListKind::Horizontal,
            focus_index: 0,
            propagate: false,
        }
    }
}

impl LayoutConfig {
    pub fn new(data: Vec<LayoutItem>) -> Self {
        Self {
            data,
            ..Default::default()
        }
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    pub fn kind(mut self, kind: ListKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn focus_index(mut self, focus_index: usize) -> Self {
        self.focus_index = focus_index;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutEvent {
    /// The layout or one of its child widgets was clicked.
    Click { child: Option<usize> },
    /// The remembered focus index moved to a new child.
    FocusChild { prev: usize, curr: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutEventKind {
    Click,
    FocusChild,
}

impl EventKind for LayoutEvent {
    type Kind = LayoutEventKind;

    fn kind(&self) -> LayoutEventKind {
        match self {
            LayoutEvent::Click { .. } => LayoutEventKind::Click,
            LayoutEvent::FocusChild { .. } => LayoutEventKind::FocusChild,
        }
    }
}

/// Arranges items in a single row or column.
///
/// Every data item yields exactly one child node of the layout root, in data
/// order. Widgets among the items form [`Layout::children`], the set the
/// layout's focus index walks over.
#[derive(Debug)]
pub struct Layout {
    base: ComponentBase,
    kind: ListKind,
    children: Vec<SharedWidget>,
    focus_index: usize,
    /// Nodes the layout did not create; detached instead of freed on destroy.
    foreign: Vec<NodeId>,
    parent_item: Option<NodeId>,
    emitter: Emitter<LayoutEvent>,
}

impl Layout {
    pub fn new(cx: &mut Context, config: LayoutConfig) -> Result<Self, ComponentError> {
        let class_name = match &config.class_name {
            Some(extra) => format!("layout {} {extra}", config.kind.class_name()),
            None => format!("layout {}", config.kind.class_name()),
        };
        let base = ComponentBase::new(cx, NAME, &class_name)
            .with_focusable(config.focusable)
            .with_propagate(config.propagate);

        let mut layout = Self {
            base,
            kind: config.kind,
            children: Vec::new(),
            focus_index: 0,
            foreign: Vec::new(),
            parent_item: None,
            emitter: Emitter::new(),
        };

        for item in &config.data {
            layout.add(cx, item)?;
        }
        if config.focus_index < layout.children.len() {
            layout.focus_index = config.focus_index;
        }
        Ok(layout)
    }

    /// Append one item to the layout.
    pub fn add(&mut self, cx: &mut Context, item: &LayoutItem) -> Result<(), ComponentError> {
        let node = self.base.node();
        match item {
            LayoutItem::Text(text) => {
                let wrap = cx.dom.create_element("div");
                cx.dom.set_text(wrap, text)?;
                cx.dom.append_child(node, wrap)?;
            }
            LayoutItem::Cell(cell) => {
                let wrap = cx
                    .dom
                    .create_element_with_class("div", cell.class_name.as_deref().unwrap_or(""));
                cx.dom.append_child(node, wrap)?;
                match &cell.value {
                    None => {}
                    Some(CellValue::Text(text)) => cx.dom.set_text(wrap, text)?,
                    Some(CellValue::Node(inner)) => {
                        cx.dom.append_child(wrap, *inner)?;
                        self.foreign.push(*inner);
                    }
                    Some(CellValue::Widget(widget)) => {
                        self.add_widget(cx, wrap, widget)?;
                    }
                }
            }
            LayoutItem::Node(inner) => {
                cx.dom.append_child(node, *inner)?;
                self.foreign.push(*inner);
            }
            LayoutItem::Widget(widget) => {
                self.add_widget(cx, node, widget)?;
            }
        }
        Ok(())
    }

    fn add_widget(
        &mut self,
        cx: &mut Context,
        parent: NodeId,
        widget: &SharedWidget,
    ) -> Result<(), ComponentError> {
        let widget_node = widget.borrow().node();
        cx.dom.append_child(parent, widget_node)?;
        self.foreign.push(widget_node);
        self.children.push(widget.clone());
        Ok(())
    }

    pub fn base(&self) -> &ComponentBase {
        &self.base
    }

    pub fn id(&self) -> ComponentId {
        self.base.id()
    }

    pub fn node(&self) -> NodeId {
        self.base.node()
    }

    pub fn kind(&self) -> ListKind {
        self.kind
    }

    /// Focusable child widgets, in data order.
    pub fn children(&self) -> &[SharedWidget] {
        &self.children
    }

    /// Remembered position among [`Layout::children`].
    pub fn focus_index(&self) -> usize {
        self.focus_index
    }

    /// Row node this layout is rendered into, when owned by a list.
    pub fn parent_item(&self) -> Option<NodeId> {
        self.parent_item
    }

    /// Record the owning list component and the row node holding the layout.
    pub fn set_parent(&mut self, parent: ComponentId, item: NodeId) {
        self.base.set_parent(Some(parent));
        self.parent_item = Some(item);
    }

    pub fn add_listener(&mut self, kind: LayoutEventKind, listener: impl FnMut(&LayoutEvent) + 'static) {
        self.emitter.add_listener(kind, listener);
    }

    /// Whether the focused component is one of this layout's children.
    pub fn contains_focus(&self, cx: &Context) -> bool {
        let Some(focused) = cx.focused() else {
            return false;
        };
        self.children.iter().any(|w| w.borrow().id() == focused)
    }

    /// Focus the child at the remembered focus index.
    pub fn focus_current(&self, cx: &mut Context) -> bool {
        match self.children.get(self.focus_index) {
            Some(widget) => widget.borrow_mut().focus(cx),
            None => false,
        }
    }

    /// Move the focus index to `index` and focus that child.
    pub fn focus_child(&mut self, cx: &mut Context, index: usize) -> bool {
        let Some(widget) = self.children.get(index).cloned() else {
            return false;
        };
        let prev = self.focus_index;
        self.focus_index = index;
        let changed = widget.borrow_mut().focus(cx);
        if prev != index {
            self.emitter.emit(&LayoutEvent::FocusChild { prev, curr: index });
        }
        changed
    }

    /// Click the layout, or the child widget at `child`.
    pub fn click(&mut self, cx: &mut Context, child: Option<usize>) {
        if let Some(widget) = child.and_then(|i| self.children.get(i)).cloned() {
            widget.borrow_mut().click(cx);
        }
        log::debug!("[layout_click] {} child={:?}", self.base.id(), child);
        self.emitter.emit(&LayoutEvent::Click { child });
        self.base.propagate(cx, "click");
    }

    /// Navigate between children and activate the focused one.
    pub fn handle_key(&mut self, cx: &mut Context, key: Key) -> EventResult {
        let (prev_key, next_key) = self.kind.navigation_keys();
        let len = self.children.len();
        if len == 0 {
            return EventResult::Ignored;
        }

        if key == next_key {
            if self.focus_index + 1 < len {
                self.focus_child(cx, self.focus_index + 1);
            }
            EventResult::Consumed
        } else if key == prev_key {
            if self.focus_index > 0 {
                self.focus_child(cx, self.focus_index - 1);
            }
            EventResult::Consumed
        } else if key == Key::Ok {
            self.click(cx, Some(self.focus_index));
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }

    /// Free the nodes this layout generated.
    ///
    /// Caller owned nodes and widget nodes are detached first so they survive
    /// and can be inserted elsewhere. Focus held by the layout or one of its
    /// children is released.
    pub fn destroy(self, cx: &mut Context) -> Result<(), ComponentError> {
        for node in &self.foreign {
            if cx.dom.is_inclusive_ancestor(self.base.node(), *node) {
                cx.dom.detach(*node)?;
            }
        }
        if self.base.is_focused(cx) || self.contains_focus(cx) {
            cx.blur();
        }
        cx.dom.remove(self.base.node())?;
        log::trace!("[layout_destroy] {}", self.base.id());
        Ok(())
    }
}
