use std::fmt;
use std::rc::Rc;

use magdom::NodeId;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::layout::LayoutItem;

/// Row handed to click callbacks.
#[derive(Debug, Clone, PartialEq)]
pub struct RowRef {
    pub node: NodeId,
    pub index: usize,
    pub value: Value,
}

/// Per-row click callback.
#[derive(Clone)]
pub struct ClickHandler(Rc<dyn Fn(&RowRef)>);

impl ClickHandler {
    pub fn new(handler: impl Fn(&RowRef) + 'static) -> Self {
        Self(Rc::new(handler))
    }

    pub fn call(&self, row: &RowRef) {
        (self.0)(row)
    }
}

impl fmt::Debug for ClickHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClickHandler(..)")
    }
}

/// Data for one row of a [`LayoutList`](super::LayoutList).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Descriptor {
    pub items: Vec<LayoutItem>,
    #[serde(default)]
    pub value: Option<Value>,
    #[serde(skip)]
    pub click: Option<ClickHandler>,
    #[serde(default)]
    pub class_name: Option<String>,
}

impl Descriptor {
    pub fn new<I>(items: impl IntoIterator<Item = I>) -> Self
    where
        I: Into<LayoutItem>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn value(mut self, value: Value) -> Self {
        self.value = Some(value);
        self
    }

    pub fn on_click(mut self, handler: impl Fn(&RowRef) + 'static) -> Self {
        self.click = Some(ClickHandler::new(handler));
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// The row value: the descriptor value or an empty object.
    pub fn value_or_default(&self) -> Value {
        self.value
            .clone()
            .unwrap_or_else(|| Value::Object(Map::new()))
    }
}
