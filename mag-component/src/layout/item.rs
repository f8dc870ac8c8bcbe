//! Items a layout arranges.

use magdom::NodeId;
use serde::Deserialize;

use crate::widget::SharedWidget;

/// One entry of a layout's data.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "RawItem")]
pub enum LayoutItem {
    /// Plain text, rendered in a generated `div`.
    Text(String),
    /// Generated `div` with an optional class and content.
    Cell(Cell),
    /// Pre-built node, inserted as is.
    Node(NodeId),
    /// Focusable widget, inserted and added to the layout children.
    Widget(SharedWidget),
}

#[derive(Debug, Clone, Default)]
pub struct Cell {
    pub value: Option<CellValue>,
    pub class_name: Option<String>,
}

#[derive(Debug, Clone)]
pub enum CellValue {
    Text(String),
    Node(NodeId),
    Widget(SharedWidget),
}

impl LayoutItem {
    pub fn text(text: impl Into<String>) -> Self {
        LayoutItem::Text(text.into())
    }

    /// Cell with text content and a class.
    pub fn cell(value: impl Into<String>, class_name: impl Into<String>) -> Self {
        LayoutItem::Cell(Cell {
            value: Some(CellValue::Text(value.into())),
            class_name: Some(class_name.into()),
        })
    }

    /// Empty cell carrying only a class, e.g. an icon slot.
    pub fn class(class_name: impl Into<String>) -> Self {
        LayoutItem::Cell(Cell {
            value: None,
            class_name: Some(class_name.into()),
        })
    }

    /// Text and class of items that can be refreshed in place.
    ///
    /// `None` for pre-built nodes and widgets, which are left alone.
    pub fn plain_text(&self) -> Option<(&str, &str)> {
        match self {
            LayoutItem::Text(text) => Some((text.as_str(), "")),
            LayoutItem::Cell(Cell { value, class_name }) => {
                let text = match value {
                    None => "",
                    Some(CellValue::Text(text)) => text.as_str(),
                    Some(CellValue::Node(_) | CellValue::Widget(_)) => return None,
                };
                Some((text, class_name.as_deref().unwrap_or("")))
            }
            LayoutItem::Node(_) | LayoutItem::Widget(_) => None,
        }
    }
}

impl From<&str> for LayoutItem {
    fn from(text: &str) -> Self {
        LayoutItem::Text(text.to_string())
    }
}

impl From<String> for LayoutItem {
    fn from(text: String) -> Self {
        LayoutItem::Text(text)
    }
}

impl From<NodeId> for LayoutItem {
    fn from(node: NodeId) -> Self {
        LayoutItem::Node(node)
    }
}

impl From<SharedWidget> for LayoutItem {
    fn from(widget: SharedWidget) -> Self {
        LayoutItem::Widget(widget)
    }
}

/// Wire shape of an item: `"text"` or `{ "value": "text", "className": "c" }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawItem {
    Text(String),
    Cell {
        #[serde(default)]
        value: Option<String>,
        #[serde(default, rename = "className")]
        class_name: Option<String>,
    },
}

impl From<RawItem> for LayoutItem {
    fn from(raw: RawItem) -> Self {
        match raw {
            RawItem::Text(text) => LayoutItem::Text(text),
            RawItem::Cell { value, class_name } => LayoutItem::Cell(Cell {
                value: value.map(CellValue::Text),
                class_name,
            }),
        }
    }
}
