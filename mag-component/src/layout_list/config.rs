//! Layout list configuration.

use magdom::NodeId;
use serde::Deserialize;

use crate::error::ComponentError;
use crate::list::{ListKind, ListOptions};

use super::descriptor::Descriptor;

/// Placeholder content shown when the data set is empty.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum NoData {
    /// Text, wrapped in a generated `div`.
    Text(String),
    /// Pre-built node, inserted as is.
    Node(NodeId),
}

impl NoData {
    /// An empty string counts as no placeholder at all.
    pub fn is_set(&self) -> bool {
        !matches!(self, NoData::Text(text) if text.is_empty())
    }
}

impl From<String> for NoData {
    fn from(text: String) -> Self {
        NoData::Text(text)
    }
}

impl From<&str> for NoData {
    fn from(text: &str) -> Self {
        NoData::Text(text.to_string())
    }
}

impl From<NodeId> for NoData {
    fn from(node: NodeId) -> Self {
        NoData::Node(node)
    }
}

/// Layout list configuration.
///
/// Built with the builder methods or parsed from JSON with camelCase keys:
///
/// ```
/// use mag_component::LayoutListConfig;
///
/// let config = LayoutListConfig::from_json(
///     r#"{ "size": 7, "noData": "No channels", "data": [{ "items": ["News"] }] }"#,
/// )
/// .unwrap();
/// assert_eq!(config.size, 7);
/// assert!(config.propagate);
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutListConfig {
    /// Let events bubble to the parent component.
    pub propagate: bool,
    /// Refresh ready rows in place instead of rebuilding their layout.
    pub fixed_data: bool,
    pub no_data: Option<NoData>,
    pub data: Vec<Descriptor>,
    pub size: usize,
    pub focus_index: usize,
    pub cycle: bool,
    #[serde(rename = "type")]
    pub kind: ListKind,
    pub class_name: Option<String>,
    pub focusable: bool,
}

impl Default for LayoutListConfig {
    fn default() -> Self {
        Self {
            propagate: true,
            fixed_data: false,
            no_data: None,
            data: Vec::new(),
            size: 5,
            focus_index: 0,
            cycle: false,
            kind: ListKind::Vertical,
            class_name: None,
            focusable: true,
        }
    }
}

impl LayoutListConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, ComponentError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn data(mut self, data: Vec<Descriptor>) -> Self {
        self.data = data;
        self
    }

    pub fn size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn focus_index(mut self, focus_index: usize) -> Self {
        self.focus_index = focus_index;
        self
    }

    pub fn no_data(mut self, no_data: impl Into<NoData>) -> Self {
        self.no_data = Some(no_data.into());
        self
    }

    pub fn fixed_data(mut self, fixed_data: bool) -> Self {
        self.fixed_data = fixed_data;
        self
    }

    pub fn propagate(mut self, propagate: bool) -> Self {
        self.propagate = propagate;
        self
    }

    pub fn cycle(mut self, cycle: bool) -> Self {
        self.cycle = cycle;
        self
    }

    pub fn kind(mut self, kind: ListKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Structural options for the underlying list.
    pub fn list_options(&self) -> ListOptions {
        ListOptions {
            size: self.size,
            cycle: self.cycle,
            kind: self.kind,
            class_name: Some(match &self.class_name {
                Some(extra) => format!("layoutList {extra}"),
                None => "layoutList".to_string(),
            }),
            focusable: self.focusable,
            propagate: self.propagate,
        }
    }
}
