//! Generic windowed list: a fixed number of row slots scrolled over the data
//! set, with one focused row.

mod engine;
mod events;
mod render;
mod state;

pub use engine::ListEngine;
pub use events::{Direction, ListEvent, ListEventKind};
pub use render::{ItemRef, RenderItem, TextRenderer, EMPTY_ITEM};
pub use state::List;

use magdom::Key;
use serde::Deserialize;

pub const NAME: &str = "mag-component-list";

/// Orientation of a list or layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    #[default]
    Vertical,
    Horizontal,
}

impl ListKind {
    pub fn class_name(self) -> &'static str {
        match self {
            ListKind::Vertical => "vertical",
            ListKind::Horizontal => "horizontal",
        }
    }

    /// Keys moving to the previous and next entry.
    pub fn navigation_keys(self) -> (Key, Key) {
        match self {
            ListKind::Vertical => (Key::Up, Key::Down),
            ListKind::Horizontal => (Key::Left, Key::Right),
        }
    }
}

/// Structural list options, fixed at construction.
#[derive(Debug, Clone)]
pub struct ListOptions {
    /// Number of row slots.
    pub size: usize,
    /// Wrap around when navigating past either end.
    pub cycle: bool,
    pub kind: ListKind,
    pub class_name: Option<String>,
    pub focusable: bool,
    pub propagate: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            size: 5,
            cycle: false,
            kind: ListKind::Vertical,
            class_name: None,
            focusable: true,
            propagate: false,
        }
    }
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: usize) -> Self {
        self.size = size;
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

    pub fn propagate(mut self, propagate: bool) -> Self {
        self.propagate = propagate;
        self
    }
}
