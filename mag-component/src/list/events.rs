use crate::emitter::EventKind;

use super::render::ItemRef;

/// Navigation direction along the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Backward,
    Forward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEvent {
    /// A row became the focused row.
    FocusItem { prev: Option<ItemRef>, curr: ItemRef },
    /// A row stopped being the focused row.
    BlurItem { item: ItemRef },
    /// A row was activated. `inner` is set when the click came from inside the
    /// row content rather than the row itself.
    ClickItem { item: ItemRef, inner: bool },
    /// The visible window moved.
    MoveView { prev: Option<usize>, curr: usize },
    /// Navigation tried to go past an end of a non-cycling list.
    Overflow { direction: Direction },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListEventKind {
    FocusItem,
    BlurItem,
    ClickItem,
    MoveView,
    Overflow,
}

impl ListEventKind {
    /// Name used for propagation records.
    pub fn name(self) -> &'static str {
        match self {
            ListEventKind::FocusItem => "focus:item",
            ListEventKind::BlurItem => "blur:item",
            ListEventKind::ClickItem => "click:item",
            ListEventKind::MoveView => "move:view",
            ListEventKind::Overflow => "overflow",
        }
    }
}

impl EventKind for ListEvent {
    type Kind = ListEventKind;

    fn kind(&self) -> ListEventKind {
        match self {
            ListEvent::FocusItem { .. } => ListEventKind::FocusItem,
            ListEvent::BlurItem { .. } => ListEventKind::BlurItem,
            ListEvent::ClickItem { .. } => ListEventKind::ClickItem,
            ListEvent::MoveView { .. } => ListEventKind::MoveView,
            ListEvent::Overflow { .. } => ListEventKind::Overflow,
        }
    }
}
