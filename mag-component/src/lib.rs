//! Remote-control UI components drawn into a [`magdom`] tree.
//!
//! The centerpiece is [`LayoutList`], a focus-navigable list whose rows are
//! nested [`Layout`]s. [`List`], [`Layout`] and [`Button`] are the building
//! blocks it composes.

pub mod button;
pub mod component;
pub mod context;
pub mod emitter;
pub mod error;
pub mod focus;
pub mod layout;
pub mod layout_list;
pub mod list;
pub mod widget;

pub use button::{Button, ButtonEvent, ButtonEventKind};
pub use component::{ComponentBase, ComponentId, EventResult};
pub use context::{Context, Propagated};
pub use emitter::{Emitter, EventKind};
pub use error::ComponentError;
pub use focus::FocusState;
pub use layout::{Cell, CellValue, Layout, LayoutConfig, LayoutEvent, LayoutEventKind, LayoutItem};
pub use layout_list::{ClickHandler, Descriptor, LayoutList, LayoutListConfig, NoData, RowRef};
pub use list::{
    Direction, ItemRef, List, ListEngine, ListEvent, ListEventKind, ListKind, ListOptions,
    RenderItem, TextRenderer,
};
pub use widget::{shared, SharedWidget, Widget};
