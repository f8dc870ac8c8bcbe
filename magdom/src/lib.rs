pub mod class_list;
pub mod document;
pub mod error;
pub mod event;
pub mod html;
pub mod node;

pub use class_list::ClassList;
pub use document::Document;
pub use error::DomError;
pub use event::Key;
pub use html::outer_html;
pub use node::{Node, NodeId, NodeKind};
