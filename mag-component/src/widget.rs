use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use magdom::NodeId;

use crate::component::{ComponentBase, ComponentId};
use crate::context::Context;

/// A component that can be embedded in a [`Layout`](crate::Layout).
pub trait Widget: fmt::Debug {
    fn base(&self) -> &ComponentBase;

    fn id(&self) -> ComponentId {
        self.base().id()
    }

    fn node(&self) -> NodeId {
        self.base().node()
    }

    /// Take focus. Returns true if focus changed.
    fn focus(&mut self, cx: &mut Context) -> bool {
        self.base().focus(cx)
    }

    /// React to activation (Ok key or pointer click).
    fn click(&mut self, _cx: &mut Context) {}
}

/// Widgets are shared between the descriptor that declares them and the
/// layout currently displaying them.
pub type SharedWidget = Rc<RefCell<dyn Widget>>;

pub fn shared<W: Widget + 'static>(widget: W) -> SharedWidget {
    Rc::new(RefCell::new(widget))
}
