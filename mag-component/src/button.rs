use crate::component::ComponentBase;
use crate::context::Context;
use crate::emitter::{Emitter, EventKind};
use crate::error::ComponentError;
use crate::widget::Widget;

pub const NAME: &str = "mag-component-button";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonEvent {
    Click { value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonEventKind {
    Click,
}

impl EventKind for ButtonEvent {
    type Kind = ButtonEventKind;

    fn kind(&self) -> ButtonEventKind {
        match self {
            ButtonEvent::Click { .. } => ButtonEventKind::Click,
        }
    }
}

/// Focusable text button.
#[derive(Debug)]
pub struct Button {
    base: ComponentBase,
    value: String,
    emitter: Emitter<ButtonEvent>,
}

impl Button {
    pub fn new(cx: &mut Context, value: &str) -> Result<Self, ComponentError> {
        let base = ComponentBase::new(cx, NAME, "button");
        cx.dom.set_text(base.node(), value)?;
        Ok(Self {
            base,
            value: value.to_string(),
            emitter: Emitter::new(),
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, cx: &mut Context, value: &str) -> Result<(), ComponentError> {
        cx.dom.set_text(self.base.node(), value)?;
        self.value = value.to_string();
        Ok(())
    }

    pub fn add_listener(&mut self, kind: ButtonEventKind, listener: impl FnMut(&ButtonEvent) + 'static) {
        self.emitter.add_listener(kind, listener);
    }
}

impl Widget for Button {
    fn base(&self) -> &ComponentBase {
        &self.base
    }

    fn click(&mut self, cx: &mut Context) {
        self.emitter.emit(&ButtonEvent::Click {
            value: self.value.clone(),
        });
        self.base.propagate(cx, "click");
    }
}
