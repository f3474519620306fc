//! Widget implementations
//!
//! This module contains the built-in leaf widgets and `Element`, the enum
//! that lets them share one fixed-capacity child buffer.

pub mod button;
pub mod label;

// Re-export the Widget trait for convenience
pub use crate::widget::Widget;

pub use button::Button;
pub use label::Label;

use crate::widget::{StepContext, WidgetBase};

/// Any built-in leaf widget
pub enum Element<'a> {
    Label(Label<'a>),
    Button(Button<'a>),
}

impl<'a> Element<'a> {
    pub fn as_label(&self) -> Option<&Label<'a>> {
        match self {
            Element::Label(label) => Some(label),
            _ => None,
        }
    }

    pub fn as_button(&self) -> Option<&Button<'a>> {
        match self {
            Element::Button(button) => Some(button),
            _ => None,
        }
    }

    pub fn as_button_mut(&mut self) -> Option<&mut Button<'a>> {
        match self {
            Element::Button(button) => Some(button),
            _ => None,
        }
    }
}

impl<'a> From<Label<'a>> for Element<'a> {
    fn from(label: Label<'a>) -> Self {
        Element::Label(label)
    }
}

impl<'a> From<Button<'a>> for Element<'a> {
    fn from(button: Button<'a>) -> Self {
        Element::Button(button)
    }
}

impl Widget for Element<'_> {
    fn base(&self) -> &WidgetBase {
        match self {
            Element::Label(w) => w.base(),
            Element::Button(w) => w.base(),
        }
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        match self {
            Element::Label(w) => w.base_mut(),
            Element::Button(w) => w.base_mut(),
        }
    }

    fn step(&mut self, ctx: &mut StepContext<'_>) {
        match self {
            Element::Label(w) => w.step(ctx),
            Element::Button(w) => w.step(ctx),
        }
    }
}
