//! Push button driven by the tick's pointer state

use log::trace;

use crate::colors::Color;
use crate::theme::Style;
use crate::types::{Point, Rect};
use crate::widget::{StepContext, Widget, WidgetBase};

/// Push button with a text caption
///
/// A click is a press that starts inside the button and is released while
/// still inside. Dragging out cancels the press. The click is latched until
/// the owner collects it with [`Button::take_click`].
pub struct Button<'a> {
    base: WidgetBase,
    text: &'a str,
    color: Color,
    pressed_color: Color,
    text_color: Color,
    pressed: bool,
    /// Pointer was held down on the previous tick
    pointer_held: bool,
    clicked: bool,
}

impl<'a> Button<'a> {
    pub fn new(rect: Rect, text: &'a str, style: &Style) -> Self {
        Self {
            base: WidgetBase::new(rect),
            text,
            color: style.button_color,
            pressed_color: style.button_pressed_color,
            text_color: style.text_color,
            pressed: false,
            pointer_held: false,
            clicked: false,
        }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Activate the button without pointer input, e.g. from a hardware key
    pub fn click(&mut self) {
        self.clicked = true;
    }

    /// Whether a click is latched, without consuming it
    pub fn has_click(&self) -> bool {
        self.clicked
    }

    /// Consume the latched click, if any
    pub fn take_click(&mut self) -> bool {
        core::mem::take(&mut self.clicked)
    }

    /// Drop all pointer state: a press in progress, the held flag and any
    /// latched click
    ///
    /// A press that was under way is abandoned, so the next release does not
    /// complete it as a click.
    pub fn reset_input(&mut self) {
        if self.pressed {
            trace!("button {:?} input reset while pressed", self.text);
            self.base.dirty = true;
        }
        self.pressed = false;
        self.pointer_held = false;
        self.clicked = false;
    }

    fn track_pointer(&mut self, area: Rect, pointer: Option<Point>) {
        let fresh_press = !self.pointer_held;
        self.pointer_held = pointer.is_some();

        match pointer {
            Some(at) if !self.pressed && fresh_press && area.contains(at) => {
                trace!("button {:?} pressed", self.text);
                self.pressed = true;
                self.base.dirty = true;
            }
            Some(at) if self.pressed && !area.contains(at) => {
                trace!("button {:?} press cancelled", self.text);
                self.pressed = false;
                self.base.dirty = true;
            }
            None if self.pressed => {
                trace!("button {:?} clicked", self.text);
                self.pressed = false;
                self.clicked = true;
                self.base.dirty = true;
            }
            _ => {}
        }
    }
}

impl Widget for Button<'_> {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn step(&mut self, ctx: &mut StepContext<'_>) {
        let area = self.global_bounds(ctx.origin);
        self.track_pointer(area, ctx.pointer);

        if !self.base.dirty {
            return;
        }

        let fill = if self.pressed {
            self.pressed_color
        } else {
            self.color
        };
        ctx.canvas.draw_rect(area, fill);

        let (text_width, text_height) = ctx.canvas.text_size(self.text);
        let origin = Point::new(
            area.x + area.width.saturating_sub(text_width) / 2,
            area.y + area.height.saturating_sub(text_height) / 2,
        );
        ctx.canvas.draw_text(origin, self.text, self.text_color);

        self.base.dirty = false;
    }
}
