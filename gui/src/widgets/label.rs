//! Static text widget

use crate::colors::Color;
use crate::theme::Style;
use crate::types::{Point, Rect};
use crate::widget::{StepContext, Widget, WidgetBase};

/// Single line of text on a solid background
///
/// The text is borrowed; a label lives no longer than the string it shows.
pub struct Label<'a> {
    base: WidgetBase,
    text: &'a str,
    background: Color,
    color: Color,
}

impl<'a> Label<'a> {
    pub fn new(rect: Rect, text: &'a str, style: &Style) -> Self {
        Self {
            base: WidgetBase::new(rect),
            text,
            background: style.main_color,
            color: style.text_color,
        }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn set_text(&mut self, text: &'a str) {
        self.text = text;
        self.base.dirty = true;
    }
}

impl Widget for Label<'_> {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn step(&mut self, ctx: &mut StepContext<'_>) {
        if !self.base.dirty {
            return;
        }

        let area = self.global_bounds(ctx.origin);
        ctx.canvas.draw_rect(area, self.background);

        // Left aligned, vertically centered
        let (_, text_height) = ctx.canvas.text_size(self.text);
        let y = area.y + area.height.saturating_sub(text_height) / 2;
        ctx.canvas.draw_text(Point::new(area.x, y), self.text, self.color);

        self.base.dirty = false;
    }
}
