//! Drawing seam between widgets and the display
//!
//! Widgets only ever talk to a `Canvas`. Coordinates are global (already
//! translated through the owner chain) and colors come from the widget's
//! `Style`.

use crate::colors::Color;
use crate::types::{Point, Rect};

/// Minimal set of drawing primitives the widget core consumes
pub trait Canvas {
    /// Drawable area in pixels
    fn bounds(&self) -> Rect;

    /// Fill a rectangle with a solid color
    fn draw_rect(&mut self, rect: Rect, color: Color);

    /// Outline a rectangle with a border `thickness` pixels wide, drawn inward
    fn draw_frame(&mut self, rect: Rect, thickness: usize, color: Color);

    /// Draw a single line of text with its top-left corner at `origin`
    ///
    /// Returns the number of characters rendered.
    fn draw_text(&mut self, origin: Point, text: &str, color: Color) -> usize;

    /// Size of `text` in pixels as (width, height)
    fn text_size(&self, text: &str) -> (usize, usize);
}
