//! Framebuffer-backed canvas

use crate::canvas::Canvas;
use crate::colors::Color;
use crate::font::Font;
use crate::framebuffer::{Framebuffer, FramebufferInfo};
use crate::types::{Point, Rect};

/// Safe drawing surface over display memory
///
/// Tracks whether anything was drawn since the last `present`, so a
/// double-buffered or e-paper display only flushes when needed.
pub struct Screen {
    framebuffer: Framebuffer,
    font: Option<&'static Font>,
    background: Color,
    dirty: bool,
}

impl Screen {
    /// Create a new screen from framebuffer info
    ///
    /// # Safety
    ///
    /// Same contract as [`Framebuffer::new`].
    pub unsafe fn new(fb_info: FramebufferInfo, background: Color) -> Self {
        Self {
            framebuffer: Framebuffer::new(fb_info),
            font: None,
            background,
            dirty: true,
        }
    }

    /// Set the font to use for text rendering
    pub fn set_font(&mut self, font: &'static Font) {
        self.font = Some(font);
    }

    pub fn width(&self) -> usize {
        self.framebuffer.width()
    }

    pub fn height(&self) -> usize {
        self.framebuffer.height()
    }

    /// Check if something was drawn since the last present
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the whole screen with the background color
    pub fn clear(&mut self) {
        self.framebuffer.clear(self.background);
        self.dirty = true;
    }

    /// Flush to the display
    ///
    /// Direct framebuffer rendering needs no copy; this only resets the
    /// pending-changes flag.
    pub fn present(&mut self) {
        self.dirty = false;
    }

    fn draw_glyph(&mut self, x: usize, y: usize, font: &Font, glyph: &[u8], color: Color) {
        let row_bytes = font.row_bytes().max(1);

        for (row, bits) in glyph.chunks(row_bytes).take(font.height).enumerate() {
            for col in 0..font.width {
                let byte = bits.get(col / 8).copied().unwrap_or(0);
                if (byte >> (7 - col % 8)) & 1 == 1 {
                    self.framebuffer.set_pixel(x + col, y + row, color);
                }
            }
        }
    }
}

impl Canvas for Screen {
    fn bounds(&self) -> Rect {
        self.framebuffer.bounds()
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.framebuffer.fill_rect(rect, color);
        self.dirty = true;
    }

    fn draw_frame(&mut self, rect: Rect, thickness: usize, color: Color) {
        self.framebuffer.draw_frame(rect, thickness, color);
        self.dirty = true;
    }

    fn draw_text(&mut self, origin: Point, text: &str, color: Color) -> usize {
        let Some(font) = self.font else {
            return 0;
        };

        let mut rendered = 0;
        let mut x = origin.x;
        for ch in text.chars() {
            if x + font.width > self.width() {
                break;
            }
            // Characters without a glyph are skipped
            let Some(glyph) = font.glyph_data(ch) else {
                continue;
            };
            self.draw_glyph(x, origin.y, font, glyph, color);
            x += font.width;
            rendered += 1;
        }

        self.dirty = true;
        rendered
    }

    fn text_size(&self, text: &str) -> (usize, usize) {
        match self.font {
            Some(font) => (text.chars().count() * font.width, font.height),
            None => (0, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::tests::psf1_font;
    use crate::framebuffer::PixelFormat;
    use std::boxed::Box;
    use std::vec;

    fn screen(buffer: &mut [u8], width: usize, height: usize) -> Screen {
        let info = FramebufferInfo::new(buffer.as_mut_ptr(), width, height, width * 3, PixelFormat::Rgb);
        unsafe { Screen::new(info, Color::BLACK) }
    }

    #[test]
    fn test_text_without_font_draws_nothing() {
        let mut buffer = vec![0u8; 16 * 16 * 3];
        let mut s = screen(&mut buffer, 16, 16);
        s.present();

        assert_eq!(s.draw_text(Point::new(0, 0), "hi", Color::WHITE), 0);
        assert_eq!(s.text_size("hi"), (0, 0));
        assert!(!s.is_dirty());
    }

    #[test]
    fn test_draw_text_renders_glyph_rows() {
        let font: &'static Font = Box::leak(Box::new(Font::load_psf(psf1_font()).unwrap()));
        let mut buffer = vec![0u8; 24 * 8 * 3];
        {
            let mut s = screen(&mut buffer, 24, 8);
            s.set_font(font);
            assert_eq!(s.text_size("AA"), (16, 8));
            // Only three 8px glyphs fit on a 24px line
            assert_eq!(s.draw_text(Point::new(0, 0), "AAAA", Color::WHITE), 3);
            assert!(s.is_dirty());
        }

        // Solid top row across the three glyphs, nothing below it
        assert!(buffer[..24 * 3].iter().all(|&b| b == 255));
        assert!(buffer[24 * 3..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_draw_rect_through_canvas() {
        let mut buffer = vec![0u8; 4 * 4 * 3];
        {
            let mut s = screen(&mut buffer, 4, 4);
            let canvas: &mut dyn Canvas = &mut s;
            assert_eq!(canvas.bounds(), Rect::new(0, 0, 4, 4));
            canvas.draw_rect(Rect::new(0, 0, 1, 1), Color::rgb(9, 8, 7));
        }
        assert_eq!(buffer[..3], [9, 8, 7]);
        assert_eq!(buffer[3..6], [0, 0, 0]);
    }
}
