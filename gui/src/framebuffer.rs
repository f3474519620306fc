//! Raw framebuffer access

use log::warn;

use crate::colors::Color;
use crate::types::Rect;

/// Pixel layout of the framebuffer memory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// 24-bit RGB
    Rgb,
    /// 24-bit BGR
    Bgr,
    /// 32-bit RGBA
    Rgba,
    /// 32-bit BGRA
    Bgra,
}

impl PixelFormat {
    pub const fn bytes_per_pixel(&self) -> usize {
        match self {
            PixelFormat::Rgb | PixelFormat::Bgr => 3,
            PixelFormat::Rgba | PixelFormat::Bgra => 4,
        }
    }

    /// Encode `color` into `pixel`, which must be `bytes_per_pixel` long
    pub fn write_color(&self, pixel: &mut [u8], color: Color) {
        match self {
            PixelFormat::Rgb => pixel[..3].copy_from_slice(&[color.r, color.g, color.b]),
            PixelFormat::Bgr => pixel[..3].copy_from_slice(&[color.b, color.g, color.r]),
            PixelFormat::Rgba => pixel[..4].copy_from_slice(&[color.r, color.g, color.b, color.a]),
            PixelFormat::Bgra => pixel[..4].copy_from_slice(&[color.b, color.g, color.r, color.a]),
        }
    }
}

/// Location and layout of display memory, as handed over by the platform
#[derive(Debug, Clone, Copy)]
pub struct FramebufferInfo {
    pub base: *mut u8,
    pub width: usize,
    pub height: usize,
    /// Bytes per row
    pub stride: usize,
    pub pixel_format: PixelFormat,
}

impl FramebufferInfo {
    pub const fn new(
        base: *mut u8,
        width: usize,
        height: usize,
        stride: usize,
        pixel_format: PixelFormat,
    ) -> Self {
        Self {
            base,
            width,
            height,
            stride,
            pixel_format,
        }
    }

    /// Bytes of memory the framebuffer spans
    pub const fn size_bytes(&self) -> usize {
        self.stride * self.height
    }
}

/// Pixel writer over display memory
///
/// Every write is clipped to the framebuffer dimensions.
pub struct Framebuffer {
    info: FramebufferInfo,
}

impl Framebuffer {
    /// Wrap display memory described by `info`
    ///
    /// If a row of `info.stride` bytes cannot hold `info.width` pixels, the
    /// width is clamped to what fits so every write stays inside its row.
    ///
    /// # Safety
    ///
    /// `info.base` must point to `info.size_bytes()` writable bytes that stay
    /// valid and unaliased for the lifetime of the framebuffer.
    pub unsafe fn new(mut info: FramebufferInfo) -> Self {
        let fits = info.stride / info.pixel_format.bytes_per_pixel();
        if info.width > fits {
            warn!("framebuffer width {} exceeds stride of {} bytes, clamped to {}", info.width, info.stride, fits);
            info.width = fits;
        }
        Self { info }
    }

    pub const fn width(&self) -> usize {
        self.info.width
    }

    pub const fn height(&self) -> usize {
        self.info.height
    }

    pub const fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.info.width, self.info.height)
    }

    pub const fn pixel_format(&self) -> PixelFormat {
        self.info.pixel_format
    }

    fn row_mut(&mut self, y: usize) -> &mut [u8] {
        // SAFETY: y < height, so the row lies inside the region promised in `new`
        unsafe {
            core::slice::from_raw_parts_mut(self.info.base.add(y * self.info.stride), self.info.stride)
        }
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        if x >= self.info.width || y >= self.info.height {
            return;
        }
        let format = self.info.pixel_format;
        let bpp = format.bytes_per_pixel();
        let row = self.row_mut(y);
        format.write_color(&mut row[x * bpp..(x + 1) * bpp], color);
    }

    /// Fill the part of `rect` that lies on screen
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some(clipped) = rect.clip_to(self.bounds()) else {
            return;
        };
        let format = self.info.pixel_format;
        let bpp = format.bytes_per_pixel();

        for y in clipped.y..clipped.bottom() {
            let row = self.row_mut(y);
            for pixel in row[clipped.x * bpp..clipped.right() * bpp].chunks_exact_mut(bpp) {
                format.write_color(pixel, color);
            }
        }
    }

    /// Outline `rect` with a border `thickness` pixels wide, drawn inward
    pub fn draw_frame(&mut self, rect: Rect, thickness: usize, color: Color) {
        let t = thickness.min(rect.width / 2 + rect.width % 2).min(rect.height / 2 + rect.height % 2);
        if t == 0 {
            return;
        }
        self.fill_rect(Rect::new(rect.x, rect.y, rect.width, t), color);
        self.fill_rect(Rect::new(rect.x, rect.bottom() - t, rect.width, t), color);
        self.fill_rect(Rect::new(rect.x, rect.y, t, rect.height), color);
        self.fill_rect(Rect::new(rect.right() - t, rect.y, t, rect.height), color);
    }

    pub fn clear(&mut self, color: Color) {
        self.fill_rect(self.bounds(), color);
    }
}
