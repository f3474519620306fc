//! PSF bitmap fonts (version 1 and 2)

use crate::error::FontError;

pub type Result<T> = core::result::Result<T, FontError>;

const PSF1_MAGIC: [u8; 2] = [0x36, 0x04];
const PSF1_HEADER_SIZE: usize = 4;
const PSF1_MODE_512: u8 = 0x01;

const PSF2_MAGIC: [u8; 4] = [0x72, 0xb5, 0x4a, 0x86];
const PSF2_HEADER_SIZE: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Version {
    V1,
    V2,
}

/// Bitmap font borrowed from static data, e.g. `include_bytes!`
#[derive(Debug, Clone, Copy)]
pub struct Font {
    glyphs: &'static [u8],
    pub width: usize,
    pub height: usize,
    pub glyph_count: usize,
    bytes_per_glyph: usize,
    pub version: Version,
}

impl Font {
    /// Parse a PSF1 or PSF2 font
    pub fn load_psf(data: &'static [u8]) -> Result<Self> {
        if data.len() >= 2 && data[..2] == PSF1_MAGIC {
            return Self::load_psf1(data);
        }
        if data.len() >= 4 && data[..4] == PSF2_MAGIC {
            return Self::load_psf2(data);
        }
        if data.len() < 4 {
            return Err(FontError::NotAPsfFont);
        }
        Err(FontError::InvalidMagic)
    }

    fn load_psf1(data: &'static [u8]) -> Result<Self> {
        if data.len() < PSF1_HEADER_SIZE {
            return Err(FontError::BufferTooSmall);
        }
        let mode = data[2];
        let char_size = data[3] as usize;
        let glyph_count = if mode & PSF1_MODE_512 != 0 { 512 } else { 256 };

        Self::with_glyphs(data, PSF1_HEADER_SIZE, 8, char_size, glyph_count, char_size, Version::V1)
    }

    fn load_psf2(data: &'static [u8]) -> Result<Self> {
        if data.len() < PSF2_HEADER_SIZE {
            return Err(FontError::BufferTooSmall);
        }
        let field = |index: usize| {
            let at = 4 + index * 4;
            u32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]]) as usize
        };
        // version, header_size, flags, length, char_size, height, width
        let header_size = field(1);
        let glyph_count = field(3);
        let bytes_per_glyph = field(4);
        let height = field(5);
        let width = field(6);

        Self::with_glyphs(data, header_size, width, height, glyph_count, bytes_per_glyph, Version::V2)
    }

    fn with_glyphs(
        data: &'static [u8],
        offset: usize,
        width: usize,
        height: usize,
        glyph_count: usize,
        bytes_per_glyph: usize,
        version: Version,
    ) -> Result<Self> {
        let needed = glyph_count
            .checked_mul(bytes_per_glyph)
            .and_then(|len| len.checked_add(offset))
            .ok_or(FontError::BufferTooSmall)?;
        if data.len() < needed {
            return Err(FontError::BufferTooSmall);
        }

        Ok(Font {
            glyphs: &data[offset..needed],
            width,
            height,
            glyph_count,
            bytes_per_glyph,
            version,
        })
    }

    /// Bytes per glyph row
    pub const fn row_bytes(&self) -> usize {
        (self.width + 7) / 8
    }

    /// Bitmap for `c`, rows of `row_bytes()` bytes, MSB leftmost
    ///
    /// Glyphs are indexed by code point; fonts with a Unicode table are read
    /// the same way, which covers ASCII.
    pub fn glyph_data(&self, c: char) -> Option<&'static [u8]> {
        let index = c as usize;
        if index >= self.glyph_count {
            return None;
        }
        let start = index * self.bytes_per_glyph;
        self.glyphs.get(start..start + self.bytes_per_glyph)
    }
}
