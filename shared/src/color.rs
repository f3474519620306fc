//! 24-bit RGB color with alpha channel and const hex parsing.

/// Represents a 24-bit RGB color with alpha channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Create a new Color from RGBA components
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new Color from RGB (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse a hex color string (`"#RRGGBB"`, `"#RGB"`, prefix optional)
    ///
    /// Usable in const context, which is how the built-in themes are
    /// assembled.
    ///
    /// ```
    /// use shared::Color;
    /// assert_eq!(Color::from_hex("#FF0000"), Ok(Color::rgb(255, 0, 0)));
    /// assert_eq!(Color::from_hex("0F0"), Ok(Color::rgb(0, 255, 0)));
    /// ```
    pub const fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let bytes = hex.as_bytes();
        let start = if !bytes.is_empty() && bytes[0] == b'#' { 1 } else { 0 };

        match bytes.len() - start {
            3 => {
                let r = match parse_hex_digit(bytes[start]) {
                    Ok(v) => v * 17,
                    Err(e) => return Err(e),
                };
                let g = match parse_hex_digit(bytes[start + 1]) {
                    Ok(v) => v * 17,
                    Err(e) => return Err(e),
                };
                let b = match parse_hex_digit(bytes[start + 2]) {
                    Ok(v) => v * 17,
                    Err(e) => return Err(e),
                };
                Ok(Self::rgb(r, g, b))
            }
            6 => {
                let r = match parse_hex_byte(bytes[start], bytes[start + 1]) {
                    Ok(v) => v,
                    Err(e) => return Err(e),
                };
                let g = match parse_hex_byte(bytes[start + 2], bytes[start + 3]) {
                    Ok(v) => v,
                    Err(e) => return Err(e),
                };
                let b = match parse_hex_byte(bytes[start + 4], bytes[start + 5]) {
                    Ok(v) => v,
                    Err(e) => return Err(e),
                };
                Ok(Self::rgb(r, g, b))
            }
            _ => Err(ColorError::InvalidLength),
        }
    }

    pub const fn to_rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Pack as `0xAARRGGBB`
    pub const fn to_argb32(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

const fn parse_hex_digit(byte: u8) -> Result<u8, ColorError> {
    match byte {
        b'0'..=b'9' => Ok(byte - b'0'),
        b'A'..=b'F' => Ok(byte - b'A' + 10),
        b'a'..=b'f' => Ok(byte - b'a' + 10),
        _ => Err(ColorError::InvalidHexChar),
    }
}

const fn parse_hex_byte(high: u8, low: u8) -> Result<u8, ColorError> {
    let h = match parse_hex_digit(high) {
        Ok(v) => v,
        Err(e) => return Err(e),
    };
    let l = match parse_hex_digit(low) {
        Ok(v) => v,
        Err(e) => return Err(e),
    };
    Ok((h << 4) | l)
}

/// Error type for color parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorError {
    /// Invalid hex character
    InvalidHexChar,
    /// Invalid hex string length
    InvalidLength,
}
