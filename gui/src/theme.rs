//! Theme and style descriptors
//!
//! A `Theme` is a full palette; a `Style` is the small read-only bag a single
//! window or dialog draws with.

use crate::colors::Color;

/// Theme structure containing all color definitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    // Background colors
    pub background: Color,
    pub surface: Color,
    pub border: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,

    // Accent colors
    pub accent_primary: Color,
    pub accent_pressed: Color,
}

/// Per-window drawing parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    /// Window background fill
    pub main_color: Color,
    /// Window border
    pub frame_color: Color,
    /// Border width in pixels, 0 disables the frame
    pub frame_thickness: usize,
    pub text_color: Color,
    pub button_color: Color,
    pub button_pressed_color: Color,
    /// Gap between the frame and the content, and between content rows
    pub padding: usize,
}

/// Helper macro to unwrap Color::from_hex at compile time
macro_rules! hex_color {
    ($hex:expr) => {{
        match Color::from_hex($hex) {
            Ok(color) => color,
            Err(_) => panic!("Invalid hex color"),
        }
    }};
}

/// Dark theme color palette
///
/// Background: #0D1117
/// Surface: #161B22
/// Border: #30363D
/// Text Primary: #F0F6FC
/// Accent Primary: #238636
pub const DARK_THEME: Theme = Theme {
    background: hex_color!("#0D1117"),
    surface: hex_color!("#161B22"),
    border: hex_color!("#30363D"),

    text_primary: hex_color!("#F0F6FC"),
    text_secondary: hex_color!("#C9D1D9"),

    accent_primary: hex_color!("#238636"),
    accent_pressed: hex_color!("#2EA043"),
};

/// Light theme color palette
///
/// Background: #FFFFFF
/// Surface: #F6F8FA
/// Border: #D0D7DE
/// Text Primary: #1F2328
/// Accent Primary: #0969DA
pub const LIGHT_THEME: Theme = Theme {
    background: hex_color!("#FFFFFF"),
    surface: hex_color!("#F6F8FA"),
    border: hex_color!("#D0D7DE"),

    text_primary: hex_color!("#1F2328"),
    text_secondary: hex_color!("#424A53"),

    accent_primary: hex_color!("#0969DA"),
    accent_pressed: hex_color!("#0550AE"),
};

impl Style {
    /// Derive a dialog style from a palette
    pub const fn from_theme(theme: &Theme) -> Self {
        Self {
            main_color: theme.surface,
            frame_color: theme.border,
            frame_thickness: 2,
            text_color: theme.text_primary,
            button_color: theme.accent_primary,
            button_pressed_color: theme.accent_pressed,
            padding: 8,
        }
    }

    pub const fn with_frame(mut self, thickness: usize, color: Color) -> Self {
        self.frame_thickness = thickness;
        self.frame_color = color;
        self
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::from_theme(&DARK_THEME)
    }
}
