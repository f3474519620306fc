//! Const evaluation of themes and styles
//!
//! Styles are meant to live in flash as `const`/`static` data, so everything
//! needed to build one must be usable in const context.

use gui::{Color, Rect, Style, DARK_THEME, LIGHT_THEME};

const DIALOG_STYLE: Style = Style::from_theme(&DARK_THEME).with_frame(3, Color::WHITE);
const RED: Color = match Color::from_hex("#F00") {
    Ok(color) => color,
    Err(_) => panic!("bad color"),
};
const PANEL: Rect = Rect::new(0, 0, 320, 240).centered(100, 50);

#[test]
fn test_const_style() {
    assert_eq!(DIALOG_STYLE.main_color, DARK_THEME.surface);
    assert_eq!(DIALOG_STYLE.frame_thickness, 3);
    assert_eq!(DIALOG_STYLE.frame_color, Color::WHITE);
}

#[test]
fn test_const_color_parsing() {
    assert_eq!(RED, Color::rgb(255, 0, 0));
}

#[test]
fn test_const_geometry() {
    assert_eq!(PANEL, Rect::new(110, 95, 100, 50));
}

#[test]
fn test_themes_differ() {
    const DARK_BG: Color = DARK_THEME.background;
    const LIGHT_BG: Color = LIGHT_THEME.background;
    assert_ne!(DARK_BG, LIGHT_BG);
    assert_ne!(Style::from_theme(&DARK_THEME), Style::from_theme(&LIGHT_THEME));
}
