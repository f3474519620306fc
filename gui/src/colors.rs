//! Color re-exports for widget code

pub use shared::{Color, ColorError};
