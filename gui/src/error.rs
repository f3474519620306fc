//! Error types for the widget core

use thiserror::Error;

use crate::window::ChildId;

/// Errors raised while assembling a widget tree
///
/// The tick and exec paths never fail; these only surface while a window is
/// being populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UiError {
    #[error("window capacity of {capacity} children exceeded")]
    CapacityExceeded { capacity: usize },

    #[error("no child in slot {}", .0.index())]
    UnknownChild(ChildId),
}

/// PSF font loading errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FontError {
    #[error("not a PSF font")]
    NotAPsfFont,

    #[error("invalid PSF magic")]
    InvalidMagic,

    #[error("font data truncated")]
    BufferTooSmall,
}
