//! Retained-mode widget core for framebuffer displays
//!
//! The crate is built around two pieces:
//!
//! * [`Window`], a container that owns a fixed number of child widgets and
//!   drives them once per tick, repainting itself and invalidating every child
//!   whenever it is dirty;
//! * [`ModalDialog`], a window whose `exec` blocks the caller, pumping ticks
//!   until the user clicks one of its buttons. [`AcceptDialog`] is the stock
//!   yes/no instance.
//!
//! Everything runs on one thread, cooperatively, and nothing on the tick path
//! allocates. Drawing goes through the [`Canvas`] trait; [`Screen`] is the
//! framebuffer-backed implementation.

#![cfg_attr(not(test), no_std)]

pub mod canvas;
pub mod colors;
pub mod dialog;
pub mod error;
pub mod font;
pub mod framebuffer;
pub mod screen;
pub mod theme;
pub mod types;
pub mod widget;
pub mod widgets;
pub mod window;

#[cfg(test)]
mod testing;

pub use canvas::Canvas;
pub use colors::Color;
pub use dialog::{Accept, AcceptDialog, ModalDialog};
pub use error::{FontError, UiError};
pub use font::Font;
pub use framebuffer::{Framebuffer, FramebufferInfo, PixelFormat};
pub use screen::Screen;
pub use theme::{Style, Theme, DARK_THEME, LIGHT_THEME};
pub use types::{Point, Rect, Tick, TickSource};
pub use widget::{StepContext, Widget, WidgetBase};
pub use widgets::{Button, Element, Label};
pub use window::{ChildId, Window};
