//! Widget system
//!
//! Every displayable element embeds a `WidgetBase` (geometry plus the
//! visibility and redraw flags) and implements `Widget::step`, which is called
//! once per tick by its owner.

use crate::canvas::Canvas;
use crate::types::{Point, Rect, Tick};

/// State shared by every widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetBase {
    /// Position relative to the owner
    pub position: Point,
    pub width: usize,
    pub height: usize,
    pub visible: bool,
    /// Set when the widget must be redrawn on its next step
    pub dirty: bool,
}

impl WidgetBase {
    /// New visible widget occupying `rect` (local coordinates), dirty so it
    /// draws on its first step
    pub const fn new(rect: Rect) -> Self {
        Self {
            position: rect.top_left(),
            width: rect.width,
            height: rect.height,
            visible: true,
            dirty: true,
        }
    }

    /// Bounding box in the owner's coordinates
    pub const fn bounds(&self) -> Rect {
        Rect::from_point_size(self.position, self.width, self.height)
    }
}

/// Per-tick context handed down the widget tree
pub struct StepContext<'c> {
    pub canvas: &'c mut dyn Canvas,
    /// Global position of the owner of the widget being stepped
    pub origin: Point,
    pub elapsed_ms: u32,
    /// Pointer position while held down, in global coordinates
    pub pointer: Option<Point>,
}

impl<'c> StepContext<'c> {
    /// Root context for one tick; the origin is the screen origin
    pub fn new(canvas: &'c mut dyn Canvas, tick: Tick) -> Self {
        Self {
            canvas,
            origin: Point::default(),
            elapsed_ms: tick.elapsed_ms,
            pointer: tick.pointer,
        }
    }

    /// Run `f` with the origin moved to `origin`, restoring it afterwards
    ///
    /// Containers use this to step their children in their own coordinate
    /// space.
    pub fn with_origin<R>(&mut self, origin: Point, f: impl FnOnce(&mut Self) -> R) -> R {
        let saved = core::mem::replace(&mut self.origin, origin);
        let result = f(self);
        self.origin = saved;
        result
    }
}

/// Base trait for all UI widgets
///
/// Implementors only provide access to their embedded `WidgetBase` and a
/// `step`; geometry, visibility and the redraw flag come from the provided
/// methods.
pub trait Widget {
    /// Shared widget state
    fn base(&self) -> &WidgetBase;

    /// Shared widget state, mutably
    fn base_mut(&mut self) -> &mut WidgetBase;

    /// Advance the widget by one tick
    ///
    /// Called by the owner only while the widget is visible. A widget decides
    /// on its own whether to redraw, usually by checking `is_dirty`.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Canvas, global origin of the owner and the tick's input
    fn step(&mut self, ctx: &mut StepContext<'_>);

    /// Position relative to the owner
    fn position(&self) -> Point {
        self.base().position
    }

    /// Get the size of the widget as (width, height)
    fn size(&self) -> (usize, usize) {
        let base = self.base();
        (base.width, base.height)
    }

    /// Bounding box in the owner's coordinates
    fn bounds(&self) -> Rect {
        self.base().bounds()
    }

    /// Screen position of the widget
    ///
    /// # Arguments
    ///
    /// * `origin` - Global position of the owner
    ///
    /// # Returns
    ///
    /// The local position offset by `origin`, which is the sum of positions
    /// along the owner chain
    fn global_position(&self, origin: Point) -> Point {
        self.position().offset(origin)
    }

    /// Bounding box in screen coordinates, given the owner's global position
    fn global_bounds(&self, origin: Point) -> Rect {
        self.bounds().translate(origin)
    }

    /// Move the widget within its owner
    ///
    /// Marks the widget dirty only if the position actually changes.
    fn set_position(&mut self, position: Point) {
        let base = self.base_mut();
        if base.position != position {
            base.position = position;
            base.dirty = true;
        }
    }

    /// Change the widget's size, marking it dirty if the size changes
    fn resize(&mut self, width: usize, height: usize) {
        let base = self.base_mut();
        if (base.width, base.height) != (width, height) {
            base.width = width;
            base.height = height;
            base.dirty = true;
        }
    }

    /// Whether the owner steps this widget
    fn is_visible(&self) -> bool {
        self.base().visible
    }

    /// Showing a hidden widget marks it dirty so it draws on its next step
    fn set_visible(&mut self, visible: bool) {
        let base = self.base_mut();
        if visible && !base.visible {
            base.dirty = true;
        }
        base.visible = visible;
    }

    /// Whether the widget redraws on its next step
    fn is_dirty(&self) -> bool {
        self.base().dirty
    }

    /// Request a redraw on the next step
    fn mark_dirty(&mut self) {
        self.base_mut().dirty = true;
    }

    /// Drop a pending redraw request
    fn clear_dirty(&mut self) {
        self.base_mut().dirty = false;
    }
}
