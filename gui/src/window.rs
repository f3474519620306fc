//! Container widget with a fixed-capacity child arena
//!
//! A `Window` owns its children outright and drives them once per tick:
//!
//! 1. if the window itself is dirty it repaints its background and frame,
//!    marks every child dirty and clears its own flag;
//! 2. every visible child is stepped, in insertion order, whether or not
//!    anything was dirty.
//!
//! Children are addressed by `ChildId`, the index they were inserted at.

use heapless::Vec;
use log::{debug, trace};

use crate::canvas::Canvas;
use crate::error::UiError;
use crate::theme::Style;
use crate::types::{Point, Rect};
use crate::widget::{StepContext, Widget, WidgetBase};

/// Handle to a child slot of a window
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChildId(usize);

impl ChildId {
    /// Slot index, in insertion order
    pub const fn index(&self) -> usize {
        self.0
    }
}

/// Widget that owns up to `N` children of type `C`
pub struct Window<C, const N: usize> {
    base: WidgetBase,
    style: Style,
    children: Vec<C, N>,
}

impl<C: Widget, const N: usize> Window<C, N> {
    /// Create an empty window at `rect` (owner coordinates)
    ///
    /// The window starts dirty so its first step paints it.
    pub fn new(rect: Rect, style: Style) -> Self {
        Self {
            base: WidgetBase::new(rect),
            style,
            children: Vec::new(),
        }
    }

    /// Append a child
    ///
    /// # Panics
    ///
    /// Panics when the window already holds `N` children. Use
    /// [`Window::try_add`] to get an error instead.
    pub fn add(&mut self, child: C) -> ChildId {
        match self.try_add(child) {
            Ok(id) => id,
            Err(err) => panic!("{}", err),
        }
    }

    /// Append a child, reporting overflow instead of panicking
    ///
    /// # Arguments
    ///
    /// * `child` - Widget to own, positioned relative to this window
    ///
    /// # Returns
    ///
    /// The handle of the new slot, or `UiError::CapacityExceeded` when all
    /// `N` slots are taken
    pub fn try_add(&mut self, child: C) -> Result<ChildId, UiError> {
        let id = ChildId(self.children.len());
        self.children
            .push(child)
            .map_err(|_| UiError::CapacityExceeded { capacity: N })?;
        Ok(id)
    }

    /// Get the child in slot `id`
    ///
    /// # Returns
    ///
    /// `None` if `id` was issued by another window with more children
    pub fn child(&self, id: ChildId) -> Option<&C> {
        self.children.get(id.0)
    }

    /// Get the child in slot `id` mutably
    pub fn child_mut(&mut self, id: ChildId) -> Option<&mut C> {
        self.children.get_mut(id.0)
    }

    /// Children in insertion order
    pub fn children(&self) -> &[C] {
        &self.children
    }

    /// Children in insertion order, mutably
    pub fn children_mut(&mut self) -> &mut [C] {
        &mut self.children
    }

    /// Number of children added so far
    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Maximum number of children
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Style used to paint the window background and frame
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Replace the style and repaint on the next step
    pub fn set_style(&mut self, style: Style) {
        self.style = style;
        self.base.dirty = true;
    }

    fn redraw(&self, canvas: &mut dyn Canvas, origin: Point) {
        let area = Rect::from_point_size(origin, self.base.width, self.base.height);
        debug!("window redraw at {:?}", area);

        canvas.draw_rect(area, self.style.main_color);
        if self.style.frame_thickness > 0 {
            canvas.draw_frame(area, self.style.frame_thickness, self.style.frame_color);
        }
    }
}

impl<C: Widget, const N: usize> Widget for Window<C, N> {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn step(&mut self, ctx: &mut StepContext<'_>) {
        let origin = self.global_position(ctx.origin);

        if self.base.dirty {
            self.redraw(&mut *ctx.canvas, origin);
            for child in self.children.iter_mut() {
                child.mark_dirty();
            }
            self.base.dirty = false;
        }

        let children = &mut self.children;
        ctx.with_origin(origin, |ctx| {
            for (index, child) in children.iter_mut().enumerate() {
                if child.is_visible() {
                    trace!("step child {}", index);
                    child.step(ctx);
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{DrawOp, RecordingCanvas};
    use crate::types::Tick;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::vec::Vec as StdVec;

    type Log = Rc<RefCell<StdVec<(usize, Point)>>>;

    struct Probe {
        id: usize,
        base: WidgetBase,
        log: Log,
    }

    impl Probe {
        fn new(id: usize, rect: Rect, log: &Log) -> Self {
            Self {
                id,
                base: WidgetBase::new(rect),
                log: Rc::clone(log),
            }
        }
    }

    impl Widget for Probe {
        fn base(&self) -> &WidgetBase {
            &self.base
        }

        fn base_mut(&mut self) -> &mut WidgetBase {
            &mut self.base
        }

        fn step(&mut self, ctx: &mut StepContext<'_>) {
            self.log.borrow_mut().push((self.id, ctx.origin));
        }
    }

    fn tick<C: Widget, const N: usize>(window: &mut Window<C, N>, canvas: &mut RecordingCanvas) {
        let mut ctx = StepContext::new(canvas, Tick::idle(16));
        window.step(&mut ctx);
    }

    #[test]
    fn test_dirty_window_redraws_and_propagates() {
        let log = Log::default();
        let mut window: Window<Probe, 4> = Window::new(Rect::new(10, 20, 100, 50), Style::default());
        for id in 0..3 {
            window.add(Probe::new(id, Rect::new(0, id * 10, 10, 10), &log));
        }
        for child in window.children_mut() {
            child.clear_dirty();
        }

        let mut canvas = RecordingCanvas::new(320, 240);
        tick(&mut window, &mut canvas);

        assert!(!window.is_dirty());
        assert!(window.children().iter().all(|c| c.is_dirty()));
        let style = Style::default();
        assert_eq!(
            canvas.ops[..2],
            [
                DrawOp::Rect(Rect::new(10, 20, 100, 50), style.main_color),
                DrawOp::Frame(Rect::new(10, 20, 100, 50), style.frame_thickness, style.frame_color),
            ]
        );
    }

    #[test]
    fn test_clean_tick_leaves_children_alone() {
        let log = Log::default();
        let mut window: Window<Probe, 2> = Window::new(Rect::new(0, 0, 10, 10), Style::default());
        window.add(Probe::new(0, Rect::new(0, 0, 1, 1), &log));
        window.add(Probe::new(1, Rect::new(0, 0, 1, 1), &log));
        window.clear_dirty();
        window.children_mut()[1].clear_dirty();

        let mut canvas = RecordingCanvas::new(64, 64);
        tick(&mut window, &mut canvas);

        assert!(canvas.ops.is_empty());
        assert!(window.children()[0].is_dirty());
        assert!(!window.children()[1].is_dirty());
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn test_children_step_with_window_origin() {
        let log = Log::default();
        let mut window: Window<Probe, 1> = Window::new(Rect::new(7, 9, 10, 10), Style::default());
        window.add(Probe::new(0, Rect::new(1, 1, 1, 1), &log));

        let mut canvas = RecordingCanvas::new(64, 64);
        tick(&mut window, &mut canvas);

        assert_eq!(*log.borrow(), [(0, Point::new(7, 9))]);
    }

    #[test]
    fn test_zero_thickness_frame_is_skipped() {
        let style = Style::default().with_frame(0, Style::default().frame_color);
        let mut window: Window<Probe, 1> = Window::new(Rect::new(0, 0, 4, 4), style);

        let mut canvas = RecordingCanvas::new(8, 8);
        tick(&mut window, &mut canvas);

        assert_eq!(canvas.ops, [DrawOp::Rect(Rect::new(0, 0, 4, 4), style.main_color)]);
    }

    #[test]
    fn test_try_add_reports_overflow() {
        let log = Log::default();
        let mut window: Window<Probe, 1> = Window::new(Rect::new(0, 0, 4, 4), Style::default());
        assert_eq!(window.try_add(Probe::new(0, Rect::default(), &log)).map(|id| id.index()), Ok(0));
        assert_eq!(
            window.try_add(Probe::new(1, Rect::default(), &log)).err(),
            Some(UiError::CapacityExceeded { capacity: 1 })
        );
        assert_eq!(window.len(), 1);
        assert_eq!(window.capacity(), 1);
    }

    #[test]
    #[should_panic(expected = "capacity of 1 children exceeded")]
    fn test_add_past_capacity_panics() {
        let log = Log::default();
        let mut window: Window<Probe, 1> = Window::new(Rect::new(0, 0, 4, 4), Style::default());
        window.add(Probe::new(0, Rect::default(), &log));
        window.add(Probe::new(1, Rect::default(), &log));
    }

    #[test]
    fn test_set_style_marks_dirty() {
        let mut window: Window<Probe, 1> = Window::new(Rect::new(0, 0, 4, 4), Style::default());
        window.clear_dirty();
        window.set_style(Style::from_theme(&crate::theme::LIGHT_THEME));
        assert!(window.is_dirty());
    }
}
