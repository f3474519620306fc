//! Modal dialogs
//!
//! A `ModalDialog` is a window whose `exec` keeps pumping ticks until one of
//! its bound buttons is clicked, then returns the outcome bound to that
//! button. The loop is the only suspension point: it polls the tick source,
//! steps the widget tree and checks for a terminal outcome, nothing else.
//!
//! There is no timeout and no way to cancel. If no bound button is ever
//! clicked, `exec` never returns.

pub mod accept;

pub use accept::{Accept, AcceptDialog};

use core::fmt::Debug;

use heapless::Vec;
use log::{debug, info};

use crate::canvas::Canvas;
use crate::error::UiError;
use crate::theme::Style;
use crate::types::{Rect, TickSource};
use crate::widget::{StepContext, Widget, WidgetBase};
use crate::widgets::Element;
use crate::window::{ChildId, Window};

/// Window that resolves to an outcome of type `O`
pub struct ModalDialog<'a, O, const N: usize> {
    window: Window<Element<'a>, N>,
    bindings: Vec<(ChildId, O), N>,
    outcome: Option<O>,
}

impl<'a, O: Copy + Debug, const N: usize> ModalDialog<'a, O, N> {
    /// Create an unresolved dialog with no children at `rect`
    pub fn new(rect: Rect, style: Style) -> Self {
        Self {
            window: Window::new(rect, style),
            bindings: Vec::new(),
            outcome: None,
        }
    }

    /// Add a child widget
    ///
    /// # Panics
    ///
    /// Panics when the dialog already holds `N` children.
    pub fn add(&mut self, child: impl Into<Element<'a>>) -> ChildId {
        self.window.add(child.into())
    }

    /// Add a child widget, reporting overflow instead of panicking
    pub fn try_add(&mut self, child: impl Into<Element<'a>>) -> Result<ChildId, UiError> {
        self.window.try_add(child.into())
    }

    /// Make a click on the button in slot `id` resolve the dialog to `outcome`
    pub fn bind(&mut self, id: ChildId, outcome: O) -> Result<(), UiError> {
        match self.window.child(id) {
            Some(Element::Button(_)) => {}
            _ => return Err(UiError::UnknownChild(id)),
        }
        self.bindings
            .push((id, outcome))
            .map_err(|_| UiError::CapacityExceeded { capacity: N })
    }

    pub fn window(&self) -> &Window<Element<'a>, N> {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut Window<Element<'a>, N> {
        &mut self.window
    }

    /// The recorded outcome, `None` until a bound button is clicked
    pub fn outcome(&self) -> Option<O> {
        self.outcome
    }

    /// Whether an outcome has been recorded
    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// Run one tick without blocking
    ///
    /// Steps the window, then records the outcome of the first bound button
    /// (in binding order) that reports a click. Once an outcome is recorded
    /// further ticks are ignored, so it can never be overwritten.
    pub fn tick(&mut self, ctx: &mut StepContext<'_>) -> Option<O> {
        if self.outcome.is_some() {
            return self.outcome;
        }

        self.window.step(ctx);

        for (id, outcome) in self.bindings.iter() {
            let clicked = self
                .window
                .child_mut(*id)
                .and_then(Element::as_button_mut)
                .is_some_and(|button| button.take_click());
            if clicked {
                debug!("dialog resolved to {:?}", outcome);
                self.outcome = Some(*outcome);
                break;
            }
        }

        self.outcome
    }

    /// Block until a bound button is clicked and return its outcome
    ///
    /// Forces a full redraw on the first tick. Input left over from before the
    /// call, latched clicks and presses still in progress alike, is dropped.
    /// Pulls one tick from `ticks` per iteration and never returns if no bound
    /// button is ever clicked.
    pub fn exec(&mut self, canvas: &mut dyn Canvas, ticks: &mut impl TickSource) -> O {
        info!("modal exec started with {} children", self.window.len());

        self.outcome = None;
        for (id, _) in self.bindings.iter() {
            if let Some(button) = self.window.child_mut(*id).and_then(Element::as_button_mut) {
                button.reset_input();
            }
        }
        self.window.mark_dirty();

        loop {
            let tick = ticks.next_tick();
            let mut ctx = StepContext::new(&mut *canvas, tick);
            if let Some(outcome) = self.tick(&mut ctx) {
                return outcome;
            }
        }
    }
}

impl<O: Copy + Debug, const N: usize> Widget for ModalDialog<'_, O, N> {
    fn base(&self) -> &WidgetBase {
        self.window.base()
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        self.window.base_mut()
    }

    fn step(&mut self, ctx: &mut StepContext<'_>) {
        self.tick(ctx);
    }
}
