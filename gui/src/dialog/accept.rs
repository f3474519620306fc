//! Yes/No confirmation dialog
//!
//! Layout inside the dialog frame:
//!
//! ```text
//! +--------------------------+
//! | info text                |
//! |                          |
//! | [   yes    ] [   no    ] |
//! +--------------------------+
//! ```

use crate::canvas::Canvas;
use crate::theme::Style;
use crate::types::{Point, Rect, TickSource};
use crate::widget::{StepContext, Widget};
use crate::widgets::{Button, Element, Label};
use crate::window::ChildId;

use super::ModalDialog;

/// Outcome of an [`AcceptDialog`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accept {
    #[default]
    No,
    Yes,
}

/// Child slots reserved for an accept dialog
pub const ACCEPT_CAPACITY: usize = 4;

/// Info label, yes button, no button
const ACCEPT_SLOTS_USED: usize = 3;

const _: () = assert!(ACCEPT_SLOTS_USED <= ACCEPT_CAPACITY);

/// Modal dialog asking the user to accept or reject
pub struct AcceptDialog<'a> {
    dialog: ModalDialog<'a, Accept, ACCEPT_CAPACITY>,
    info: ChildId,
    yes: ChildId,
    no: ChildId,
}

impl<'a> AcceptDialog<'a> {
    /// Show a dialog centered on `canvas` and block until a button is clicked
    ///
    /// Never returns if neither button is clicked.
    pub fn exec(
        info: &'a str,
        yes: &'a str,
        no: &'a str,
        style: &Style,
        canvas: &mut dyn Canvas,
        ticks: &mut impl TickSource,
    ) -> Accept {
        let area = Self::layout(canvas.bounds());
        let mut dialog = Self::new(area, info, yes, no, style);
        dialog.run(canvas, ticks)
    }

    /// Default placement on a screen: centered, three quarters wide and
    /// half as tall
    pub const fn layout(screen: Rect) -> Rect {
        screen.centered(screen.width * 3 / 4, screen.height / 2)
    }

    /// Build the dialog at `area` (screen coordinates) without running it
    pub fn new(area: Rect, info: &'a str, yes: &'a str, no: &'a str, style: &Style) -> Self {
        let mut dialog = ModalDialog::new(area, *style);

        let inner = Rect::new(0, 0, area.width, area.height).inset(style.frame_thickness + style.padding);
        let button_height = inner.height / 3;
        let button_width = inner.width.saturating_sub(style.padding) / 2;
        let button_y = inner.bottom() - button_height;
        let label_height = inner
            .height
            .saturating_sub(button_height)
            .saturating_sub(style.padding);

        let info = dialog.add(Label::new(
            Rect::new(inner.x, inner.y, inner.width, label_height),
            info,
            style,
        ));
        let yes = dialog.add(Button::new(
            Rect::new(inner.x, button_y, button_width, button_height),
            yes,
            style,
        ));
        let no = dialog.add(Button::new(
            Rect::new(inner.right() - button_width, button_y, button_width, button_height),
            no,
            style,
        ));

        let mut this = Self {
            dialog,
            info,
            yes,
            no,
        };
        this.bind_buttons();
        this
    }

    fn bind_buttons(&mut self) {
        // Both slots were just filled with buttons, so binding cannot fail
        let bound = self
            .dialog
            .bind(self.yes, Accept::Yes)
            .and_then(|()| self.dialog.bind(self.no, Accept::No));
        debug_assert!(bound.is_ok());
    }

    /// Block until a button is clicked; see [`ModalDialog::exec`]
    pub fn run(&mut self, canvas: &mut dyn Canvas, ticks: &mut impl TickSource) -> Accept {
        self.dialog.exec(canvas, ticks)
    }

    /// Run one tick without blocking
    pub fn tick(&mut self, ctx: &mut StepContext<'_>) -> Option<Accept> {
        self.dialog.tick(ctx)
    }

    pub fn outcome(&self) -> Option<Accept> {
        self.dialog.outcome()
    }

    pub fn dialog(&self) -> &ModalDialog<'a, Accept, ACCEPT_CAPACITY> {
        &self.dialog
    }

    pub fn info_label(&self) -> Option<&Label<'a>> {
        self.dialog.window().child(self.info).and_then(Element::as_label)
    }

    pub fn yes_button(&self) -> Option<&Button<'a>> {
        self.dialog.window().child(self.yes).and_then(Element::as_button)
    }

    pub fn no_button(&self) -> Option<&Button<'a>> {
        self.dialog.window().child(self.no).and_then(Element::as_button)
    }

    /// Screen area of the yes button
    pub fn yes_area(&self) -> Rect {
        self.child_area(self.yes)
    }

    /// Screen area of the no button
    pub fn no_area(&self) -> Rect {
        self.child_area(self.no)
    }

    fn child_area(&self, id: ChildId) -> Rect {
        let origin: Point = self.dialog.position();
        self.dialog
            .window()
            .child(id)
            .map(|child| child.global_bounds(origin))
            .unwrap_or_default()
    }
}
