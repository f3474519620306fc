//! Shared fixtures for the integration tests

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use gui::{Canvas, Color, Point, Rect, StepContext, Tick, TickSource, Widget, WidgetBase};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOp {
    Rect(Rect, Color),
    Frame(Rect, usize, Color),
    Text(Point, String, Color),
}

/// Canvas that records primitives instead of drawing them
pub struct RecordingCanvas {
    pub width: usize,
    pub height: usize,
    pub ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text(_, text, _) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(DrawOp::Rect(rect, color));
    }

    fn draw_frame(&mut self, rect: Rect, thickness: usize, color: Color) {
        self.ops.push(DrawOp::Frame(rect, thickness, color));
    }

    fn draw_text(&mut self, origin: Point, text: &str, color: Color) -> usize {
        self.ops.push(DrawOp::Text(origin, text.to_string(), color));
        text.chars().count()
    }

    fn text_size(&self, text: &str) -> (usize, usize) {
        (text.chars().count() * 8, 16)
    }
}

/// Tick source replaying a fixed script, idle once the script runs out
///
/// Panics after `limit` ticks so a dialog that never resolves fails the test
/// instead of hanging it.
pub struct ScriptedTicks {
    script: VecDeque<Tick>,
    pub delivered: usize,
    limit: usize,
}

impl ScriptedTicks {
    pub fn new(script: impl IntoIterator<Item = Tick>) -> Self {
        Self {
            script: script.into_iter().collect(),
            delivered: 0,
            limit: 10_000,
        }
    }

    /// `idle` idle ticks, then a press and release at `at`
    pub fn click_after(idle: usize, at: Point) -> Self {
        let mut script: Vec<Tick> = (0..idle).map(|_| Tick::idle(16)).collect();
        script.push(Tick::pressed(16, at));
        script.push(Tick::idle(16));
        Self::new(script)
    }
}

impl TickSource for ScriptedTicks {
    fn next_tick(&mut self) -> Tick {
        self.delivered += 1;
        assert!(self.delivered <= self.limit, "tick source exhausted");
        self.script.pop_front().unwrap_or(Tick::idle(16))
    }
}

pub type StepLog = Rc<RefCell<Vec<usize>>>;

/// Widget that records its id every time it is stepped
pub struct Probe {
    pub id: usize,
    base: WidgetBase,
    log: StepLog,
}

impl Probe {
    pub fn new(id: usize, log: &StepLog) -> Self {
        Self {
            id,
            base: WidgetBase::new(Rect::new(0, id * 10, 10, 10)),
            log: Rc::clone(log),
        }
    }

    pub fn hidden(id: usize, log: &StepLog) -> Self {
        let mut probe = Self::new(id, log);
        probe.set_visible(false);
        probe
    }
}

impl Widget for Probe {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn step(&mut self, _ctx: &mut StepContext<'_>) {
        self.log.borrow_mut().push(self.id);
    }
}

pub fn center(rect: Rect) -> Point {
    Point::new(rect.x + rect.width / 2, rect.y + rect.height / 2)
}
