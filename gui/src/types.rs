//! Common types used throughout the widget core

pub use shared::{Point, Rect};

/// One time quantum delivered by the tick source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tick {
    /// Milliseconds elapsed since the previous tick
    pub elapsed_ms: u32,
    /// Screen position of the pointer/touch while it is held down
    pub pointer: Option<Point>,
}

impl Tick {
    /// A tick with no input
    pub const fn idle(elapsed_ms: u32) -> Self {
        Self {
            elapsed_ms,
            pointer: None,
        }
    }

    /// A tick with the pointer held down at `at`
    pub const fn pressed(elapsed_ms: u32, at: Point) -> Self {
        Self {
            elapsed_ms,
            pointer: Some(at),
        }
    }
}

/// External source of ticks
///
/// The modal exec loop pulls exactly one tick per iteration. Implementations
/// typically wait on a hardware timer and sample the touch controller.
pub trait TickSource {
    fn next_tick(&mut self) -> Tick;
}

impl<F> TickSource for F
where
    F: FnMut() -> Tick,
{
    fn next_tick(&mut self) -> Tick {
        self()
    }
}
