#![no_std]

// Shared crate for the widget workspace
// Geometry and color primitives used by every crate

pub mod color;

pub use color::{Color, ColorError};

/// Point in 2D space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    /// Create a new Point
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Translate this point by another point treated as an offset,
    /// saturating at the coordinate limit
    pub const fn offset(&self, by: Point) -> Point {
        Point {
            x: self.x.saturating_add(by.x),
            y: self.y.saturating_add(by.y),
        }
    }
}

/// Rectangle structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    /// Create a new Rectangle
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_point_size(point: Point, width: usize, height: usize) -> Self {
        Self::new(point.x, point.y, width, height)
    }

    pub const fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Get the right edge (x + width)
    pub const fn right(&self) -> usize {
        self.x.saturating_add(self.width)
    }

    /// Get the bottom edge (y + height)
    pub const fn bottom(&self) -> usize {
        self.y.saturating_add(self.height)
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check if a point is inside this rectangle
    pub const fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Same size, moved by `by`, saturating at the coordinate limit
    pub const fn translate(&self, by: Point) -> Rect {
        Rect::new(
            self.x.saturating_add(by.x),
            self.y.saturating_add(by.y),
            self.width,
            self.height,
        )
    }

    /// Shrink by `amount` on every side, saturating at zero size
    pub const fn inset(&self, amount: usize) -> Rect {
        let w = self.width.saturating_sub(amount.saturating_mul(2));
        let h = self.height.saturating_sub(amount.saturating_mul(2));
        Rect::new(self.x.saturating_add(amount), self.y.saturating_add(amount), w, h)
    }

    /// Rectangle of the given size centered inside this one
    pub const fn centered(&self, width: usize, height: usize) -> Rect {
        let width = if width < self.width { width } else { self.width };
        let height = if height < self.height { height } else { self.height };
        Rect::new(
            self.x.saturating_add((self.width - width) / 2),
            self.y.saturating_add((self.height - height) / 2),
            width,
            height,
        )
    }

    /// Clip this rectangle to fit within the given bounds
    pub fn clip_to(&self, bounds: Rect) -> Option<Rect> {
        let x = self.x.max(bounds.x);
        let y = self.y.max(bounds.y);
        let right = self.right().min(bounds.right());
        let bottom = self.bottom().min(bounds.bottom());

        if x < right && y < bottom {
            Some(Rect::new(x, y, right - x, bottom - y))
        } else {
            None
        }
    }
}
