//! Test doubles shared by the unit tests

use std::string::{String, ToString};
use std::vec::Vec;

use crate::canvas::Canvas;
use crate::colors::Color;
use crate::types::{Point, Rect};

pub const CHAR_WIDTH: usize = 8;
pub const CHAR_HEIGHT: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOp {
    Rect(Rect, Color),
    Frame(Rect, usize, Color),
    Text(Point, String, Color),
}

/// Canvas that records every primitive instead of drawing it
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
        (text.chars().count() * CHAR_WIDTH, CHAR_HEIGHT)
    }
}
