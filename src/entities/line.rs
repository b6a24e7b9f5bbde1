//! Line entity

use crate::types::Point;
use serde::Serialize;

/// A line between two canonical points; becomes a bar element
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Line {
    pub a: Point,
    pub b: Point,
}

impl Line {
    pub fn new(a: Point, b: Point) -> Self {
        Line { a, b }
    }
}
