//! Face3D entity (3D face)
//!
//! DXF stores the corners of a 3DFACE as `a, b, c, d`, with a triangle
//! written as a quad whose last corner repeats the third. LIRA plate
//! elements walk the outline in the order `a, b, d, c`, so the corners are
//! reordered on construction and repeated corners collapse, turning a
//! degenerate quad into a triangle. Fewer than three distinct corners is
//! not a face.

use crate::types::Point;
use serde::Serialize;

/// A triangular or quadrilateral face
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Face3D {
    points: Vec<Point>,
}

impl Face3D {
    /// Minimum number of distinct corners
    pub const MIN_CORNERS: usize = 3;

    /// Build a face from the four DXF corners.
    ///
    /// `None` if fewer than three corners are distinct.
    pub fn from_corners(a: Point, b: Point, c: Point, d: Point) -> Option<Self> {
        let mut points: Vec<Point> = Vec::with_capacity(4);
        for corner in [a, b, d, c] {
            if !points.iter().any(|p| p.is_same(&corner)) {
                points.push(corner);
            }
        }
        if points.len() < Self::MIN_CORNERS {
            return None;
        }
        Some(Face3D { points })
    }

    /// Distinct corners in stored order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn is_triangle(&self) -> bool {
        self.points.len() == 3
    }
}
