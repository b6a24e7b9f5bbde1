//! Light-weight polyline entity

use crate::types::Point;
use serde::Serialize;

/// A set of canonical points read from an LWPOLYLINE
///
/// Vertices are kept in reading order; a point that appears twice is
/// stored once.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LwPolyline {
    points: Vec<Point>,
}

impl LwPolyline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex; returns `false` if the point is already part of the polyline
    pub fn add_point(&mut self, point: Point) -> bool {
        if self.points.iter().any(|p| p.is_same(&point)) {
            return false;
        }
        self.points.push(point);
        true
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PointId;

    #[test]
    fn test_points_are_unique_by_identity() {
        let a = Point::new(PointId::new(1), 0.0, 0.0, 0.0);
        let b = Point::new(PointId::new(2), 1.0, 0.0, 0.0);

        let mut polyline = LwPolyline::new();
        assert!(polyline.add_point(a));
        assert!(polyline.add_point(b));
        assert!(!polyline.add_point(a));
        assert_eq!(polyline.len(), 2);
    }
}
