//! Canonical point

use super::PointId;
use serde::Serialize;

/// A point registered in a [`PointRegistry`](crate::registry::PointRegistry)
///
/// Points are only created by the registry, which guarantees that two
/// points with the same id carry the same coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub id: PointId,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    pub(crate) fn new(id: PointId, x: f64, y: f64, z: f64) -> Self {
        Point { id, x, y, z }
    }

    /// Coordinates as an array
    pub fn coords(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Point identity: same canonical key, same id
    #[inline]
    pub fn is_same(&self, other: &Point) -> bool {
        self.id == other.id
    }
}
