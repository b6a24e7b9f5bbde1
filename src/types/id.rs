//! Integer identifiers for points and layers
//!
//! Both are handed out by per-run sequences starting at 1 and are written
//! to the LIRA file as bare decimal numbers.

use serde::Serialize;
use std::fmt;

/// Identifier of a canonical point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PointId(u32);

impl PointId {
    /// The first id handed out by a fresh registry
    pub const FIRST: PointId = PointId(1);

    #[inline]
    pub const fn new(value: u32) -> Self {
        PointId(value)
    }

    #[inline]
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// The id following this one
    #[inline]
    pub const fn next(&self) -> Self {
        PointId(self.0 + 1)
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a layer, used as the element type / stiffness number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct LayerId(u32);

impl LayerId {
    pub const FIRST: LayerId = LayerId(1);

    #[inline]
    pub const fn new(value: u32) -> Self {
        LayerId(value)
    }

    #[inline]
    pub const fn value(&self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn next(&self) -> Self {
        LayerId(self.0 + 1)
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
