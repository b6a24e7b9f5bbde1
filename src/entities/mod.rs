//! Drawing entities handled by the converter

use crate::types::Point;
use serde::Serialize;
use std::fmt;

pub mod face3d;
pub mod line;
pub mod lwpolyline;

pub use face3d::Face3D;
pub use line::Line;
pub use lwpolyline::LwPolyline;

/// Kind of a decoded entity; a layer only ever holds one kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EntityKind {
    #[serde(rename = "POINT")]
    Point,
    #[serde(rename = "LINE")]
    Line,
    #[serde(rename = "3DFACE")]
    Face3D,
    #[serde(rename = "LWPOLYLINE")]
    LwPolyline,
}

impl EntityKind {
    /// All kinds with a decoder
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Point,
        EntityKind::Line,
        EntityKind::Face3D,
        EntityKind::LwPolyline,
    ];

    /// Look up a kind by its DXF entity name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "POINT" => Some(EntityKind::Point),
            "LINE" => Some(EntityKind::Line),
            "3DFACE" => Some(EntityKind::Face3D),
            "LWPOLYLINE" => Some(EntityKind::LwPolyline),
            _ => None,
        }
    }

    /// DXF entity name
    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::Point => "POINT",
            EntityKind::Line => "LINE",
            EntityKind::Face3D => "3DFACE",
            EntityKind::LwPolyline => "LWPOLYLINE",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A decoded entity
#[derive(Debug, Clone, PartialEq)]
pub enum EntityType {
    Point(Point),
    Line(Line),
    Face3D(Face3D),
    LwPolyline(LwPolyline),
}

impl EntityType {
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityType::Point(_) => EntityKind::Point,
            EntityType::Line(_) => EntityKind::Line,
            EntityType::Face3D(_) => EntityKind::Face3D,
            EntityType::LwPolyline(_) => EntityKind::LwPolyline,
        }
    }
}
