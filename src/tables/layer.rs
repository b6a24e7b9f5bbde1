//! Layer aggregate

use super::layer_name::LayerAttributes;
use crate::entities::{EntityKind, EntityType, Face3D, Line, LwPolyline};
use crate::types::{LayerId, Point, PointId};
use serde::Serialize;

/// A named group of entities of a single kind
#[derive(Debug, Clone, Serialize)]
pub struct Layer {
    pub name: String,
    pub id: LayerId,
    pub kind: EntityKind,
    pub attributes: LayerAttributes,
    pub lines: Vec<Line>,
    pub faces: Vec<Face3D>,
    pub points: Vec<Point>,
    pub polylines: Vec<LwPolyline>,
}

impl Layer {
    /// Create an empty layer
    pub fn new(name: impl Into<String>, id: LayerId, kind: EntityKind, attributes: LayerAttributes) -> Self {
        Layer {
            name: name.into(),
            id,
            kind,
            attributes,
            lines: Vec::new(),
            faces: Vec::new(),
            points: Vec::new(),
            polylines: Vec::new(),
        }
    }

    /// Append an entity to the collection matching its kind.
    ///
    /// A point already on the layer is not added twice. An entity of another
    /// kind is handed back unchanged.
    pub fn add_entity(&mut self, entity: EntityType) -> Result<(), EntityType> {
        if entity.kind() != self.kind {
            return Err(entity);
        }

        match entity {
            EntityType::Point(point) => {
                if !self.points.iter().any(|p| p.is_same(&point)) {
                    self.points.push(point);
                }
            }
            EntityType::Line(line) => self.lines.push(line),
            EntityType::Face3D(face) => self.faces.push(face),
            EntityType::LwPolyline(polyline) => self.polylines.push(polyline),
        }
        Ok(())
    }

    /// Support layers own points; bar and plate layers do not
    pub fn owns_points(&self) -> bool {
        !self.points.is_empty()
    }

    /// Number of entities held
    pub fn entity_count(&self) -> usize {
        self.lines.len() + self.faces.len() + self.points.len() + self.polylines.len()
    }

    /// Ids of every point referenced by the layer's entities
    pub fn point_ids(&self) -> impl Iterator<Item = PointId> + '_ {
        let lines = self.lines.iter().flat_map(|l| [l.a.id, l.b.id]);
        let faces = self.faces.iter().flat_map(|f| f.points().iter().map(|p| p.id));
        let points = self.points.iter().map(|p| p.id);
        let polylines = self.polylines.iter().flat_map(|p| p.points().iter().map(|p| p.id));
        lines.chain(faces).chain(points).chain(polylines)
    }
}
