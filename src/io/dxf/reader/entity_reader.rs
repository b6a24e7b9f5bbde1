//! Entity decoders
//!
//! Each decoder runs right after the entity's type marker and layer name
//! have been read. Decoders return `Ok(None)` when the stream ends before
//! the entity is complete.

use super::tag_reader::TagReader;
use crate::entities::{EntityKind, EntityType, Face3D, Line, LwPolyline};
use crate::error::{ConvertError, Result};
use crate::io::dxf::DxfCode;
use crate::registry::PointRegistry;
use crate::types::Point;
use std::io::BufRead;

/// Z of every light-weight polyline vertex
const LWPOLYLINE_ELEVATION: &str = "0";

/// Decodes entities into canonical points
pub struct EntityReader<'a, R: BufRead> {
    tags: &'a mut TagReader<R>,
    registry: &'a mut PointRegistry,
}

impl<'a, R: BufRead> EntityReader<'a, R> {
    pub fn new(tags: &'a mut TagReader<R>, registry: &'a mut PointRegistry) -> Self {
        Self { tags, registry }
    }

    /// Decode one entity of `kind`
    pub fn read(&mut self, kind: EntityKind) -> Result<Option<EntityType>> {
        Ok(match kind {
            EntityKind::Point => self.read_point()?.map(EntityType::Point),
            EntityKind::Line => self.read_line()?.map(EntityType::Line),
            EntityKind::Face3D => self.read_face3d()?.map(EntityType::Face3D),
            EntityKind::LwPolyline => self.read_lwpolyline()?.map(EntityType::LwPolyline),
        })
    }

    /// Read the `index`-th coordinate triple of the entity
    fn read_vertex(&mut self, index: usize) -> Result<Option<Point>> {
        let Some(codes) = DxfCode::point(index) else {
            return Ok(None);
        };
        let Some(values) = self.tags.read_values(&codes)? else {
            return Ok(None);
        };

        let line = self.tags.line_number();
        self.registry
            .canonicalize(&values[0], &values[1], &values[2], line)
            .map(Some)
    }

    /// Read a POINT entity
    pub fn read_point(&mut self) -> Result<Option<Point>> {
        self.read_vertex(0)
    }

    /// Read a LINE entity
    pub fn read_line(&mut self) -> Result<Option<Line>> {
        let Some(a) = self.read_vertex(0)? else {
            return Ok(None);
        };
        let Some(b) = self.read_vertex(1)? else {
            return Ok(None);
        };
        Ok(Some(Line::new(a, b)))
    }

    /// Read a 3DFACE entity.
    ///
    /// Corners that collapse to fewer than three points are a
    /// [`ConvertError::DegenerateFace`].
    pub fn read_face3d(&mut self) -> Result<Option<Face3D>> {
        let mut corners = Vec::with_capacity(4);
        for index in 0..4 {
            match self.read_vertex(index)? {
                Some(corner) => corners.push(corner),
                None => return Ok(None),
            }
        }

        match Face3D::from_corners(corners[0], corners[1], corners[2], corners[3]) {
            Some(face) => Ok(Some(face)),
            None => {
                let mut ids: Vec<_> = corners.iter().map(|p| p.id).collect();
                ids.sort_unstable();
                ids.dedup();
                Err(ConvertError::DegenerateFace {
                    corners: ids.len(),
                    line: self.tags.line_number(),
                })
            }
        }
    }

    /// Read an LWPOLYLINE entity.
    ///
    /// After the vertex count, each vertex is a raw line taken as X followed
    /// by a code 20 value as Y. Reading stops early, without error, at the
    /// end of the stream or at the next entity marker; the polyline then
    /// keeps the vertices read so far.
    pub fn read_lwpolyline(&mut self) -> Result<Option<LwPolyline>> {
        let Some(count) = self.tags.read_value(DxfCode::Int32)? else {
            return Ok(None);
        };
        let count: usize = count.parse().map_err(|_| ConvertError::InvalidNumber {
            value: count.clone(),
            line: self.tags.line_number(),
        })?;

        let marker = DxfCode::Start.line();
        let mut polyline = LwPolyline::new();

        for _ in 0..count {
            let Some(line) = self.tags.read_line()? else {
                break;
            };
            if line == marker {
                self.tags.push_back(line);
                break;
            }

            let Some(y) = self.tags.read_value(DxfCode::YCoordinate)? else {
                break;
            };
            let point = self.registry.canonicalize(
                line.trim(),
                &y,
                LWPOLYLINE_ELEVATION,
                self.tags.line_number(),
            )?;
            polyline.add_point(point);
        }

        Ok(Some(polyline))
    }
}
