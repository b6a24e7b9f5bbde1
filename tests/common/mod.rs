//! Shared test utilities for dxf2lira integration tests.
//!
//! Test crates import this via `mod common;`.

#![allow(dead_code)]

use dxf2lira::{DrawingModel, DxfReader, DxfReaderConfiguration};
use std::io::Cursor;

/// Builds ASCII DXF text entity by entity.
///
/// ```ignore
/// let dxf = DxfBuilder::new()
///     .line("Beam B30 H50", [0.0, 0.0, 0.0], [6.0, 0.0, 0.0])
///     .build();
/// ```
#[derive(Default)]
pub struct DxfBuilder {
    entities: String,
}

impl DxfBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn tag(&mut self, code: i32, value: impl std::fmt::Display) {
        self.entities.push_str(&format!("{:>3}\n{}\n", code, value));
    }

    fn vertex(&mut self, index: i32, p: [f64; 3]) {
        self.tag(10 + index, p[0]);
        self.tag(20 + index, p[1]);
        self.tag(30 + index, p[2]);
    }

    fn start(&mut self, entity: &str, layer: &str) {
        self.tag(0, entity);
        self.tag(5, "1F");
        self.tag(330, "1F");
        self.tag(100, "AcDbEntity");
        self.tag(8, layer);
    }

    pub fn point(mut self, layer: &str, p: [f64; 3]) -> Self {
        self.start("POINT", layer);
        self.tag(100, "AcDbPoint");
        self.vertex(0, p);
        self
    }

    pub fn line(mut self, layer: &str, a: [f64; 3], b: [f64; 3]) -> Self {
        self.start("LINE", layer);
        self.tag(100, "AcDbLine");
        self.vertex(0, a);
        self.vertex(1, b);
        self
    }

    pub fn face(mut self, layer: &str, corners: [[f64; 3]; 4]) -> Self {
        self.start("3DFACE", layer);
        self.tag(100, "AcDbFace");
        for (index, corner) in corners.into_iter().enumerate() {
            self.vertex(index as i32, corner);
        }
        self
    }

    /// Vertices are written as a bare X line followed by a code 20 Y.
    pub fn polyline(mut self, layer: &str, vertices: &[[f64; 2]]) -> Self {
        self.start("LWPOLYLINE", layer);
        self.tag(90, vertices.len());
        for v in vertices {
            self.entities.push_str(&format!("{}\n", v[0]));
            self.tag(20, v[1]);
        }
        self
    }

    /// Any other entity, written with one coordinate
    pub fn other(mut self, entity: &str, layer: &str) -> Self {
        self.start(entity, layer);
        self.vertex(0, [0.0, 0.0, 0.0]);
        self
    }

    /// Complete drawing: a header section, the entities, and `EOF`
    pub fn build(&self) -> String {
        format!(
            "  0\nSECTION\n  2\nHEADER\n  9\n$ACADVER\n  1\nAC1015\n  0\nENDSEC\n\
             \x20 0\nSECTION\n  2\nENTITIES\n{}  0\nENDSEC\n  0\nEOF\n",
            self.entities
        )
    }
}

/// Read DXF text with the default configuration
pub fn read(dxf: &str) -> DrawingModel {
    read_with(dxf, DxfReaderConfiguration::default())
}

pub fn read_with(dxf: &str, config: DxfReaderConfiguration) -> DrawingModel {
    DxfReader::from_reader(Cursor::new(dxf.as_bytes().to_vec()))
        .with_configuration(config)
        .read()
        .expect("read DXF")
}

/// Convert DXF text to LIRA text
pub fn convert(dxf: &str) -> String {
    let mut output = Vec::new();
    dxf2lira::convert(Cursor::new(dxf.as_bytes()), &mut output, DxfReaderConfiguration::default())
        .expect("convert");
    String::from_utf8(output).expect("UTF-8 output")
}

/// Body of LIRA section `number`, without the section opener
pub fn section(lira: &str, number: u32) -> String {
    let opener = if number == 1 {
        "(1/\n".to_string()
    } else {
        format!(")({}/\n", number)
    };
    let start = lira.find(&opener).expect("section present") + opener.len();
    let end = lira[start..].find("\n)(").map_or(lira.len(), |i| start + i);
    lira[start..end].to_string()
}

/// Non-empty lines of a section
pub fn records(lira: &str, number: u32) -> Vec<String> {
    section(lira, number)
        .lines()
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}
