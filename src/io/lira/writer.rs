//! LIRA text writer
//!
//! The document is a fixed sequence of numbered sections. Every record ends
//! with `/` and a newline.
//!
//! | section | content                                    |
//! |---------|--------------------------------------------|
//! | 1       | elements: bars (`5`), plates (`42`, `44`)  |
//! | 3       | stiffness of bar and plate layers          |
//! | 4       | node coordinates                           |
//! | 5       | constrained degrees of freedom per node    |
//! | 6, 7, 8 | fixed load case boilerplate                |

use super::format_real;
use crate::document::DrawingModel;
use crate::error::Result;
use crate::tables::{Layer, LayerAttributes};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Document preamble followed by the opening of section 1
pub const HEADER: &str = "(0/1;csv2lira/2;5/39; 1:'dead load';)(1/\n\n";

/// Sections 6 to 8, written after the last data section
pub const TRAILER: &str = "\n\n\n)(6/1 16 3 1 1/)\n(7/1 0.0 0.0 0.0 0.0 /)\n(8/0 0 0 0 0 0 0/)\n";

/// Elastic modulus written into every stiffness record
pub const ELASTIC_MODULUS: &str = "3.06E6";

/// Poisson ratio of plate stiffness records
pub const POISSON_RATIO: &str = "0.2";

/// Element type of a bar
const BAR: u32 = 5;
/// Element type of a triangular plate
const TRIANGLE_PLATE: u32 = 42;
/// Element type of a quadrilateral plate
const QUAD_PLATE: u32 = 44;

/// Writes a [`DrawingModel`] as a LIRA document
pub struct LiraWriter<W: Write> {
    writer: W,
}

impl<W: Write> LiraWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the whole document
    pub fn write(&mut self, model: &DrawingModel) -> Result<()> {
        self.writer.write_all(HEADER.as_bytes())?;
        self.write_elements(model.layers())?;
        self.write_stiffness(model.layers())?;
        self.write_nodes(model)?;
        self.write_constraints(model.layers())?;
        self.writer.write_all(TRAILER.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    /// Get the inner writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn open_section(&mut self, number: u32) -> Result<()> {
        write!(self.writer, "\n)({}/\n", number)?;
        Ok(())
    }

    /// Section 1
    fn write_elements(&mut self, layers: &[Layer]) -> Result<()> {
        for layer in layers {
            for line in &layer.lines {
                writeln!(self.writer, "{} {} {} {}/", BAR, layer.id, line.a.id, line.b.id)?;
            }

            for face in &layer.faces {
                let element = if face.is_triangle() { TRIANGLE_PLATE } else { QUAD_PLATE };
                write!(self.writer, "{} {}", element, layer.id)?;
                for point in face.points() {
                    write!(self.writer, " {}", point.id)?;
                }
                writeln!(self.writer, "/")?;
            }
        }
        Ok(())
    }

    /// Section 3
    fn write_stiffness(&mut self, layers: &[Layer]) -> Result<()> {
        self.open_section(3)?;
        for layer in layers.iter().filter(|l| !l.owns_points()) {
            match &layer.attributes {
                LayerAttributes::CrossSection { width, height } => writeln!(
                    self.writer,
                    "{} S0 {} {} {}/",
                    layer.id,
                    ELASTIC_MODULUS,
                    format_real(*width),
                    format_real(*height)
                )?,
                LayerAttributes::Thickness(thickness) => writeln!(
                    self.writer,
                    "{} {} {} {}/",
                    layer.id,
                    ELASTIC_MODULUS,
                    POISSON_RATIO,
                    format_real(*thickness)
                )?,
                LayerAttributes::Dofs(_) | LayerAttributes::Empty => {}
            }
        }
        Ok(())
    }

    /// Section 4
    fn write_nodes(&mut self, model: &DrawingModel) -> Result<()> {
        self.open_section(4)?;
        for point in model.points() {
            writeln!(
                self.writer,
                "{} {} {}/",
                format_real(point.x),
                format_real(point.y),
                format_real(point.z)
            )?;
        }
        Ok(())
    }

    /// Section 5
    fn write_constraints(&mut self, layers: &[Layer]) -> Result<()> {
        self.open_section(5)?;
        for layer in layers.iter().filter(|l| l.owns_points()) {
            let codes: Vec<String> = layer
                .attributes
                .dofs()
                .iter()
                .map(|dof| dof.code().to_string())
                .collect();
            let codes = codes.join(" ");

            for point in &layer.points {
                writeln!(self.writer, "{} {}/", point.id, codes)?;
            }
        }
        Ok(())
    }
}

/// Write `model` to a LIRA file at `path`
pub fn write_lira_file<P: AsRef<Path>>(model: &DrawingModel, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    LiraWriter::new(BufWriter::new(file)).write(model)?;
    debug!(path = %path.display(), "LIRA file written");
    Ok(())
}
