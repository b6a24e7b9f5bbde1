//! # dxf2lira
//!
//! Converts ASCII DXF drawings into LIRA structural-analysis input files.
//!
//! Drawing layers become structural groups. The layer name carries the
//! structural data:
//!
//! - `LINE` layers are bars; the name holds the section as `B<width>` and
//!   `H<height>` (`Beam B30 H50`)
//! - `3DFACE` layers are plates; the name holds the thickness in centimetres
//!   as `H<thickness>` (`Slab H20`)
//! - `POINT` layers are supports; the name lists the constrained degrees of
//!   freedom after `DOF ` (`Support DOF x y z`)
//! - `LWPOLYLINE` layers are read but carry no structural data
//!
//! Points closer than the registry precision (three decimals by default)
//! share one node.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dxf2lira::{DxfReader, LiraWriter};
//!
//! let model = DxfReader::from_file("frame.dxf")?.read()?;
//! for layer in model.layers() {
//!     println!("{} ({}): {} entities", layer.name, layer.kind, layer.entity_count());
//! }
//!
//! dxf2lira::io::lira::write_lira_file(&model, "frame__lira.txt")?;
//! # Ok::<(), dxf2lira::ConvertError>(())
//! ```

#![warn(rustdoc::missing_crate_level_docs)]

pub mod document;
pub mod entities;
pub mod error;
pub mod io;
pub mod notification;
pub mod registry;
pub mod tables;
pub mod types;

pub use document::{ConversionContext, DrawingModel};
pub use entities::{EntityKind, EntityType, Face3D, Line, LwPolyline};
pub use error::{ConvertError, Result};
pub use io::{DxfReader, DxfReaderConfiguration, LiraWriter};
pub use registry::PointRegistry;
pub use tables::{Dof, Layer, LayerAttributes, LayerNameError};
pub use types::{LayerId, Point, PointId};

use std::io::{BufRead, Write};
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Read a DXF stream and write the LIRA document for it.
///
/// Returns the model so callers can inspect notifications.
pub fn convert<R: BufRead, W: Write>(
    reader: R,
    writer: W,
    config: DxfReaderConfiguration,
) -> Result<DrawingModel> {
    let model = DxfReader::from_buffered(reader).with_configuration(config).read()?;
    LiraWriter::new(writer).write(&model)?;
    Ok(model)
}

/// Convert the DXF file at `input` into a LIRA file at `output`.
pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    config: DxfReaderConfiguration,
) -> Result<DrawingModel> {
    let start = Instant::now();
    let model = DxfReader::from_file(input.as_ref())?.with_configuration(config).read()?;
    let read = start.elapsed();

    io::lira::write_lira_file(&model, output.as_ref())?;
    info!(
        input = %input.as_ref().display(),
        ?read,
        total = ?start.elapsed(),
        "conversion finished"
    );
    Ok(model)
}
