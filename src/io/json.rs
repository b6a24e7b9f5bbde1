//! JSON dump of a drawing model, for inspecting what the reader produced

use crate::document::DrawingModel;
use crate::error::Result;
use crate::tables::Layer;
use crate::types::Point;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Suffix of the dump written next to the LIRA file
pub const JSON_SUFFIX: &str = "_result.json";

#[derive(Serialize)]
struct ModelDump<'a> {
    layers: &'a [Layer],
    points: Vec<&'a Point>,
}

/// Write `model` as pretty-printed JSON
pub fn write_json<W: Write>(model: &DrawingModel, writer: W) -> Result<()> {
    let dump = ModelDump {
        layers: model.layers(),
        points: model.points().collect(),
    };
    serde_json::to_writer_pretty(writer, &dump)?;
    Ok(())
}

/// Write `model` as JSON to `path`
pub fn write_json_file<P: AsRef<Path>>(model: &DrawingModel, path: P) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_json(model, &mut writer)?;
    writer.flush()?;
    Ok(())
}
