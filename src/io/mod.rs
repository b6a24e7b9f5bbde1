//! Reading DXF drawings and writing LIRA documents

pub mod dxf;
pub mod json;
pub mod lira;

pub use dxf::{DxfReader, DxfReaderConfiguration};
pub use lira::LiraWriter;
