//! ASCII DXF reading

mod code_page;
mod dxf_code;
mod reader;

pub use code_page::encoding_for_label;
pub use dxf_code::DxfCode;
pub use reader::{DxfReader, DxfReaderConfiguration, EntityReader, SectionReader, TagReader};
