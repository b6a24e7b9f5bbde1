//! DXF file reader

mod entity_reader;
mod section_reader;
mod tag_reader;

pub use entity_reader::EntityReader;
pub use section_reader::SectionReader;
pub use tag_reader::TagReader;

use crate::document::{ConversionContext, DrawingModel};
use crate::error::Result;
use crate::io::dxf::DxfCode;
use crate::registry::DEFAULT_PRECISION;
use encoding_rs::Encoding;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Configuration for the DXF reader.
#[derive(Debug, Clone)]
pub struct DxfReaderConfiguration {
    /// When `true`, entities with unparsable numbers are skipped and reported
    /// as notifications instead of aborting the read.
    ///
    /// Default: `true`.
    pub failsafe: bool,

    /// Fractional digits kept when deciding whether two points coincide.
    ///
    /// Default: 3.
    pub precision: u32,

    /// Encoding for lines that are not valid UTF-8; `None` reads them as
    /// Latin-1.
    pub encoding: Option<&'static Encoding>,
}

impl Default for DxfReaderConfiguration {
    fn default() -> Self {
        Self {
            failsafe: true,
            precision: DEFAULT_PRECISION,
            encoding: None,
        }
    }
}

/// DXF file reader
pub struct DxfReader<R: BufRead> {
    tags: TagReader<R>,
    config: DxfReaderConfiguration,
}

impl<R: Read> DxfReader<BufReader<R>> {
    /// Create a new DXF reader from any reader
    pub fn from_reader(reader: R) -> Self {
        Self {
            tags: TagReader::new(BufReader::new(reader)),
            config: DxfReaderConfiguration::default(),
        }
    }
}

impl DxfReader<BufReader<File>> {
    /// Create a new DXF reader from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::from_reader(file))
    }
}

impl<R: BufRead> DxfReader<R> {
    /// Create a new DXF reader from an already buffered reader
    pub fn from_buffered(reader: R) -> Self {
        Self {
            tags: TagReader::new(reader),
            config: DxfReaderConfiguration::default(),
        }
    }

    /// Set the reader configuration.
    pub fn with_configuration(mut self, config: DxfReaderConfiguration) -> Self {
        self.config = config;
        self
    }

    /// Read the drawing.
    ///
    /// Sections are located by their `  2` name line; the first ENTITIES
    /// section is read and the rest of the stream is ignored.
    pub fn read(self) -> Result<DrawingModel> {
        let DxfReader { tags, config } = self;
        let mut tags = tags.with_encoding(config.encoding);
        let mut context = ConversionContext::new(config.precision);

        while let Some(section) = tags.read_value(DxfCode::Name)? {
            if section == "ENTITIES" {
                debug!(line = tags.line_number(), "ENTITIES section found");
                SectionReader::new(&mut tags, &mut context, config.failsafe).read_entities()?;
                break;
            }
        }

        Ok(context.into_model())
    }
}
