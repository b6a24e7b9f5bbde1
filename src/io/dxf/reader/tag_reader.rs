//! Line-oriented tag reader
//!
//! The reader scans lines, not pairs: a line equal to the requested code
//! line selects the line after it as the value. Everything in between is
//! skipped, so callers only ask for the codes they care about, in the order
//! they appear in the entity.

use crate::error::Result;
use crate::io::dxf::DxfCode;
use encoding_rs::Encoding;
use std::io::BufRead;

/// Reads code/value lines from an ASCII DXF stream
pub struct TagReader<R: BufRead> {
    reader: R,
    line_number: usize,
    pushed_back: Option<String>,
    /// Non-UTF8 fallback encoding. `None` means Latin-1 (byte-to-char).
    encoding: Option<&'static Encoding>,
    buffer: Vec<u8>,
}

impl<R: BufRead> TagReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
            pushed_back: None,
            encoding: None,
            buffer: Vec::new(),
        }
    }

    /// Set the encoding used for lines that are not valid UTF-8
    pub fn with_encoding(mut self, encoding: Option<&'static Encoding>) -> Self {
        self.encoding = encoding;
        self
    }

    /// Number of the last line handed out
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Read the next raw line without its line terminator.
    ///
    /// Returns `None` at end of stream.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        if let Some(line) = self.pushed_back.take() {
            self.line_number += 1;
            return Ok(Some(line));
        }

        self.buffer.clear();
        if self.reader.read_until(b'\n', &mut self.buffer)? == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        while matches!(self.buffer.last(), Some(b'\n' | b'\r')) {
            self.buffer.pop();
        }

        let line = match std::str::from_utf8(&self.buffer) {
            Ok(s) => s.to_string(),
            Err(_) => match self.encoding {
                Some(enc) => enc.decode(&self.buffer).0.into_owned(),
                // Latin-1 is a 1:1 mapping of bytes 0-255 to Unicode code points
                None => self.buffer.iter().map(|&b| b as char).collect(),
            },
        };

        Ok(Some(line))
    }

    /// Return a line to the stream; the next [`read_line`](Self::read_line)
    /// yields it again.
    pub fn push_back(&mut self, line: String) {
        self.line_number = self.line_number.saturating_sub(1);
        self.pushed_back = Some(line);
    }

    /// Scan forward to the next `code` line and return the trimmed value
    /// line after it.
    ///
    /// `None` means the stream ended first; callers stop whatever loop they
    /// are in.
    pub fn read_value(&mut self, code: DxfCode) -> Result<Option<String>> {
        let code_line = code.line();

        while let Some(line) = self.read_line()? {
            if line == code_line {
                return Ok(self.read_line()?.map(|value| value.trim().to_string()));
            }
        }

        Ok(None)
    }

    /// Read one value per code, in the given order.
    ///
    /// `None` if the stream ended before every code was found.
    pub fn read_values(&mut self, codes: &[DxfCode]) -> Result<Option<Vec<String>>> {
        let mut values = Vec::with_capacity(codes.len());
        for &code in codes {
            match self.read_value(code)? {
                Some(value) => values.push(value),
                None => return Ok(None),
            }
        }
        Ok(Some(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader(data: &str) -> TagReader<Cursor<Vec<u8>>> {
        TagReader::new(Cursor::new(data.as_bytes().to_vec()))
    }

    #[test]
    fn test_read_value_skips_other_codes() {
        let mut tags = reader("  5\n1F\n  8\n  Beam B30 H50  \n 10\n1.5\n");
        assert_eq!(tags.read_value(DxfCode::LayerName).unwrap().as_deref(), Some("Beam B30 H50"));
        assert_eq!(tags.read_value(DxfCode::XCoordinate).unwrap().as_deref(), Some("1.5"));
        assert_eq!(tags.line_number(), 6);
    }

    #[test]
    fn test_end_of_stream() {
        let mut tags = reader("  0\nLINE\n");
        assert_eq!(tags.read_value(DxfCode::LayerName).unwrap(), None);
        assert_eq!(tags.read_value(DxfCode::Start).unwrap(), None);
    }

    #[test]
    fn test_code_without_value_line() {
        let mut tags = reader("  0\nLINE\n  8");
        assert_eq!(tags.read_value(DxfCode::LayerName).unwrap(), None);
    }

    #[test]
    fn test_code_lines_must_match_exactly() {
        let mut tags = reader("10\n3.0\n 10\n4.0\n");
        assert_eq!(tags.read_value(DxfCode::XCoordinate).unwrap().as_deref(), Some("4.0"));
    }

    #[test]
    fn test_crlf_line_endings() {
        let mut tags = reader("  0\r\nPOINT\r\n  8\r\nDOF x\r\n");
        assert_eq!(tags.read_value(DxfCode::Start).unwrap().as_deref(), Some("POINT"));
        assert_eq!(tags.read_value(DxfCode::LayerName).unwrap().as_deref(), Some("DOF x"));
    }

    #[test]
    fn test_read_values_in_order() {
        let mut tags = reader(" 10\n1\n 20\n2\n 30\n3\n");
        let values = tags
            .read_values(&[DxfCode::XCoordinate, DxfCode::YCoordinate, DxfCode::ZCoordinate])
            .unwrap();
        assert_eq!(values, Some(vec!["1".to_string(), "2".to_string(), "3".to_string()]));
    }

    #[test]
    fn test_read_values_stops_at_end() {
        let mut tags = reader(" 10\n1\n 20\n2\n");
        let values = tags
            .read_values(&[DxfCode::XCoordinate, DxfCode::YCoordinate, DxfCode::ZCoordinate])
            .unwrap();
        assert_eq!(values, None);
    }

    #[test]
    fn test_push_back() {
        let mut tags = reader("  0\nLINE\n");
        let line = tags.read_line().unwrap().unwrap();
        assert_eq!(line, "  0");
        tags.push_back(line);
        assert_eq!(tags.line_number(), 0);
        assert_eq!(tags.read_value(DxfCode::Start).unwrap().as_deref(), Some("LINE"));
    }

    #[test]
    fn test_latin1_fallback() {
        let mut tags = TagReader::new(Cursor::new(b"  8\nCaf\xe9\n".to_vec()));
        assert_eq!(tags.read_value(DxfCode::LayerName).unwrap().as_deref(), Some("Café"));
    }

    #[test]
    fn test_configured_encoding() {
        // "Балка" in windows-1251
        let data = b"  8\n\xc1\xe0\xeb\xea\xe0 B20 H40\n".to_vec();
        let mut tags = TagReader::new(Cursor::new(data)).with_encoding(Some(encoding_rs::WINDOWS_1251));
        assert_eq!(
            tags.read_value(DxfCode::LayerName).unwrap().as_deref(),
            Some("Балка B20 H40")
        );
    }
}
