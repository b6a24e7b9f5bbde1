//! DXF group codes used by the converter
//!
//! ASCII DXF writes every group code on its own line, right-aligned in a
//! three character field (`"  0"`, `" 10"`), followed by the value line.

/// Group codes the reader looks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum DxfCode {
    /// Entity type, `SECTION`, `ENDSEC`, `EOF`
    Start = 0,

    /// Section name, table name
    Name = 2,

    /// Layer name of an entity
    LayerName = 8,

    /// First point X
    XCoordinate = 10,
    /// Second point X
    XCoordinate1 = 11,
    /// Third point X
    XCoordinate2 = 12,
    /// Fourth point X
    XCoordinate3 = 13,

    YCoordinate = 20,
    YCoordinate1 = 21,
    YCoordinate2 = 22,
    YCoordinate3 = 23,

    ZCoordinate = 30,
    ZCoordinate1 = 31,
    ZCoordinate2 = 32,
    ZCoordinate3 = 33,

    /// 32-bit integer; the vertex count of an LWPOLYLINE
    Int32 = 90,
}

impl DxfCode {
    /// Numeric group code
    pub fn to_i32(self) -> i32 {
        self as i32
    }

    /// The code as it appears on a code line
    pub fn line(self) -> String {
        format!("{:>3}", self.to_i32())
    }

    /// X/Y/Z codes of the `index`-th point of an entity (0..=3)
    pub fn point(index: usize) -> Option<[DxfCode; 3]> {
        use DxfCode::*;
        match index {
            0 => Some([XCoordinate, YCoordinate, ZCoordinate]),
            1 => Some([XCoordinate1, YCoordinate1, ZCoordinate1]),
            2 => Some([XCoordinate2, YCoordinate2, ZCoordinate2]),
            3 => Some([XCoordinate3, YCoordinate3, ZCoordinate3]),
            _ => None,
        }
    }
}
