//! Code page names to `encoding_rs` encodings.
//!
//! Drawings saved before AutoCAD 2007 store text in the ANSI code page named
//! by `$DWGCODEPAGE` (Cyrillic layer names arrive as `ANSI_1251`). The
//! reader decodes lines that are not valid UTF-8 with the encoding picked
//! here.

use encoding_rs::Encoding;

/// Look up an encoding by DXF code page name (`ANSI_1251`, `DOS866`) or by
/// any WHATWG label (`windows-1251`, `koi8-r`), case-insensitively.
pub fn encoding_for_label(label: &str) -> Option<&'static Encoding> {
    let label = label.trim().to_ascii_lowercase();
    let dxf = match label.as_str() {
        "ansi_874" => Some(encoding_rs::WINDOWS_874),
        "ansi_932" => Some(encoding_rs::SHIFT_JIS),
        "ansi_936" | "gb2312" => Some(encoding_rs::GBK),
        "ansi_949" | "korean" | "johab" => Some(encoding_rs::EUC_KR),
        "ansi_950" | "big5" => Some(encoding_rs::BIG5),
        "ansi_1250" | "dos852" => Some(encoding_rs::WINDOWS_1250),
        "ansi_1251" => Some(encoding_rs::WINDOWS_1251),
        "ansi_1252" | "dos850" | "iso8859-1" => Some(encoding_rs::WINDOWS_1252),
        "ansi_1253" | "dos869" => Some(encoding_rs::WINDOWS_1253),
        "ansi_1254" | "dos857" => Some(encoding_rs::WINDOWS_1254),
        "ansi_1255" => Some(encoding_rs::WINDOWS_1255),
        "ansi_1256" => Some(encoding_rs::WINDOWS_1256),
        "ansi_1257" => Some(encoding_rs::WINDOWS_1257),
        "ansi_1258" => Some(encoding_rs::WINDOWS_1258),
        "dos855" | "dos866" => Some(encoding_rs::IBM866),
        _ => None,
    };

    dxf.or_else(|| Encoding::for_label(label.as_bytes()))
}
