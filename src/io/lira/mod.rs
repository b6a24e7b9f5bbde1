//! LIRA structural-analysis input format

mod writer;

pub use writer::{write_lira_file, LiraWriter, ELASTIC_MODULUS, HEADER, POISSON_RATIO, TRAILER};

use std::path::{Path, PathBuf};

/// Suffix appended to the input stem when no output path is given
pub const DEFAULT_SUFFIX: &str = "__lira.txt";

/// Derive the output path: the input without its extension, plus `suffix`
pub fn output_path(input: &Path, suffix: &str) -> PathBuf {
    let mut name = input.with_extension("").into_os_string();
    name.push(suffix);
    PathBuf::from(name)
}

/// Render a real number the way the solver's reference files do:
/// shortest round-trip digits, at least one fractional digit, and a signed
/// two-digit exponent outside `[1e-4, 1e16)`.
pub fn format_real(value: f64) -> String {
    let text = format!("{:?}", value);
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path() {
        assert_eq!(
            output_path(Path::new("drawings/Drawing1.dxf"), DEFAULT_SUFFIX),
            PathBuf::from("drawings/Drawing1__lira.txt")
        );
        assert_eq!(
            output_path(Path::new("plan"), "_result.json"),
            PathBuf::from("plan_result.json")
        );
    }

    #[test]
    fn test_format_real_decimal() {
        assert_eq!(format_real(10.0), "10.0");
        assert_eq!(format_real(0.2), "0.2");
        assert_eq!(format_real(-1.5), "-1.5");
        assert_eq!(format_real(0.0), "0.0");
        assert_eq!(format_real(1234.5678), "1234.5678");
        assert_eq!(format_real(0.0001), "0.0001");
    }

    #[test]
    fn test_format_real_exponent() {
        assert_eq!(format_real(0.00001), "1e-05");
        assert_eq!(format_real(1.5e-7), "1.5e-07");
        assert_eq!(format_real(1e16), "1e+16");
        assert_eq!(format_real(2.5e120), "2.5e+120");
    }
}
