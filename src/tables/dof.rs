//! Degrees of freedom constrained at a support point

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// One constrained degree of freedom
///
/// `x`, `y`, `z` are translations, `fx`, `fy`, `fz` rotations about the
/// corresponding axes. The discriminant is the LIRA code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dof {
    X = 1,
    Y = 2,
    Z = 3,
    Fx = 4,
    Fy = 5,
    Fz = 6,
}

impl Dof {
    /// LIRA numeric code
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Lowercase label as written in layer names
    pub fn label(&self) -> &'static str {
        match self {
            Dof::X => "x",
            Dof::Y => "y",
            Dof::Z => "z",
            Dof::Fx => "fx",
            Dof::Fy => "fy",
            Dof::Fz => "fz",
        }
    }
}

impl FromStr for Dof {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "x" => Ok(Dof::X),
            "y" => Ok(Dof::Y),
            "z" => Ok(Dof::Z),
            "fx" => Ok(Dof::Fx),
            "fy" => Ok(Dof::Fy),
            "fz" => Ok(Dof::Fz),
            _ => Err(s.to_string()),
        }
    }
}

impl fmt::Display for Dof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
