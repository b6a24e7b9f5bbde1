//! Structural attributes encoded in layer names
//!
//! Layer names carry a small grammar on top of free text:
//!
//! - bar layers (LINE): `B<width>` and `H<height>` anywhere in the name,
//!   e.g. `Beam B30 H50`
//! - plate layers (3DFACE): `H<thickness in cm>`, e.g. `Slab H20`
//! - support layers (POINT): `DOF ` followed by the constrained degrees of
//!   freedom in code order, e.g. `Support DOF x y z`
//!
//! Light-weight polyline layers carry no attributes.

use super::dof::Dof;
use crate::entities::EntityKind;
use nom::{
    bytes::complete::take_till1,
    character::complete::{char, digit1, multispace0, multispace1},
    multi::separated_list0,
    sequence::preceded,
    IResult,
};
use serde::Serialize;
use thiserror::Error;

/// Marker that introduces the DOF list of a support layer
pub const DOF_MARKER: &str = "DOF ";

/// Attributes derived from a layer name
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerAttributes {
    /// Rectangular bar section, `B` and `H` as written
    CrossSection { width: f64, height: f64 },
    /// Plate thickness in metres (`H` divided by 100)
    Thickness(f64),
    /// Constrained degrees of freedom, non-decreasing by code
    Dofs(Vec<Dof>),
    Empty,
}

impl LayerAttributes {
    /// Number of attribute values
    pub fn len(&self) -> usize {
        match self {
            LayerAttributes::CrossSection { .. } => 2,
            LayerAttributes::Thickness(_) => 1,
            LayerAttributes::Dofs(dofs) => dofs.len(),
            LayerAttributes::Empty => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The constrained degrees of freedom, empty for other attributes
    pub fn dofs(&self) -> &[Dof] {
        match self {
            LayerAttributes::Dofs(dofs) => dofs,
            _ => &[],
        }
    }
}

/// Reason a layer name was rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayerNameError {
    #[error("no B<width> token")]
    MissingWidth,

    #[error("no H<height> token")]
    MissingHeight,

    #[error("no H<thickness> token")]
    MissingThickness,

    #[error("no '{}' marker", DOF_MARKER.trim_end())]
    MissingDofMarker,

    #[error("no degrees of freedom listed")]
    EmptyDofList,

    #[error("unknown degree of freedom '{0}'")]
    UnknownDof(String),

    #[error("degree of freedom '{next}' listed after '{previous}'")]
    DofOutOfOrder { previous: Dof, next: Dof },
}

/// Derive the attributes of a layer holding entities of `kind`
pub fn classify(kind: EntityKind, name: &str) -> Result<LayerAttributes, LayerNameError> {
    match kind {
        EntityKind::Line => {
            let width = tagged_number(name, 'B').ok_or(LayerNameError::MissingWidth)?;
            let height = tagged_number(name, 'H').ok_or(LayerNameError::MissingHeight)?;
            Ok(LayerAttributes::CrossSection { width, height })
        }
        EntityKind::Face3D => {
            let height = tagged_number(name, 'H').ok_or(LayerNameError::MissingThickness)?;
            Ok(LayerAttributes::Thickness(height / 100.0))
        }
        EntityKind::Point => parse_dofs(name).map(LayerAttributes::Dofs),
        EntityKind::LwPolyline => Ok(LayerAttributes::Empty),
    }
}

/// `<tag><digits>`
fn tagged_digits(tag: char) -> impl FnMut(&str) -> IResult<&str, &str> {
    move |input| preceded(char(tag), digit1)(input)
}

/// First `<tag><digits>` occurrence anywhere in `name`
fn tagged_number(name: &str, tag: char) -> Option<f64> {
    name.char_indices()
        .filter(|&(_, c)| c == tag)
        .find_map(|(i, _)| tagged_digits(tag)(&name[i..]).ok())
        .and_then(|(_, digits)| digits.parse().ok())
}

/// Whitespace separated words
fn words(input: &str) -> IResult<&str, Vec<&str>> {
    preceded(
        multispace0,
        separated_list0(multispace1, take_till1(char::is_whitespace)),
    )(input)
}

fn parse_dofs(name: &str) -> Result<Vec<Dof>, LayerNameError> {
    let start = name.find(DOF_MARKER).ok_or(LayerNameError::MissingDofMarker)?;
    let list = &name[start + DOF_MARKER.len()..];

    // `words` cannot fail: an empty list is a valid parse
    let tokens = words(list).map(|(_, tokens)| tokens).unwrap_or_default();
    if tokens.is_empty() {
        return Err(LayerNameError::EmptyDofList);
    }

    let dofs = tokens
        .iter()
        .map(|token| token.parse::<Dof>().map_err(LayerNameError::UnknownDof))
        .collect::<Result<Vec<_>, _>>()?;

    if let Some(pair) = dofs.windows(2).find(|pair| pair[0] > pair[1]) {
        return Err(LayerNameError::DofOutOfOrder {
            previous: pair[0],
            next: pair[1],
        });
    }

    Ok(dofs)
}
