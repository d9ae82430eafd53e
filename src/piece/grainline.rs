use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::geometry::PatternPoint;

/// Orientation of the grainline relative to the fabric threads.
///
/// `Bias` means the piece is cut at 45° to the straight grain; the endpoints
/// are stored literally either way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrainKind {
    #[default]
    Straight,
    Bias,
}

impl fmt::Display for GrainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Straight => "straight",
            Self::Bias => "bias",
        })
    }
}

impl FromStr for GrainKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "straight" => Ok(Self::Straight),
            "bias" => Ok(Self::Bias),
            other => Err(ParseError::UnknownGrainKind(other.to_owned())),
        }
    }
}

/// Fabric-grain reference axis drawn on a piece.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Grainline {
    pub start: PatternPoint,
    pub end: PatternPoint,
    #[serde(rename = "type")]
    pub kind: GrainKind,
}

impl Grainline {
    /// Creates a grainline between two points.
    #[must_use]
    pub fn new(start: PatternPoint, end: PatternPoint, kind: GrainKind) -> Self {
        Self { start, end, kind }
    }
}
