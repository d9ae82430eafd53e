use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::PieceId;
use crate::error::ParseError;

slotmap::new_key_type! {
    /// Unique identifier for a notch within its piece.
    pub struct NotchId;
}

/// Shape of the alignment mark cut into the seam edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotchKind {
    #[default]
    #[serde(rename = "single")]
    Single,
    #[serde(rename = "double")]
    Double,
    #[serde(rename = "T")]
    T,
}

impl NotchKind {
    /// Returns the tag string used in the data model.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Double => "double",
            Self::T => "T",
        }
    }
}

impl fmt::Display for NotchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotchKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(Self::Single),
            "double" => Ok(Self::Double),
            "T" | "t" => Ok(Self::T),
            other => Err(ParseError::UnknownNotchKind(other.to_owned())),
        }
    }
}

/// An alignment mark placed on a piece's closed perimeter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notch {
    pub id: NotchId,
    pub piece_id: PieceId,
    /// Arc-length fraction along the closed outline, in `[0, 1]`.
    pub position: f64,
    #[serde(rename = "type")]
    pub kind: NotchKind,
}

/// Clamps a perimeter fraction into `[0, 1]`. `NaN` maps to `0`.
#[must_use]
pub fn clamp_position(position: f64) -> f64 {
    if position.is_nan() {
        0.0
    } else {
        position.clamp(0.0, 1.0)
    }
}
