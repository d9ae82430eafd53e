use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::geometry::PatternPoint;
use crate::math::intersect_2d::lerp;

slotmap::new_key_type! {
    /// Unique identifier for a dart within its piece.
    pub struct DartId;
}

/// Side toward which the dart intake is pressed after stitching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoldDirection {
    #[default]
    Left,
    Right,
}

impl fmt::Display for FoldDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Right => "right",
        })
    }
}

impl FromStr for FoldDirection {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(ParseError::UnknownFoldDirection(other.to_owned())),
        }
    }
}

/// Construction style of the dart legs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DartKind {
    #[default]
    Straight,
    Curved,
    French,
}

impl fmt::Display for DartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Straight => "straight",
            Self::Curved => "curved",
            Self::French => "french",
        })
    }
}

impl FromStr for DartKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "straight" => Ok(Self::Straight),
            "curved" => Ok(Self::Curved),
            "french" => Ok(Self::French),
            other => Err(ParseError::UnknownDartKind(other.to_owned())),
        }
    }
}

/// Caller-supplied dart geometry, stored verbatim once attached to a piece.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DartSpec {
    /// Point where both legs converge; becomes a single point after folding.
    pub apex: PatternPoint,
    pub left_leg: PatternPoint,
    pub right_leg: PatternPoint,
    pub width: f64,
    pub length: f64,
    pub fold_direction: FoldDirection,
    #[serde(rename = "type")]
    pub kind: DartKind,
}

impl DartSpec {
    /// Builds a spec whose width is the leg-to-leg distance and whose length
    /// runs from the apex to the midpoint between the legs.
    #[must_use]
    pub fn from_legs(
        apex: PatternPoint,
        left_leg: PatternPoint,
        right_leg: PatternPoint,
        fold_direction: FoldDirection,
        kind: DartKind,
    ) -> Self {
        let left = left_leg.position();
        let right = right_leg.position();
        let mid = lerp(&left, &right, 0.5);
        Self {
            apex,
            left_leg,
            right_leg,
            width: (right - left).norm(),
            length: (apex.position() - mid).norm(),
            fold_direction,
            kind,
        }
    }

    /// Whether `width >= 0` and `length > 0`.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.width >= 0.0 && self.length > 0.0
    }
}

/// A dart attached to a pattern piece.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dart {
    pub id: DartId,
    #[serde(flatten)]
    pub spec: DartSpec,
}

impl std::ops::Deref for Dart {
    type Target = DartSpec;

    fn deref(&self) -> &DartSpec {
        &self.spec
    }
}
