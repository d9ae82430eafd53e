use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::math::{Point2, Vector2};

/// How a vertex sits on the cut line.
///
/// Only downstream rendering and smoothing look at the kind; it never takes
/// part in point identity or in the geometry kernel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointKind {
    #[default]
    Corner,
    Curve,
    Control,
}

impl PointKind {
    /// Returns the tag string used in the data model.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Corner => "corner",
            Self::Curve => "curve",
            Self::Control => "control",
        }
    }
}

impl fmt::Display for PointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PointKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "corner" => Ok(Self::Corner),
            "curve" => Ok(Self::Curve),
            "control" => Ok(Self::Control),
            other => Err(ParseError::UnknownPointKind(other.to_owned())),
        }
    }
}

/// A vertex of a pattern outline, in the pattern's unit system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatternPoint {
    pub x: f64,
    pub y: f64,
    #[serde(rename = "type")]
    pub kind: PointKind,
}

impl PatternPoint {
    /// Creates a point of the given kind.
    #[must_use]
    pub fn new(x: f64, y: f64, kind: PointKind) -> Self {
        Self { x, y, kind }
    }

    /// Creates a corner point.
    #[must_use]
    pub fn corner(x: f64, y: f64) -> Self {
        Self::new(x, y, PointKind::Corner)
    }

    /// Creates a point lying on a curved stretch of the outline.
    #[must_use]
    pub fn curve(x: f64, y: f64) -> Self {
        Self::new(x, y, PointKind::Curve)
    }

    /// Returns the position as a kernel point.
    #[must_use]
    pub fn position(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }

    /// Returns a copy moved to `position`, keeping the kind.
    #[must_use]
    pub fn with_position(self, position: Point2) -> Self {
        Self {
            x: position.x,
            y: position.y,
            kind: self.kind,
        }
    }

    /// Returns a copy displaced by `delta`, keeping the kind.
    #[must_use]
    pub fn translated(self, delta: Vector2) -> Self {
        self.with_position(self.position() + delta)
    }

    /// Geometric equality within `tolerance`, ignoring the kind.
    #[must_use]
    pub fn coincides_with(&self, other: &Self, tolerance: f64) -> bool {
        (self.position() - other.position()).norm() <= tolerance
    }
}
