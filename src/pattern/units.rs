use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Unit system of every coordinate and measurement in a pattern.
///
/// The engine never converts between systems; mixing them on one pattern is
/// not detected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Units {
    #[default]
    #[serde(rename = "cm")]
    Centimeters,
    #[serde(rename = "inches")]
    Inches,
}

impl Units {
    /// Returns the tag string used in pattern metadata.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Centimeters => "cm",
            Self::Inches => "inches",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Units {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cm" => Ok(Self::Centimeters),
            "inches" | "in" => Ok(Self::Inches),
            other => Err(ParseError::UnknownUnits(other.to_owned())),
        }
    }
}
