use crate::ephemeris::Body;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Aspect type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectKind {
    Conjunction,
    Opposition,
    Trine,
    Square,
    Sextile,
}

impl AspectKind {
    pub fn name(&self) -> &'static str {
        match self {
            AspectKind::Conjunction => "conjunction",
            AspectKind::Opposition => "opposition",
            AspectKind::Trine => "trine",
            AspectKind::Square => "square",
            AspectKind::Sextile => "sextile",
        }
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An aspect type with its exact angle and allowed orb
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectDefinition {
    pub kind: AspectKind,
    /// Exact angle for this aspect (0, 60, 90, 120, 180)
    pub angle: f64,
    /// Maximum deviation from `angle`, inclusive
    pub orb: f64,
}

/// An aspect found between two bodies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    #[serde(rename = "planet1")]
    pub body1: Body,
    #[serde(rename = "planet2")]
    pub body2: Body,
    #[serde(rename = "type")]
    pub kind: AspectKind,
    /// Measured circular separation, rounded to 2 decimals
    pub angle: f64,
    /// Deviation from the exact angle, rounded to 2 decimals
    pub orb: f64,
}
