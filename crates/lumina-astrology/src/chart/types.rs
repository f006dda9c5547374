use crate::aspects::Aspect;
use crate::ephemeris::Body;
use crate::western::{degree_in_sign, round_longitude, sign_for, Sign, ZodiacPosition};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A body's place on the chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub sign: Sign,
    #[serde(rename = "degree")]
    pub degree_in_sign: f64,
    pub absolute_degree: f64,
    /// House number 1..12
    pub house: u8,
    pub retrograde: bool,
}

impl Placement {
    /// Placement at `longitude` (rounded to 2 decimals), house 1 until assigned
    pub fn from_longitude(longitude: f64, retrograde: bool) -> Self {
        let absolute = round_longitude(longitude);
        Self {
            sign: sign_for(absolute),
            degree_in_sign: degree_in_sign(absolute),
            absolute_degree: absolute,
            house: 1,
            retrograde,
        }
    }

    /// Stand-in used when the provider cannot locate a body
    pub fn degraded() -> Self {
        Self {
            sign: Sign::Aries,
            degree_in_sign: 0.0,
            absolute_degree: 0.0,
            house: 1,
            retrograde: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseCusp {
    pub house: u8,
    pub sign: Sign,
    #[serde(rename = "degree")]
    pub degree_in_sign: f64,
    pub absolute_degree: f64,
}

impl HouseCusp {
    pub fn from_longitude(house: u8, longitude: f64) -> Self {
        let absolute = round_longitude(longitude);
        Self {
            house,
            sign: sign_for(absolute),
            degree_in_sign: degree_in_sign(absolute),
            absolute_degree: absolute,
        }
    }
}

/// How a chart deviates from a full-precision computation.
///
/// Not part of the serialized chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartDiagnostics {
    /// Bodies carrying a default placement instead of a computed one
    pub degraded_bodies: Vec<Body>,
    /// Houses are whole-sign placeholders because the house lookup failed
    pub house_fallback: bool,
}

impl ChartDiagnostics {
    pub fn is_complete(&self) -> bool {
        self.degraded_bodies.is_empty() && !self.house_fallback
    }
}

/// A computed birth chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NatalChart {
    /// Placements keyed by body, iterated in catalog order
    #[serde(rename = "planets")]
    pub placements: BTreeMap<Body, Placement>,
    pub ascendant: ZodiacPosition,
    pub midheaven: ZodiacPosition,
    pub houses: Vec<HouseCusp>,
    pub aspects: Vec<Aspect>,
    #[serde(skip)]
    pub diagnostics: ChartDiagnostics,
}

impl NatalChart {
    pub fn placement(&self, body: Body) -> Option<&Placement> {
        self.placements.get(&body)
    }
}
