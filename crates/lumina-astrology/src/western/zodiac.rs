//! Longitude to zodiac sign conversion.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// Signs in zodiac order, starting at 0° Aries
pub const ZODIAC_SIGNS: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

impl Sign {
    /// Sign at `index` modulo 12
    pub fn from_index(index: usize) -> Self {
        ZODIAC_SIGNS[index % 12]
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn name(&self) -> &'static str {
        match self {
            Sign::Aries => "Aries",
            Sign::Taurus => "Taurus",
            Sign::Gemini => "Gemini",
            Sign::Cancer => "Cancer",
            Sign::Leo => "Leo",
            Sign::Virgo => "Virgo",
            Sign::Libra => "Libra",
            Sign::Scorpio => "Scorpio",
            Sign::Sagittarius => "Sagittarius",
            Sign::Capricorn => "Capricorn",
            Sign::Aquarius => "Aquarius",
            Sign::Pisces => "Pisces",
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sign and degree within it, used for the ascendant and midheaven
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZodiacPosition {
    pub sign: Sign,
    #[serde(rename = "degree")]
    pub degree_in_sign: f64,
}

impl ZodiacPosition {
    pub fn from_longitude(longitude: f64) -> Self {
        let absolute = round_longitude(longitude);
        Self {
            sign: sign_for(absolute),
            degree_in_sign: degree_in_sign(absolute),
        }
    }
}

impl Default for ZodiacPosition {
    fn default() -> Self {
        Self {
            sign: Sign::Aries,
            degree_in_sign: 0.0,
        }
    }
}

/// Normalize any longitude into [0, 360). Non-finite input maps to 0.
pub fn normalize_degrees(longitude: f64) -> f64 {
    if !longitude.is_finite() {
        return 0.0;
    }
    let normalized = longitude.rem_euclid(360.0);
    // rem_euclid can return exactly 360.0 for tiny negative inputs
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Round to 2 decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Normalize then round to 2 decimals, wrapping a rounded 360.00 back to 0.
pub fn round_longitude(longitude: f64) -> f64 {
    let rounded = round2(normalize_degrees(longitude));
    if rounded >= 360.0 {
        0.0
    } else {
        rounded
    }
}

/// Zodiac sign containing `longitude`
pub fn sign_for(longitude: f64) -> Sign {
    let normalized = normalize_degrees(longitude);
    Sign::from_index((normalized / 30.0).floor() as usize)
}

/// Degree within the sign of the rounded longitude, always below 30
pub fn degree_in_sign(longitude: f64) -> f64 {
    round2(round_longitude(longitude) % 30.0)
}
