use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Geographic location coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
}

/// Raw provider output for one body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    /// Ecliptic longitude in degrees
    pub longitude: f64,
    /// Speed in longitude (degrees per day)
    pub speed: f64,
}

impl BodyPosition {
    pub fn is_retrograde(&self) -> bool {
        self.speed < 0.0
    }
}

/// House cusps and angles returned by a provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseFrame {
    /// Cusp longitudes for houses 1..12
    pub cusps: [f64; 12],
    pub ascendant: f64,
    pub midheaven: f64,
}

/// House systems understood by the provider contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseSystem {
    #[default]
    Placidus,
    Koch,
    WholeSign,
    Equal,
    Regiomontanus,
    Campanus,
    Alcabitius,
    Morinus,
}

/// House system mapping
const HOUSE_SYSTEMS: &[(&str, HouseSystem, u8)] = &[
    ("placidus", HouseSystem::Placidus, b'P'),
    ("koch", HouseSystem::Koch, b'K'),
    ("whole_sign", HouseSystem::WholeSign, b'W'),
    ("equal", HouseSystem::Equal, b'E'),
    ("regiomontanus", HouseSystem::Regiomontanus, b'R'),
    ("campanus", HouseSystem::Campanus, b'C'),
    ("alcabitius", HouseSystem::Alcabitius, b'A'),
    ("morinus", HouseSystem::Morinus, b'M'),
];

impl HouseSystem {
    pub fn name(&self) -> &'static str {
        HOUSE_SYSTEMS
            .iter()
            .find(|(_, system, _)| system == self)
            .map(|(name, _, _)| *name)
            .unwrap_or("placidus")
    }

    /// Single-letter code used by Swiss Ephemeris
    pub fn swiss_code(&self) -> u8 {
        HOUSE_SYSTEMS
            .iter()
            .find(|(_, system, _)| system == self)
            .map(|(_, _, code)| *code)
            .unwrap_or(b'P')
    }

    /// Placidus and Koch trisect diurnal semi-arcs, which do not exist for
    /// ecliptic points that never rise or set.
    pub fn is_semi_arc(&self) -> bool {
        matches!(self, HouseSystem::Placidus | HouseSystem::Koch)
    }

    /// Whether cusps exist at `latitude` on Julian Day `jd`.
    ///
    /// Semi-arc systems are undefined on or beyond the polar circles.
    pub fn is_defined_at(&self, latitude: f64, jd: f64) -> bool {
        !self.is_semi_arc() || latitude.abs() < 90.0 - mean_obliquity(jd)
    }
}

/// Mean obliquity of the ecliptic in degrees (IAU 1980)
pub fn mean_obliquity(jd: f64) -> f64 {
    let t = (jd - 2_451_545.0) / 36_525.0;
    let seconds = 21.448 - t * (46.8150 + t * (0.00059 - t * 0.001813));
    23.0 + (26.0 + seconds / 60.0) / 60.0
}

impl fmt::Display for HouseSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HouseSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        HOUSE_SYSTEMS
            .iter()
            .find(|(name, _, _)| *name == lower)
            .map(|(_, system, _)| *system)
            .ok_or_else(|| {
                let valid: Vec<&str> = HOUSE_SYSTEMS.iter().map(|(name, _, _)| *name).collect();
                format!("Invalid house system: {}. Valid systems: {:?}", s, valid)
            })
    }
}
