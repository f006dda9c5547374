#![allow(dead_code)]

use lumina_astrology::chart::{NatalChart, Placement};
use lumina_astrology::ephemeris::{
    Body, BodyPosition, GeoLocation, HouseFrame, HouseSystem, PositionProvider,
};
use lumina_astrology::{ProviderError, ZodiacPosition};
use std::collections::{BTreeMap, HashMap, HashSet};

const J2000: f64 = 2451545.0;

/// Mean longitude at J2000 and mean daily motion. Good to a few degrees,
/// which is all the sign-level assertions need.
const MEAN_MOTION: &[(Body, f64, f64)] = &[
    (Body::Sun, 280.460, 0.985_647_4),
    (Body::Moon, 218.316, 13.176_396),
    (Body::Mercury, 252.251, 4.092_334_4),
    (Body::Venus, 181.980, 1.602_130_2),
    (Body::Mars, 355.433, 0.524_020_8),
    (Body::Jupiter, 34.351, 0.083_085_3),
    (Body::Saturn, 50.077, 0.033_444_3),
    (Body::Uranus, 314.055, 0.011_729_4),
    (Body::Neptune, 304.349, 0.005_981_0),
    (Body::Pluto, 238.929, 0.003_972_0),
    (Body::NorthNode, 125.045, -0.052_953_8),
];

enum HouseMode {
    EqualFromSiderealTime,
    Fixed(HouseFrame),
    Failing,
}

/// Deterministic provider for tests, with per-body failure injection.
pub struct FixtureProvider {
    overrides: HashMap<Body, BodyPosition>,
    failing: HashSet<Body>,
    houses: HouseMode,
}

impl FixtureProvider {
    pub fn new() -> Self {
        Self {
            overrides: HashMap::new(),
            failing: HashSet::new(),
            houses: HouseMode::EqualFromSiderealTime,
        }
    }

    pub fn failing(mut self, body: Body) -> Self {
        self.failing.insert(body);
        self
    }

    pub fn with_position(mut self, body: Body, longitude: f64, speed: f64) -> Self {
        self.overrides.insert(body, BodyPosition { longitude, speed });
        self
    }

    pub fn with_houses(mut self, frame: HouseFrame) -> Self {
        self.houses = HouseMode::Fixed(frame);
        self
    }

    pub fn without_houses(mut self) -> Self {
        self.houses = HouseMode::Failing;
        self
    }
}

impl PositionProvider for FixtureProvider {
    fn julian_day(&self, year: i32, month: u32, day: u32, hour: f64) -> f64 {
        let (y, m) = if month <= 2 {
            (year as f64 - 1.0, month as f64 + 12.0)
        } else {
            (year as f64, month as f64)
        };
        let a = (y / 100.0).floor();
        let b = 2.0 - a + (a / 4.0).floor();
        (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day as f64 + b - 1524.5
            + hour / 24.0
    }

    fn body_position(&self, jd: f64, body: Body) -> Result<BodyPosition, ProviderError> {
        if self.failing.contains(&body) {
            return Err(ProviderError::CalculationFailed {
                body,
                message: "injected failure".to_string(),
            });
        }
        if let Some(position) = self.overrides.get(&body) {
            return Ok(*position);
        }
        let (_, l0, rate) = MEAN_MOTION
            .iter()
            .find(|(b, _, _)| *b == body)
            .ok_or(ProviderError::UnsupportedBody(body))?;
        Ok(BodyPosition {
            longitude: (l0 + rate * (jd - J2000)).rem_euclid(360.0),
            speed: *rate,
        })
    }

    fn houses(
        &self,
        jd: f64,
        location: GeoLocation,
        system: HouseSystem,
    ) -> Result<HouseFrame, ProviderError> {
        match &self.houses {
            HouseMode::Fixed(frame) => Ok(frame.clone()),
            HouseMode::Failing => Err(ProviderError::HouseCalculation(format!(
                "injected failure for {}",
                system
            ))),
            HouseMode::EqualFromSiderealTime => {
                let gmst = 280.460_618_37 + 360.985_647_366_29 * (jd - J2000);
                let local = (gmst + location.lon).rem_euclid(360.0);
                let ascendant = (local + 90.0).rem_euclid(360.0);
                Ok(HouseFrame {
                    cusps: std::array::from_fn(|i| (ascendant + 30.0 * i as f64).rem_euclid(360.0)),
                    ascendant,
                    midheaven: local,
                })
            }
        }
    }
}

/// Minimal stored chart holding only the given placements
pub fn chart_with(placements: &[(Body, f64)]) -> NatalChart {
    NatalChart {
        placements: placements
            .iter()
            .map(|(body, lon)| (*body, Placement::from_longitude(*lon, false)))
            .collect::<BTreeMap<_, _>>(),
        ascendant: ZodiacPosition::default(),
        midheaven: ZodiacPosition::default(),
        houses: Vec::new(),
        aspects: Vec::new(),
        diagnostics: Default::default(),
    }
}
