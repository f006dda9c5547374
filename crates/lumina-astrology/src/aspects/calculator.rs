use crate::aspects::types::{Aspect, AspectDefinition, AspectKind};
use crate::ephemeris::Body;
use crate::western::round2;

/// Natal aspect catalog, in evaluation order
pub const NATAL_ASPECTS: [AspectDefinition; 5] = [
    AspectDefinition { kind: AspectKind::Conjunction, angle: 0.0, orb: 8.0 },
    AspectDefinition { kind: AspectKind::Opposition, angle: 180.0, orb: 8.0 },
    AspectDefinition { kind: AspectKind::Trine, angle: 120.0, orb: 8.0 },
    AspectDefinition { kind: AspectKind::Square, angle: 90.0, orb: 7.0 },
    AspectDefinition { kind: AspectKind::Sextile, angle: 60.0, orb: 6.0 },
];

/// Orb applied to every aspect type when matching transits
pub const TRANSIT_ORB: f64 = 3.0;

/// Transit catalog: natal angles, universal 3° orb
pub const TRANSIT_ASPECTS: [AspectDefinition; 5] = [
    AspectDefinition { kind: AspectKind::Conjunction, angle: 0.0, orb: TRANSIT_ORB },
    AspectDefinition { kind: AspectKind::Opposition, angle: 180.0, orb: TRANSIT_ORB },
    AspectDefinition { kind: AspectKind::Trine, angle: 120.0, orb: TRANSIT_ORB },
    AspectDefinition { kind: AspectKind::Square, angle: 90.0, orb: TRANSIT_ORB },
    AspectDefinition { kind: AspectKind::Sextile, angle: 60.0, orb: TRANSIT_ORB },
];

/// Circular separation between two longitudes, in [0, 180]
pub fn separation(lon1: f64, lon2: f64) -> f64 {
    let raw_diff = (lon1 - lon2).abs() % 360.0;
    if raw_diff > 180.0 {
        360.0 - raw_diff
    } else {
        raw_diff
    }
}

/// Aspect calculator
#[derive(Debug, Clone, Copy, Default)]
pub struct AspectCalculator;

impl AspectCalculator {
    /// Create a new aspect calculator
    pub fn new() -> Self {
        Self
    }

    /// Every definition whose orb contains `angle_diff`, paired with the
    /// unrounded deviation. Definitions are checked in catalog order and
    /// overlapping matches are all kept.
    pub fn matching<'a>(
        &self,
        angle_diff: f64,
        definitions: &'a [AspectDefinition],
    ) -> impl Iterator<Item = (&'a AspectDefinition, f64)> + 'a {
        definitions.iter().filter_map(move |definition| {
            let deviation = (angle_diff - definition.angle).abs();
            (deviation <= definition.orb).then_some((definition, deviation))
        })
    }

    /// Aspects between every unordered pair of `longitudes`, taken in slice order
    pub fn detect(
        &self,
        longitudes: &[(Body, f64)],
        definitions: &[AspectDefinition],
    ) -> Vec<Aspect> {
        let mut aspects = Vec::new();
        if longitudes.len() < 2 {
            return aspects;
        }

        for i in 0..longitudes.len() {
            for j in (i + 1)..longitudes.len() {
                let (body1, lon1) = longitudes[i];
                let (body2, lon2) = longitudes[j];
                let angle_diff = separation(lon1, lon2);

                for (definition, deviation) in self.matching(angle_diff, definitions) {
                    aspects.push(Aspect {
                        body1,
                        body2,
                        kind: definition.kind,
                        angle: round2(angle_diff),
                        orb: round2(deviation),
                    });
                }
            }
        }

        aspects
    }
}
