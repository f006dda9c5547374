use crate::aspects::{AspectCalculator, NATAL_ASPECTS};
use crate::chart::houses::{whole_sign_cusps, HouseAssigner};
use crate::chart::input::BirthData;
use crate::chart::types::{ChartDiagnostics, HouseCusp, NatalChart, Placement};
use crate::ephemeris::{Body, HouseSystem, PositionProvider, TRACKED_BODIES};
use crate::error::{ChartCalculationError, ProviderError};
use crate::western::ZodiacPosition;
use log::{debug, warn};
use std::collections::BTreeMap;

/// Result of locating one body
#[derive(Debug, Clone, PartialEq)]
pub enum BodyOutcome {
    Computed(Placement),
    Degraded {
        placement: Placement,
        reason: ProviderError,
    },
}

impl BodyOutcome {
    pub fn placement(&self) -> &Placement {
        match self {
            BodyOutcome::Computed(placement) => placement,
            BodyOutcome::Degraded { placement, .. } => placement,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, BodyOutcome::Degraded { .. })
    }
}

/// Houses and angles for a chart, either computed or placeholder
struct HouseLayout {
    cusps: Vec<HouseCusp>,
    ascendant: ZodiacPosition,
    midheaven: ZodiacPosition,
    /// Raw cusp longitudes to assign bodies against; `None` in the fallback
    assign_against: Option<[f64; 12]>,
}

/// Builds natal charts from a position provider
pub struct ChartBuilder<P> {
    provider: P,
    house_system: HouseSystem,
    houses: HouseAssigner,
    aspects: AspectCalculator,
}

impl<P: PositionProvider> ChartBuilder<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            house_system: HouseSystem::Placidus,
            houses: HouseAssigner::new(),
            aspects: AspectCalculator::new(),
        }
    }

    pub fn with_house_system(mut self, system: HouseSystem) -> Self {
        self.house_system = system;
        self
    }

    pub fn house_system(&self) -> HouseSystem {
        self.house_system
    }

    /// Calculate a complete birth chart.
    ///
    /// `birth_date` is `YYYY-MM-DD`, `birth_time` is `HH:MM` (UT). Provider
    /// failures never abort the chart; only malformed input is an error.
    pub fn calculate_birth_chart(
        &self,
        birth_date: &str,
        birth_time: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<NatalChart, ChartCalculationError> {
        let birth = BirthData::parse(birth_date, birth_time, latitude, longitude)?;
        Ok(self.build(&birth))
    }

    /// Build a chart from already validated input
    pub fn build(&self, birth: &BirthData) -> NatalChart {
        let jd = self.provider.julian_day(
            birth.year(),
            birth.month(),
            birth.day(),
            birth.fractional_hour(),
        );
        debug!("Building chart for jd {:.5} at {:?}", jd, birth.location);

        let mut outcomes = self.locate_bodies(jd);
        let layout = self.house_layout(jd, birth);

        if let Some(cusps) = &layout.assign_against {
            for (_, outcome) in outcomes.iter_mut() {
                if let BodyOutcome::Computed(placement) = outcome {
                    placement.house = self.houses.assign(placement.absolute_degree, cusps);
                }
            }
        }

        let longitudes: Vec<(Body, f64)> = outcomes
            .iter()
            .filter(|(_, outcome)| !outcome.is_degraded())
            .map(|(body, outcome)| (*body, outcome.placement().absolute_degree))
            .collect();
        let aspects = self.aspects.detect(&longitudes, &NATAL_ASPECTS);

        let degraded_bodies: Vec<Body> = outcomes
            .iter()
            .filter(|(_, outcome)| outcome.is_degraded())
            .map(|(body, _)| *body)
            .collect();
        debug!(
            "Chart built: {} aspects, {} degraded bodies",
            aspects.len(),
            degraded_bodies.len()
        );

        NatalChart {
            placements: outcomes
                .into_iter()
                .map(|(body, outcome)| (body, *outcome.placement()))
                .collect(),
            ascendant: layout.ascendant,
            midheaven: layout.midheaven,
            houses: layout.cusps,
            aspects,
            diagnostics: ChartDiagnostics {
                degraded_bodies,
                house_fallback: layout.assign_against.is_none(),
            },
        }
    }

    /// Locate every tracked body and derive the South Node
    pub fn locate_bodies(&self, jd: f64) -> BTreeMap<Body, BodyOutcome> {
        let mut outcomes = BTreeMap::new();

        for body in TRACKED_BODIES {
            let outcome = match self.provider.body_position(jd, body) {
                Ok(position) => BodyOutcome::Computed(Placement::from_longitude(
                    position.longitude,
                    position.is_retrograde(),
                )),
                Err(reason) => {
                    warn!("Failed to calculate {}: {}", body, reason);
                    BodyOutcome::Degraded {
                        placement: Placement::degraded(),
                        reason,
                    }
                }
            };
            outcomes.insert(body, outcome);
        }

        // A degraded North Node still yields a South Node so the chart keeps
        // twelve placements; its 0° Libra position is a placeholder and the
        // body is listed in `ChartDiagnostics::degraded_bodies`.
        if let Some(north) = outcomes.get(&Body::NorthNode).cloned() {
            outcomes.insert(Body::SouthNode, south_node(&north));
        }

        outcomes
    }

    fn house_layout(&self, jd: f64, birth: &BirthData) -> HouseLayout {
        match self.provider.houses(jd, birth.location, self.house_system) {
            Ok(frame) => HouseLayout {
                cusps: frame
                    .cusps
                    .iter()
                    .enumerate()
                    .map(|(i, cusp)| HouseCusp::from_longitude((i + 1) as u8, *cusp))
                    .collect(),
                ascendant: ZodiacPosition::from_longitude(frame.ascendant),
                midheaven: ZodiacPosition::from_longitude(frame.midheaven),
                assign_against: Some(frame.cusps),
            },
            Err(e) => {
                warn!("House calculation failed, using whole-sign placeholder: {}", e);
                HouseLayout {
                    cusps: whole_sign_cusps()
                        .iter()
                        .enumerate()
                        .map(|(i, cusp)| HouseCusp::from_longitude((i + 1) as u8, *cusp))
                        .collect(),
                    ascendant: ZodiacPosition::default(),
                    midheaven: ZodiacPosition::default(),
                    assign_against: None,
                }
            }
        }
    }
}

/// The South Node sits opposite the North Node and is never retrograde.
fn south_node(north: &BodyOutcome) -> BodyOutcome {
    let placement = Placement::from_longitude(north.placement().absolute_degree + 180.0, false);
    match north {
        BodyOutcome::Computed(_) => BodyOutcome::Computed(placement),
        BodyOutcome::Degraded { reason, .. } => BodyOutcome::Degraded {
            placement,
            reason: reason.clone(),
        },
    }
}
