use crate::aspects::{separation, AspectCalculator, AspectKind, TRANSIT_ASPECTS};
use crate::chart::input::fractional_hour;
use crate::chart::types::NatalChart;
use crate::ephemeris::{Body, PositionProvider, TRANSIT_BODIES};
use crate::error::ChartCalculationError;
use crate::western::{moon_phase, round2, sign_for, MoonPhase, Sign};
use chrono::{DateTime, Datelike, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Upper bound on reported transits
pub const MAX_ACTIVE_TRANSITS: usize = 10;

/// A transiting body in aspect to a natal placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitEntry {
    #[serde(rename = "planet")]
    pub transit_body: Body,
    #[serde(rename = "type")]
    pub kind: AspectKind,
    #[serde(rename = "natal_planet")]
    pub natal_body: Body,
    pub orb: f64,
}

/// Sky conditions at a reference time relative to a natal chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitSnapshot {
    #[serde(rename = "date")]
    pub timestamp: DateTime<Utc>,
    pub moon_sign: Sign,
    pub moon_phase: MoonPhase,
    pub active_transits: Vec<TransitEntry>,
}

/// Correlates the current sky with a stored natal chart
pub struct TransitCorrelator<P> {
    provider: P,
    aspects: AspectCalculator,
}

impl<P: PositionProvider> TransitCorrelator<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            aspects: AspectCalculator::new(),
        }
    }

    /// Snapshot of transits at `reference_time`, or now when `None`.
    ///
    /// Fails only if the Sun or Moon cannot be located; a transit body the
    /// provider cannot place is skipped.
    pub fn calculate_current_transits(
        &self,
        natal_chart: &NatalChart,
        reference_time: Option<DateTime<Utc>>,
    ) -> Result<TransitSnapshot, ChartCalculationError> {
        let now = reference_time.unwrap_or_else(Utc::now);
        let jd = self.provider.julian_day(
            now.year(),
            now.month(),
            now.day(),
            fractional_hour(&now),
        );
        debug!("Calculating transits for jd {:.5}", jd);

        let moon = self.provider.body_position(jd, Body::Moon)?;
        let sun = self.provider.body_position(jd, Body::Sun)?;

        let mut current = Vec::with_capacity(TRANSIT_BODIES.len());
        for body in TRANSIT_BODIES {
            match self.provider.body_position(jd, body) {
                Ok(position) => current.push((body, position.longitude)),
                Err(e) => warn!("Skipping transit body {}: {}", body, e),
            }
        }

        Ok(TransitSnapshot {
            timestamp: now,
            moon_sign: sign_for(moon.longitude),
            moon_phase: moon_phase(sun.longitude, moon.longitude),
            active_transits: self.correlate(&current, natal_chart),
        })
    }

    /// Transit entries in generation order, truncated to `MAX_ACTIVE_TRANSITS`
    pub fn correlate(&self, current: &[(Body, f64)], natal_chart: &NatalChart) -> Vec<TransitEntry> {
        let mut active = Vec::new();

        for &(transit_body, transit_lon) in current {
            for (natal_body, placement) in &natal_chart.placements {
                if *natal_body == Body::SouthNode {
                    continue;
                }
                let angle_diff = separation(transit_lon, placement.absolute_degree);
                for (definition, deviation) in self.aspects.matching(angle_diff, &TRANSIT_ASPECTS) {
                    active.push(TransitEntry {
                        transit_body,
                        kind: definition.kind,
                        natal_body: *natal_body,
                        orb: round2(deviation),
                    });
                }
            }
        }

        active.truncate(MAX_ACTIVE_TRANSITS);
        active
    }
}
