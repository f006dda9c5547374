//! Natal chart and transit calculations.
//!
//! Raw positions come from a [`PositionProvider`]; this crate turns them into
//! signs, houses, aspects and transit snapshots.

pub mod aspects;
pub mod chart;
pub mod ephemeris;
pub mod error;
pub mod western;

pub use aspects::{Aspect, AspectCalculator, AspectDefinition, AspectKind};
pub use chart::{
    BirthData, BodyOutcome, ChartBuilder, ChartDiagnostics, HouseAssigner, HouseCusp, NatalChart,
    Placement, TransitCorrelator, TransitEntry, TransitSnapshot,
};
#[cfg(feature = "swiss-ephemeris")]
pub use ephemeris::SwissEphemerisAdapter;
pub use ephemeris::{Body, BodyPosition, GeoLocation, HouseFrame, HouseSystem, PositionProvider};
pub use error::{ChartCalculationError, ProviderError};
pub use western::{MoonPhase, Sign, ZodiacPosition};

use chrono::{DateTime, Utc};

/// Calculate a birth chart with Placidus houses
pub fn calculate_birth_chart<P: PositionProvider + ?Sized>(
    provider: &P,
    birth_date: &str,
    birth_time: &str,
    latitude: f64,
    longitude: f64,
) -> Result<NatalChart, ChartCalculationError> {
    ChartBuilder::new(provider).calculate_birth_chart(birth_date, birth_time, latitude, longitude)
}

/// Calculate transits to `natal_chart` at `reference_time` (now when `None`)
pub fn calculate_current_transits<P: PositionProvider + ?Sized>(
    provider: &P,
    natal_chart: &NatalChart,
    reference_time: Option<DateTime<Utc>>,
) -> Result<TransitSnapshot, ChartCalculationError> {
    TransitCorrelator::new(provider).calculate_current_transits(natal_chart, reference_time)
}
