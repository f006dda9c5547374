use crate::ephemeris::bodies::Body;
use crate::ephemeris::types::{BodyPosition, GeoLocation, HouseFrame, HouseSystem};
use crate::error::ProviderError;
use std::sync::Arc;

/// Source of raw astronomical positions.
///
/// The engine never computes ephemeris data itself. Implementations wrapping a
/// native library with process-wide state must serialize their own calls.
pub trait PositionProvider: Send + Sync {
    /// Continuous time index for a UT calendar instant (Gregorian calendar)
    fn julian_day(&self, year: i32, month: u32, day: u32, hour: f64) -> f64;

    /// Ecliptic longitude and longitudinal speed of `body` at `jd`
    fn body_position(&self, jd: f64, body: Body) -> Result<BodyPosition, ProviderError>;

    /// Twelve cusps plus ascendant and midheaven for a location
    fn houses(
        &self,
        jd: f64,
        location: GeoLocation,
        system: HouseSystem,
    ) -> Result<HouseFrame, ProviderError>;
}

impl<P: PositionProvider + ?Sized> PositionProvider for &P {
    fn julian_day(&self, year: i32, month: u32, day: u32, hour: f64) -> f64 {
        (**self).julian_day(year, month, day, hour)
    }

    fn body_position(&self, jd: f64, body: Body) -> Result<BodyPosition, ProviderError> {
        (**self).body_position(jd, body)
    }

    fn houses(
        &self,
        jd: f64,
        location: GeoLocation,
        system: HouseSystem,
    ) -> Result<HouseFrame, ProviderError> {
        (**self).houses(jd, location, system)
    }
}

impl<P: PositionProvider + ?Sized> PositionProvider for Arc<P> {
    fn julian_day(&self, year: i32, month: u32, day: u32, hour: f64) -> f64 {
        (**self).julian_day(year, month, day, hour)
    }

    fn body_position(&self, jd: f64, body: Body) -> Result<BodyPosition, ProviderError> {
        (**self).body_position(jd, body)
    }

    fn houses(
        &self,
        jd: f64,
        location: GeoLocation,
        system: HouseSystem,
    ) -> Result<HouseFrame, ProviderError> {
        (**self).houses(jd, location, system)
    }
}
