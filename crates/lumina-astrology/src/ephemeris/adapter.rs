use crate::ephemeris::bodies::Body;
use crate::ephemeris::provider::PositionProvider;
use crate::ephemeris::types::{BodyPosition, GeoLocation, HouseFrame, HouseSystem};
use crate::error::ProviderError;
use std::sync::{Mutex, MutexGuard};
use swisseph::swe::{calc_ut, houses_ex, julday};
use swisseph::{AscMc, Cusp};

/// FLG_MOSEPH: built-in analytical ephemeris, no data files required
const FLG_MOSEPH: i32 = 4;
/// FLG_SPEED: also compute speeds, needed for retrograde detection
const FLG_SPEED: i32 = 256;
/// GREG_CAL
const GREGORIAN: u32 = 1;

/// Swiss Ephemeris backed position provider.
///
/// The native library keeps process-wide state, so every call goes through
/// `lock`. Build one adapter per process and share it behind an `Arc`.
pub struct SwissEphemerisAdapter {
    lock: Mutex<()>,
    flags: i32,
}

impl SwissEphemerisAdapter {
    pub fn new() -> Self {
        Self {
            lock: Mutex::new(()),
            flags: FLG_MOSEPH | FLG_SPEED,
        }
    }

    fn guard(&self) -> MutexGuard<'_, ()> {
        // The guarded value is (), so a poisoned lock is still usable.
        self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for SwissEphemerisAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionProvider for SwissEphemerisAdapter {
    fn julian_day(&self, year: i32, month: u32, day: u32, hour: f64) -> f64 {
        let _guard = self.guard();
        julday(year, month as i32, day as i32, hour, GREGORIAN)
    }

    fn body_position(&self, jd: f64, body: Body) -> Result<BodyPosition, ProviderError> {
        let code = body.swiss_code().ok_or(ProviderError::UnsupportedBody(body))?;

        let result = {
            let _guard = self.guard();
            calc_ut(jd, code as u32, self.flags as u32)
        }
        .map_err(|e| ProviderError::CalculationFailed {
            body,
            message: format!("Swiss Ephemeris error: {}", e),
        })?;

        let out = result.out;
        let longitude = out[0];
        let speed = out[3];
        if !longitude.is_finite() || !speed.is_finite() {
            return Err(ProviderError::CalculationFailed {
                body,
                message: format!("non-finite result at jd {}", jd),
            });
        }

        Ok(BodyPosition {
            longitude: longitude.rem_euclid(360.0),
            speed,
        })
    }

    fn houses(
        &self,
        jd: f64,
        location: GeoLocation,
        system: HouseSystem,
    ) -> Result<HouseFrame, ProviderError> {
        // houses_ex drops the native status, and inside the polar circles the
        // library silently substitutes Porphyry for semi-arc systems.
        if !system.is_defined_at(location.lat, jd) {
            return Err(ProviderError::HouseCalculation(format!(
                "{} houses undefined inside the polar circle at lat {}",
                system, location.lat
            )));
        }

        let (c, a) = {
            let _guard = self.guard();
            houses_ex(jd, 0, location.lat, location.lon, system.swiss_code() as i32)
        };
        let cusps = Cusp::from_array(c);
        let ascmc = AscMc::from_array(a);

        let cusp_values = [
            cusps.first, cusps.second, cusps.third, cusps.fourth,
            cusps.fifth, cusps.sixth, cusps.seventh, cusps.eighth,
            cusps.ninth, cusps.tenth, cusps.eleventh, cusps.twelfth,
        ];

        if cusp_values.iter().any(|c| !c.is_finite())
            || !ascmc.ascendant.is_finite()
            || !ascmc.mc.is_finite()
        {
            return Err(ProviderError::HouseCalculation(format!(
                "{} houses undefined at lat {}, lon {}",
                system, location.lat, location.lon
            )));
        }

        Ok(HouseFrame {
            cusps: cusp_values.map(|c| c.rem_euclid(360.0)),
            ascendant: ascmc.ascendant.rem_euclid(360.0),
            midheaven: ascmc.mc.rem_euclid(360.0),
        })
    }
}
