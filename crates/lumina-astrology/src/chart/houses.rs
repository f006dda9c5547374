//! House membership for a longitude.

/// Assigns longitudes to houses given 12 cusp longitudes.
#[derive(Debug, Clone, Copy, Default)]
pub struct HouseAssigner;

impl HouseAssigner {
    pub fn new() -> Self {
        Self
    }

    /// House number (1..12) containing `longitude`.
    ///
    /// Houses are scanned in order and the first match wins, so a longitude
    /// sitting exactly on a cusp resolves by scan order. Falls back to house 1
    /// when no house matches, which only happens for malformed cusp sets.
    pub fn assign(&self, longitude: f64, cusps: &[f64; 12]) -> u8 {
        for i in 0..12 {
            let cur = cusps[i];
            let next = cusps[(i + 1) % 12];
            let inside = if cur < next {
                cur <= longitude && longitude < next
            } else {
                // house spans 0°
                longitude >= cur || longitude < next
            };
            if inside {
                return (i + 1) as u8;
            }
        }
        1
    }
}

/// Whole-sign placeholder cusps: house i starts at i * 30°
pub fn whole_sign_cusps() -> [f64; 12] {
    std::array::from_fn(|i| i as f64 * 30.0)
}
