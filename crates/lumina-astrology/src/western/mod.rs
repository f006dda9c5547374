pub mod moon_phase;
pub mod zodiac;

pub use moon_phase::{moon_phase, phase_angle, MoonPhase, MOON_PHASES};
pub use zodiac::{
    degree_in_sign, normalize_degrees, round2, round_longitude, sign_for, Sign, ZodiacPosition,
    ZODIAC_SIGNS,
};
