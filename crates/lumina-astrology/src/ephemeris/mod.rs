pub mod bodies;
pub mod provider;
pub mod types;

#[cfg(feature = "swiss-ephemeris")]
pub mod adapter;

#[cfg(feature = "swiss-ephemeris")]
pub use adapter::SwissEphemerisAdapter;
pub use bodies::{Body, TRACKED_BODIES, TRANSIT_BODIES};
pub use provider::PositionProvider;
pub use types::{mean_obliquity, BodyPosition, GeoLocation, HouseFrame, HouseSystem};
