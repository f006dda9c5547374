pub mod builder;
pub mod houses;
pub mod input;
pub mod transit;
pub mod types;

pub use builder::{BodyOutcome, ChartBuilder};
pub use houses::{whole_sign_cusps, HouseAssigner};
pub use input::BirthData;
pub use transit::{TransitCorrelator, TransitEntry, TransitSnapshot, MAX_ACTIVE_TRANSITS};
pub use types::{ChartDiagnostics, HouseCusp, NatalChart, Placement};
