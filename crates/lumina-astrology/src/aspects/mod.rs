pub mod calculator;
pub mod types;

pub use calculator::{separation, AspectCalculator, NATAL_ASPECTS, TRANSIT_ASPECTS, TRANSIT_ORB};
pub use types::{Aspect, AspectDefinition, AspectKind};
