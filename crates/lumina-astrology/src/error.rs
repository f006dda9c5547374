use crate::ephemeris::Body;
use thiserror::Error;

/// Failures reported by a position provider.
///
/// Chart building absorbs these and degrades; they only reach callers from
/// transit calculation when the Sun or Moon cannot be located.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProviderError {
    #[error("Failed to calculate position for {body}: {message}")]
    CalculationFailed { body: Body, message: String },
    #[error("{0} is not a native ephemeris body")]
    UnsupportedBody(Body),
    #[error("House calculation failed: {0}")]
    HouseCalculation(String),
}

/// Errors surfaced to callers of the chart and transit operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartCalculationError {
    #[error("Chart calculation failed: {0}")]
    InvalidInput(String),
    #[error("Chart calculation failed: {0}")]
    Provider(#[from] ProviderError),
}

impl ChartCalculationError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// True for request-validation errors (malformed date, time or coordinates)
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
