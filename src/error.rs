use crate::duration::DurationParseError;
use thiserror::Error;

/// Input field an error refers to, so a caller can attach feedback to the
/// offending widget instead of showing one generic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Field {
    SwimDistance,
    SwimTime,
    BikeDistance,
    BikeTime,
    RunDistance,
    RunTime,
    Transition1,
    Transition2,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum NormalizeError {
    #[error("{field}: {source}")]
    InvalidDuration {
        field: Field,
        source: DurationParseError,
    },
    #[error("{field} must be greater than zero")]
    NonPositiveDistance { field: Field },
    #[error("{field} is required")]
    MissingField { field: Field },
    #[error("unknown race tier: {0:?} (expected olympic, 70.3 or full)")]
    UnknownTier(String),
    #[error("unknown unit system: {0:?} (expected metric or imperial)")]
    UnknownUnitSystem(String),
}
