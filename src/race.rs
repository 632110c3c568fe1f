use crate::error::{Field, NormalizeError};
use serde::{Deserialize, Serialize};

/// A course distance validated to be strictly positive.
///
/// Constructed only through the fallible factory; normalization divides by
/// this value, so zero and negatives are rejected before any ratio exists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distance(f64);

impl Distance {
    pub fn new(value: f64, field: Field) -> Result<Self, NormalizeError> {
        if value.is_finite() && value > 0.0 {
            Ok(Distance(value))
        } else {
            Err(NormalizeError::NonPositiveDistance { field })
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

/// Raw race data as collected by the presentation layer.
///
/// Distances are in the unit system chosen at normalization time; times are
/// duration strings for the codec. Metadata and the bike power / elevation
/// figures are inert pass-through, never used in computation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RaceInput {
    pub athlete_name: Option<String>,
    pub athlete_age: Option<u32>,
    pub race_name: Option<String>,

    pub swim_distance: f64,
    pub swim_time: String,
    pub bike_distance: f64,
    pub bike_time: String,
    pub run_distance: f64,
    pub run_time: String,

    pub transition1_time: Option<String>,
    pub transition2_time: Option<String>,

    pub bike_power: Option<f64>,
    pub elevation_gain: Option<f64>,
}
