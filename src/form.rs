use crate::error::NormalizeError;
use crate::normalize::{normalize, NormalizedResult};
use crate::race::RaceInput;
use crate::standards::{Tier, UnitSystem};

/// Thin holder for the current form snapshot.
///
/// Fields are overwritten edit-by-edit by the presentation layer; the result
/// only changes on an explicit `recompute`, never automatically. The engine
/// itself stays stateless.
#[derive(Debug, Clone)]
pub struct RaceForm {
    pub input: RaceInput,
    pub tier: Tier,
    pub units: UnitSystem,
    pub result: Option<NormalizedResult>,
}

impl Default for RaceForm {
    fn default() -> Self {
        Self {
            input: RaceInput::default(),
            tier: Tier::Olympic,
            units: UnitSystem::Metric,
            result: None,
        }
    }
}

impl RaceForm {
    pub fn new(tier: Tier, units: UnitSystem) -> Self {
        Self {
            tier,
            units,
            ..Default::default()
        }
    }

    /// Whether all three required segment times have been entered.
    /// Callers should gate `recompute` on this for field-level feedback.
    pub fn is_complete(&self) -> bool {
        !self.input.swim_time.trim().is_empty()
            && !self.input.bike_time.trim().is_empty()
            && !self.input.run_time.trim().is_empty()
    }

    /// Run the engine over the current snapshot, replacing any prior result
    /// wholesale. A failed recompute clears the stored result so a stale one
    /// is never shown against newer inputs.
    pub fn recompute(&mut self) -> Result<NormalizedResult, NormalizeError> {
        match normalize(&self.input, self.tier, self.units) {
            Ok(result) => {
                self.result = Some(result.clone());
                Ok(result)
            }
            Err(e) => {
                self.result = None;
                Err(e)
            }
        }
    }
}
