use crate::duration::parse_duration;
use crate::error::{Field, NormalizeError};
use crate::race::{Distance, RaceInput};
use crate::standards::{Tier, UnitSystem};
use serde::Serialize;

/// Transitions count as exactly this many minutes in every normalized total,
/// removing transition-time variance from the comparison.
pub const STANDARD_TRANSITION_MINS: f64 = 2.0;

/// Share of total normalized race time per segment, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Timeline {
    pub swim: f64,
    pub transition1: f64,
    pub bike: f64,
    pub transition2: f64,
    pub run: f64,
}

impl Timeline {
    pub fn sum(&self) -> f64 {
        self.swim + self.transition1 + self.bike + self.transition2 + self.run
    }
}

/// Immutable snapshot of a race normalized onto a standard tier.
///
/// All times are in minutes; pace/speed follow the unit system the result
/// was derived with. Metadata is carried over from the input unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedResult {
    pub athlete_name: Option<String>,
    pub athlete_age: Option<u32>,
    pub race_name: Option<String>,
    pub bike_power: Option<f64>,
    pub elevation_gain: Option<f64>,

    pub tier: Tier,
    pub units: UnitSystem,

    pub swim_mins: f64,
    pub transition1_mins: f64,
    pub bike_mins: f64,
    pub transition2_mins: f64,
    pub run_mins: f64,

    /// Minutes per 100 native swim units (100 m metric, 100 yd imperial).
    pub swim_pace: f64,
    /// Distance units per hour, rounded to one decimal.
    pub bike_speed: f64,
    /// Minutes per distance unit; render with `format_duration`.
    pub run_pace: f64,

    pub normalized_total_mins: f64,
    pub actual_total_mins: f64,
    /// Unsigned difference between the actual and normalized totals.
    pub time_saved_mins: f64,

    pub timeline: Timeline,
}

fn parse_required(text: &str, field: Field) -> Result<f64, NormalizeError> {
    if text.trim().is_empty() {
        return Err(NormalizeError::MissingField { field });
    }
    parse_duration(text).map_err(|source| NormalizeError::InvalidDuration { field, source })
}

// Blank or absent transitions fall back to the standard two minutes; a
// non-blank entry must parse, and only feeds the actual total.
fn parse_transition(text: Option<&str>, field: Field) -> Result<f64, NormalizeError> {
    match text {
        Some(t) if !t.trim().is_empty() => {
            parse_duration(t).map_err(|source| NormalizeError::InvalidDuration { field, source })
        }
        _ => Ok(STANDARD_TRANSITION_MINS),
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Normalize recorded splits onto the target tier's distances.
///
/// Each swim/bike/run time scales linearly by `standard / input` distance
/// (constant-pace assumption); transitions are fixed at two minutes in the
/// normalized total regardless of what was recorded. Pure and idempotent:
/// identical inputs always produce an identical result.
pub fn normalize(
    input: &RaceInput,
    tier: Tier,
    units: UnitSystem,
) -> Result<NormalizedResult, NormalizeError> {
    let standard = tier.standard(units);

    let swim_distance = Distance::new(input.swim_distance, Field::SwimDistance)?;
    let bike_distance = Distance::new(input.bike_distance, Field::BikeDistance)?;
    let run_distance = Distance::new(input.run_distance, Field::RunDistance)?;

    let actual_swim = parse_required(&input.swim_time, Field::SwimTime)?;
    let actual_bike = parse_required(&input.bike_time, Field::BikeTime)?;
    let actual_run = parse_required(&input.run_time, Field::RunTime)?;

    let actual_t1 = parse_transition(input.transition1_time.as_deref(), Field::Transition1)?;
    let actual_t2 = parse_transition(input.transition2_time.as_deref(), Field::Transition2)?;

    let swim_mins = actual_swim * (standard.swim / swim_distance.get());
    let bike_mins = actual_bike * (standard.bike / bike_distance.get());
    let run_mins = actual_run * (standard.run / run_distance.get());

    let normalized_total_mins =
        swim_mins + STANDARD_TRANSITION_MINS + bike_mins + STANDARD_TRANSITION_MINS + run_mins;
    let actual_total_mins = actual_swim + actual_t1 + actual_bike + actual_t2 + actual_run;
    let time_saved_mins = (actual_total_mins - normalized_total_mins).abs();

    let swim_pace = swim_mins / (standard.swim * units.units_per_100());
    let bike_speed = round1(standard.bike / (bike_mins / 60.0));
    let run_pace = run_mins / standard.run;

    // All five shares come from the same total so they sum to 100.
    let pct = |mins: f64| mins / normalized_total_mins * 100.0;
    let timeline = Timeline {
        swim: pct(swim_mins),
        transition1: pct(STANDARD_TRANSITION_MINS),
        bike: pct(bike_mins),
        transition2: pct(STANDARD_TRANSITION_MINS),
        run: pct(run_mins),
    };

    Ok(NormalizedResult {
        athlete_name: input.athlete_name.clone(),
        athlete_age: input.athlete_age,
        race_name: input.race_name.clone(),
        bike_power: input.bike_power,
        elevation_gain: input.elevation_gain,
        tier,
        units,
        swim_mins,
        transition1_mins: STANDARD_TRANSITION_MINS,
        bike_mins,
        transition2_mins: STANDARD_TRANSITION_MINS,
        run_mins,
        swim_pace,
        bike_speed,
        run_pace,
        normalized_total_mins,
        actual_total_mins,
        time_saved_mins,
        timeline,
    })
}
