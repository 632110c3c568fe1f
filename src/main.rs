pub mod config;
pub mod duration;
pub mod error;
pub mod form;
pub mod normalize;
pub mod race;
pub mod standards;

use crate::config::{Config, ConfigStore, FileConfigStore};
use crate::duration::format_duration;
use crate::form::RaceForm;
use crate::normalize::NormalizedResult;
use crate::standards::{Tier, UnitSystem};
use clap::{error::ErrorKind, CommandFactory, Parser};
use std::error::Error;

/// normalize triathlon race splits onto standard course distances
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Scales recorded swim/bike/run splits from a non-standard course onto an \
official race tier (olympic, 70.3 or full), substitutes fixed 2-minute transitions, and \
reports normalized times, pace/speed and the timeline breakdown."
)]
pub struct Cli {
    /// swim distance raced, in the chosen units
    #[clap(long = "swim")]
    swim_distance: f64,

    /// swim time (mm:ss or hh:mm:ss)
    #[clap(long)]
    swim_time: String,

    /// bike distance raced, in the chosen units
    #[clap(long = "bike")]
    bike_distance: f64,

    /// bike time (mm:ss or hh:mm:ss)
    #[clap(long)]
    bike_time: String,

    /// run distance raced, in the chosen units
    #[clap(long = "run")]
    run_distance: f64,

    /// run time (mm:ss or hh:mm:ss)
    #[clap(long)]
    run_time: String,

    /// recorded T1 time; counts toward the actual total only
    #[clap(long = "t1")]
    transition1: Option<String>,

    /// recorded T2 time; counts toward the actual total only
    #[clap(long = "t2")]
    transition2: Option<String>,

    /// target race tier (defaults to the saved preference)
    #[clap(short = 't', long, value_enum)]
    tier: Option<Tier>,

    /// unit system for distances (defaults to the saved preference)
    #[clap(short = 'u', long, value_enum)]
    units: Option<UnitSystem>,

    /// athlete name (informational only)
    #[clap(long)]
    name: Option<String>,

    /// athlete age (informational only)
    #[clap(long)]
    age: Option<u32>,

    /// race name (informational only)
    #[clap(long)]
    race: Option<String>,

    /// average bike power in watts (informational only)
    #[clap(long)]
    power: Option<f64>,

    /// total elevation gain (informational only)
    #[clap(long)]
    elevation: Option<f64>,

    /// print the result as JSON instead of a report
    #[clap(long)]
    json: bool,

    /// remember the chosen tier and units as defaults
    #[clap(long)]
    save_defaults: bool,
}

impl Cli {
    fn to_form(&self, defaults: &Config) -> RaceForm {
        let mut form = RaceForm::new(
            self.tier.unwrap_or(defaults.tier),
            self.units.unwrap_or(defaults.units),
        );
        form.input.athlete_name = self.name.clone();
        form.input.athlete_age = self.age;
        form.input.race_name = self.race.clone();
        form.input.swim_distance = self.swim_distance;
        form.input.swim_time = self.swim_time.clone();
        form.input.bike_distance = self.bike_distance;
        form.input.bike_time = self.bike_time.clone();
        form.input.run_distance = self.run_distance;
        form.input.run_time = self.run_time.clone();
        form.input.transition1_time = self.transition1.clone();
        form.input.transition2_time = self.transition2.clone();
        form.input.bike_power = self.power;
        form.input.elevation_gain = self.elevation;
        form
    }
}

fn distance_label(units: UnitSystem) -> &'static str {
    match units {
        UnitSystem::Metric => "km",
        UnitSystem::Imperial => "mi",
    }
}

fn swim_pace_label(units: UnitSystem) -> &'static str {
    match units {
        UnitSystem::Metric => "/100m",
        UnitSystem::Imperial => "/100yd",
    }
}

fn speed_label(units: UnitSystem) -> &'static str {
    match units {
        UnitSystem::Metric => "km/h",
        UnitSystem::Imperial => "mph",
    }
}

fn print_report(result: &NormalizedResult) {
    let units = result.units;
    let standard = result.tier.standard(units);
    let dist = distance_label(units);

    if let Some(name) = &result.athlete_name {
        match result.athlete_age {
            Some(age) => println!("Athlete:    {name} ({age})"),
            None => println!("Athlete:    {name}"),
        }
    }
    if let Some(race) = &result.race_name {
        println!("Race:       {race}");
    }
    println!("Normalized to {} ({units})", standard.name);
    println!();

    println!(
        "  Swim  {:>5.2} {dist}  {:>8}  {} {}",
        standard.swim,
        format_duration(result.swim_mins),
        format_duration(result.swim_pace),
        swim_pace_label(units),
    );
    println!(
        "  T1           {:>10}",
        format_duration(result.transition1_mins)
    );
    println!(
        "  Bike  {:>5.1} {dist}  {:>8}  {:.1} {}",
        standard.bike,
        format_duration(result.bike_mins),
        result.bike_speed,
        speed_label(units),
    );
    println!(
        "  T2           {:>10}",
        format_duration(result.transition2_mins)
    );
    println!(
        "  Run   {:>5.1} {dist}  {:>8}  {} /{}",
        standard.run,
        format_duration(result.run_mins),
        format_duration(result.run_pace),
        dist,
    );
    println!();

    println!(
        "  Normalized total  {}",
        format_duration(result.normalized_total_mins)
    );
    println!(
        "  Actual total      {}",
        format_duration(result.actual_total_mins)
    );
    println!(
        "  Difference        {}",
        format_duration(result.time_saved_mins)
    );
    if let Some(power) = result.bike_power {
        println!("  Bike power        {power:.0} W");
    }
    if let Some(elevation) = result.elevation_gain {
        println!("  Elevation gain    {elevation:.0}");
    }
    println!();

    let t = &result.timeline;
    println!(
        "  Timeline  swim {:.1}%  t1 {:.1}%  bike {:.1}%  t2 {:.1}%  run {:.1}%",
        t.swim, t.transition1, t.bike, t.transition2, t.run
    );
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let store = FileConfigStore::new();
    let defaults = store.load();

    let mut form = cli.to_form(&defaults);

    if cli.save_defaults {
        let cfg = Config {
            tier: form.tier,
            units: form.units,
        };
        store.save(&cfg)?;
    }

    let result = match form.recompute() {
        Ok(result) => result,
        Err(e) => {
            let mut cmd = Cli::command();
            cmd.error(ErrorKind::ValueValidation, e).exit();
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_report(&result);
    }

    Ok(())
}
