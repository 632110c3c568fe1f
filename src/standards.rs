use crate::error::NormalizeError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Named standard race distance combination.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize, strum_macros::Display,
)]
pub enum Tier {
    #[value(name = "olympic")]
    #[serde(rename = "olympic")]
    #[strum(serialize = "olympic")]
    Olympic,
    #[value(name = "70.3", alias = "half")]
    #[serde(rename = "70.3")]
    #[strum(serialize = "70.3")]
    Half,
    #[value(name = "full")]
    #[serde(rename = "full")]
    #[strum(serialize = "full")]
    Full,
}

#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize, strum_macros::Display,
)]
pub enum UnitSystem {
    #[value(name = "metric")]
    #[serde(rename = "metric")]
    #[strum(serialize = "metric")]
    Metric,
    #[value(name = "imperial")]
    #[serde(rename = "imperial")]
    #[strum(serialize = "imperial")]
    Imperial,
}

/// Official course distances for one tier, in one unit system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Standard {
    pub name: &'static str,
    pub swim: f64,
    pub bike: f64,
    pub run: f64,
}

// The two tables are authored independently: the imperial figures are the
// real-world race distances (70.3 swims 1.2 mi), not metric conversions.
const METRIC: [Standard; 3] = [
    Standard {
        name: "Olympic",
        swim: 1.5,
        bike: 40.0,
        run: 10.0,
    },
    Standard {
        name: "Half Ironman (70.3)",
        swim: 1.9,
        bike: 90.0,
        run: 21.1,
    },
    Standard {
        name: "Full Ironman",
        swim: 3.8,
        bike: 180.0,
        run: 42.2,
    },
];

const IMPERIAL: [Standard; 3] = [
    Standard {
        name: "Olympic",
        swim: 0.93,
        bike: 24.8,
        run: 6.2,
    },
    Standard {
        name: "Half Ironman (70.3)",
        swim: 1.2,
        bike: 56.0,
        run: 13.1,
    },
    Standard {
        name: "Full Ironman",
        swim: 2.4,
        bike: 112.0,
        run: 26.2,
    },
];

impl Tier {
    /// Look up the standard distances for this tier in the given unit system.
    pub fn standard(self, units: UnitSystem) -> &'static Standard {
        let table = match units {
            UnitSystem::Metric => &METRIC,
            UnitSystem::Imperial => &IMPERIAL,
        };
        match self {
            Tier::Olympic => &table[0],
            Tier::Half => &table[1],
            Tier::Full => &table[2],
        }
    }
}

impl FromStr for Tier {
    type Err = NormalizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "olympic" => Ok(Tier::Olympic),
            "70.3" | "half" => Ok(Tier::Half),
            "full" => Ok(Tier::Full),
            _ => Err(NormalizeError::UnknownTier(s.to_string())),
        }
    }
}

impl FromStr for UnitSystem {
    type Err = NormalizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" => Ok(UnitSystem::Metric),
            "imperial" => Ok(UnitSystem::Imperial),
            _ => Err(NormalizeError::UnknownUnitSystem(s.to_string())),
        }
    }
}

impl UnitSystem {
    /// Swim pace is expressed per 100 native units: 10 hundred-metre blocks
    /// per km, 16.0934 hundred-yard-equivalent blocks per mile.
    pub fn units_per_100(self) -> f64 {
        match self {
            UnitSystem::Metric => 10.0,
            UnitSystem::Imperial => 16.0934,
        }
    }
}
