//! Fare calculation per bus variant

use busres_types::BusKind;
use serde::{Deserialize, Serialize};

/// Fare for a trip: `distance × rate`.
///
/// Distance is taken as given; zero or negative distances yield a
/// non-positive fare.
pub fn linear_fare(distance_km: f64, rate_per_km: f64) -> f64 {
    distance_km * rate_per_km
}

/// Capability shared by every bus variant
pub trait FarePolicy {
    /// Currency units charged per kilometer
    fn rate_per_km(&self) -> f64;

    fn calculate_fare(&self, distance_km: f64) -> f64 {
        linear_fare(distance_km, self.rate_per_km())
    }
}

/// Per-km rates for each bus variant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FareRates {
    #[serde(default = "default_ac_rate")]
    pub ac: f64,

    #[serde(default = "default_non_ac_rate")]
    pub non_ac: f64,

    #[serde(default = "default_sleeper_rate")]
    pub sleeper: f64,
}

fn default_ac_rate() -> f64 {
    2.5
}

fn default_non_ac_rate() -> f64 {
    1.5
}

fn default_sleeper_rate() -> f64 {
    3.0
}

impl Default for FareRates {
    fn default() -> Self {
        Self {
            ac: default_ac_rate(),
            non_ac: default_non_ac_rate(),
            sleeper: default_sleeper_rate(),
        }
    }
}

impl FareRates {
    pub fn rate_for(&self, kind: BusKind) -> f64 {
        match kind {
            BusKind::Ac => self.ac,
            BusKind::NonAc => self.non_ac,
            BusKind::Sleeper => self.sleeper,
        }
    }
}
