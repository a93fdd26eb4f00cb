//! Core types for bus reservation

mod error;

pub use error::*;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Ticket identifier issued by the session counter
pub type TicketId = u32;

/// Output format for non-interactive listings
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Bus variant; each one carries its own per-km fare rate
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BusKind {
    Ac,
    NonAc,
    Sleeper,
}

impl BusKind {
    /// Label shown in listings
    pub fn label(&self) -> &'static str {
        match self {
            BusKind::Ac => "AC",
            BusKind::NonAc => "Non-AC",
            BusKind::Sleeper => "Sleeper",
        }
    }
}

impl std::fmt::Display for BusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Render a fare in plain decimal notation: integral values keep one
/// fractional digit (`25.0`), everything else uses the shortest form.
/// No scientific notation at any magnitude.
pub fn format_fare(fare: f64) -> String {
    if fare.is_finite() && fare.fract() == 0.0 {
        format!("{:.1}", fare)
    } else {
        format!("{}", fare)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_fare_integral() {
        assert_eq!(format_fare(25.0), "25.0");
        assert_eq!(format_fare(0.0), "0.0");
        assert_eq!(format_fare(-15.0), "-15.0");
    }

    #[test]
    fn test_format_fare_fractional() {
        assert_eq!(format_fare(37.5), "37.5");
        assert_eq!(format_fare(3.75), "3.75");
    }

    #[test]
    fn test_format_fare_stays_plain_decimal() {
        assert_eq!(format_fare(10_000_000.0), "10000000.0");
        assert_eq!(format_fare(0.0001), "0.0001");
    }

    #[test]
    fn test_bus_kind_serde_names() {
        let kind: BusKind = serde_json::from_str("\"non-ac\"").unwrap();
        assert_eq!(kind, BusKind::NonAc);
        assert_eq!(serde_json::to_string(&BusKind::Ac).unwrap(), "\"ac\"");
    }

    #[test]
    fn test_bus_kind_labels() {
        assert_eq!(BusKind::Ac.to_string(), "AC");
        assert_eq!(BusKind::NonAc.to_string(), "Non-AC");
        assert_eq!(BusKind::Sleeper.to_string(), "Sleeper");
    }
}
