//! Fleet registry: every bus that exists for the lifetime of the process

use std::collections::HashSet;

use busres_types::{BookingError, BusKind, ConfigError};

use crate::model::Bus;
use crate::service::FareRates;

#[derive(Debug, Clone)]
pub struct Fleet {
    buses: Vec<Bus>,
}

impl Fleet {
    /// The three sample buses, one per variant
    pub fn standard(rates: &FareRates) -> Self {
        let stops = |names: [&str; 3]| names.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        Self {
            buses: vec![
                Bus::new(1, BusKind::Ac, 10, stops(["A", "B", "C"]), rates),
                Bus::new(2, BusKind::NonAc, 20, stops(["D", "E", "F"]), rates),
                Bus::new(3, BusKind::Sleeper, 15, stops(["G", "H", "I"]), rates),
            ],
        }
    }

    /// Build a fleet from explicit buses, rejecting duplicate ids, zero
    /// capacity and empty routes.
    pub fn from_buses(buses: Vec<Bus>) -> Result<Self, ConfigError> {
        let mut seen = HashSet::new();
        for bus in &buses {
            if !seen.insert(bus.id()) {
                return Err(ConfigError::ParseError(format!("duplicate bus id {}", bus.id())));
            }
            if bus.capacity() == 0 {
                return Err(ConfigError::ParseError(format!("bus {} has zero capacity", bus.id())));
            }
            if bus.route().is_empty() {
                return Err(ConfigError::ParseError(format!("bus {} has an empty route", bus.id())));
            }
        }
        Ok(Self { buses })
    }

    pub fn buses(&self) -> &[Bus] {
        &self.buses
    }

    pub fn get(&self, id: u32) -> Option<&Bus> {
        self.buses.iter().find(|b| b.id() == id)
    }

    /// Mutable lookup; a missing id is `BusNotFound`
    pub fn lookup_mut(&mut self, id: u32) -> Result<&mut Bus, BookingError> {
        self.buses
            .iter_mut()
            .find(|b| b.id() == id)
            .ok_or(BookingError::BusNotFound(id.into()))
    }
}
