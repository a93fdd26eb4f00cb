//! Bus entity: identity, seats and route

use busres_types::BusKind;
use serde::Serialize;
use tracing::debug;

use crate::service::{FarePolicy, FareRates};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bus {
    id: u32,
    kind: BusKind,
    capacity: u32,
    available_seats: u32,
    fare_rate_per_km: f64,
    route: Vec<String>,
}

impl Bus {
    /// Build a bus with all seats free. The rate is picked from `rates` by variant.
    pub fn new(id: u32, kind: BusKind, capacity: u32, route: Vec<String>, rates: &FareRates) -> Self {
        Self {
            id,
            kind,
            capacity,
            available_seats: capacity,
            fare_rate_per_km: rates.rate_for(kind),
            route,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn kind(&self) -> BusKind {
        self.kind
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn available_seats(&self) -> u32 {
        self.available_seats
    }

    pub fn route(&self) -> &[String] {
        &self.route
    }

    /// Take one seat. Returns false when the bus is full.
    pub fn reserve_seat(&mut self) -> bool {
        if self.available_seats > 0 {
            self.available_seats -= 1;
            debug!(bus = self.id, available = self.available_seats, "seat reserved");
            true
        } else {
            false
        }
    }

    /// Give one seat back. No-op once every seat is free.
    pub fn release_seat(&mut self) {
        if self.available_seats < self.capacity {
            self.available_seats += 1;
            debug!(bus = self.id, available = self.available_seats, "seat released");
        }
    }

    /// Both stops must be on the route, source strictly before destination.
    pub fn is_route_valid(&self, source: &str, destination: &str) -> bool {
        match (self.stop_index(source), self.stop_index(destination)) {
            (Some(from), Some(to)) => from < to,
            _ => false,
        }
    }

    fn stop_index(&self, stop: &str) -> Option<usize> {
        self.route.iter().position(|s| s == stop)
    }

    /// One-line summary, e.g. `1 | AC | Seats: 10/10 | Route: A -> B -> C`
    pub fn describe(&self) -> String {
        format!(
            "{} | {} | Seats: {}/{} | Route: {}",
            self.id,
            self.kind,
            self.available_seats,
            self.capacity,
            self.route.join(" -> ")
        )
    }
}

impl FarePolicy for Bus {
    fn rate_per_km(&self) -> f64 {
        self.fare_rate_per_km
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(stops: &[&str]) -> Vec<String> {
        stops.iter().map(|s| s.to_string()).collect()
    }

    fn ac_bus(capacity: u32) -> Bus {
        Bus::new(1, BusKind::Ac, capacity, route(&["A", "B", "C"]), &FareRates::default())
    }

    #[test]
    fn test_new_bus_is_empty() {
        let bus = ac_bus(10);
        assert_eq!(bus.available_seats(), 10);
        assert_eq!(bus.capacity(), 10);
    }

    #[test]
    fn test_reserve_until_full() {
        let mut bus = ac_bus(2);
        assert!(bus.reserve_seat());
        assert!(bus.reserve_seat());
        assert!(!bus.reserve_seat());
        assert_eq!(bus.available_seats(), 0);
    }

    #[test]
    fn test_release_never_exceeds_capacity() {
        let mut bus = ac_bus(3);
        bus.release_seat();
        assert_eq!(bus.available_seats(), 3);
        bus.reserve_seat();
        bus.release_seat();
        bus.release_seat();
        assert_eq!(bus.available_seats(), 3);
    }

    #[test]
    fn test_seats_stay_in_bounds_over_mixed_sequence() {
        let mut bus = ac_bus(4);
        let ops = [true, true, false, true, true, true, true, false, false, false, false, false, true];
        for reserve in ops {
            if reserve {
                bus.reserve_seat();
            } else {
                bus.release_seat();
            }
            assert!(bus.available_seats() <= bus.capacity());
        }
    }

    #[test]
    fn test_route_order_matters() {
        let bus = ac_bus(10);
        assert!(bus.is_route_valid("A", "C"));
        assert!(bus.is_route_valid("B", "C"));
        assert!(!bus.is_route_valid("B", "A"));
        assert!(!bus.is_route_valid("A", "A"));
        assert!(!bus.is_route_valid("A", "Z"));
        assert!(!bus.is_route_valid("Z", "C"));
    }

    #[test]
    fn test_fare_per_variant() {
        let rates = FareRates::default();
        let cases = [(BusKind::Ac, 25.0), (BusKind::NonAc, 15.0), (BusKind::Sleeper, 30.0)];
        for (kind, expected) in cases {
            let bus = Bus::new(9, kind, 5, route(&["X", "Y"]), &rates);
            assert!((bus.calculate_fare(10.0) - expected).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_describe() {
        let mut bus = ac_bus(10);
        bus.reserve_seat();
        assert_eq!(bus.describe(), "1 | AC | Seats: 9/10 | Route: A -> B -> C");
    }
}
