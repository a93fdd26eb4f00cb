//! Ticket entity and the id counter that mints it

use busres_types::{format_fare, TicketId};
use serde::Serialize;

use crate::model::Bus;
use crate::service::FarePolicy;

/// Id handed to the first ticket of a run
pub const FIRST_TICKET_ID: TicketId = 1000;

/// Monotonic ticket id source. Ids are never reused, cancelled or not.
#[derive(Debug)]
pub struct TicketCounter {
    next: TicketId,
}

impl Default for TicketCounter {
    fn default() -> Self {
        Self::starting_at(FIRST_TICKET_ID)
    }
}

impl TicketCounter {
    pub fn starting_at(first: TicketId) -> Self {
        Self { next: first }
    }

    pub fn next_id(&mut self) -> TicketId {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// A single booking. The fare is fixed when the ticket is issued.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ticket {
    id: TicketId,
    bus_id: u32,
    passenger_name: String,
    source: String,
    destination: String,
    fare: f64,
}

impl Ticket {
    pub fn issue(
        counter: &mut TicketCounter,
        bus: &Bus,
        passenger_name: &str,
        source: &str,
        destination: &str,
        distance_km: f64,
    ) -> Self {
        Self {
            id: counter.next_id(),
            bus_id: bus.id(),
            passenger_name: passenger_name.to_string(),
            source: source.to_string(),
            destination: destination.to_string(),
            fare: bus.calculate_fare(distance_km),
        }
    }

    pub fn id(&self) -> TicketId {
        self.id
    }

    /// Bus the seat was taken on
    pub fn bus_id(&self) -> u32 {
        self.bus_id
    }

    pub fn passenger_name(&self) -> &str {
        &self.passenger_name
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn fare(&self) -> f64 {
        self.fare
    }

    /// `1000 | Asha | A -> C | Fare: 25.0`
    pub fn ledger_line(&self) -> String {
        format!(
            "{} | {} | {} -> {} | Fare: {}",
            self.id,
            self.passenger_name,
            self.source,
            self.destination,
            format_fare(self.fare)
        )
    }
}
