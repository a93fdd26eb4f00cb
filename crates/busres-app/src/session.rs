//! Passenger session: booking and cancellation use cases
//!
//! Booking runs in a fixed order: validate route, reserve a seat, mint the
//! ticket, add it to the active list, append it to the ledger. A ledger
//! failure is reported on the returned [`Booking`] but does not undo the
//! seat or the active ticket.

use busres_domain::model::{Bus, Passenger, Ticket, TicketCounter};
use busres_domain::repository::TicketLedger;
use busres_domain::Fleet;
use busres_types::{BookingError, LedgerError, TicketId};
use tracing::{error, info, warn};

/// Result of a successful booking
#[derive(Debug)]
pub struct Booking {
    pub ticket: Ticket,
    /// Set when the ticket could not be recorded in the ledger
    pub ledger_error: Option<LedgerError>,
}

pub struct PassengerSession<L: TicketLedger> {
    passenger: Passenger,
    counter: TicketCounter,
    ledger: L,
}

impl<L: TicketLedger> PassengerSession<L> {
    pub fn new(passenger: Passenger, ledger: L) -> Self {
        Self {
            passenger,
            counter: TicketCounter::default(),
            ledger,
        }
    }

    pub fn book(
        &mut self,
        bus: &mut Bus,
        source: &str,
        destination: &str,
        distance_km: f64,
    ) -> Result<Booking, BookingError> {
        if !bus.is_route_valid(source, destination) {
            return Err(BookingError::InvalidRoute {
                origin: source.to_string(),
                destination: destination.to_string(),
            });
        }

        if !bus.reserve_seat() {
            return Err(BookingError::NoSeatsAvailable { bus_id: bus.id() });
        }

        let ticket = Ticket::issue(
            &mut self.counter,
            bus,
            self.passenger.name(),
            source,
            destination,
            distance_km,
        );
        self.passenger.add_booking(ticket.clone());

        let ledger_error = match self.ledger.append(&ticket) {
            Ok(()) => None,
            Err(e) => {
                error!(ticket = ticket.id(), error = %e, "ticket booked but not recorded");
                Some(e)
            }
        };

        info!(
            ticket = ticket.id(),
            bus = bus.id(),
            fare = ticket.fare(),
            "ticket booked"
        );
        Ok(Booking {
            ticket,
            ledger_error,
        })
    }

    /// Book on the bus with `bus_id`; an unknown id is `BusNotFound`
    pub fn book_on(
        &mut self,
        fleet: &mut Fleet,
        bus_id: u32,
        source: &str,
        destination: &str,
        distance_km: f64,
    ) -> Result<Booking, BookingError> {
        let bus = fleet.lookup_mut(bus_id)?;
        self.book(bus, source, destination, distance_km)
    }

    /// Cancel an active ticket and give its seat back. The ledger is not touched.
    pub fn cancel(&mut self, fleet: &mut Fleet, ticket_id: TicketId) -> Result<Ticket, BookingError> {
        let ticket = self
            .passenger
            .take_booking(ticket_id)
            .ok_or(BookingError::TicketNotFound(ticket_id.into()))?;

        match fleet.lookup_mut(ticket.bus_id()) {
            Ok(bus) => bus.release_seat(),
            Err(_) => warn!(ticket = ticket_id, bus = ticket.bus_id(), "bus missing on cancel"),
        }

        info!(ticket = ticket_id, "ticket cancelled");
        Ok(ticket)
    }
}
