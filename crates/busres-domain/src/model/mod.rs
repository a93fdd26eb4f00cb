//! Domain model types

pub mod bus;
pub mod passenger;
pub mod ticket;

pub use bus::Bus;
pub use passenger::Passenger;
pub use ticket::{Ticket, TicketCounter, FIRST_TICKET_ID};
