//! Passenger and their active bookings

use busres_types::TicketId;

use crate::model::Ticket;

#[derive(Debug, Clone)]
pub struct Passenger {
    name: String,
    email: String,
    bookings: Vec<Ticket>,
}

impl Passenger {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            bookings: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Active (not cancelled) tickets in booking order
    pub fn bookings(&self) -> &[Ticket] {
        &self.bookings
    }

    pub fn add_booking(&mut self, ticket: Ticket) {
        self.bookings.push(ticket);
    }

    /// Remove and return the active ticket with `id`, if any
    pub fn take_booking(&mut self, id: TicketId) -> Option<Ticket> {
        let index = self.bookings.iter().position(|t| t.id() == id)?;
        Some(self.bookings.remove(index))
    }
}
