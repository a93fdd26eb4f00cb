//! Repository trait definitions for data persistence

use busres_types::LedgerError;

use crate::model::Ticket;

/// Append-only record of issued tickets.
///
/// Entries are never rewritten; cancellations are not reflected here.
pub trait TicketLedger {
    /// Record one issued ticket
    fn append(&self, ticket: &Ticket) -> Result<(), LedgerError>;
}
