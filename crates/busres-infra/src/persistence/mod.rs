//! Persistence implementations
//!
//! This module provides file-based implementations of the repository traits.

mod file_ticket_ledger;

pub use file_ticket_ledger::FileTicketLedger;
