//! Domain layer for bus reservation
//!
//! Buses, tickets and the passenger's active bookings, plus the fare policy
//! and the ledger trait the infrastructure layer implements.

pub mod fleet;
pub mod model;
pub mod repository;
pub mod service;

pub use fleet::Fleet;
