//! Error types for bus-reservation

use std::path::PathBuf;

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Booking and cancellation failures reported back to the console
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BookingError {
    #[error("Invalid route! This bus does not travel from {origin} to {destination}.")]
    InvalidRoute { origin: String, destination: String },

    #[error("No seats available on this bus.")]
    NoSeatsAvailable { bus_id: u32 },

    /// Carries the id as typed, which may be outside the valid id range
    #[error("Bus not available, try again!")]
    BusNotFound(i64),

    #[error("Invalid Ticket ID.")]
    TicketNotFound(i64),
}

/// Ticket ledger failures
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Failed to write ticket ledger {}: {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Booking(#[from] BookingError),

    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_route_names_both_stops() {
        let err = BookingError::InvalidRoute {
            origin: "C".to_string(),
            destination: "A".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid route! This bus does not travel from C to A."
        );
    }

    #[test]
    fn test_ledger_error_mentions_path() {
        let err = LedgerError::WriteFailed {
            path: PathBuf::from("/nowhere/tickets.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let text = Error::from(err).to_string();
        assert!(text.contains("/nowhere/tickets.txt"));
        assert!(text.contains("missing"));
    }
}
