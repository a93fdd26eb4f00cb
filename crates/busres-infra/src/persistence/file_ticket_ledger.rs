//! File-based implementation of TicketLedger
//!
//! One pipe-delimited line per issued ticket, appended and never read back.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use busres_domain::model::Ticket;
use busres_domain::repository::TicketLedger;
use busres_types::LedgerError;
use tracing::debug;

/// Append-only ticket ledger on disk (created on first write)
#[derive(Debug, Clone)]
pub struct FileTicketLedger {
    path: PathBuf,
}

impl FileTicketLedger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn write_failed(&self, source: std::io::Error) -> LedgerError {
        LedgerError::WriteFailed {
            path: self.path.clone(),
            source,
        }
    }
}

impl TicketLedger for FileTicketLedger {
    fn append(&self, ticket: &Ticket) -> Result<(), LedgerError> {
        // The handle is dropped (and closed) at the end of this scope on every path.
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.write_failed(e))?;

        writeln!(file, "{}", ticket.ledger_line()).map_err(|e| self.write_failed(e))?;
        file.flush().map_err(|e| self.write_failed(e))?;

        debug!(ticket = ticket.id(), path = %self.path.display(), "ticket appended to ledger");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use busres_domain::model::{Bus, TicketCounter};
    use busres_domain::service::FareRates;
    use busres_types::BusKind;
    use tempfile::tempdir;

    fn ac_bus() -> Bus {
        Bus::new(
            1,
            BusKind::Ac,
            10,
            vec!["A".to_string(), "B".to_string(), "C".to_string()],
            &FareRates::default(),
        )
    }

    #[test]
    fn test_append_creates_file_and_adds_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tickets.txt");
        let ledger = FileTicketLedger::new(&path);
        let bus = ac_bus();
        let mut counter = TicketCounter::default();

        let first = Ticket::issue(&mut counter, &bus, "Asha", "A", "C", 10.0);
        let second = Ticket::issue(&mut counter, &bus, "Asha", "B", "C", 3.0);
        ledger.append(&first).unwrap();
        ledger.append(&second).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "1000 | Asha | A -> C | Fare: 25.0\n1001 | Asha | B -> C | Fare: 7.5\n"
        );
    }

    #[test]
    fn test_append_keeps_existing_history() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tickets.txt");
        std::fs::write(&path, "999 | Old | X -> Y | Fare: 1.0\n").unwrap();

        let ledger = FileTicketLedger::new(&path);
        let mut counter = TicketCounter::default();
        let ticket = Ticket::issue(&mut counter, &ac_bus(), "Asha", "A", "B", 2.0);
        ledger.append(&ticket).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("999 | Old"));
        assert!(content.ends_with("1000 | Asha | A -> B | Fare: 5.0\n"));
    }

    #[test]
    fn test_append_reports_unwritable_path() {
        let dir = tempdir().unwrap();
        let ledger = FileTicketLedger::new(dir.path().join("missing").join("tickets.txt"));
        let mut counter = TicketCounter::default();
        let ticket = Ticket::issue(&mut counter, &ac_bus(), "Asha", "A", "B", 2.0);

        let err = ledger.append(&ticket).unwrap_err();
        assert!(matches!(err, LedgerError::WriteFailed { .. }));
    }
}
