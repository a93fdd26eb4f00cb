//! Interactive console driver
//!
//! `MENU -> {list, book, cancel} -> MENU`, until option 4 or end of input.
//! Every failure below the menu is printed and the loop carries on.

use std::io::{BufRead, Write};
use std::ops::ControlFlow;
use std::str::FromStr;

use busres_domain::model::Passenger;
use busres_domain::repository::TicketLedger;
use busres_domain::Fleet;
use busres_types::{BookingError, Error, Result, TicketId};
use tracing::debug;

use crate::session::PassengerSession;

const INVALID_NUMBER: &str = "Invalid input, please enter a number.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    ListBuses,
    Book,
    Cancel,
    Exit,
}

impl MenuChoice {
    fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(MenuChoice::ListBuses),
            2 => Some(MenuChoice::Book),
            3 => Some(MenuChoice::Cancel),
            4 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// What a single prompt produced
enum Answer<T> {
    Value(T),
    /// Not a number; already reported to the user
    Invalid,
    /// Input stream ended
    Closed,
}

fn parse_number<T: FromStr>(raw: &str) -> Result<T> {
    raw.parse()
        .map_err(|_| Error::InvalidInput(format!("expected a number, got {:?}", raw)))
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Greet, open a session for the passenger and serve the menu until exit
    pub fn run<L: TicketLedger>(&mut self, fleet: &mut Fleet, ledger: L) -> Result<()> {
        writeln!(self.output, "Welcome to the Bus Reservation System")?;

        let name = match self.ask_text("Enter your name: ")? {
            Answer::Value(name) => name,
            _ => return Ok(()),
        };
        let email = match self.ask_text("Enter your email: ")? {
            Answer::Value(email) => email,
            _ => return Ok(()),
        };
        let mut session = PassengerSession::new(Passenger::new(name, email), ledger);

        loop {
            writeln!(
                self.output,
                "\n1. View Buses\n2. Book Ticket\n3. Cancel Ticket\n4. Exit"
            )?;
            let choice = match self.ask_number::<i64>("Choose an option: ")? {
                Answer::Value(n) => n,
                Answer::Invalid => continue,
                Answer::Closed => break,
            };

            let flow = match MenuChoice::from_number(choice) {
                Some(MenuChoice::ListBuses) => self.list_buses(fleet)?,
                Some(MenuChoice::Book) => self.book_flow(fleet, &mut session)?,
                Some(MenuChoice::Cancel) => self.cancel_flow(fleet, &mut session)?,
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Thank you for using the Bus Reservation System!")?;
                    ControlFlow::Break(())
                }
                None => ControlFlow::Continue(()),
            };

            if flow.is_break() {
                break;
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn list_buses(&mut self, fleet: &Fleet) -> Result<ControlFlow<()>> {
        writeln!(self.output, "Available Buses:")?;
        for bus in fleet.buses() {
            writeln!(self.output, "{}", bus.describe())?;
        }
        Ok(ControlFlow::Continue(()))
    }

    fn book_flow<L: TicketLedger>(
        &mut self,
        fleet: &mut Fleet,
        session: &mut PassengerSession<L>,
    ) -> Result<ControlFlow<()>> {
        let entered = match self.ask_number::<i64>("Enter Bus Number: ")? {
            Answer::Value(id) => id,
            Answer::Invalid => return Ok(ControlFlow::Continue(())),
            Answer::Closed => return Ok(ControlFlow::Break(())),
        };

        let bus_id = match u32::try_from(entered).ok().filter(|id| fleet.get(*id).is_some()) {
            Some(id) => id,
            None => {
                writeln!(self.output, "{}", BookingError::BusNotFound(entered))?;
                return Ok(ControlFlow::Continue(()));
            }
        };

        let source = match self.ask_text("Enter Source: ")? {
            Answer::Value(s) => s,
            _ => return Ok(ControlFlow::Break(())),
        };
        let destination = match self.ask_text("Enter Destination: ")? {
            Answer::Value(s) => s,
            _ => return Ok(ControlFlow::Break(())),
        };
        let distance = match self.ask_number::<f64>("Enter Distance (km): ")? {
            Answer::Value(d) => d,
            Answer::Invalid => return Ok(ControlFlow::Continue(())),
            Answer::Closed => return Ok(ControlFlow::Break(())),
        };

        match session.book_on(fleet, bus_id, &source, &destination, distance) {
            Ok(booking) => {
                if let Some(e) = booking.ledger_error {
                    writeln!(self.output, "Warning: ticket was not saved to the ledger ({})", e)?;
                }
                writeln!(
                    self.output,
                    "Ticket Booked Successfully! Ticket ID: {}",
                    booking.ticket.id()
                )?;
            }
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(ControlFlow::Continue(()))
    }

    fn cancel_flow<L: TicketLedger>(
        &mut self,
        fleet: &mut Fleet,
        session: &mut PassengerSession<L>,
    ) -> Result<ControlFlow<()>> {
        let entered = match self.ask_number::<i64>("Enter Ticket ID to Cancel: ")? {
            Answer::Value(id) => id,
            Answer::Invalid => return Ok(ControlFlow::Continue(())),
            Answer::Closed => return Ok(ControlFlow::Break(())),
        };

        let outcome = match TicketId::try_from(entered) {
            Ok(ticket_id) => session.cancel(fleet, ticket_id).map(|_| ()),
            Err(_) => Err(BookingError::TicketNotFound(entered)),
        };
        match outcome {
            Ok(()) => writeln!(self.output, "Ticket Cancelled Successfully!")?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(ControlFlow::Continue(()))
    }

    fn ask_text(&mut self, label: &str) -> Result<Answer<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(Answer::Closed);
        }
        // Text is kept as typed apart from the line terminator
        Ok(Answer::Value(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    fn ask_number<T: FromStr>(&mut self, label: &str) -> Result<Answer<T>> {
        let raw = match self.ask_text(label)? {
            Answer::Value(raw) => raw,
            _ => return Ok(Answer::Closed),
        };

        match parse_number(raw.trim()) {
            Ok(n) => Ok(Answer::Value(n)),
            Err(Error::InvalidInput(detail)) => {
                debug!("{}", detail);
                writeln!(self.output, "{}", INVALID_NUMBER)?;
                Ok(Answer::Invalid)
            }
            Err(e) => Err(e),
        }
    }
}
