//! Application service layer - booking session, config

pub mod config;
pub mod console;
pub mod repository;
pub mod session;

pub use config::Config;
pub use console::Console;
pub use session::{Booking, PassengerSession};
