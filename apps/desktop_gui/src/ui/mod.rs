//! UI layer for desktop GUI: app shell and the flight table widget.

pub mod app;
pub mod flight_table;

pub use app::{FlightListApp, APP_TITLE};
