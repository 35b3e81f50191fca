//! Backend-to-UI events and the intents raised by the flight table.

use shared::{
    domain::{FlightId, FlightRecord},
    error::LoadFailure,
};

use crate::controller::lifecycle::MountId;

#[derive(Debug)]
pub enum UiEvent {
    FlightsLoaded {
        mount: MountId,
        flights: Vec<FlightRecord>,
    },
    LoadFailed {
        mount: MountId,
        failure: LoadFailure,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableIntent {
    SortByPrice,
    FilterChanged(String),
    Book(FlightId),
}
