//! Backend commands queued from UI to backend worker.

use crate::controller::lifecycle::MountId;

#[derive(Debug)]
pub enum BackendCommand {
    LoadFlights { mount: MountId },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::LoadFlights { .. } => "load_flights",
        }
    }
}
