//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use crossbeam_channel::{Receiver, Sender, TrySendError};
use flight_client::{load_flights, FlightSource};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

/// Starts the worker thread. It lives until the UI drops its command sender.
pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    source: Arc<dyn FlightSource>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::LoadFlights { mount } => {
                        tracing::debug!(mount = mount.0, "backend: load_flights");
                        let source = source.clone();
                        let ui_tx = ui_tx.clone();
                        tokio::spawn(async move {
                            let event = match load_flights(source.as_ref()).await {
                                Ok(flights) => UiEvent::FlightsLoaded { mount, flights },
                                Err(failure) => UiEvent::LoadFailed { mount, failure },
                            };
                            forward(&ui_tx, event);
                        });
                    }
                }
            }

            tracing::debug!("backend: command queue closed, worker stopping");
        });
    })
}

fn forward(ui_tx: &Sender<UiEvent>, event: UiEvent) {
    match ui_tx.try_send(event) {
        Ok(()) => {}
        Err(TrySendError::Full(_)) => tracing::warn!("ui event queue is full; event dropped"),
        Err(TrySendError::Disconnected(_)) => {
            tracing::debug!("view closed before backend event arrived; event dropped")
        }
    }
}

#[cfg(test)]
#[path = "../tests/runtime_tests.rs"]
mod tests;
