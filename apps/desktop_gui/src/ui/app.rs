use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::{FlightId, FlightRecord};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{TableIntent, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::reducer::{FlightListState, LoadPhase};
use crate::ui::flight_table;

pub const APP_TITLE: &str = "JetSetGo - Simplifying Flight Bookings";

/// Callback run when a row's "Book" button is pressed.
pub type BookHandler = Box<dyn FnMut(&FlightRecord)>;

pub struct FlightListApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    state: FlightListState,
    on_book: BookHandler,
}

impl FlightListApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        on_book: impl FnMut(&FlightRecord) + 'static,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            state: FlightListState::new(),
            on_book: Box::new(on_book),
        }
    }

    /// Issues the one load for this mount. Later frames are no-ops.
    fn mount_if_needed(&mut self) {
        if let Some(mount) = self.state.mount() {
            tracing::info!(mount = mount.0, "flight list mounted; requesting flights");
            dispatch_backend_command(&self.cmd_tx, BackendCommand::LoadFlights { mount });
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.state.handle_event(event);
        }
    }

    fn apply_intents(&mut self, intents: Vec<TableIntent>) {
        for intent in intents {
            match intent {
                TableIntent::Book(id) => self.book(&id),
                other => self.state.apply(other),
            }
        }
    }

    fn book(&mut self, id: &FlightId) {
        match self.state.flight(id) {
            Some(flight) => (self.on_book)(flight),
            None => tracing::warn!(flight_id = %id, "book pressed for unknown flight"),
        }
    }

    fn show(&mut self, ctx: &egui::Context) {
        let mut intents = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(APP_TITLE);
            });
            ui.add_space(12.0);

            flight_table::show_controls(ui, self.state.controls(), &mut intents);
            ui.add_space(12.0);

            let rows = self.state.rows();
            ui.label(flight_table::row_count_label(rows.len(), self.state.total()));
            ui.separator();

            egui::ScrollArea::horizontal().show(ui, |ui| {
                flight_table::show_table(ui, &rows, &mut intents);
            });
        });

        self.apply_intents(intents);
    }
}

impl eframe::App for FlightListApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.mount_if_needed();
        self.process_ui_events();
        self.show(ctx);

        // Backend events only arrive while the load is outstanding.
        if self.state.phase() == LoadPhase::Requested {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

impl Drop for FlightListApp {
    fn drop(&mut self) {
        self.state.teardown();
    }
}

#[cfg(test)]
#[path = "../tests/app_tests.rs"]
mod tests;
