//! Flight table widget: the control bar and the row-per-flight table.

use egui_extras::{Column, TableBuilder};
use shared::{
    domain::{FlightId, FlightRecord},
    view::ViewControls,
};

use crate::controller::events::TableIntent;

pub const COLUMN_TITLES: [&str; 13] = [
    "ID",
    "Gate",
    "Price",
    "Origin",
    "Airline",
    "Aircraft",
    "Duration",
    "Arrival Time",
    "Destination",
    "Flight Number",
    "Departure Time",
    "Seats Available",
    "Actions",
];

const HEADER_HEIGHT: f32 = 26.0;
const ROW_HEIGHT: f32 = 22.0;

/// Text for every data column of `flight`, in `COLUMN_TITLES` order
/// (the trailing action column has no text).
pub fn cell_values(flight: &FlightRecord) -> [String; 12] {
    [
        flight.id.to_string(),
        flight.gate.clone(),
        format_price(flight.price),
        flight.origin.clone(),
        flight.airline.clone(),
        flight.aircraft.clone(),
        flight.duration.clone(),
        flight.arrival_time.clone(),
        flight.destination.clone(),
        flight.flight_number.clone(),
        flight.departure_time.clone(),
        flight.seats_available.to_string(),
    ]
}

/// Whole prices render without a fractional part.
pub fn format_price(price: f64) -> String {
    format!("{price}")
}

pub fn row_count_label(shown: usize, total: usize) -> String {
    let noun = if total == 1 { "flight" } else { "flights" };
    format!("Showing {shown} of {total} {noun}")
}

pub struct ControlsResponse {
    pub sort: egui::Response,
    pub filter: egui::Response,
}

pub fn show_controls(
    ui: &mut egui::Ui,
    controls: &ViewControls,
    intents: &mut Vec<TableIntent>,
) -> ControlsResponse {
    ui.horizontal(|ui| {
        let sort = egui::Button::new("Sort by Price").selected(controls.sort_active);
        let sort = ui.add(sort);
        if sort.clicked() {
            intents.push(TableIntent::SortByPrice);
        }

        ui.add_space(12.0);

        let mut filter_text = controls.filter_text.clone();
        let filter = ui.add(
            egui::TextEdit::singleline(&mut filter_text)
                .hint_text("Find your AirLine")
                .desired_width(f32::INFINITY),
        );
        if filter.changed() {
            intents.push(TableIntent::FilterChanged(filter_text));
        }

        ControlsResponse { sort, filter }
    })
    .inner
}

/// Draws one row per flight and returns each row's Book button response.
pub fn show_table(
    ui: &mut egui::Ui,
    rows: &[&FlightRecord],
    intents: &mut Vec<TableIntent>,
) -> Vec<(FlightId, egui::Response)> {
    let mut book_buttons = Vec::with_capacity(rows.len());

    TableBuilder::new(ui)
        .id_salt("flight_table")
        .striped(true)
        .resizable(true)
        .sense(egui::Sense::hover())
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .columns(Column::auto().at_least(48.0), COLUMN_TITLES.len() - 1)
        .column(Column::remainder().at_least(64.0))
        .header(HEADER_HEIGHT, |mut header| {
            for title in COLUMN_TITLES {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for flight in rows {
                body.row(ROW_HEIGHT, |mut row| {
                    for value in cell_values(flight) {
                        row.col(|ui| {
                            ui.label(value);
                        });
                    }
                    row.col(|ui| {
                        // Table cells are salted by row index; the button id
                        // must follow the flight instead.
                        let book = ui
                            .scope_builder(
                                egui::UiBuilder::new().id(("book", &flight.id)),
                                |ui| ui.button("Book"),
                            )
                            .inner;
                        if book.clicked() {
                            intents.push(TableIntent::Book(flight.id.clone()));
                        }
                        book_buttons.push((flight.id.clone(), book));
                    });
                });
            }
        });

    book_buttons
}

#[cfg(test)]
#[path = "../tests/flight_table_tests.rs"]
mod tests;
