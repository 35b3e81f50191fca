use std::sync::Arc;

mod backend_bridge;
mod controller;
mod ui;

use anyhow::{anyhow, Result};
use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use flight_client::{config::parse_endpoint, load_settings, FlightSource, HttpFlightSource};
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::{FlightListApp, APP_TITLE};

#[derive(Parser, Debug)]
#[command(about = "Browse, filter and sort the JetSetGo flight list")]
struct Args {
    /// Flight list endpoint; overrides flights.toml and FLIGHTS_ENDPOINT_URL.
    #[arg(long)]
    endpoint: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(raw) = args.endpoint.as_deref() {
        settings.endpoint_url = parse_endpoint(raw)?;
    }
    tracing::info!(endpoint = %settings.endpoint_url, "starting flight list");

    let source: Arc<dyn FlightSource> = Arc::new(HttpFlightSource::from_settings(&settings));
    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, source);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([900.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|_cc| {
            Ok(Box::new(FlightListApp::new(cmd_tx, ui_rx, |flight| {
                tracing::info!(
                    flight_id = %flight.id,
                    flight_number = %flight.flight_number,
                    "book pressed; booking is not available"
                );
            })))
        }),
    )
    .map_err(|err| anyhow!("flight list window failed: {err}"))
}
