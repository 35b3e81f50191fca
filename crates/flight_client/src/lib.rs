use async_trait::async_trait;
use reqwest::Client;
use shared::{domain::FlightRecord, error::LoadFailure};
use tracing::{error, info};
use url::Url;

pub mod config;

pub use config::{load_settings, ClientSettings, DEFAULT_ENDPOINT};

/// Anything that can produce the full flight list in one read.
#[async_trait]
pub trait FlightSource: Send + Sync {
    /// Human readable location of the source, used in diagnostics.
    fn describe(&self) -> String;

    async fn fetch_flights(&self) -> Result<Vec<FlightRecord>, LoadFailure>;
}

/// Reads the flight list with a single `GET` against a JSON endpoint.
///
/// No timeout, retry or auth is applied: the request is issued once and its
/// outcome reported as-is.
#[derive(Clone)]
pub struct HttpFlightSource {
    http: Client,
    endpoint: Url,
}

impl HttpFlightSource {
    pub fn new(endpoint: Url) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(http: Client, endpoint: Url) -> Self {
        Self { http, endpoint }
    }

    pub fn from_settings(settings: &ClientSettings) -> Self {
        Self::new(settings.endpoint_url.clone())
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl FlightSource for HttpFlightSource {
    fn describe(&self) -> String {
        self.endpoint.to_string()
    }

    async fn fetch_flights(&self) -> Result<Vec<FlightRecord>, LoadFailure> {
        let endpoint = self.endpoint.as_str();

        let response = self
            .http
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(|e| LoadFailure::transport(endpoint, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadFailure::status(endpoint, status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| LoadFailure::transport(endpoint, e.to_string()))?;

        decode_flight_list(endpoint, &body)
    }
}

/// Parses a response body that must be a JSON array of flight objects.
pub fn decode_flight_list(endpoint: &str, body: &[u8]) -> Result<Vec<FlightRecord>, LoadFailure> {
    serde_json::from_slice::<Vec<FlightRecord>>(body)
        .map_err(|e| LoadFailure::decode(endpoint, e.to_string()))
}

/// Loader boundary: performs one fetch and reports the outcome to the log.
///
/// The failure is still returned so the caller can decide what to leave
/// untouched; nothing here retries.
pub async fn load_flights(source: &dyn FlightSource) -> Result<Vec<FlightRecord>, LoadFailure> {
    let endpoint = source.describe();
    match source.fetch_flights().await {
        Ok(flights) => {
            info!(endpoint = %endpoint, count = flights.len(), "loaded flight list");
            Ok(flights)
        }
        Err(err) => {
            error!(endpoint = %endpoint, kind = err.kind(), "error fetching flight list: {err}");
            Err(err)
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
