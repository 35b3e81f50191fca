use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://api.npoint.io/378e02e8e732bb1ac55b";
pub const SETTINGS_FILE_NAME: &str = "flights.toml";
pub const ENDPOINT_ENV_VARS: [&str; 2] = ["FLIGHTS_ENDPOINT_URL", "APP__FLIGHTS_ENDPOINT_URL"];

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid endpoint url '{value}': {source}")]
    InvalidUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("endpoint url '{value}' must use http or https")]
    UnsupportedScheme { value: String },
    #[error("failed to read settings file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse settings file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub endpoint_url: Url,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            endpoint_url: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid url"),
        }
    }
}

impl ClientSettings {
    /// Replaces the endpoint when `raw` is a usable url, otherwise keeps the
    /// current one and logs why the override was skipped.
    pub fn apply_endpoint_override(&mut self, origin: &str, raw: &str) {
        match parse_endpoint(raw) {
            Ok(url) => {
                debug!(origin, endpoint = %url, "endpoint override applied");
                self.endpoint_url = url;
            }
            Err(err) => warn!(origin, "ignoring endpoint override: {err}"),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    endpoint_url: Option<String>,
}

pub fn parse_endpoint(raw: &str) -> Result<Url, SettingsError> {
    let value = raw.trim();
    let url = Url::parse(value).map_err(|source| SettingsError::InvalidUrl {
        value: value.to_string(),
        source,
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(SettingsError::UnsupportedScheme {
            value: value.to_string(),
        }),
    }
}

/// Settings files in increasing precedence: the per-user config dir, then
/// the working directory.
pub fn settings_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("jetsetgo").join(SETTINGS_FILE_NAME));
    }
    paths.push(PathBuf::from(SETTINGS_FILE_NAME));
    paths
}

pub fn load_settings() -> ClientSettings {
    load_settings_from(&settings_search_paths(), |name| std::env::var(name).ok())
}

pub fn load_settings_from(
    paths: &[PathBuf],
    env: impl Fn(&str) -> Option<String>,
) -> ClientSettings {
    let mut settings = ClientSettings::default();

    for path in paths {
        match read_settings_file(path) {
            Ok(Some(file)) => {
                if let Some(raw) = file.endpoint_url {
                    settings.apply_endpoint_override(&path.display().to_string(), &raw);
                }
            }
            Ok(None) => {}
            Err(err) => warn!("skipping settings file: {err}"),
        }
    }

    for name in ENDPOINT_ENV_VARS {
        if let Some(raw) = env(name).filter(|v| !v.trim().is_empty()) {
            settings.apply_endpoint_override(name, &raw);
        }
    }

    settings
}

fn read_settings_file(path: &Path) -> Result<Option<FileSettings>, SettingsError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(SettingsError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    toml::from_str::<FileSettings>(&raw)
        .map(Some)
        .map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
