use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::backend_client::BackendClient;

/// The backend every registration goes to when nothing else is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

/// App-wide configuration
#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub backend: BackendSettings,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
}

/// Where registrations are forwarded to.
#[derive(Deserialize, Clone, Debug)]
pub struct BackendSettings {
    pub base_url: String,
    /// No timeout is applied beyond the transport's own when this is absent.
    pub timeout_milliseconds: Option<u64>,
}

impl BackendSettings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_milliseconds.map(Duration::from_millis)
    }

    /// Builds the client that talks to the registration backend.
    ///
    /// Returns an `Err` if `base_url` is not a valid URL.
    pub fn client(&self) -> Result<BackendClient, url::ParseError> {
        let base_url = Url::parse(&self.base_url)?;
        BackendClient::new(base_url, self.timeout())
    }
}

/// Reads app configuration.
///
/// Built-in defaults are layered under an optional `configuration` file in the working
/// directory, then `APP_`-prefixed environment variables (e.g. `APP_APPLICATION__PORT`).
/// `BACKEND_URL` overrides the backend base URL last of all.
///
/// Returns an error if the merged sources can't be parsed into a `Settings` struct.
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    config::Config::builder()
        .set_default("application.host", "127.0.0.1")?
        .set_default("application.port", 8000)?
        .set_default("backend.base_url", DEFAULT_BACKEND_URL)?
        .add_source(config::File::with_name("configuration").required(false))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .set_override_option("backend.base_url", std::env::var("BACKEND_URL").ok())?
        .build()?
        .try_deserialize()
}
