use std::time::Duration;

use reqwest::{Client, StatusCode};
use secrecy::ExposeSecret;
use serde::Serialize;
use url::Url;

use crate::domain::{RegistrationForm, Role};

/// Where registrations are posted, relative to the backend's base URL.
pub const REGISTRATION_PATH: &str = "/api/register";

/// A client for the Fetchitt account backend.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http_client: Client,
    registration_url: Url,
    timeout: Option<Duration>,
}

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The request never completed, or the reply was not the JSON we expected.
    #[error("failed to reach the registration backend")]
    Transport(#[from] reqwest::Error),
}

/// What the backend said about a registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationReply {
    pub status: StatusCode,
    /// The `message` field of the reply body, when it has one.
    pub message: Option<String>,
}

impl RegistrationReply {
    pub fn is_accepted(&self) -> bool {
        self.status.is_success()
    }
}

impl BackendClient {
    /// Creates a client for the backend at `base_url`.
    ///
    /// The registration path is appended to `base_url` as-is, so any path prefix on
    /// the base survives. `timeout` bounds each request; `None` leaves the transport
    /// default in place.
    pub fn new(base_url: Url, timeout: Option<Duration>) -> Result<Self, url::ParseError> {
        let registration_url = Url::parse(&format!(
            "{}{}",
            base_url.as_str().trim_end_matches('/'),
            REGISTRATION_PATH
        ))?;

        Ok(Self {
            http_client: Client::new(),
            registration_url,
            timeout,
        })
    }

    /// The full URL registrations are posted to.
    pub fn registration_url(&self) -> &Url {
        &self.registration_url
    }

    /// Posts `form` and `role` to the registration endpoint.
    ///
    /// Any HTTP status counts as a reply; the caller decides what a rejection means.
    /// An empty `message`, or one that isn't text or a number, counts as no message.
    /// Returns an `Err` if the request can't be completed or the body isn't JSON.
    #[tracing::instrument(
        name = "Posting registration to the backend",
        skip(self, form),
        fields(registration_email = %form.email())
    )]
    pub async fn register(
        &self,
        form: &RegistrationForm,
        role: Role,
    ) -> Result<RegistrationReply, BackendError> {
        let body = RegisterRequest {
            full_name: form.full_name(),
            email: form.email(),
            password: form.password().expose_secret(),
            role,
        };

        let mut request = self.http_client.post(self.registration_url.clone()).json(&body);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();
        let reply: serde_json::Value = response.json().await?;
        tracing::debug!(%status, "Registration backend replied");

        Ok(RegistrationReply {
            status,
            message: reply.get("message").and_then(message_text),
        })
    }
}

/// The body the registration endpoint expects.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RegisterRequest<'a> {
    full_name: &'a str,
    email: &'a str,
    password: &'a str,
    role: Role,
}

/// Turns the reply's `message` into banner text. Blank strings, zero, `false`, `null`
/// and nested objects or arrays all fall back to the caller's default.
fn message_text(message: &serde_json::Value) -> Option<String> {
    match message {
        serde_json::Value::String(text) if !text.is_empty() => Some(text.clone()),
        serde_json::Value::Number(number) if number.as_f64() != Some(0.0) => {
            Some(number.to_string())
        }
        serde_json::Value::Bool(true) => Some("true".into()),
        _ => None,
    }
}
