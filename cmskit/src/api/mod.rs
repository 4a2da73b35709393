//! Typed clients for the CMS REST API.
//!
//! One [`ApiHandle`] owns the HTTP client and the configured base URL;
//! per-area sub-clients borrow it. No call carries a timeout or retries:
//! every failure is normalized and surfaced to the caller exactly once.

mod appointment;
mod auth;
mod doctor;
mod patient;

pub use appointment::{patient_name_segment, AppointmentApi};
pub use auth::AuthApi;
pub use doctor::{filter_query, DoctorApi};
pub use patient::PatientApi;

use serde_json::{Map, Value};

use crate::config::ApiConfig;
use crate::errors::ApiError;

/// Root API handle: one HTTP client plus the configured base URL.
#[derive(Debug, Clone)]
pub struct ApiHandle {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiHandle {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn doctors(&self) -> DoctorApi<'_> {
        DoctorApi::new(&self.http, self.base_url())
    }

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(&self.http, self.base_url())
    }

    pub fn appointments(&self) -> AppointmentApi<'_> {
        AppointmentApi::new(&self.http, self.base_url())
    }

    pub fn patients(&self) -> PatientApi<'_> {
        PatientApi::new(&self.http, self.base_url())
    }
}

/// Parse a response body as JSON, treating an empty or malformed body as an
/// empty object. Some backends return no body at all on errors.
pub(crate) async fn json_or_empty(response: reqwest::Response) -> Value {
    match response.text().await {
        Ok(text) if !text.trim().is_empty() => {
            serde_json::from_str(&text).unwrap_or_else(|_| Value::Object(Map::new()))
        }
        _ => Value::Object(Map::new()),
    }
}

/// Pull a human-readable `message` out of a JSON body, if one is present.
pub(crate) fn message_from(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// Map a non-2xx response to the server-error variant, keeping whatever the
/// body said.
pub(crate) async fn error_from(response: reqwest::Response) -> ApiError {
    let status = response.status().as_u16();
    let message = response.text().await.unwrap_or_default();
    ApiError::Server { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_from() {
        let body: Value = serde_json::from_str(r#"{"message": "Doctor deleted"}"#).unwrap();
        assert_eq!(message_from(&body).as_deref(), Some("Doctor deleted"));

        let body: Value = serde_json::from_str(r#"{"error": "nope"}"#).unwrap();
        assert_eq!(message_from(&body), None);
    }
}
