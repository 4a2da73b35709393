//! Admin and doctor credential checks.
//!
//! Both flows share one branch structure: a non-2xx response means rejected
//! credentials, and a 2xx response without any recognized token field is a
//! should-not-happen failure surfaced to the caller instead of silently
//! proceeding.

use log::{debug, warn};
use reqwest::Client;
use serde_json::{json, Value};

use crate::errors::{ApiError, Result};
use crate::types::LoginResponse;

use super::{json_or_empty, message_from};

pub struct AuthApi<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Admin login with username and password. Returns the bearer token.
    pub async fn admin_login(&self, username: &str, password: &str) -> Result<String> {
        let url = format!("{}/admin", self.base_url);
        self.login(&url, json!({ "username": username, "password": password }))
            .await
    }

    /// Doctor login with email and password. Returns the bearer token.
    pub async fn doctor_login(&self, email: &str, password: &str) -> Result<String> {
        let url = format!("{}/doctor/login", self.base_url);
        self.login(&url, json!({ "email": email, "password": password }))
            .await
    }

    async fn login(&self, url: &str, credentials: Value) -> Result<String> {
        debug!("posting credentials to {url}");

        let response = self.http.post(url).json(&credentials).send().await?;
        let success = response.status().is_success();
        // Error bodies may be empty or non-JSON; read them tolerantly.
        let body = json_or_empty(response).await;

        if !success {
            let message =
                message_from(&body).unwrap_or_else(|| "Invalid credentials!".to_string());
            warn!("login rejected: {message}");
            return Err(ApiError::AuthFailed(message));
        }

        let login: LoginResponse = serde_json::from_value(body)
            .map_err(|e| ApiError::Parse(format!("login response: {e}")))?;
        login.token.ok_or(ApiError::MissingToken)
    }
}
