//! Patient profile lookup, used by the booking path.

use log::debug;
use reqwest::Client;

use crate::errors::Result;
use crate::types::Patient;

use super::error_from;

pub struct PatientApi<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> PatientApi<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Fetch the authenticated patient's profile.
    pub async fn get_patient(&self, token: &str) -> Result<Patient> {
        let url = format!("{}/patient/{}", self.base_url, token);
        debug!("fetching patient profile");

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(error_from(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| crate::ApiError::Parse(format!("patient profile: {e}")))
    }
}
