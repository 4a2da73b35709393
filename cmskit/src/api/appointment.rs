//! The doctor dashboard's appointment listing.

use chrono::NaiveDate;
use log::debug;
use reqwest::Client;
use serde::Deserialize;

use crate::errors::Result;
use crate::types::AppointmentRecord;

use super::error_from;

#[derive(Debug, Deserialize)]
struct AppointmentList {
    #[serde(default)]
    appointments: Vec<AppointmentRecord>,
}

pub struct AppointmentApi<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> AppointmentApi<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Appointments for one day, optionally narrowed to a patient-name
    /// substring. Requires a doctor token.
    pub async fn get_appointments(
        &self,
        date: NaiveDate,
        patient_name: Option<&str>,
        token: &str,
    ) -> Result<Vec<AppointmentRecord>> {
        let url = format!(
            "{}/appointments/{}/{}/{}",
            self.base_url,
            date.format("%Y-%m-%d"),
            patient_name_segment(patient_name),
            token,
        );
        debug!("fetching appointments for {}", date.format("%Y-%m-%d"));

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(error_from(response).await);
        }

        let list: AppointmentList = response
            .json()
            .await
            .map_err(|e| crate::ApiError::Parse(format!("appointment list: {e}")))?;
        Ok(list.appointments)
    }
}

/// The backend route has fixed arity; an absent patient-name filter travels
/// as the literal segment `null`.
pub fn patient_name_segment(filter: Option<&str>) -> &str {
    match filter {
        Some(name) if !name.trim().is_empty() => name,
        _ => "null",
    }
}
