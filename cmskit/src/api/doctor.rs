//! Doctor endpoints: list, filter, add, delete.

use log::{debug, error};
use reqwest::Client;
use serde::Deserialize;

use crate::errors::Result;
use crate::types::{ActionOutcome, Doctor, NewDoctor};

use super::{error_from, json_or_empty, message_from};

#[derive(Debug, Deserialize)]
struct DoctorList {
    #[serde(default)]
    doctors: Vec<Doctor>,
}

pub struct DoctorApi<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> DoctorApi<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Fetch the full doctor list.
    pub async fn get_doctors(&self) -> Result<Vec<Doctor>> {
        let url = format!("{}/doctor", self.base_url);
        debug!("fetching doctors from {url}");

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(error_from(response).await);
        }

        let list: DoctorList = response
            .json()
            .await
            .map_err(|e| crate::ApiError::Parse(format!("doctor list: {e}")))?;
        Ok(list.doctors)
    }

    /// Fetch doctors matching the given filters. A filter that is empty or
    /// whitespace-only is omitted from the query entirely.
    pub async fn filter_doctors(
        &self,
        name: Option<&str>,
        time: Option<&str>,
        specialty: Option<&str>,
    ) -> Result<Vec<Doctor>> {
        let url = format!("{}/doctor/filter", self.base_url);
        let query = filter_query(name, time, specialty);
        debug!("filtering doctors with {} active filter(s)", query.len());

        let response = self.http.get(&url).query(&query).send().await?;
        if !response.status().is_success() {
            return Err(error_from(response).await);
        }

        let list: DoctorList = response
            .json()
            .await
            .map_err(|e| crate::ApiError::Parse(format!("doctor list: {e}")))?;
        Ok(list.doctors)
    }

    /// Add a doctor. Requires an admin token. The outcome is normalized to
    /// `{success, message}` whatever happens on the wire.
    pub async fn save_doctor(&self, doctor: &NewDoctor, token: &str) -> ActionOutcome {
        let url = format!("{}/doctor", self.base_url);

        let result = self
            .http
            .post(&url)
            .query(&[("token", token)])
            .json(doctor)
            .send()
            .await;

        match result {
            Ok(response) => {
                let success = response.status().is_success();
                let body = json_or_empty(response).await;
                let message = message_from(&body).unwrap_or_else(|| {
                    if success {
                        "Doctor saved.".to_string()
                    } else {
                        "Failed to save doctor.".to_string()
                    }
                });
                ActionOutcome { success, message }
            }
            Err(e) => {
                error!("error saving doctor: {e}");
                ActionOutcome {
                    success: false,
                    message: "Error saving doctor.".to_string(),
                }
            }
        }
    }

    /// Delete a doctor by id. Requires an admin token.
    pub async fn delete_doctor(&self, id: i64, token: &str) -> ActionOutcome {
        let url = format!("{}/doctor/{}", self.base_url, id);

        let result = self
            .http
            .delete(&url)
            .query(&[("token", token)])
            .send()
            .await;

        match result {
            Ok(response) => {
                let success = response.status().is_success();
                let body = json_or_empty(response).await;
                let message = message_from(&body).unwrap_or_else(|| {
                    if success {
                        "Doctor deleted.".to_string()
                    } else {
                        "Failed to delete doctor.".to_string()
                    }
                });
                ActionOutcome { success, message }
            }
            Err(e) => {
                error!("error deleting doctor: {e}");
                ActionOutcome {
                    success: false,
                    message: "Error deleting doctor.".to_string(),
                }
            }
        }
    }
}

/// Build the filter query, keeping only filters that are non-empty after
/// trimming.
pub fn filter_query(
    name: Option<&str>,
    time: Option<&str>,
    specialty: Option<&str>,
) -> Vec<(&'static str, String)> {
    let mut query = Vec::new();
    for (key, value) in [("name", name), ("time", time), ("specialty", specialty)] {
        if let Some(value) = value {
            let value = value.trim();
            if !value.is_empty() {
                query.push((key, value.to_string()));
            }
        }
    }
    query
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_query_omits_blank_filters() {
        let query = filter_query(Some("  "), Some("09:00-10:00"), Some(""));
        assert_eq!(query, vec![("time", "09:00-10:00".to_string())]);
    }

    #[test]
    fn test_filter_query_all_blank_is_empty() {
        assert!(filter_query(None, None, None).is_empty());
        assert!(filter_query(Some(""), Some("   "), None).is_empty());
    }

    #[test]
    fn test_filter_query_trims_values() {
        let query = filter_query(Some(" ada "), None, Some("cardiology"));
        assert_eq!(
            query,
            vec![
                ("name", "ada".to_string()),
                ("specialty", "cardiology".to_string()),
            ]
        );
    }
}
