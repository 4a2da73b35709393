//! Wire types for the CMS backend, plus the display helpers the card and
//! row renderers lean on.

use serde::{Deserialize, Serialize};

/// A doctor as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub available_times: Vec<String>,
}

impl Doctor {
    /// Card title; a record without a name gets a literal placeholder.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => "Unknown Doctor",
        }
    }

    pub fn specialty_label(&self) -> &str {
        match self.specialty.as_deref() {
            Some(specialty) if !specialty.is_empty() => specialty,
            _ => "—",
        }
    }

    pub fn email_label(&self) -> &str {
        match self.email.as_deref() {
            Some(email) if !email.is_empty() => email,
            _ => "—",
        }
    }

    /// Joined slot list, or an explicit no-availability string.
    pub fn availability_label(&self) -> String {
        if self.available_times.is_empty() {
            "No availability".to_string()
        } else {
            self.available_times.join(", ")
        }
    }
}

/// Payload for the admin add-doctor operation.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewDoctor {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub specialty: String,
    pub available_times: Vec<String>,
}

/// One appointment as the doctor dashboard consumes it: a transient
/// row-rendering structure, returned sorted by time by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRecord {
    pub id: i64,
    pub doctor_id: i64,
    pub patient_id: i64,
    pub patient_name: String,
    pub patient_phone: String,
    pub patient_email: String,
    pub appointment_time: String,
}

/// Patient profile, fetched before booking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Patient {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub address: Option<String>,
}

/// Login payload. Backends differ on the token field name; the aliases
/// absorb the `accessToken` and `jwt` variants into one normalized field.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default, alias = "accessToken", alias = "jwt")]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Normalized outcome of add/delete style operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    pub success: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doctor(name: Option<&str>, specialty: Option<&str>, times: &[&str]) -> Doctor {
        Doctor {
            id: 1,
            name: name.map(str::to_string),
            specialty: specialty.map(str::to_string),
            email: None,
            phone: None,
            available_times: times.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_display_name_placeholder() {
        assert_eq!(doctor(None, None, &[]).display_name(), "Unknown Doctor");
        assert_eq!(doctor(Some(""), None, &[]).display_name(), "Unknown Doctor");
        assert_eq!(doctor(Some("Ada Singh"), None, &[]).display_name(), "Ada Singh");
    }

    #[test]
    fn test_meta_labels() {
        let d = doctor(Some("Ada Singh"), None, &[]);
        assert_eq!(d.specialty_label(), "—");
        assert_eq!(d.email_label(), "—");

        let d = doctor(Some("Ada Singh"), Some("Cardiology"), &[]);
        assert_eq!(d.specialty_label(), "Cardiology");
    }

    #[test]
    fn test_availability_label() {
        assert_eq!(doctor(None, None, &[]).availability_label(), "No availability");
        assert_eq!(
            doctor(None, None, &["09:00-10:00", "10:00-11:00"]).availability_label(),
            "09:00-10:00, 10:00-11:00"
        );
    }

    #[test]
    fn test_doctor_wire_field_names() {
        let json = r#"{
            "id": 7,
            "name": "Ada Singh",
            "specialty": "Cardiology",
            "email": "ada@clinic.test",
            "phone": "555-0100",
            "availableTimes": ["09:00-10:00"]
        }"#;
        let d: Doctor = serde_json::from_str(json).expect("doctor json");
        assert_eq!(d.available_times, vec!["09:00-10:00"]);

        let out = serde_json::to_string(&d).expect("doctor json out");
        assert!(out.contains("availableTimes"));
    }

    #[test]
    fn test_login_response_token_aliases() {
        for body in [
            r#"{"token": "t1"}"#,
            r#"{"accessToken": "t1"}"#,
            r#"{"jwt": "t1"}"#,
        ] {
            let login: LoginResponse = serde_json::from_str(body).expect("login json");
            assert_eq!(login.token.as_deref(), Some("t1"));
        }
    }

    #[test]
    fn test_login_response_without_token() {
        let login: LoginResponse =
            serde_json::from_str(r#"{"message": "welcome"}"#).expect("login json");
        assert!(login.token.is_none());
        assert_eq!(login.message.as_deref(), Some("welcome"));
    }
}
