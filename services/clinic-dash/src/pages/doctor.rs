// services/clinic-dash/src/pages/doctor.rs
//
// Hospital CMS Dashboard - Doctor Dashboard Page
//
// One table of the day's appointments. The date defaults to today; the
// search bar narrows by patient name. Every control change triggers a full
// reload that replaces the table body.

use chrono::NaiveDate;
use leptos::*;

use cmskit::types::AppointmentRecord;

use crate::browser;
use crate::components::{AppointmentRow, APPOINTMENT_COLUMNS};
use crate::state::AppState;

#[component]
pub fn DoctorDashboard(state: AppState) -> impl IntoView {
    let appointments = create_rw_signal(Vec::<AppointmentRecord>::new());
    let load_error = create_rw_signal(false);
    let selected_date = create_rw_signal(today_iso());
    // None means unfiltered; the wire-level sentinel lives in the API kit.
    let patient_name = create_rw_signal(Option::<String>::None);

    let reload = {
        let api = state.api.clone();
        let session = state.session;
        move || {
            let Some(token) = session.token() else {
                // The header gate redirects privileged pages without a
                // token; don't fire an unauthenticated request meanwhile.
                log::warn!("doctor dashboard loaded without a token");
                load_error.set(true);
                appointments.set(Vec::new());
                return;
            };

            let date_text = selected_date.get_untracked();
            let name = patient_name.get_untracked();
            let api = api.clone();
            spawn_local(async move {
                let Ok(date) = NaiveDate::parse_from_str(&date_text, "%Y-%m-%d") else {
                    log::error!("invalid date from picker: {date_text}");
                    load_error.set(true);
                    appointments.set(Vec::new());
                    return;
                };

                match api
                    .appointments()
                    .get_appointments(date, name.as_deref(), &token)
                    .await
                {
                    Ok(list) => {
                        load_error.set(false);
                        appointments.set(list);
                    }
                    Err(e) => {
                        log::error!("error loading appointments: {e}");
                        load_error.set(true);
                        appointments.set(Vec::new());
                    }
                }
            });
        }
    };

    // Initial render
    reload();

    let reload_on_search = reload.clone();
    let reload_on_today = reload.clone();
    let reload_on_date = reload;

    let status_message = move || status_row_message(load_error.get());

    view! {
        <section class="dashboard">
            <div class="table-controls">
                <input
                    id="searchBar"
                    type="text"
                    placeholder="Search by patient name"
                    on:input=move |ev| {
                        patient_name.set(normalize_search(&event_target_value(&ev)));
                        reload_on_search();
                    }
                />
                <button
                    id="todayButton"
                    class="btn"
                    on:click=move |_| {
                        selected_date.set(today_iso());
                        reload_on_today();
                    }
                >
                    "Today"
                </button>
                <input
                    id="datePicker"
                    type="date"
                    prop:value=move || selected_date.get()
                    on:change=move |ev| {
                        selected_date.set(event_target_value(&ev));
                        reload_on_date();
                    }
                />
            </div>

            <table class="appointments-table">
                <thead>
                    <tr>
                        <th>"Patient ID"</th>
                        <th>"Name"</th>
                        <th>"Phone"</th>
                        <th>"Email"</th>
                        <th>"Time"</th>
                    </tr>
                </thead>
                <tbody id="patientTableBody">
                    <Show
                        when=move || !appointments.get().is_empty()
                        fallback=move || {
                            view! {
                                <tr>
                                    <td colspan=APPOINTMENT_COLUMNS.to_string()>
                                        {status_message()}
                                    </td>
                                </tr>
                            }
                        }
                    >
                        <For
                            each=move || appointments.get()
                            key=|appointment| appointment.id
                            children=|appointment| {
                                view! { <AppointmentRow appointment=appointment /> }
                            }
                        />
                    </Show>
                </tbody>
            </table>
        </section>
    }
}

/// Today's date in the ISO form the date picker and the backend both use.
fn today_iso() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// A search box with only whitespace means "no filter".
fn normalize_search(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Copy for the single full-width row shown instead of results.
fn status_row_message(error: bool) -> &'static str {
    if error {
        "Error loading appointments. Try again later."
    } else {
        "No Appointments found for today."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_today_iso_shape() {
        let today = today_iso();
        assert!(NaiveDate::parse_from_str(&today, "%Y-%m-%d").is_ok());
    }

    #[test]
    fn test_normalize_search() {
        assert_eq!(normalize_search(""), None);
        assert_eq!(normalize_search("   "), None);
        assert_eq!(normalize_search(" ada "), Some("ada".to_string()));
    }

    #[test]
    fn test_status_row_message() {
        assert_eq!(status_row_message(false), "No Appointments found for today.");
        assert_eq!(
            status_row_message(true),
            "Error loading appointments. Try again later."
        );
    }
}
