// services/clinic-dash/src/components/doctor_card.rs
//
// Hospital CMS Dashboard - Doctor Card Component
//
// One card per doctor, with a role-conditional action: admins can delete,
// patients are nudged to log in, logged-in patients can book. The booking
// overlay is injected by the hosting page; a card rendered without one
// falls back to an alert.

use leptos::*;

use cmskit::session::Role;
use cmskit::types::{Doctor, Patient};

use crate::browser;
use crate::state::AppState;

#[component]
pub fn DoctorCard(
    state: AppState,
    doctor: Doctor,
    #[prop(optional)] on_book: Option<Callback<(Doctor, Patient)>>,
    #[prop(optional)] on_deleted: Option<Callback<i64>>,
) -> impl IntoView {
    let role = state.session.role();

    let name = doctor.display_name().to_string();
    let specialty = doctor.specialty_label().to_string();
    let email = doctor.email_label().to_string();
    let availability = format!("Available: {}", doctor.availability_label());

    let action = match role {
        Some(Role::Admin) => {
            let session = state.session;
            let api = state.api.clone();
            let doctor_id = doctor.id;
            let confirm_prompt = format!("Delete Dr. {name}?");

            view! {
                <button class="btn btn-danger" on:click=move |_| {
                    if !browser::confirm(&confirm_prompt) {
                        return;
                    }
                    let Some(token) = session.token() else {
                        browser::alert("Admin session expired. Please log in again.");
                        browser::redirect("/");
                        return;
                    };
                    let api = api.clone();
                    spawn_local(async move {
                        let outcome = api.doctors().delete_doctor(doctor_id, &token).await;
                        if outcome.success {
                            if let Some(on_deleted) = on_deleted {
                                on_deleted.call(doctor_id);
                            }
                        } else {
                            log::error!("delete doctor {doctor_id} failed: {}", outcome.message);
                        }
                        browser::alert(&outcome.message);
                    });
                }>
                    "Delete"
                </button>
            }
            .into_view()
        }

        Some(Role::LoggedPatient) => {
            let session = state.session;
            let api = state.api.clone();
            let doctor = doctor.clone();

            view! {
                <button class="btn" on:click=move |_| {
                    let Some(token) = session.token() else {
                        browser::alert("Session expired. Please log in again.");
                        browser::redirect("/");
                        return;
                    };
                    let api = api.clone();
                    let doctor = doctor.clone();
                    spawn_local(async move {
                        match api.patients().get_patient(&token).await {
                            Ok(patient) => match on_book {
                                Some(on_book) => on_book.call((doctor, patient)),
                                None => browser::alert("Booking UI not available."),
                            },
                            Err(e) => {
                                log::error!("could not load patient profile: {e}");
                                browser::alert("Could not load patient info. Please try again.");
                            }
                        }
                    });
                }>
                    "Book Now"
                </button>
            }
            .into_view()
        }

        Some(Role::Patient) | None => view! {
            <button class="btn" on:click=move |_| {
                browser::alert("Please log in to book an appointment.");
            }>
                "Book Now"
            </button>
        }
        .into_view(),

        // Doctors browse their own dashboard; cards expose no action.
        Some(Role::Doctor) => ().into_view(),
    };

    view! {
        <div class="card doctor-card">
            <div class="doctor-info">
                <h3 class="card__title">{name.clone()}</h3>
                <div class="card__meta">{specialty}</div>
                <div class="card__meta">{email}</div>
                <div class="card__meta">{availability}</div>
            </div>
            <div class="card-actions">{action}</div>
        </div>
    }
}
