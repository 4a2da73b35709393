// services/clinic-dash/src/pages/admin.rs
//
// Hospital CMS Dashboard - Admin Dashboard Page
//
// Doctor cards with name/time/specialty filtering and an add-doctor panel.
// Every change replaces the whole list; there is no incremental diffing.

use leptos::*;

use cmskit::types::{Doctor, NewDoctor};

use crate::browser;
use crate::components::DoctorCard;
use crate::state::AppState;

/// Slots offered by the add-doctor availability check-list.
const AVAILABILITY_SLOTS: [&str; 4] = [
    "09:00-10:00",
    "10:00-11:00",
    "11:00-12:00",
    "14:00-15:00",
];

#[component]
pub fn AdminDashboard(state: AppState) -> impl IntoView {
    let doctors = create_rw_signal(Vec::<Doctor>::new());
    // Whether the current list came from a filtered query; picks the
    // empty-state copy.
    let filtered = create_rw_signal(false);
    let show_add_panel = create_rw_signal(false);

    let name_filter = create_rw_signal(String::new());
    let time_filter = create_rw_signal(String::new());
    let specialty_filter = create_rw_signal(String::new());

    // Keystrokes are not debounced; each one fires its own request. The
    // generation number discards responses that arrive after a newer
    // request went out, so a slow reply cannot overwrite a fresh one.
    let generation = create_rw_signal(0u64);

    let panel_state = state.clone();
    let card_state = store_value(state.clone());

    let load_all = {
        let api = state.api.clone();
        move || {
            let api = api.clone();
            spawn_local(async move {
                match api.doctors().get_doctors().await {
                    Ok(list) => doctors.set(list),
                    Err(e) => {
                        log::error!("failed to load doctors: {e}");
                        doctors.set(Vec::new());
                    }
                }
            });
        }
    };

    let run_filter = {
        let api = state.api.clone();
        move || {
            let request_generation = generation.get_untracked() + 1;
            generation.set(request_generation);

            let name = name_filter.get_untracked();
            let time = time_filter.get_untracked();
            let specialty = specialty_filter.get_untracked();
            let api = api.clone();
            spawn_local(async move {
                let result = api
                    .doctors()
                    .filter_doctors(Some(&name), Some(&time), Some(&specialty))
                    .await;

                if generation.get_untracked() != request_generation {
                    // A newer request is in flight; drop this response.
                    return;
                }

                filtered.set(true);
                match result {
                    Ok(list) => doctors.set(list),
                    Err(e) => {
                        log::error!("failed to filter doctors: {e}");
                        browser::alert("Failed to filter doctors. Please try again.");
                        doctors.set(Vec::new());
                    }
                }
            });
        }
    };

    // Initial load
    load_all();

    let filter_on_name = run_filter.clone();
    let filter_on_time = run_filter.clone();
    let filter_on_specialty = run_filter;

    let on_deleted = Callback::new(move |id: i64| {
        doctors.update(|list| list.retain(|doctor| doctor.id != id));
    });

    let on_saved = {
        let load_all = load_all.clone();
        Callback::new(move |_: ()| {
            show_add_panel.set(false);
            load_all();
        })
    };

    let empty_message = move || empty_list_message(filtered.get());

    view! {
        <section class="dashboard">
            <div class="filter-bar">
                <input
                    id="searchBar"
                    type="text"
                    placeholder="Search doctors by name"
                    on:input=move |ev| {
                        name_filter.set(event_target_value(&ev));
                        filter_on_name();
                    }
                />
                <select
                    id="filterTime"
                    on:change=move |ev| {
                        time_filter.set(event_target_value(&ev));
                        filter_on_time();
                    }
                >
                    <option value="">"Any time"</option>
                    <option value="AM">"AM"</option>
                    <option value="PM">"PM"</option>
                </select>
                <select
                    id="filterSpecialty"
                    on:change=move |ev| {
                        specialty_filter.set(event_target_value(&ev));
                        filter_on_specialty();
                    }
                >
                    <option value="">"All specialties"</option>
                    <option value="Cardiology">"Cardiology"</option>
                    <option value="Dermatology">"Dermatology"</option>
                    <option value="Neurology">"Neurology"</option>
                    <option value="Pediatrics">"Pediatrics"</option>
                </select>
                <button
                    id="addDocBtn"
                    class="btn"
                    on:click=move |_| show_add_panel.update(|open| *open = !*open)
                >
                    "Add Doctor"
                </button>
            </div>

            <Show when=move || show_add_panel.get() fallback=|| view! {}>
                <AddDoctorPanel state=panel_state.clone() on_saved=on_saved />
            </Show>

            <div id="content" class="card-grid">
                <Show
                    when=move || !doctors.get().is_empty()
                    fallback=move || view! { <p class="empty-message">{empty_message()}</p> }
                >
                    <For
                        each=move || doctors.get()
                        key=|doctor| doctor.id
                        children=move |doctor| {
                            view! {
                                <DoctorCard
                                    state=card_state.get_value()
                                    doctor=doctor
                                    on_deleted=on_deleted
                                />
                            }
                        }
                    />
                </Show>
            </div>
        </section>
    }
}

#[component]
fn AddDoctorPanel(state: AppState, on_saved: Callback<()>) -> impl IntoView {
    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let phone = create_rw_signal(String::new());
    let specialty = create_rw_signal(String::new());
    let slots = create_rw_signal(Vec::<String>::new());

    let on_submit = move |_| {
        let Some(token) = state.session.token() else {
            browser::alert("You must be logged in as admin to add a doctor.");
            return;
        };

        let doctor = NewDoctor {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            phone: phone.get_untracked(),
            specialty: specialty.get_untracked(),
            available_times: slots.get_untracked(),
        };

        let api = state.api.clone();
        spawn_local(async move {
            let outcome = api.doctors().save_doctor(&doctor, &token).await;
            browser::alert(&outcome.message);
            if outcome.success {
                on_saved.call(());
            }
        });
    };

    view! {
        <div class="card add-doctor-panel">
            <h3 class="card__title">"Add Doctor"</h3>
            <input
                type="text"
                placeholder="Name"
                on:input=move |ev| name.set(event_target_value(&ev))
            />
            <input
                type="email"
                placeholder="Email"
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <input
                type="password"
                placeholder="Password"
                on:input=move |ev| password.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Phone"
                on:input=move |ev| phone.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Specialty"
                on:input=move |ev| specialty.set(event_target_value(&ev))
            />
            <div class="slot-options">
                {AVAILABILITY_SLOTS
                    .iter()
                    .map(|&slot| {
                        view! {
                            <label class="slot-option">
                                <input
                                    type="checkbox"
                                    on:change=move |_| {
                                        slots.update(|selected| toggle_slot(selected, slot))
                                    }
                                />
                                {slot}
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
            <button class="btn" on:click=on_submit>"Save"</button>
        </div>
    }
}

/// Empty-state copy: "no doctors at all" reads differently from "no doctors
/// matching the filters".
fn empty_list_message(filtered: bool) -> &'static str {
    if filtered {
        "No doctors found with the given filters."
    } else {
        "No doctors found."
    }
}

fn toggle_slot(selected: &mut Vec<String>, slot: &str) {
    if let Some(position) = selected.iter().position(|s| s == slot) {
        selected.remove(position);
    } else {
        selected.push(slot.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_message() {
        assert_eq!(empty_list_message(false), "No doctors found.");
        assert_eq!(
            empty_list_message(true),
            "No doctors found with the given filters."
        );
    }

    #[test]
    fn test_toggle_slot() {
        let mut selected = Vec::new();
        toggle_slot(&mut selected, "09:00-10:00");
        toggle_slot(&mut selected, "10:00-11:00");
        assert_eq!(selected, vec!["09:00-10:00", "10:00-11:00"]);

        toggle_slot(&mut selected, "09:00-10:00");
        assert_eq!(selected, vec!["10:00-11:00"]);
    }
}
