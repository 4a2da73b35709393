// services/clinic-dash/src/pages/home.rs
//
// Hospital CMS Dashboard - Landing Page (admin / doctor login)
//
// Straight-line request/response branching, no retries: empty fields abort
// before any network call, rejected credentials alert with the server's
// message, and a 2xx without a token is surfaced instead of silently
// proceeding.

use leptos::*;

use cmskit::session::Role;
use cmskit::ApiError;

use crate::browser;
use crate::state::AppState;

#[component]
pub fn Home(state: AppState) -> impl IntoView {
    view! {
        <section class="role-select">
            <h2>"Welcome to Hospital CMS"</h2>
            <p>"Select your role to continue."</p>
            <div class="login-panels">
                <AdminLoginPanel state=state.clone() />
                <DoctorLoginPanel state=state />
            </div>
        </section>
    }
}

#[component]
fn AdminLoginPanel(state: AppState) -> impl IntoView {
    let username = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());

    let on_submit = move |_| {
        let Some((user, pass)) =
            required_fields(&username.get_untracked(), &password.get_untracked())
        else {
            browser::alert("Please enter both username and password.");
            return;
        };

        let api = state.api.clone();
        let session = state.session;
        spawn_local(async move {
            match api.auth().admin_login(&user, &pass).await {
                Ok(token) => {
                    session.set_token(&token);
                    session.select_role(Role::Admin);
                    browser::redirect(Role::Admin.dashboard_path());
                }
                Err(ApiError::AuthFailed(message)) => browser::alert(&message),
                Err(ApiError::MissingToken) => {
                    log::error!("admin login returned 2xx without a token");
                    browser::alert("Login succeeded but no token was returned.");
                }
                Err(e) => {
                    log::error!("admin login error: {e}");
                    browser::alert("Something went wrong. Please try again.");
                }
            }
        });
    };

    view! {
        <div class="card login-card">
            <h3 class="card__title">"Admin Login"</h3>
            <input
                type="text"
                placeholder="Username"
                prop:value=move || username.get()
                on:input=move |ev| username.set(event_target_value(&ev))
            />
            <input
                type="password"
                placeholder="Password"
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
            />
            <button class="btn" on:click=on_submit>"Login"</button>
        </div>
    }
}

/// Both credential fields are required, whitespace is not a value. `None`
/// aborts the submit before any network call goes out.
fn required_fields(first: &str, second: &str) -> Option<(String, String)> {
    let first = first.trim();
    let second = second.trim();
    if first.is_empty() || second.is_empty() {
        None
    } else {
        Some((first.to_string(), second.to_string()))
    }
}

#[component]
fn DoctorLoginPanel(state: AppState) -> impl IntoView {
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());

    let on_submit = move |_| {
        let Some((mail, pass)) =
            required_fields(&email.get_untracked(), &password.get_untracked())
        else {
            browser::alert("Please enter both email and password.");
            return;
        };

        let api = state.api.clone();
        let session = state.session;
        spawn_local(async move {
            match api.auth().doctor_login(&mail, &pass).await {
                Ok(token) => {
                    session.set_token(&token);
                    session.select_role(Role::Doctor);
                    browser::redirect(Role::Doctor.dashboard_path());
                }
                Err(ApiError::AuthFailed(message)) => browser::alert(&message),
                Err(ApiError::MissingToken) => {
                    log::error!("doctor login returned 2xx without a token");
                    browser::alert("Login succeeded but no token was returned.");
                }
                Err(e) => {
                    log::error!("doctor login error: {e}");
                    browser::alert("Something went wrong. Please try again.");
                }
            }
        });
    };

    view! {
        <div class="card login-card">
            <h3 class="card__title">"Doctor Login"</h3>
            <input
                type="email"
                placeholder="Email"
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <input
                type="password"
                placeholder="Password"
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
            />
            <button class="btn" on:click=on_submit>"Login"</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields_rejects_blanks() {
        assert_eq!(required_fields("", "pw"), None);
        assert_eq!(required_fields("root", ""), None);
        assert_eq!(required_fields("   ", "pw"), None);
    }

    #[test]
    fn test_required_fields_trims() {
        assert_eq!(
            required_fields(" root ", " pw "),
            Some(("root".to_string(), "pw".to_string()))
        );
    }
}
